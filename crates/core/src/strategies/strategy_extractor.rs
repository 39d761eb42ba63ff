use std::collections::BTreeMap;

use log::debug;

use super::strategy_format::StrategyFormat;
use super::strategy_model::StrategyRecord;

/// Reads strategy records out of free text.
///
/// Never fails: text that doesn't fit the format simply yields fewer (or
/// zero) records.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrategyExtractor {
    format: StrategyFormat,
}

impl StrategyExtractor {
    pub fn new(format: StrategyFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> &StrategyFormat {
        &self.format
    }

    /// Records in input order. Duplicate labels are kept.
    pub fn extract(&self, text: &str) -> Vec<StrategyRecord> {
        let records: Vec<StrategyRecord> = self
            .format
            .split_blocks(text)
            .filter_map(|block| self.parse_block(block))
            .collect();

        debug!("Extracted {} strategies from completion", records.len());
        records
    }

    fn parse_block(&self, block: &str) -> Option<StrategyRecord> {
        let lines: Vec<&str> = block
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        if lines.len() < self.format.min_block_lines {
            return None;
        }

        let label = self.format.clean_label(lines[0])?;

        let mut target_allocation = BTreeMap::new();
        let mut rationale_parts = Vec::new();
        for line in &lines[1..] {
            if line.contains('%') {
                // Later mentions of a token overwrite earlier ones.
                for (symbol, percent) in self.format.allocation_entries(line) {
                    target_allocation.insert(symbol, percent);
                }
            } else {
                rationale_parts.push(*line);
            }
        }

        if target_allocation.is_empty() {
            return None;
        }

        Some(StrategyRecord {
            label,
            target_allocation,
            rationale: rationale_parts.join(" ").trim().to_string(),
        })
    }
}
