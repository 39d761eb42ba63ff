use std::sync::LazyLock;

use regex::Regex;

use super::strategy_model::StrategyRecord;

/// `TOKEN SEP? PCT%`, e.g. `ETH: 40%`, `USDC - 35%`, `LINK 25%`.
static ALLOCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z]+)\s*[:\-]?\s*(\d+)%").expect("Invalid regex pattern")
});

/// One or more blank (whitespace-only) lines.
static BLOCK_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("Invalid regex pattern"));

/// Characters trimmed from both ends of a label line.
pub const LABEL_TRIM_CHARS: &[char] = &[' ', ':', '-'];

/// Fixed line placed before the allocation lines of a rendered block.
/// It contains `%` but no allocation, so the parser skips it.
const ALLOCATION_HEADER: &str = "Target allocation (%):";

/// Highest percentage accepted in an allocation.
const MAX_PERCENT: u32 = 100;

/// The textual strategy layout shared by the prompt and the extractor.
///
/// A block is a label line, then `TOKEN: PCT%` lines, then prose lines.
/// Blocks are separated by blank lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyFormat {
    /// Number of strategies the model is asked for.
    pub strategy_count: usize,
    /// Blocks with fewer non-blank lines are ignored.
    pub min_block_lines: usize,
}

impl Default for StrategyFormat {
    fn default() -> Self {
        Self {
            strategy_count: 3,
            min_block_lines: 3,
        }
    }
}

impl StrategyFormat {
    /// Split a reply into candidate blocks on runs of blank lines.
    pub fn split_blocks<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> {
        BLOCK_SEPARATOR_RE.split(text)
    }

    /// Label from a block's first line, or `None` when nothing is left
    /// after trimming.
    pub fn clean_label(&self, line: &str) -> Option<String> {
        let label = line.trim_matches(LABEL_TRIM_CHARS);
        if label.is_empty() {
            None
        } else {
            Some(label.to_string())
        }
    }

    /// Every `TOKEN PCT%` pair on a line, in order of appearance.
    ///
    /// Percentages above 100 (or too large to parse) are skipped.
    pub fn allocation_entries(&self, line: &str) -> Vec<(String, u8)> {
        ALLOCATION_RE
            .captures_iter(line)
            .filter_map(|caps| {
                let percent: u32 = caps[2].parse().ok()?;
                if percent > MAX_PERCENT {
                    return None;
                }
                let percent = u8::try_from(percent).ok()?;
                Some((caps[1].to_string(), percent))
            })
            .collect()
    }

    /// Instruction text asking the model for strategies in this layout.
    pub fn instruction(&self, symbols: &[&str]) -> String {
        let symbol_list = symbols.join(", ");
        let example_lines: String = symbols
            .iter()
            .map(|s| format!("{}: <percent>%\n", s))
            .collect();

        format!(
            "generate **{count} optimal portfolio strategies** with the following for each:\n\
             1. A strategy label (e.g., Conservative, Balanced)\n\
             2. Target % allocation across {symbols}\n\
             3. Rationale for the recommendation (risk, stability, yield, etc.)\n\
             \n\
             Write each strategy as its own block and separate blocks with a blank line:\n\
             <label>\n\
             {header}\n\
             {examples}\
             <rationale>",
            count = self.strategy_count,
            symbols = symbol_list,
            header = ALLOCATION_HEADER,
            examples = example_lines,
        )
    }

    /// Canonical text for one record; extracting it yields the record back.
    pub fn render(&self, record: &StrategyRecord) -> String {
        let mut lines = Vec::with_capacity(record.target_allocation.len() + 3);
        lines.push(record.label.clone());
        lines.push(ALLOCATION_HEADER.to_string());
        for (symbol, percent) in &record.target_allocation {
            lines.push(format!("{}: {}%", symbol, percent));
        }
        if !record.rationale.is_empty() {
            lines.push(record.rationale.clone());
        }
        lines.join("\n")
    }

    /// Canonical text for a sequence of records.
    pub fn render_all(&self, records: &[StrategyRecord]) -> String {
        records
            .iter()
            .map(|r| self.render(r))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
