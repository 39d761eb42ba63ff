use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One allocation strategy read from the model's reply.
///
/// Only produced by the extractor, which guarantees a non-empty label and a
/// non-empty allocation with percentages in `0..=100`. Percentages are not
/// required to sum to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StrategyRecord {
    pub label: String,
    pub target_allocation: BTreeMap<String, u8>,
    pub rationale: String,
}

impl StrategyRecord {
    /// Sum of all target percentages.
    pub fn allocation_total(&self) -> u32 {
        self.target_allocation.values().map(|p| u32::from(*p)).sum()
    }
}
