//! Strategies module - prompt synthesis and strategy extraction.
//!
//! Both directions share one [`StrategyFormat`], so the instruction sent to
//! the model and the parser reading its reply describe the same layout.

mod prompt_builder;
mod strategy_extractor;
mod strategy_format;
mod strategy_model;


pub use prompt_builder::{build_advice_prompt, build_rebalance_prompt};
pub use strategy_extractor::StrategyExtractor;
pub use strategy_format::StrategyFormat;
pub use strategy_model::StrategyRecord;
