//! Advice module - free-form questions about a wallet.

mod advice_model;
mod advice_service;

pub use advice_model::{AdviceRequest, AdviceResponse, AdviceResult};
pub use advice_service::{AdviceService, AdviceServiceTrait};
