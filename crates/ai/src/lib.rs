//! Walli AI - language model completion source.
//!
//! Implements [`walli_core::completion::CompletionSourceTrait`] with rig-core
//! agents. The provider, model and credentials come from an [`LlmConfig`],
//! usually read from the process environment.

pub mod completion;
pub mod error;
pub mod providers;

pub use completion::LlmCompletionSource;
pub use error::AiError;
pub use providers::{LlmConfig, ProviderKind};
