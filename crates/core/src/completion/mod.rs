//! Completion module - the text-completion collaborator.

mod completion_traits;

pub use completion_traits::{CompletionSourceTrait, FakeCompletionSource};
