use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::CompletionError;

/// Turns a prompt into free text.
///
/// A successful call may return an empty string; that is not an error.
#[async_trait]
pub trait CompletionSourceTrait: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

// ============================================================================
// Fake completion source for testing
// ============================================================================

/// Returns a canned reply (or error) and records every prompt it receives.
#[derive(Debug)]
pub struct FakeCompletionSource {
    reply: Result<String, CompletionError>,
    prompts: Mutex<Vec<String>>,
}

impl FakeCompletionSource {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: CompletionError) -> Self {
        Self {
            reply: Err(error),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// The most recent prompt, if any call was made.
    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().ok().and_then(|p| p.last().cloned())
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or(0)
    }
}

#[async_trait]
impl CompletionSourceTrait for FakeCompletionSource {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        self.reply.clone()
    }
}
