//! Completion source backed by rig-core agents.
//!
//! Each call builds a one-shot agent for the configured provider and sends
//! the prompt as a single user turn. The reply is returned untouched.

use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use rig::{
    agent::Agent,
    client::{CompletionClient, Nothing},
    completion::{CompletionModel, Prompt},
    providers::{anthropic, gemini, groq, ollama, openai},
};

use walli_core::completion::CompletionSourceTrait;
use walli_core::errors::CompletionError;

use crate::error::AiError;
use crate::providers::{LlmConfig, ProviderKind};

// ============================================================================
// LLM Completion Source
// ============================================================================

/// Completion source calling a hosted (or local) language model.
#[derive(Debug, Clone)]
pub struct LlmCompletionSource {
    config: LlmConfig,
}

impl LlmCompletionSource {
    /// Create a completion source, rejecting configurations that can't work.
    pub fn new(config: LlmConfig) -> Result<Self, AiError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn api_key(&self) -> Result<String, AiError> {
        self.config
            .api_key
            .clone()
            .ok_or_else(|| AiError::MissingApiKey(self.config.provider.id().to_string()))
    }

    /// Send the prompt to the configured provider.
    async fn complete_with_llm(&self, prompt: &str) -> Result<String, AiError> {
        let model_id = self.config.model.clone();
        let prompt = prompt.to_string();

        debug!(
            "Requesting completion from provider {} model {} ({} chars)",
            self.config.provider,
            model_id,
            prompt.len()
        );

        let response = match self.config.provider {
            ProviderKind::Anthropic => {
                let client: anthropic::Client<HttpClient> =
                    anthropic::Client::new(&self.api_key()?).map_err(provider_error)?;
                prompt_agent(client.agent(&model_id).build(), prompt).await?
            }
            ProviderKind::Gemini => {
                let client: gemini::Client<HttpClient> =
                    gemini::Client::new(&self.api_key()?).map_err(provider_error)?;
                prompt_agent(client.agent(&model_id).build(), prompt).await?
            }
            ProviderKind::Groq => {
                let client: groq::Client<HttpClient> =
                    groq::Client::new(&self.api_key()?).map_err(provider_error)?;
                prompt_agent(client.agent(&model_id).build(), prompt).await?
            }
            ProviderKind::Ollama => {
                let mut builder = ollama::Client::<HttpClient>::builder().api_key(Nothing);
                if let Some(url) = self.config.base_url.clone() {
                    builder = builder.base_url(&url);
                }
                let client = builder.build().map_err(provider_error)?;
                prompt_agent(client.agent(&model_id).build(), prompt).await?
            }
            ProviderKind::OpenAi => {
                let client: openai::Client<HttpClient> =
                    openai::Client::new(&self.api_key()?).map_err(provider_error)?;
                prompt_agent(client.agent(&model_id).build(), prompt).await?
            }
        };

        debug!("Completion returned {} chars", response.len());
        Ok(response)
    }
}

/// Send one user turn to a built agent.
async fn prompt_agent<M: CompletionModel + 'static>(
    agent: Agent<M>,
    prompt: String,
) -> Result<String, AiError> {
    agent.prompt(prompt).await.map_err(provider_error)
}

fn provider_error(err: impl std::fmt::Display) -> AiError {
    AiError::Provider(err.to_string())
}

#[async_trait]
impl CompletionSourceTrait for LlmCompletionSource {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.complete_with_llm(prompt).await.map_err(Into::into)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_missing_key() {
        let err = LlmCompletionSource::new(LlmConfig::new(ProviderKind::Groq)).unwrap_err();
        assert_eq!(err.code(), "MISSING_API_KEY");
    }

    #[test]
    fn test_new_accepts_keyless_ollama() {
        let source = LlmCompletionSource::new(LlmConfig::new(ProviderKind::Ollama)).unwrap();
        assert_eq!(source.config().model, "llama3.2");
    }

    #[tokio::test]
    async fn test_missing_key_surfaces_as_completion_error() {
        // Bypass validation to exercise the per-call check.
        let source = LlmCompletionSource {
            config: LlmConfig::new(ProviderKind::OpenAi),
        };
        let err = source.complete("hello").await.unwrap_err();
        assert_eq!(err, CompletionError::MissingApiKey("openai".to_string()));
    }

    #[test]
    fn test_rig_errors_become_provider_errors() {
        let err = provider_error("model not found");
        assert_eq!(err.code(), "PROVIDER_ERROR");
        assert_eq!(
            CompletionError::from(err),
            CompletionError::Provider("model not found".to_string())
        );
    }
}
