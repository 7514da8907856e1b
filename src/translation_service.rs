use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use url::Url;

use crate::app_config::{TranslationConfig, TranslationProvider as ConfigTranslationProvider};
use crate::errors::{ProviderError, TranslationError};
use crate::language_utils;
use crate::providers::Provider;
use crate::providers::anthropic::{Anthropic, AnthropicRequest};
use crate::providers::ollama::{GenerationRequest, Ollama};
use crate::providers::openai::{OpenAI, OpenAIRequest};

// @module: Translation service for document content

/// Anything that can translate a piece of text into a target language
///
/// The service below is the production implementation; tests substitute
/// their own to observe the pipeline without a live endpoint.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into the given target language
    ///
    /// One provider request per call. The returned text is the first
    /// completion, untouched; the caller owns any trimming.
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslationError>;
}

// @parses: Endpoint string into host and port
// @returns: Tuple of (host, port)
fn parse_endpoint(endpoint: &str) -> Result<(String, u16)> {
    // If it doesn't start with http/https, assume it's just host:port
    let url_str = if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        format!("http://{}", endpoint)
    } else {
        endpoint.to_string()
    };

    let url = Url::parse(&url_str)
        .context(format!("Failed to parse endpoint URL: {}", endpoint))?;

    let host = format!(
        "{}://{}",
        url.scheme(),
        url.host_str().unwrap_or("localhost")
    );

    let port = url.port().unwrap_or(11434);

    Ok((host, port))
}

// @enum: Available translation provider implementations
enum TranslationProviderImpl {
    // @variant: OpenAI API service
    OpenAI {
        // @field: Client instance
        client: OpenAI,
    },

    // @variant: Ollama LLM service
    Ollama {
        // @field: Client instance
        client: Ollama,
    },

    // @variant: Anthropic API service
    Anthropic {
        // @field: Client instance
        client: Anthropic,
    },
}

// @struct: Translation service
pub struct TranslationService {
    // @field: Provider implementation
    provider: TranslationProviderImpl,

    // @field: Configuration
    config: TranslationConfig,
}

impl TranslationService {
    /// Create a new translation service from configuration
    ///
    /// The API key travels from the configuration into the provider client
    /// here; nothing reads ambient credential state after this point.
    pub fn new(config: TranslationConfig) -> Result<Self> {
        let provider = match config.provider {
            ConfigTranslationProvider::OpenAI => {
                let client = OpenAI::new(
                    config.get_api_key(),
                    config.get_endpoint(),
                    config.get_model(),
                    config.get_timeout_secs(),
                );

                TranslationProviderImpl::OpenAI {
                    client,
                }
            },
            ConfigTranslationProvider::Ollama => {
                // Parse the Ollama endpoint URL
                let (host, port) = parse_endpoint(&config.get_endpoint())?;

                let client = Ollama::new(
                    host,
                    port,
                    config.get_model(),
                    config.get_timeout_secs(),
                );

                TranslationProviderImpl::Ollama {
                    client,
                }
            },
            ConfigTranslationProvider::Anthropic => {
                let client = Anthropic::new(
                    config.get_api_key(),
                    config.get_endpoint(),
                    config.get_model(),
                    config.get_timeout_secs(),
                );

                TranslationProviderImpl::Anthropic {
                    client,
                }
            },
        };

        Ok(Self {
            provider,
            config,
        })
    }

    /// Build the instruction prompt for a translation request
    ///
    /// The template comes from configuration; `{target_language}` is
    /// substituted before `{text}` so a document containing the literal
    /// placeholder cannot alter the instruction.
    pub fn build_prompt(&self, text: &str, target_language: &str) -> String {
        self.config
            .common
            .prompt_template
            .replace("{target_language}", target_language)
            .replace("{text}", text)
    }

    /// Test the connection to the configured provider
    pub async fn test_connection(&self) -> Result<(), ProviderError> {
        match &self.provider {
            TranslationProviderImpl::OpenAI { client } => client.test_connection().await,
            TranslationProviderImpl::Ollama { client } => client.test_connection().await,
            TranslationProviderImpl::Anthropic { client } => client.test_connection().await,
        }
    }

    /// Issue the single completion request for a prompt
    async fn request_completion(&self, prompt: String) -> Result<String, ProviderError> {
        let model = self.config.get_model();
        let temperature = self.config.common.temperature;
        let max_tokens = self.config.common.max_tokens;

        match &self.provider {
            TranslationProviderImpl::OpenAI { client } => {
                let request = OpenAIRequest::new(model, max_tokens)
                    .temperature(temperature)
                    .add_message("user", prompt);

                let response = client.complete(request).await?;
                if let Some(usage) = &response.usage {
                    debug!(
                        "OpenAI token usage: {} prompt, {} completion",
                        usage.prompt_tokens, usage.completion_tokens
                    );
                }
                Ok(OpenAI::extract_text(&response))
            },
            TranslationProviderImpl::Ollama { client } => {
                let request = GenerationRequest::new(model, prompt)
                    .temperature(temperature)
                    .num_predict(max_tokens);

                let response = client.complete(request).await?;
                debug!(
                    "Ollama token usage: {} prompt, {} completion",
                    response.prompt_eval_count.unwrap_or(0),
                    response.eval_count.unwrap_or(0)
                );
                Ok(Ollama::extract_text(&response))
            },
            TranslationProviderImpl::Anthropic { client } => {
                let request = AnthropicRequest::new(model, max_tokens)
                    .temperature(temperature)
                    .add_message("user", prompt);

                let response = client.complete(request).await?;
                debug!(
                    "Anthropic token usage: {} input, {} output",
                    response.usage.input_tokens, response.usage.output_tokens
                );
                Ok(Anthropic::extract_text(&response))
            },
        }
    }
}

#[async_trait]
impl Translator for TranslationService {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslationError> {
        let language = language_utils::canonical_language_name(target_language)
            .map_err(|_| TranslationError::UnsupportedLanguage(target_language.to_string()))?;

        let prompt = self.build_prompt(text, language);
        self.request_completion(prompt).await.map_err(TranslationError::from)
    }
}
