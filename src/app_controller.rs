use anyhow::Result;
use log::{debug, info};
use std::sync::Arc;

use crate::app_config::Config;
use crate::document_extractor::{self, UploadedFile};
use crate::errors::{ExtractionError, TranslationError};
use crate::language_utils;
use crate::markdown_renderer::render_markdown;
use crate::sanitizer::sanitize;
use crate::translation_service::{TranslationService, Translator};

/// Application controller wiring the content pipeline together
///
/// The pipeline is linear: extract text from the upload, sanitize it, and
/// render it for the original pane; on request, translate the sanitized
/// content and render the result for the translated pane. Each stage is a
/// plain function owned by its module; the controller only sequences them.
/// An uploaded document after extraction, sanitization and rendering
#[derive(Debug, Clone)]
pub struct ProcessedDocument {
    /// Sanitized Markdown source of the document
    pub markdown: String,
    /// HTML fragment for the original-content pane
    pub html: String,
}

/// A translation after rendering
#[derive(Debug, Clone)]
pub struct TranslatedDocument {
    /// Translated Markdown, exactly as returned by the provider (trimmed)
    pub markdown: String,
    /// HTML fragment for the translated-content pane
    pub html: String,
}

/// Main application controller
pub struct Controller {
    /// Translator used for the translate action
    translator: Arc<dyn Translator>,
    /// Application configuration
    config: Config,
}

impl Controller {
    /// Create a new controller from configuration
    ///
    /// Builds the production translation service for the configured
    /// provider; the API key is injected from the config here.
    pub fn with_config(config: Config) -> Result<Self> {
        let translator = Arc::new(TranslationService::new(config.translation.clone())?);
        Ok(Self::with_translator(translator, config))
    }

    /// Create a controller with a custom translator
    pub fn with_translator(translator: Arc<dyn Translator>, config: Config) -> Self {
        Self { translator, config }
    }

    /// Get the application configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the upload half of the pipeline: extract, sanitize, render
    pub fn process_upload(&self, file: UploadedFile) -> Result<ProcessedDocument, ExtractionError> {
        let extracted = document_extractor::extract_text(&file)?;
        debug!(
            "Extracted {} characters from {} upload",
            extracted.len(),
            file.media_type.as_mime()
        );

        let markdown = sanitize(&extracted);
        let html = render_markdown(&markdown);

        Ok(ProcessedDocument { markdown, html })
    }

    /// Run the translate half of the pipeline: translate, render
    ///
    /// The translator output reaches the renderer unmodified apart from
    /// whitespace trimming, matching the download contract.
    pub async fn translate(
        &self,
        content: &str,
        target_language: &str,
    ) -> Result<TranslatedDocument, TranslationError> {
        let language = language_utils::canonical_language_name(target_language)
            .map_err(|_| TranslationError::UnsupportedLanguage(target_language.to_string()))?;

        info!("Translating {} characters to {}", content.len(), language);

        let completion = self.translator.translate(content, language).await?;
        let markdown = completion.trim().to_string();
        let html = render_markdown(&markdown);

        Ok(TranslatedDocument { markdown, html })
    }
}
