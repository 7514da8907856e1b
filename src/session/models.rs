/*!
 * Session state carried between UI events.
 */

use std::time::Instant;
use uuid::Uuid;

/// Per-interaction state for one uploaded document
///
/// Created by the upload handler, read and updated by the translate
/// handler, read by the download handler. Replaced wholesale by the next
/// upload.
#[derive(Debug, Clone)]
pub struct Session {
    /// Session ID
    pub id: Uuid,
    /// Sanitized Markdown of the uploaded document
    pub original_markdown: String,
    /// Rendered HTML fragment for the original pane
    pub original_html: String,
    /// Target language of the last translate action
    pub target_language: Option<String>,
    /// Translated Markdown, present once a translation has completed
    pub translated_markdown: Option<String>,
    /// Rendered HTML fragment for the translated pane
    pub translated_html: Option<String>,
    /// Last time this session was touched, for idle pruning
    pub touched: Instant,
}

impl Session {
    /// Create a new session for a freshly processed upload
    pub fn new(original_markdown: String, original_html: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            original_markdown,
            original_html,
            target_language: None,
            translated_markdown: None,
            translated_html: None,
            touched: Instant::now(),
        }
    }

    /// Record a completed translation on this session
    pub fn set_translation(
        &mut self,
        target_language: String,
        translated_markdown: String,
        translated_html: String,
    ) {
        self.target_language = Some(target_language);
        self.translated_markdown = Some(translated_markdown);
        self.translated_html = Some(translated_html);
        self.touched = Instant::now();
    }

    /// Whether a translation has completed for this session
    pub fn has_translation(&self) -> bool {
        self.translated_markdown.is_some()
    }
}
