/*!
 * End-to-end tests for the content pipeline: extract, sanitize, translate, render
 */

use std::sync::Arc;

use doctran::app_config::Config;
use doctran::app_controller::Controller;
use doctran::document_extractor::{MediaType, UploadedFile};

use crate::common::build_pdf_without_text;
use crate::common::mock_providers::{MockErrorType, MockTranslator};

fn controller_with(mock: MockTranslator) -> Controller {
    Controller::with_translator(Arc::new(mock), Config::default())
}

/// Upload a text file, translate to French, and check both panes
#[tokio::test]
async fn test_pipeline_withTextUpload_shouldFillBothPanes() {
    let mock = MockTranslator::with_fixed_response("Bonjour le monde");
    let tracker = mock.tracker();
    let controller = controller_with(mock);

    let upload = UploadedFile::new(b"Hello world".to_vec(), MediaType::PlainText);
    let document = controller.process_upload(upload).unwrap();
    assert_eq!(document.markdown, "Hello world");
    assert!(document.html.contains("<p>Hello world</p>"));

    let translated = controller.translate(&document.markdown, "French").await.unwrap();
    assert_eq!(translated.markdown, "Bonjour le monde");
    assert!(translated.html.contains("<p>Bonjour le monde</p>"));

    // Exactly one provider call per translate action
    let tracker = tracker.lock().unwrap();
    assert_eq!(tracker.call_count, 1);
    assert_eq!(tracker.last_text.as_deref(), Some("Hello world"));
}

/// The translator output is passed through with only whitespace trimmed
#[tokio::test]
async fn test_pipeline_withPaddedTranslation_shouldOnlyTrimWhitespace() {
    let mock = MockTranslator::with_fixed_response("  Bonjour le monde \n");
    let controller = controller_with(mock);

    let translated = controller.translate("Hello world", "French").await.unwrap();
    assert_eq!(translated.markdown, "Bonjour le monde");
}

/// Uploaded markup outside the allow-list never reaches the original pane
#[tokio::test]
async fn test_pipeline_withHostileUpload_shouldSanitizeBeforeRendering() {
    let controller = controller_with(MockTranslator::new());

    let source = "<script>alert(1)</script># Title\n\n<b>kept</b>";
    let upload = UploadedFile::new(source.as_bytes().to_vec(), MediaType::Markdown);
    let document = controller.process_upload(upload).unwrap();

    assert!(!document.markdown.contains("script"));
    assert!(!document.markdown.contains("alert"));
    assert!(document.markdown.contains("<b>kept</b>"));
    assert!(document.html.contains("<h1>Title</h1>"));
}

/// Markdown structure survives into the rendered pane
#[tokio::test]
async fn test_pipeline_withMarkdownUpload_shouldRenderStructure() {
    let controller = controller_with(MockTranslator::new());

    let upload = UploadedFile::new(b"Some **bold** text".to_vec(), MediaType::Markdown);
    let document = controller.process_upload(upload).unwrap();
    assert!(document.html.contains("<strong>bold</strong>"));
}

/// A text-less PDF flows through as empty content; the translate call still happens
#[tokio::test]
async fn test_pipeline_withTextlessPdf_shouldTranslateEmptyInput() {
    let mock = MockTranslator::new();
    let tracker = mock.tracker();
    let controller = controller_with(mock);

    let upload = UploadedFile::new(build_pdf_without_text(), MediaType::Pdf);
    let document = controller.process_upload(upload).unwrap();
    assert!(document.markdown.is_empty());
    assert!(document.html.is_empty());

    controller.translate(&document.markdown, "French").await.unwrap();

    let tracker = tracker.lock().unwrap();
    assert_eq!(tracker.call_count, 1);
    assert_eq!(tracker.last_text.as_deref(), Some(""));
}

/// A provider failure aborts the translate action
#[tokio::test]
async fn test_pipeline_withProviderFailure_shouldSurfaceError() {
    let mock = MockTranslator::new();
    mock.fail_next_call(MockErrorType::Api);
    let controller = controller_with(mock);

    assert!(controller.translate("Hello", "French").await.is_err());
}
