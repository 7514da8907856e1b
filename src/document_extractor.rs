use log::{debug, warn};
use lopdf::Document;

use crate::errors::ExtractionError;

/// Document loading and text extraction
///
/// An upload arrives as a byte blob plus a declared media type; this module
/// dispatches on the type and produces the plain-text content the rest of
/// the pipeline works on. PDF layout (columns, tables, fonts) is not
/// preserved, only text runs in page order. Text and Markdown uploads are
/// decoded as strict UTF-8.
/// Media types accepted by the upload control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// application/pdf
    Pdf,
    /// text/plain
    PlainText,
    /// text/markdown
    Markdown,
}

impl MediaType {
    /// Resolve the declared content type and/or file name to a media type
    ///
    /// The declared MIME type wins when it is recognized; the file-name
    /// extension is the fallback for clients that upload with a generic
    /// content type.
    pub fn from_declared(
        content_type: Option<&str>,
        file_name: Option<&str>,
    ) -> Result<Self, ExtractionError> {
        if let Some(mime) = content_type {
            match mime.split(';').next().unwrap_or("").trim() {
                "application/pdf" => return Ok(Self::Pdf),
                "text/plain" => return Ok(Self::PlainText),
                "text/markdown" | "text/x-markdown" => return Ok(Self::Markdown),
                _ => {}
            }
        }

        if let Some(name) = file_name {
            let extension = name.rsplit('.').next().unwrap_or("").to_lowercase();
            match extension.as_str() {
                "pdf" => return Ok(Self::Pdf),
                "txt" => return Ok(Self::PlainText),
                "md" => return Ok(Self::Markdown),
                _ => {}
            }
        }

        let declared = content_type
            .or(file_name)
            .unwrap_or("<none>")
            .to_string();
        Err(ExtractionError::UnsupportedMediaType(declared))
    }

    /// MIME type string for this media type
    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::PlainText => "text/plain",
            Self::Markdown => "text/markdown",
        }
    }
}

/// An uploaded file: raw bytes plus the declared media type
///
/// Created by the upload handler, consumed once by [`extract_text`], then
/// discarded.
#[derive(Debug)]
pub struct UploadedFile {
    /// Raw file content
    pub content: Vec<u8>,
    /// Declared media type
    pub media_type: MediaType,
}

impl UploadedFile {
    pub fn new(content: Vec<u8>, media_type: MediaType) -> Self {
        Self { content, media_type }
    }
}

/// Extract the plain-text content of an uploaded file
///
/// PDF input is parsed with lopdf and the text layer of every page is
/// concatenated in page order; a well-formed PDF with no text layer yields
/// an empty string. Text and Markdown input is decoded as UTF-8.
pub fn extract_text(file: &UploadedFile) -> Result<String, ExtractionError> {
    match file.media_type {
        MediaType::Pdf => extract_pdf_text(&file.content),
        MediaType::PlainText | MediaType::Markdown => {
            String::from_utf8(file.content.clone())
                .map_err(|e| ExtractionError::InvalidEncoding(e.to_string()))
        }
    }
}

/// Concatenate the text layer of every PDF page, in page order
fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let doc = Document::load_mem(bytes)
        .map_err(|e| ExtractionError::PdfParse(e.to_string()))?;

    let pages = doc.get_pages();
    debug!("Extracting text from {} PDF page(s)", pages.len());

    let mut text = String::new();
    for (page_num, _page_id) in pages {
        let content = doc
            .extract_text(&[page_num])
            .map_err(|e| ExtractionError::PdfParse(e.to_string()))?;
        text.push_str(&content);
    }

    if text.trim().is_empty() {
        // A scanned or image-only PDF has no text layer; this is not an
        // error, the panes simply render empty.
        warn!("PDF contains no extractable text layer");
        return Ok(String::new());
    }

    Ok(text)
}
