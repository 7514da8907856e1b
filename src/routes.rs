use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse},
    routing::{get, post},
};
use log::{error, info};
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::document_extractor::{MediaType, UploadedFile};
use crate::errors::{AppError, ExtractionError, TranslationError};
use crate::page;
use crate::session::Session;
use crate::state::AppState;

/// File name offered by the download action
pub const DOWNLOAD_FILE_NAME: &str = "translated_content.md";

/// One route per UI control: page, upload, translate, download
pub fn create_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // UI page
        .route("/", get(index))

        // Health check
        .route("/api/health", get(health_check))

        // Pipeline actions
        .route("/upload", post(upload_document))
        .route("/translate", post(translate_document))
        .route("/download/:session_id", get(download_translation))

        .layer(DefaultBodyLimit::max(state.config.server.max_upload_bytes))
}

/// Body for the translate action
#[derive(Debug, Deserialize)]
struct TranslateRequest {
    session_id: String,
    target_language: String,
}

/// Map a pipeline error to its HTTP representation
///
/// The body stays generic on purpose; the page shows the message and the
/// user retries the action.
fn error_response(err: AppError) -> (StatusCode, Json<Value>) {
    let status = match &err {
        AppError::Extraction(ExtractionError::UnsupportedMediaType(_)) => {
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        }
        AppError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AppError::Translation(TranslationError::UnsupportedLanguage(_)) => StatusCode::BAD_REQUEST,
        AppError::Translation(_) | AppError::Provider(_) => StatusCode::BAD_GATEWAY,
        AppError::UnknownSession(_) => StatusCode::NOT_FOUND,
        AppError::File(_) | AppError::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    error!("Request failed: {}", err);
    (status, Json(json!({ "error": err.to_string() })))
}

async fn index() -> Html<String> {
    Html(page::render_index())
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "provider": state.config.translation.provider.display_name(),
        "sessions": state.sessions.len(),
    }))
}

/// Upload control handler: extract, sanitize, render, open a session
async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);

        let data = field
            .bytes()
            .await
            .map_err(|e| (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))))?;

        let media_type = MediaType::from_declared(content_type.as_deref(), file_name.as_deref())
            .map_err(|e| error_response(e.into()))?;

        let upload = UploadedFile::new(data.to_vec(), media_type);
        let document = state
            .controller
            .process_upload(upload)
            .map_err(|e| error_response(e.into()))?;

        let session = Session::new(document.markdown.clone(), document.html.clone());
        let session_id = state.sessions.insert(session);

        info!(
            "Opened session {} for {} upload ({} bytes)",
            session_id,
            media_type.as_mime(),
            data.len()
        );

        return Ok(Json(json!({
            "session_id": session_id.to_string(),
            "markdown": document.markdown,
            "original_html": document.html,
        })));
    }

    Err((StatusCode::BAD_REQUEST, Json(json!({ "error": "No file provided" }))))
}

/// Translate control handler: run the translation on the stored content
async fn translate_document(
    State(state): State<AppState>,
    Json(payload): Json<TranslateRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let session_id = Uuid::parse_str(&payload.session_id)
        .map_err(|_| error_response(AppError::UnknownSession(payload.session_id.clone())))?;

    let session = state
        .sessions
        .get(&session_id)
        .ok_or_else(|| error_response(AppError::UnknownSession(payload.session_id.clone())))?;

    let translated = state
        .controller
        .translate(&session.original_markdown, &payload.target_language)
        .await
        .map_err(|e| error_response(e.into()))?;

    state.sessions.set_translation(
        &session_id,
        payload.target_language.clone(),
        translated.markdown.clone(),
        translated.html.clone(),
    );

    Ok(Json(json!({
        "translated_html": translated.html,
        "download_url": format!("/download/{}", session_id),
    })))
}

/// Download control handler: offer the translated Markdown as a file
async fn download_translation(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    let id = Uuid::parse_str(&session_id)
        .map_err(|_| error_response(AppError::UnknownSession(session_id.clone())))?;

    let session = state
        .sessions
        .get(&id)
        .ok_or_else(|| error_response(AppError::UnknownSession(session_id.clone())))?;

    let markdown = session.translated_markdown.ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "No translation available for this session" })),
        )
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/markdown".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", DOWNLOAD_FILE_NAME),
            ),
        ],
        markdown,
    ))
}
