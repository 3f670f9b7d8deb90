use actix_multipart::Multipart;
use actix_web::{post, web, HttpRequest, HttpResponse};
use futures::TryStreamExt;

use crate::{
    app_state::AppState,
    errors::{AppError, AppResult},
    handlers::log_failure,
    models::dto::response::{ExtractedTextResponse, UploadKind},
    services::pdf_text_service::{PdfTextService, UploadedFile},
};

#[post("/upload-course-notes")]
pub async fn upload_course_notes(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    extract_upload(&req, &state, payload, UploadKind::CourseNotes).await
}

#[post("/upload-exams")]
pub async fn upload_exams(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    extract_upload(&req, &state, payload, UploadKind::Exams).await
}

async fn extract_upload(
    req: &HttpRequest,
    state: &AppState,
    payload: Multipart,
    kind: UploadKind,
) -> Result<HttpResponse, AppError> {
    let max_bytes = state.config.max_upload_bytes;
    let operation = match kind {
        UploadKind::CourseNotes => "upload-course-notes",
        UploadKind::Exams => "upload-exams",
    };

    let files = read_files(payload, max_bytes)
        .await
        .map_err(|e| log_failure(req, operation, e))?;
    let file_count = files.len();

    let text = PdfTextService::extract_text(files, max_bytes)
        .await
        .map_err(|e| log_failure(req, operation, e))?;

    Ok(HttpResponse::Ok().json(ExtractedTextResponse {
        kind,
        file_count,
        text,
    }))
}

/// Buffers every file field, failing as soon as the total passes `max_bytes`.
/// Plain form fields (no filename) are drained and skipped but still count toward the limit.
async fn read_files(mut payload: Multipart, max_bytes: usize) -> AppResult<Vec<UploadedFile>> {
    let mut files = Vec::new();
    let mut total = 0usize;

    while let Some(mut field) = payload.try_next().await? {
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);
        let content_type = field.content_type().map(|mime| mime.to_string());

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            total += chunk.len();
            if total > max_bytes {
                return Err(AppError::ValidationError(format!(
                    "Upload exceeds the {} byte limit",
                    max_bytes
                )));
            }
            bytes.extend_from_slice(&chunk);
        }

        let Some(filename) = filename else {
            log::debug!("Skipping multipart field without a filename");
            continue;
        };

        files.push(UploadedFile {
            filename: Some(filename),
            content_type,
            bytes,
        });
    }

    Ok(files)
}
