use actix_web::{
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    post, web, HttpRequest, HttpResponse,
};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    handlers::log_failure,
    models::{
        domain::TopicOutline,
        dto::request::{
            CompleteFlowRequest, CurateTopicsRequest, DocumentQuery, EvaluateQuizRequest,
            GenerateContentRequest, RenderDocumentRequest, SubjectRequest,
        },
    },
    services::document_service::DocumentService,
};

#[post("/generate-topics")]
pub async fn generate_topics(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<SubjectRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let topics = state
        .learning_service
        .generate_topics(&request.subject)
        .await
        .map_err(|e| log_failure(&req, "generate-topics", e))?;
    Ok(HttpResponse::Ok().json(topics))
}

#[post("/generate-quiz")]
pub async fn generate_quiz(
    req: HttpRequest,
    state: web::Data<AppState>,
    topics: web::Json<TopicOutline>,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .learning_service
        .generate_quiz(&topics)
        .await
        .map_err(|e| log_failure(&req, "generate-quiz", e))?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/evaluate-quiz")]
pub async fn evaluate_quiz(
    state: web::Data<AppState>,
    request: web::Json<EvaluateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let understanding = state
        .learning_service
        .evaluate_quiz(&request.quiz, &request.submission);
    Ok(HttpResponse::Ok().json(understanding))
}

#[post("/curate-topics")]
pub async fn curate_topics(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<CurateTopicsRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let curated = state
        .learning_service
        .curate_topics(&request.request.subject, &request.understanding)
        .await
        .map_err(|e| log_failure(&req, "curate-topics", e))?;
    Ok(HttpResponse::Ok().json(curated))
}

#[post("/generate-content")]
pub async fn generate_content(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateContentRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let content = state
        .learning_service
        .generate_content(&request.topics, &request.understanding)
        .await
        .map_err(|e| log_failure(&req, "generate-content", e))?;
    Ok(HttpResponse::Ok().json(content))
}

#[post("/generate-content/document")]
pub async fn render_content_document(
    req: HttpRequest,
    query: web::Query<DocumentQuery>,
    request: web::Json<RenderDocumentRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let format = query.format;
    let RenderDocumentRequest { content, title } = request.into_inner();
    let document = web::block(move || DocumentService::render(&content, title.as_deref(), format))
        .await
        .map_err(|e| AppError::InternalError(format!("Rendering was interrupted: {}", e)))?
        .map_err(|e| log_failure(&req, "generate-content/document", e))?;

    Ok(HttpResponse::Ok()
        .content_type(document.content_type)
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(document.filename)],
        })
        .body(document.bytes))
}

#[post("/complete-flow")]
pub async fn complete_flow(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<CompleteFlowRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let CompleteFlowRequest {
        request,
        quiz_submission,
    } = request.into_inner();
    let response = state
        .study_flow_service
        .run(&request.subject, quiz_submission)
        .await
        .map_err(|e| log_failure(&req, "complete-flow", e))?;
    Ok(HttpResponse::Ok().json(response))
}
