pub mod graphql_handler;
pub mod health_handler;
pub mod learning_handler;
pub mod upload_handler;

use actix_web::{web, HttpRequest};

use crate::{errors::AppError, middleware::get_request_id};

pub use graphql_handler::{graphiql, graphql};
pub use health_handler::health_check;
pub use learning_handler::{
    complete_flow, curate_topics, evaluate_quiz, generate_content, generate_quiz,
    generate_topics, render_content_document,
};
pub use upload_handler::{upload_course_notes, upload_exams};

/// Registers every route plus JSON and query extractor error handling.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    )
    .service(health_check)
    .service(generate_topics)
    .service(generate_quiz)
    .service(evaluate_quiz)
    .service(curate_topics)
    .service(generate_content)
    .service(render_content_document)
    .service(complete_flow)
    .service(upload_course_notes)
    .service(upload_exams)
    .service(graphql)
    .service(graphiql);
}

pub(crate) fn log_failure(req: &HttpRequest, operation: &str, err: AppError) -> AppError {
    log::error!(
        "[{}] {} failed: {}",
        get_request_id(req).unwrap_or_else(|| "-".to_string()),
        operation,
        err
    );
    err
}
