use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use async_graphql::ErrorExtensions;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Agent error: {0}")]
    AgentError(String),

    #[error("Document error: {0}")]
    DocumentError(String),

    #[error("Extraction error: {0}")]
    ExtractionError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::AgentError(_) => "AGENT_ERROR",
            AppError::DocumentError(_) => "DOCUMENT_ERROR",
            AppError::ExtractionError(_) => "EXTRACTION_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Prefixes the message with the operation that failed, keeping the variant.
    pub fn context(self, operation: &str) -> Self {
        match self {
            AppError::ValidationError(msg) => {
                AppError::ValidationError(format!("{}: {}", operation, msg))
            }
            AppError::AgentError(msg) => AppError::AgentError(format!("{}: {}", operation, msg)),
            AppError::DocumentError(msg) => {
                AppError::DocumentError(format!("{}: {}", operation, msg))
            }
            AppError::ExtractionError(msg) => {
                AppError::ExtractionError(format!("{}: {}", operation, msg))
            }
            AppError::InternalError(msg) => {
                AppError::InternalError(format!("{}: {}", operation, msg))
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AgentError(_) => StatusCode::BAD_GATEWAY,
            AppError::DocumentError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ExtractionError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::AgentError(err.to_string())
    }
}
impl From<pdf_extract::OutputError> for AppError {
    fn from(err: pdf_extract::OutputError) -> Self {
        AppError::ExtractionError(err.to_string())
    }
}
impl From<actix_multipart::MultipartError> for AppError {
    fn from(err: actix_multipart::MultipartError) -> Self {
        AppError::ValidationError(format!("Invalid multipart upload: {}", err))
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_err, e| {
            e.set("code", self.error_code());
        })
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::ValidationError("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::AgentError("test".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::ExtractionError("test".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::DocumentError("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::AgentError("timed out".into());
        assert_eq!(err.to_string(), "Agent error: timed out");
    }

    #[test]
    fn test_context_keeps_variant() {
        let err = AppError::AgentError("timed out".into()).context("Error generating topics");
        assert!(matches!(err, AppError::AgentError(_)));
        assert_eq!(
            err.to_string(),
            "Agent error: Error generating topics: timed out"
        );
    }

    #[test]
    fn test_graphql_extension_code() {
        let gql = AppError::ValidationError("bad".into()).extend();
        let code = gql.extensions.as_ref().and_then(|ext| ext.get("code"));
        assert!(matches!(
            code,
            Some(async_graphql::Value::String(s)) if s == "VALIDATION_ERROR"
        ));
    }
}
