use async_graphql::{Context, ErrorExtensions};

use crate::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

/// Converts a service result into a GraphQL result carrying the error `code` extension.
pub fn into_graphql<T>(result: AppResult<T>) -> async_graphql::Result<T> {
    result.map_err(|e| {
        log::error!("GraphQL operation failed: {}", e);
        e.extend()
    })
}

pub fn app_state<'a>(ctx: &'a Context<'_>) -> async_graphql::Result<&'a AppState> {
    ctx.data::<AppState>().map_err(|e| {
        AppError::InternalError(format!("Application state missing: {}", e.message)).extend()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_graphql_keeps_error_code() {
        let err = into_graphql::<()>(Err(AppError::AgentError("down".into()))).unwrap_err();

        assert_eq!(err.message, "Agent error: down");
        let code = err.extensions.as_ref().and_then(|ext| ext.get("code"));
        assert!(matches!(
            code,
            Some(async_graphql::Value::String(s)) if s == "AGENT_ERROR"
        ));
    }

    #[test]
    fn into_graphql_passes_values_through() {
        assert_eq!(into_graphql(Ok(7)).ok(), Some(7));
    }
}
