use async_graphql::{Context, Object, SimpleObject};

use crate::{
    graphql::helpers::app_state,
    models::{
        domain::{Quiz, TopicScore},
        dto::request::QuizSubmission,
    },
};

#[derive(Debug, Clone, SimpleObject)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Scores a submission against a quiz without calling any agent.
    async fn evaluate_quiz(
        &self,
        ctx: &Context<'_>,
        quiz: Quiz,
        submission: QuizSubmission,
    ) -> async_graphql::Result<Vec<TopicScore>> {
        let state = app_state(ctx)?;
        Ok(state
            .learning_service
            .evaluate_quiz(&quiz, &submission)
            .entries())
    }
}
