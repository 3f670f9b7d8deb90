use async_graphql::{Context, Object};
use validator::Validate;

use crate::{
    errors::AppError,
    graphql::helpers::{app_state, into_graphql},
    models::{
        domain::{Quiz, StudyContent, TopicOutline, TopicScore, UnderstandingScore},
        dto::{
            request::{QuizSubmission, SubjectRequest},
            response::CompleteFlowPayload,
        },
    },
};

fn checked_subject(subject: String) -> async_graphql::Result<String> {
    let request = SubjectRequest { subject };
    into_graphql(request.validate().map_err(AppError::from))?;
    Ok(request.subject)
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn generate_topics(
        &self,
        ctx: &Context<'_>,
        subject: String,
    ) -> async_graphql::Result<TopicOutline> {
        let state = app_state(ctx)?;
        let subject = checked_subject(subject)?;

        into_graphql(state.learning_service.generate_topics(&subject).await)
    }

    async fn generate_quiz(
        &self,
        ctx: &Context<'_>,
        topics: TopicOutline,
    ) -> async_graphql::Result<Quiz> {
        let state = app_state(ctx)?;
        into_graphql(state.learning_service.generate_quiz(&topics).await)
    }

    async fn curate_topics(
        &self,
        ctx: &Context<'_>,
        subject: String,
        understanding: Vec<TopicScore>,
    ) -> async_graphql::Result<TopicOutline> {
        let state = app_state(ctx)?;
        let subject = checked_subject(subject)?;

        let understanding: UnderstandingScore = understanding.into_iter().collect();
        into_graphql(
            state
                .learning_service
                .curate_topics(&subject, &understanding)
                .await,
        )
    }

    async fn generate_content(
        &self,
        ctx: &Context<'_>,
        topics: TopicOutline,
        #[graphql(default)] understanding: Vec<TopicScore>,
    ) -> async_graphql::Result<StudyContent> {
        let state = app_state(ctx)?;

        let understanding: UnderstandingScore = understanding.into_iter().collect();
        into_graphql(
            state
                .learning_service
                .generate_content(&topics, &understanding)
                .await,
        )
    }

    async fn complete_flow(
        &self,
        ctx: &Context<'_>,
        subject: String,
        submission: QuizSubmission,
    ) -> async_graphql::Result<CompleteFlowPayload> {
        let state = app_state(ctx)?;
        let subject = checked_subject(subject)?;

        let response = into_graphql(
            state
                .study_flow_service
                .run(&subject, submission)
                .await,
        )?;
        Ok(response.into())
    }
}
