use actix_web::{get, post, web, HttpResponse};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::graphql::Schema;

#[post("/graphql")]
pub async fn graphql(schema: web::Data<Schema>, request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

#[get("/graphiql")]
pub async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, App};
    use serde_json::json;

    use super::*;
    use crate::{
        app_state::AppState,
        config::Config,
        graphql::create_schema,
        services::agent_service::MockAgentRunner,
        test_utils::fixtures,
    };

    fn schema_with(runner: MockAgentRunner) -> web::Data<Schema> {
        let state = AppState::with_runner(Config::test_config(), Arc::new(runner));
        web::Data::new(create_schema(state))
    }

    #[actix_web::test]
    async fn test_graphql_health_query() {
        let app = test::init_service(
            App::new()
                .app_data(schema_with(MockAgentRunner::new()))
                .service(graphql),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/graphql")
            .set_json(json!({ "query": "{ health { status version } }" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["health"]["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_graphql_evaluate_quiz_returns_ordered_scores() {
        let app = test::init_service(
            App::new()
                .app_data(schema_with(MockAgentRunner::new()))
                .service(graphql),
        )
        .await;

        let query = r#"
            query Evaluate($quiz: QuizInput!, $submission: QuizSubmission!) {
                evaluateQuiz(quiz: $quiz, submission: $submission) { topic score }
            }
        "#;
        let quiz = fixtures::sample_quiz();
        let questions: Vec<serde_json::Value> = quiz
            .list_quiz_questions
            .iter()
            .map(|q| {
                json!({
                    "topic": q.topic,
                    "quizQuestion": q.quiz_question,
                    "choiceA": q.choice_a,
                    "choiceB": q.choice_b,
                    "choiceC": q.choice_c,
                    "choiceD": q.choice_d,
                    "correctAnswer": q.correct_answer,
                })
            })
            .collect();
        let req = test::TestRequest::post()
            .uri("/graphql")
            .set_json(json!({
                "query": query,
                "variables": {
                    "quiz": { "listQuizQuestions": questions },
                    "submission": { "answers": [
                        { "questionIndex": 0, "answer": "A" },
                        { "questionIndex": 1, "answer": "x" }
                    ]}
                }
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body["data"]["evaluateQuiz"],
            json!([
                { "topic": "Math", "score": 50.0 },
                { "topic": "History", "score": 0.0 }
            ])
        );
    }

    #[actix_web::test]
    async fn test_graphql_blank_subject_carries_error_code() {
        let mut runner = MockAgentRunner::new();
        runner.expect_run().never();
        let app = test::init_service(App::new().app_data(schema_with(runner)).service(graphql)).await;

        let req = test::TestRequest::post()
            .uri("/graphql")
            .set_json(json!({ "query": r#"mutation { generateTopics(subject: "") { listOfTopics { topic } } }"# }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["errors"][0]["extensions"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_graphiql_serves_html() {
        let app = test::init_service(App::new().service(graphiql)).await;

        let req = test::TestRequest::get().uri("/graphiql").to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert!(String::from_utf8_lossy(&body).contains("/graphql"));
    }
}
