use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::ExposeSecret;
use serde_json::{json, Value};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    services::agent_service::{AgentRole, AgentRunner},
};

static CODE_FENCE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\s*```[A-Za-z]*\s*(.*?)\s*```\s*$")
        .expect("CODE_FENCE_REGEX is a valid regex pattern")
});

/// Agent runner backed by an OpenAI-compatible chat completions endpoint.
pub struct OpenAiAgentRunner {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiAgentRunner {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.openai_api_key.expose_secret())
            .with_api_base(config.openai_api_base.as_str());

        Self {
            client: Client::with_config(openai_config),
            model: config.openai_model.clone(),
        }
    }
}

#[async_trait]
impl AgentRunner for OpenAiAgentRunner {
    async fn run(&self, role: AgentRole, input: String) -> AppResult<Value> {
        let request = build_chat_request(&self.model, role, &input);

        log::debug!("Sending {} request to {}", role, self.model);
        let response: Value = self
            .client
            .chat()
            .create_byot(request)
            .await
            .map_err(|e| {
                log::warn!("OpenAI call for {} failed: {}", role, e);
                AppError::from(e)
            })?;

        if let Some(tokens) = response.pointer("/usage/total_tokens").and_then(Value::as_u64) {
            log::debug!("{} used {} tokens", role, tokens);
        }

        parse_structured_output(role, &response)
    }
}

/// Chat request with the role's instructions as system prompt and its schema as response format.
pub fn build_chat_request(model: &str, role: AgentRole, input: &str) -> Value {
    json!({
        "model": model,
        "messages": [
            { "role": "system", "content": role.instructions() },
            { "role": "user", "content": input }
        ],
        "response_format": {
            "type": "json_schema",
            "json_schema": {
                "name": role.name(),
                "schema": role.output_schema(),
                "strict": false
            }
        }
    })
}

/// Pull the first choice's message content out of a chat response and parse it as JSON.
pub fn parse_structured_output(role: AgentRole, response: &Value) -> AppResult<Value> {
    let message = response
        .pointer("/choices/0/message")
        .ok_or_else(|| AppError::AgentError(format!("{} returned no choices", role)))?;

    if let Some(refusal) = message
        .get("refusal")
        .and_then(Value::as_str)
        .filter(|r| !r.trim().is_empty())
    {
        return Err(AppError::AgentError(format!("{} refused: {}", role, refusal)));
    }

    let content = message
        .get("content")
        .and_then(Value::as_str)
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| AppError::AgentError(format!("{} returned empty content", role)))?;

    serde_json::from_str(strip_code_fence(content)).map_err(|e| {
        AppError::AgentError(format!("{} returned content that is not JSON: {}", role, e))
    })
}

fn strip_code_fence(content: &str) -> &str {
    CODE_FENCE_REGEX
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map_or(content.trim(), |m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat_response(content: Value) -> Value {
        json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": { "role": "assistant", "content": content, "refusal": null },
                    "finish_reason": "stop"
                }
            ]
        })
    }

    #[test]
    fn build_chat_request_carries_instructions_and_schema() {
        let request = build_chat_request("gpt-test", AgentRole::OpenQuiz, "Here are the topics:\n1. Cells");

        assert_eq!(request["model"], "gpt-test");
        assert_eq!(request["messages"][0]["role"], "system");
        assert_eq!(
            request["messages"][0]["content"],
            AgentRole::OpenQuiz.instructions()
        );
        assert_eq!(request["messages"][1]["content"], "Here are the topics:\n1. Cells");
        assert_eq!(request["response_format"]["type"], "json_schema");
        assert_eq!(
            request["response_format"]["json_schema"]["name"],
            "open_quiz_agent"
        );
        assert!(request["response_format"]["json_schema"]["schema"].is_object());
    }

    #[test]
    fn parse_structured_output_reads_json_content() {
        let response = chat_response(json!(r#"{"list_of_topics": []}"#));

        let output = parse_structured_output(AgentRole::MainTopicOutline, &response)
            .expect("content should parse");
        assert_eq!(output, json!({ "list_of_topics": [] }));
    }

    #[test]
    fn parse_structured_output_strips_markdown_fences() {
        let response = chat_response(json!("```json\n{\"topic\": []}\n```"));

        let output = parse_structured_output(AgentRole::ContentWriter, &response)
            .expect("fenced content should parse");
        assert_eq!(output, json!({ "topic": [] }));
    }

    #[test]
    fn parse_structured_output_reports_refusals() {
        let response = json!({
            "choices": [
                { "message": { "role": "assistant", "content": null, "refusal": "I can't help with that." } }
            ]
        });

        let err = parse_structured_output(AgentRole::OpenQuiz, &response).unwrap_err();
        assert!(err.to_string().contains("refused"));
    }

    #[test]
    fn parse_structured_output_rejects_missing_choices_and_prose() {
        let err = parse_structured_output(AgentRole::OpenQuiz, &json!({ "choices": [] })).unwrap_err();
        assert!(err.to_string().contains("no choices"));

        let response = chat_response(json!("Sure! Here are your topics."));
        let err = parse_structured_output(AgentRole::OpenQuiz, &response).unwrap_err();
        assert!(err.to_string().contains("not JSON"));

        let response = chat_response(json!("   "));
        let err = parse_structured_output(AgentRole::OpenQuiz, &response).unwrap_err();
        assert!(err.to_string().contains("empty content"));
    }

    #[test]
    fn runner_builds_from_config() {
        let runner = OpenAiAgentRunner::new(&Config::test_config());
        assert_eq!(runner.model, "test-model");
    }
}
