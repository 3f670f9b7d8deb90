use std::{fmt, sync::Arc, time::Duration};

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::{
    constants::prompts::{
        CONTENT_WRITER_PROMPT, CURATED_TOPIC_OUTLINE_PROMPT, MAIN_TOPIC_OUTLINE_PROMPT,
        OPEN_QUIZ_PROMPT,
    },
    errors::{AppError, AppResult},
    models::domain::{Quiz, StudyContent, TopicOutline},
};

/// The external agents this service knows how to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentRole {
    MainTopicOutline,
    CuratedTopicOutline,
    OpenQuiz,
    ContentWriter,
}

impl AgentRole {
    pub fn name(&self) -> &'static str {
        match self {
            AgentRole::MainTopicOutline => "main_topic_outline_agent",
            AgentRole::CuratedTopicOutline => "curated_topic_outline_agent",
            AgentRole::OpenQuiz => "open_quiz_agent",
            AgentRole::ContentWriter => "content_writer_agent",
        }
    }

    pub fn instructions(&self) -> &'static str {
        match self {
            AgentRole::MainTopicOutline => MAIN_TOPIC_OUTLINE_PROMPT,
            AgentRole::CuratedTopicOutline => CURATED_TOPIC_OUTLINE_PROMPT,
            AgentRole::OpenQuiz => OPEN_QUIZ_PROMPT,
            AgentRole::ContentWriter => CONTENT_WRITER_PROMPT,
        }
    }

    /// JSON schema of the structured output this agent must return.
    pub fn output_schema(&self) -> Value {
        match self {
            AgentRole::MainTopicOutline | AgentRole::CuratedTopicOutline => {
                schema_value::<TopicOutline>()
            }
            AgentRole::OpenQuiz => schema_value::<Quiz>(),
            AgentRole::ContentWriter => schema_value::<StudyContent>(),
        }
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn schema_value<T: JsonSchema>() -> Value {
    let mut schema = serde_json::to_value(schemars::schema_for!(T))
        .unwrap_or_else(|_| json!({ "type": "object" }));
    if let Some(object) = schema.as_object_mut() {
        object.remove("$schema");
    }
    schema
}

/// Executes one agent invocation and returns its raw structured output.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AgentRunner: Send + Sync {
    async fn run(&self, role: AgentRole, input: String) -> AppResult<Value>;
}

pub struct AgentService {
    runner: Arc<dyn AgentRunner>,
    timeout: Duration,
}

impl AgentService {
    pub fn new(runner: Arc<dyn AgentRunner>, timeout: Duration) -> Self {
        Self { runner, timeout }
    }

    /// Run `role` on `input` and decode its output as `T`.
    pub async fn run<T: DeserializeOwned>(&self, role: AgentRole, input: String) -> AppResult<T> {
        log::debug!("Running {} with {} bytes of input", role, input.len());

        let output = tokio::time::timeout(self.timeout, self.runner.run(role, input))
            .await
            .map_err(|_| {
                AppError::AgentError(format!(
                    "{} timed out after {}s",
                    role,
                    self.timeout.as_secs()
                ))
            })??;

        serde_json::from_value(output).map_err(|e| {
            AppError::AgentError(format!(
                "{} returned output that does not match its schema: {}",
                role, e
            ))
        })
    }
}
