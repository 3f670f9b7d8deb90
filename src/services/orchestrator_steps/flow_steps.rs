use std::time::Duration;

use crate::services::step_executor::FlowStepType;

const TOPIC_GENERATION_TIMEOUT: u64 = 120;
const QUIZ_GENERATION_TIMEOUT: u64 = 180;
const EVALUATION_TIMEOUT: u64 = 5;
const CURATION_TIMEOUT: u64 = 120;
const CONTENT_GENERATION_TIMEOUT: u64 = 300;

/// One stage of the study flow. Stages run in order and each consumes earlier results.
#[derive(Debug, Clone)]
pub struct FlowStep {
    pub step_type: FlowStepType,
    pub description: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl FlowStep {
    pub fn new(step_type: FlowStepType) -> Self {
        Self {
            step_type,
            description: None,
            timeout_seconds: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    pub fn name(&self) -> &'static str {
        self.step_type.step_name()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

pub fn create_complete_flow_steps() -> Vec<FlowStep> {
    vec![
        generate_topics_step(),
        generate_quiz_step(),
        evaluate_quiz_step(),
        curate_topics_step(),
        generate_content_step(),
    ]
}

fn generate_topics_step() -> FlowStep {
    FlowStep::new(FlowStepType::GenerateTopics)
        .with_description("Generate the main topic outline for the subject")
        .with_timeout(TOPIC_GENERATION_TIMEOUT)
}

fn generate_quiz_step() -> FlowStep {
    FlowStep::new(FlowStepType::GenerateQuiz)
        .with_description("Generate a multiple choice quiz covering the outline")
        .with_timeout(QUIZ_GENERATION_TIMEOUT)
}

fn evaluate_quiz_step() -> FlowStep {
    FlowStep::new(FlowStepType::EvaluateQuiz)
        .with_description("Score the submitted answers per topic")
        .with_timeout(EVALUATION_TIMEOUT)
}

fn curate_topics_step() -> FlowStep {
    FlowStep::new(FlowStepType::CurateTopics)
        .with_description("Reorder topics by weakest understanding")
        .with_timeout(CURATION_TIMEOUT)
}

fn generate_content_step() -> FlowStep {
    FlowStep::new(FlowStepType::GenerateContent)
        .with_description("Write study content for the curated topics")
        .with_timeout(CONTENT_GENERATION_TIMEOUT)
}
