use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::dto::{request::QuizSubmission, response::CompleteFlowResponse},
    services::{
        learning_service::LearningService,
        orchestrator_steps::flow_steps::{create_complete_flow_steps, FlowStep},
        step_executor::{FlowState, StepHandler},
    },
};

/// Runs the study flow: topics, quiz, evaluation, curation, content.
///
/// Steps run strictly one after another; the first failing step ends the run
/// and its error is returned with the step name attached.
pub struct StudyFlowService {
    learning: Arc<LearningService>,
    steps: Vec<FlowStep>,
}

impl StudyFlowService {
    pub fn new(learning: Arc<LearningService>) -> Self {
        Self::with_steps(learning, create_complete_flow_steps())
    }

    pub fn with_steps(learning: Arc<LearningService>, steps: Vec<FlowStep>) -> Self {
        Self { learning, steps }
    }

    pub fn steps(&self) -> &[FlowStep] {
        &self.steps
    }

    pub async fn run(
        &self,
        subject: &str,
        submission: QuizSubmission,
    ) -> AppResult<CompleteFlowResponse> {
        log::info!("Starting complete flow for subject: {}", subject);
        let mut state = FlowState::new(subject, submission);

        for (index, step) in self.steps.iter().enumerate() {
            log::info!(
                "Step {}: {}",
                index + 1,
                step.description.as_deref().unwrap_or(step.name())
            );

            if let Err(e) = self.run_step(step, &mut state).await {
                log::error!("Complete flow failed at step {}: {}", step.name(), e);
                return Err(e.context(&format!("Error in complete flow at {}", step.name())));
            }
        }

        log::info!("Complete flow finished successfully");
        state.into_response()
    }

    async fn run_step(&self, step: &FlowStep, state: &mut FlowState) -> AppResult<()> {
        let execution = StepHandler::execute(step.step_type, state, &self.learning);

        match step.timeout() {
            Some(limit) => tokio::time::timeout(limit, execution).await.map_err(|_| {
                AppError::AgentError(format!(
                    "step {} timed out after {}s",
                    step.name(),
                    limit.as_secs()
                ))
            })?,
            None => execution.await,
        }
    }
}
