use std::{sync::Arc, time::Duration};

use crate::{
    config::Config,
    services::{
        agent_service::{AgentRunner, AgentService},
        learning_service::LearningService,
        model_service::OpenAiAgentRunner,
        study_flow_service::StudyFlowService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub learning_service: Arc<LearningService>,
    pub study_flow_service: Arc<StudyFlowService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let runner = Arc::new(OpenAiAgentRunner::new(&config));
        Self::with_runner(config, runner)
    }

    /// Builds the service graph around any agent runner.
    pub fn with_runner(config: Config, runner: Arc<dyn AgentRunner>) -> Self {
        let agents = Arc::new(AgentService::new(
            runner,
            Duration::from_secs(config.agent_timeout_seconds),
        ));

        let learning_service = Arc::new(LearningService::new(agents));
        let study_flow_service = Arc::new(StudyFlowService::new(Arc::clone(&learning_service)));

        Self {
            learning_service,
            study_flow_service,
            config: Arc::new(config),
        }
    }
}
