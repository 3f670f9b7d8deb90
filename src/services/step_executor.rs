use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Quiz, StudyContent, TopicOutline, UnderstandingScore},
        dto::{request::QuizSubmission, response::CompleteFlowResponse},
    },
    services::learning_service::LearningService,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStepType {
    GenerateTopics,
    GenerateQuiz,
    EvaluateQuiz,
    CurateTopics,
    GenerateContent,
}

impl FlowStepType {
    pub fn step_name(&self) -> &'static str {
        match self {
            FlowStepType::GenerateTopics => "generate_topics",
            FlowStepType::GenerateQuiz => "generate_quiz",
            FlowStepType::EvaluateQuiz => "evaluate_quiz",
            FlowStepType::CurateTopics => "curate_topics",
            FlowStepType::GenerateContent => "generate_content",
        }
    }
}

/// Results accumulated while the flow runs.
#[derive(Debug, Clone)]
pub struct FlowState {
    pub subject: String,
    pub submission: QuizSubmission,
    pub topics: Option<TopicOutline>,
    pub quiz: Option<Quiz>,
    pub understanding: Option<UnderstandingScore>,
    pub curated_topics: Option<TopicOutline>,
    pub content: Option<StudyContent>,
}

impl FlowState {
    pub fn new(subject: impl Into<String>, submission: QuizSubmission) -> Self {
        Self {
            subject: subject.into(),
            submission,
            topics: None,
            quiz: None,
            understanding: None,
            curated_topics: None,
            content: None,
        }
    }

    pub fn into_response(self) -> AppResult<CompleteFlowResponse> {
        Ok(CompleteFlowResponse {
            topics: require(self.topics, "topics")?,
            quiz: require(self.quiz, "quiz")?,
            understanding: require(self.understanding, "understanding")?,
            curated_topics: require(self.curated_topics, "curated_topics")?,
            content: require(self.content, "content")?,
        })
    }
}

fn require<T>(value: Option<T>, name: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::InternalError(format!("Flow finished without {}", name)))
}

pub struct StepHandler;

impl StepHandler {
    pub async fn execute(
        step_type: FlowStepType,
        state: &mut FlowState,
        learning: &LearningService,
    ) -> AppResult<()> {
        match step_type {
            FlowStepType::GenerateTopics => Self::handle_generate_topics(state, learning).await,
            FlowStepType::GenerateQuiz => Self::handle_generate_quiz(state, learning).await,
            FlowStepType::EvaluateQuiz => Self::handle_evaluate_quiz(state, learning),
            FlowStepType::CurateTopics => Self::handle_curate_topics(state, learning).await,
            FlowStepType::GenerateContent => {
                Self::handle_generate_content(state, learning).await
            }
        }
    }

    async fn handle_generate_topics(
        state: &mut FlowState,
        learning: &LearningService,
    ) -> AppResult<()> {
        let topics = learning.generate_topics(&state.subject).await?;
        state.topics = Some(require_agent_topics(topics, "topic outline")?);
        Ok(())
    }

    async fn handle_generate_quiz(
        state: &mut FlowState,
        learning: &LearningService,
    ) -> AppResult<()> {
        let topics = state
            .topics
            .as_ref()
            .ok_or_else(|| missing_input("generate_quiz", "topics"))?;

        let quiz = learning.generate_quiz(topics).await?;
        state.quiz = Some(quiz);
        Ok(())
    }

    fn handle_evaluate_quiz(state: &mut FlowState, learning: &LearningService) -> AppResult<()> {
        let quiz = state
            .quiz
            .as_ref()
            .ok_or_else(|| missing_input("evaluate_quiz", "quiz"))?;

        let understanding = learning.evaluate_quiz(quiz, &state.submission);
        state.understanding = Some(understanding);
        Ok(())
    }

    async fn handle_curate_topics(
        state: &mut FlowState,
        learning: &LearningService,
    ) -> AppResult<()> {
        let understanding = state
            .understanding
            .as_ref()
            .ok_or_else(|| missing_input("curate_topics", "understanding"))?;

        let curated = learning
            .curate_topics(&state.subject, understanding)
            .await?;
        state.curated_topics = Some(require_agent_topics(curated, "curation")?);
        Ok(())
    }

    async fn handle_generate_content(
        state: &mut FlowState,
        learning: &LearningService,
    ) -> AppResult<()> {
        let curated = state
            .curated_topics
            .as_ref()
            .ok_or_else(|| missing_input("generate_content", "curated_topics"))?;
        let understanding = state
            .understanding
            .as_ref()
            .ok_or_else(|| missing_input("generate_content", "understanding"))?;

        let content = learning.generate_content(curated, understanding).await?;
        state.content = Some(content);
        Ok(())
    }
}

/// Outlines produced by an agent inside the flow must name at least one topic.
fn require_agent_topics(topics: TopicOutline, agent: &str) -> AppResult<TopicOutline> {
    if topics.is_empty() {
        return Err(AppError::AgentError(format!(
            "The {} agent returned no topics",
            agent
        )));
    }
    Ok(topics)
}

fn missing_input(step: &str, input: &str) -> AppError {
    AppError::InternalError(format!(
        "Step {} ran before {} was available",
        step, input
    ))
}
