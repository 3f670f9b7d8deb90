use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{AnswerSheet, Quiz, StudyContent, TopicOutline, UnderstandingScore},
        dto::request::QuizSubmission,
    },
    services::{
        agent_service::{AgentRole, AgentService},
        quiz_evaluation_service::QuizEvaluationService,
    },
};

pub struct LearningService {
    agents: Arc<AgentService>,
}

impl LearningService {
    pub fn new(agents: Arc<AgentService>) -> Self {
        Self { agents }
    }

    pub async fn generate_topics(&self, subject: &str) -> AppResult<TopicOutline> {
        let subject = subject.trim();
        if subject.is_empty() {
            return Err(AppError::ValidationError(
                "Subject cannot be empty".to_string(),
            ));
        }

        log::info!("Generating topics for subject: {}", subject);
        let topics: TopicOutline = self
            .agents
            .run(AgentRole::MainTopicOutline, subject.to_string())
            .await
            .map_err(|e| e.context("Error generating topics"))?;

        log::info!("Generated {} topics", topics.len());
        Ok(topics)
    }

    pub async fn generate_quiz(&self, topics: &TopicOutline) -> AppResult<Quiz> {
        topics.validate()?;
        if topics.is_empty() {
            return Err(AppError::ValidationError(
                "At least one topic is required to generate a quiz".to_string(),
            ));
        }

        log::info!("Generating quiz for {} topics", topics.len());
        let quiz: Quiz = self
            .agents
            .run(AgentRole::OpenQuiz, quiz_prompt(topics))
            .await
            .map_err(|e| e.context("Error generating quiz"))?;

        log::info!("Generated {} quiz questions", quiz.len());
        Ok(quiz)
    }

    pub fn evaluate_quiz(&self, quiz: &Quiz, submission: &QuizSubmission) -> UnderstandingScore {
        log::info!("Evaluating quiz with {} answers", submission.answers.len());

        let answers = AnswerSheet::from(submission);
        if answers.len() != submission.answers.len() {
            log::debug!(
                "{} answers were dropped or overwritten before scoring",
                submission.answers.len() - answers.len()
            );
        }

        let understanding =
            QuizEvaluationService::evaluate_understanding(&quiz.list_quiz_questions, &answers);
        log::info!("Evaluated understanding for {} topics", understanding.len());
        understanding
    }

    pub async fn curate_topics(
        &self,
        subject: &str,
        understanding: &UnderstandingScore,
    ) -> AppResult<TopicOutline> {
        let subject = subject.trim();
        if subject.is_empty() {
            return Err(AppError::ValidationError(
                "Subject cannot be empty".to_string(),
            ));
        }

        log::info!("Curating topics for subject: {}", subject);
        let curated: TopicOutline = self
            .agents
            .run(
                AgentRole::CuratedTopicOutline,
                curation_prompt(subject, understanding),
            )
            .await
            .map_err(|e| e.context("Error curating topics"))?;

        log::info!("Curated {} topics", curated.len());
        Ok(curated)
    }

    pub async fn generate_content(
        &self,
        topics: &TopicOutline,
        understanding: &UnderstandingScore,
    ) -> AppResult<StudyContent> {
        topics.validate()?;
        if topics.is_empty() {
            return Err(AppError::ValidationError(
                "At least one topic is required to generate content".to_string(),
            ));
        }

        log::info!("Generating content for {} topics", topics.len());
        let content: StudyContent = self
            .agents
            .run(
                AgentRole::ContentWriter,
                content_prompt(topics, understanding),
            )
            .await
            .map_err(|e| e.context("Error generating content"))?;

        log::info!("Generated content with {} sections", content.section_count());
        Ok(content)
    }
}

pub fn quiz_prompt(topics: &TopicOutline) -> String {
    format!("Here are the topics:\n{}", topics.to_prompt_listing())
}

pub fn curation_prompt(subject: &str, understanding: &UnderstandingScore) -> String {
    format!(
        "Here is the main topic:\n{}\nHere is the understanding of the topic:\n{}",
        subject,
        understanding.to_prompt_lines()
    )
}

pub fn content_prompt(topics: &TopicOutline, understanding: &UnderstandingScore) -> String {
    let mut prompt = format!(
        "Here are the topics to write content for:\n{}\n\
         You need to output the main content, its description and the subtopics with the content for each subtopic.",
        topics.to_prompt_listing()
    );

    if !understanding.is_empty() {
        prompt.push_str("\n\nUnderstanding by Topic:\n");
        prompt.push_str(&understanding.to_prompt_lines());
    }

    prompt
}
