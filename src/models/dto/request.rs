use async_graphql::InputObject;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{AnswerSheet, Quiz, StudyContent, TopicOutline, UnderstandingScore};

#[derive(Debug, Clone, Deserialize, Serialize, Validate, InputObject)]
pub struct SubjectRequest {
    #[validate(length(min = 1, max = 500))]
    pub subject: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, InputObject)]
pub struct QuizAnswer {
    pub question_index: i64, // zero-based position in the quiz
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, InputObject)]
pub struct QuizSubmission {
    pub answers: Vec<QuizAnswer>,
}

impl From<&QuizSubmission> for AnswerSheet {
    fn from(submission: &QuizSubmission) -> Self {
        // Negative positions cannot name a question and are dropped like out-of-range ones.
        submission
            .answers
            .iter()
            .filter_map(|answer| {
                usize::try_from(answer.question_index)
                    .ok()
                    .map(|index| (index, answer.answer.as_str()))
            })
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvaluateQuizRequest {
    // Accepted for compatibility with existing clients; scoring only needs the quiz.
    #[serde(default)]
    pub topics: TopicOutline,
    pub quiz: Quiz,
    pub submission: QuizSubmission,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CurateTopicsRequest {
    #[validate(nested)]
    pub request: SubjectRequest,
    pub understanding: UnderstandingScore,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateContentRequest {
    #[validate(nested)]
    pub topics: TopicOutline,
    #[serde(default)]
    pub understanding: UnderstandingScore,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CompleteFlowRequest {
    #[validate(nested)]
    pub request: SubjectRequest,
    pub quiz_submission: QuizSubmission,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RenderDocumentRequest {
    pub content: StudyContent,
    #[validate(length(max = 200))]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Pdf,
    Html,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentQuery {
    #[serde(default)]
    pub format: DocumentFormat,
}
