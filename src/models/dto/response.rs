use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

use crate::models::domain::{Quiz, StudyContent, TopicOutline, TopicScore, UnderstandingScore};

/// Everything produced by one run of the five-step study flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteFlowResponse {
    pub topics: TopicOutline,
    pub quiz: Quiz,
    pub understanding: UnderstandingScore,
    pub curated_topics: TopicOutline,
    pub content: StudyContent,
}

#[derive(Debug, Clone, SimpleObject)]
pub struct CompleteFlowPayload {
    pub topics: TopicOutline,
    pub quiz: Quiz,
    pub understanding: Vec<TopicScore>,
    pub curated_topics: TopicOutline,
    pub content: StudyContent,
}

impl From<CompleteFlowResponse> for CompleteFlowPayload {
    fn from(response: CompleteFlowResponse) -> Self {
        CompleteFlowPayload {
            understanding: response.understanding.entries(),
            topics: response.topics,
            quiz: response.quiz,
            curated_topics: response.curated_topics,
            content: response.content,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadKind {
    CourseNotes,
    Exams,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedTextResponse {
    pub kind: UploadKind,
    pub file_count: usize,
    pub text: String,
}
