use async_graphql::SimpleObject;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject, JsonSchema)]
pub struct ContentSubsection {
    pub sub_topic_title: String,
    pub sub_content_text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject, JsonSchema)]
pub struct ContentSection {
    pub topic_title: String,
    pub main_description: String,
    pub subtopics: Vec<ContentSubsection>,
}

/// Long-form study material written by the content agent, one section per topic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, SimpleObject, JsonSchema)]
pub struct StudyContent {
    pub topic: Vec<ContentSection>,
}

impl StudyContent {
    pub fn section_count(&self) -> usize {
        self.topic.len()
    }
}
