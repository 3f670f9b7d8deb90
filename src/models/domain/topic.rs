use async_graphql::{InputObject, SimpleObject};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(
    Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject, InputObject, JsonSchema, Validate,
)]
#[graphql(input_name = "TopicInput")]
pub struct Topic {
    #[validate(length(min = 1, max = 200))]
    pub topic: String,
    pub description: String,
    pub subtopics: Vec<String>,
}

/// Ordered topic outline, as produced by the outline and curation agents.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, SimpleObject, InputObject, JsonSchema, Validate,
)]
#[graphql(input_name = "TopicOutlineInput")]
pub struct TopicOutline {
    #[validate(nested)]
    pub list_of_topics: Vec<Topic>,
}

impl TopicOutline {
    /// Numbered prompt listing, one block per topic.
    pub fn to_prompt_listing(&self) -> String {
        self.list_of_topics
            .iter()
            .enumerate()
            .map(|(i, topic)| {
                format!(
                    "{}. {}\n   Description: {}\n   Subtopics: {}",
                    i + 1,
                    topic.topic,
                    topic.description,
                    topic.subtopics.join(", ")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn len(&self) -> usize {
        self.list_of_topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list_of_topics.is_empty()
    }
}
