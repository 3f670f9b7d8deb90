use async_graphql::{InputObject, SimpleObject};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Per-topic accuracy in percent, keyed in the order topics first appear in the quiz.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct UnderstandingScore {
    pub scores: IndexMap<String, f64>,
}

/// Flattened form of a single score, used where maps are awkward (GraphQL).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, SimpleObject, InputObject)]
#[graphql(input_name = "TopicScoreInput")]
pub struct TopicScore {
    pub topic: String,
    pub score: f64,
}

impl UnderstandingScore {
    /// One `topic: 12.3%` line per topic.
    pub fn to_prompt_lines(&self) -> String {
        self.scores
            .iter()
            .map(|(topic, score)| format!("{}: {:.1}%", topic, score))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn entries(&self) -> Vec<TopicScore> {
        self.scores
            .iter()
            .map(|(topic, score)| TopicScore {
                topic: topic.clone(),
                score: *score,
            })
            .collect()
    }

    pub fn get(&self, topic: &str) -> Option<f64> {
        self.scores.get(topic).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl FromIterator<TopicScore> for UnderstandingScore {
    fn from_iter<I: IntoIterator<Item = TopicScore>>(iter: I) -> Self {
        Self {
            scores: iter
                .into_iter()
                .map(|entry| (entry.topic, entry.score))
                .collect(),
        }
    }
}
