use async_graphql::{InputObject, SimpleObject};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A four-choice question tagged with the topic it tests.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject, InputObject, JsonSchema)]
#[graphql(input_name = "QuizQuestionInput")]
pub struct QuizQuestion {
    pub topic: String,
    pub quiz_question: String,
    pub choice_a: String,
    pub choice_b: String,
    pub choice_c: String,
    pub choice_d: String,
    pub correct_answer: String, // label: a, b, c or d
}

impl QuizQuestion {
    /// True when `label` names the correct choice, ignoring case only.
    pub fn is_correct(&self, label: &str) -> bool {
        !label.is_empty() && label.to_lowercase() == self.correct_answer.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: &str) -> QuizQuestion {
        QuizQuestion {
            topic: "Math".to_string(),
            quiz_question: "What is 2 + 2?".to_string(),
            choice_a: "4".to_string(),
            choice_b: "3".to_string(),
            choice_c: "5".to_string(),
            choice_d: "22".to_string(),
            correct_answer: correct.to_string(),
        }
    }

    #[test]
    fn is_correct_ignores_case() {
        assert!(question("a").is_correct("A"));
        assert!(question("B").is_correct("b"));
    }

    #[test]
    fn is_correct_rejects_other_labels() {
        assert!(!question("a").is_correct("b"));
        assert!(!question("a").is_correct("ab"));
    }

    #[test]
    fn is_correct_does_not_trim_labels() {
        assert!(!question("a").is_correct(" a "));
        assert!(!question("a").is_correct("a\n"));
        assert!(!question(" a").is_correct("a"));
    }

    #[test]
    fn empty_label_never_matches() {
        assert!(!question("").is_correct(""));
        assert!(!question("a").is_correct("   "));
    }

    #[test]
    fn deserializes_agent_output_shape() {
        let json = r#"{
            "topic": "History",
            "quiz_question": "Who was the first emperor of Rome?",
            "choice_a": "Julius Caesar",
            "choice_b": "Augustus",
            "choice_c": "Nero",
            "choice_d": "Trajan",
            "correct_answer": "b"
        }"#;

        let parsed: QuizQuestion = serde_json::from_str(json).expect("question should parse");
        assert_eq!(parsed.topic, "History");
        assert!(parsed.is_correct("B"));
    }
}
