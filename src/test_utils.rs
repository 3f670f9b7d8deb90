#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{
        ContentSection, ContentSubsection, Quiz, QuizQuestion, StudyContent, Topic, TopicOutline,
    };

    /// Two-topic outline used across handler and service tests
    pub fn sample_outline() -> TopicOutline {
        TopicOutline {
            list_of_topics: vec![
                Topic {
                    topic: "Math".to_string(),
                    description: "Algebra basics".to_string(),
                    subtopics: vec!["Linear equations".to_string()],
                },
                Topic {
                    topic: "History".to_string(),
                    description: "Early modern Europe".to_string(),
                    subtopics: vec!["Reformation".to_string()],
                },
            ],
        }
    }

    pub fn question(topic: &str, correct_answer: &str) -> QuizQuestion {
        QuizQuestion {
            topic: topic.to_string(),
            quiz_question: format!("Question about {}", topic),
            choice_a: "first".to_string(),
            choice_b: "second".to_string(),
            choice_c: "third".to_string(),
            choice_d: "fourth".to_string(),
            correct_answer: correct_answer.to_string(),
        }
    }

    /// Math/a, Math/b, History/c
    pub fn sample_quiz() -> Quiz {
        Quiz {
            list_quiz_questions: vec![
                question("Math", "a"),
                question("Math", "b"),
                question("History", "c"),
            ],
        }
    }

    pub fn sample_content() -> StudyContent {
        StudyContent {
            topic: vec![ContentSection {
                topic_title: "Math".to_string(),
                main_description: "Algebra is the study of symbols and the rules for manipulating them."
                    .to_string(),
                subtopics: vec![ContentSubsection {
                    sub_topic_title: "Linear equations".to_string(),
                    sub_content_text: "An equation of the form ax + b = 0.".to_string(),
                }],
            }],
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_sample_quiz_topics() {
        let quiz = sample_quiz();
        let topics: Vec<&str> = quiz
            .list_quiz_questions
            .iter()
            .map(|q| q.topic.as_str())
            .collect();
        assert_eq!(topics, vec!["Math", "Math", "History"]);
    }

    #[test]
    fn test_sample_outline_is_valid() {
        use validator::Validate;
        assert!(sample_outline().validate().is_ok());
        assert_eq!(sample_outline().len(), 2);
    }
}
