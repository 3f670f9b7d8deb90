use indexmap::IndexMap;

use crate::models::domain::{AnswerSheet, QuizQuestion, UnderstandingScore};

#[derive(Debug, Default, Clone, Copy)]
struct TopicTally {
    correct: u32,
    total: u32,
}

pub struct QuizEvaluationService;

impl QuizEvaluationService {
    /// Score a submission per topic as the percentage of that topic's questions answered correctly.
    ///
    /// Unanswered questions still count toward their topic's total. Answers for
    /// positions outside the quiz are ignored.
    pub fn evaluate_understanding(
        questions: &[QuizQuestion],
        answers: &AnswerSheet,
    ) -> UnderstandingScore {
        let mut tallies: IndexMap<&str, TopicTally> = IndexMap::new();

        for (index, question) in questions.iter().enumerate() {
            let tally = tallies.entry(question.topic.as_str()).or_default();

            if answers
                .answer_for(index)
                .is_some_and(|label| question.is_correct(label))
            {
                tally.correct += 1;
            }
            tally.total += 1;
        }

        let scores = tallies
            .into_iter()
            .filter(|(_, tally)| tally.total > 0)
            .map(|(topic, tally)| {
                (
                    topic.to_string(),
                    f64::from(tally.correct) / f64::from(tally.total) * 100.0,
                )
            })
            .collect();

        UnderstandingScore { scores }
    }
}
