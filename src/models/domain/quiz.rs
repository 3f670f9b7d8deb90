use async_graphql::{InputObject, SimpleObject};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::domain::quiz_question::QuizQuestion;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, SimpleObject, InputObject, JsonSchema)]
#[graphql(input_name = "QuizInput")]
pub struct Quiz {
    pub list_quiz_questions: Vec<QuizQuestion>,
}

impl Quiz {
    pub fn len(&self) -> usize {
        self.list_quiz_questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list_quiz_questions.is_empty()
    }
}
