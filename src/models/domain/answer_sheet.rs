use std::collections::BTreeMap;

/// A user's chosen labels keyed by zero-based question position.
///
/// Recording the same position twice keeps the later label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    answers: BTreeMap<usize, String>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, question_index: usize, label: impl Into<String>) {
        self.answers.insert(question_index, label.into());
    }

    pub fn answer_for(&self, question_index: usize) -> Option<&str> {
        self.answers.get(&question_index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(usize, S)> for AnswerSheet {
    fn from_iter<I: IntoIterator<Item = (usize, S)>>(iter: I) -> Self {
        let mut sheet = AnswerSheet::new();
        for (index, label) in iter {
            sheet.record(index, label);
        }
        sheet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_answer_for_same_position_wins() {
        let sheet: AnswerSheet = [(0, "a"), (1, "c"), (0, "b")].into_iter().collect();

        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.answer_for(0), Some("b"));
        assert_eq!(sheet.answer_for(1), Some("c"));
        assert_eq!(sheet.answer_for(2), None);
    }
}
