pub mod answer_sheet;
pub mod content;
pub mod quiz;
pub mod quiz_question;
pub mod topic;
pub mod understanding;
pub use answer_sheet::AnswerSheet;
pub use content::{ContentSection, ContentSubsection, StudyContent};
pub use quiz::Quiz;
pub use quiz_question::QuizQuestion;
pub use topic::{Topic, TopicOutline};
pub use understanding::{TopicScore, UnderstandingScore};
