mod credential;
mod feedback;
mod leaderboard;
pub mod question_bank;
pub mod reminder;
mod section;
mod session;

pub use credential::Credential;
pub use feedback::{Feedback, FeedbackDraft, FeedbackError};
pub use leaderboard::{Leaderboard, LeaderboardEntry, TopicStats, accuracy, round2};
pub use question_bank::{Question, QuestionBank, Subtopic, Topic};
pub use reminder::{
    NotifyBefore, Reminder, ReminderDraft, ReminderError, ReminderFilter, ReminderKind,
};
pub use section::{Section, SectionParseError};
pub use session::Session;
