use thiserror::Error;

use crate::auth::AuthError;
use crate::model::{FeedbackError, ReminderError, SectionParseError};
use crate::quiz::QuizError;

/// Any domain failure, for callers that surface them uniformly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Reminder(#[from] ReminderError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Feedback(#[from] FeedbackError),
    #[error(transparent)]
    Section(#[from] SectionParseError),
}
