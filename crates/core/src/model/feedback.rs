use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FeedbackError {
    #[error("feedback message cannot be empty")]
    EmptyMessage,
}

/// Submitted feedback. Kept in memory only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    name: Option<String>,
    email: Option<String>,
    message: String,
}

impl Feedback {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FeedbackDraft {
    /// Validate and normalize the form.
    ///
    /// # Errors
    ///
    /// Returns `FeedbackError::EmptyMessage` if the message is blank.
    pub fn validate(self) -> Result<Feedback, FeedbackError> {
        let message = self.message.trim().to_string();
        if message.is_empty() {
            return Err(FeedbackError::EmptyMessage);
        }
        Ok(Feedback {
            name: normalize_optional(self.name),
            email: normalize_optional(self.email),
            message,
        })
    }
}

fn normalize_optional(value: String) -> Option<String> {
    Some(value.trim().to_string()).filter(|val| !val.is_empty())
}
