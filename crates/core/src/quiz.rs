//! Question-bank quiz state machine.
//!
//! `TopicSelect → SubtopicSelect → InProgress → Result → (Review | TopicSelect)`.
//! `back_to_topics` is accepted from every phase and drops any attempt.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{LeaderboardEntry, Question, QuestionBank, Topic};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("unknown topic: {0}")]
    UnknownTopic(String),

    #[error("unknown subtopic {subtopic} in {topic}")]
    UnknownSubtopic { topic: String, subtopic: String },

    #[error("{topic} / {subtopic} has no questions")]
    EmptySubtopic { topic: String, subtopic: String },

    #[error("no current question")]
    NoCurrentQuestion,

    #[error("cannot {action} while in {phase}")]
    InvalidTransition {
        action: &'static str,
        phase: QuizPhase,
    },
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    TopicSelect,
    SubtopicSelect,
    InProgress,
    Result,
    Review,
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QuizPhase::TopicSelect => "topic selection",
            QuizPhase::SubtopicSelect => "subtopic selection",
            QuizPhase::InProgress => "a running quiz",
            QuizPhase::Result => "the result screen",
            QuizPhase::Review => "review",
        };
        f.write_str(label)
    }
}

/// One submitted answer, kept for the review screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsweredQuestion {
    pub question: String,
    pub correct_answer: String,
    pub given: String,
    pub correct: bool,
}

/// A subtopic quiz in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAttempt {
    topic: String,
    subtopic: String,
    current_index: usize,
    total: usize,
    score: u32,
    draft: String,
    started_at: DateTime<Utc>,
    answers: Vec<AnsweredQuestion>,
}

impl QuizAttempt {
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn subtopic(&self) -> &str {
        &self.subtopic
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn answers(&self) -> &[AnsweredQuestion] {
        &self.answers
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.total
    }
}

/// A finished attempt: the leaderboard row plus every recorded answer.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizResult {
    pub entry: LeaderboardEntry,
    pub total: usize,
    pub answers: Vec<AnsweredQuestion>,
}

#[derive(Debug, Clone, PartialEq)]
enum QuizState {
    TopicSelect,
    SubtopicSelect { topic: String },
    InProgress(QuizAttempt),
    Result(QuizResult),
    Review(QuizResult),
}

/// The structured "where are we" answer for the running attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentQuestion<'a> {
    pub topic: &'a str,
    pub subtopic: &'a str,
    pub index: usize,
    pub total: usize,
    pub question: &'a Question,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub correct: bool,
    /// Set when the submitted answer finished the attempt.
    pub completed: Option<LeaderboardEntry>,
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct QuizEngine {
    bank: Arc<QuestionBank>,
    state: QuizState,
}

impl QuizEngine {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            state: QuizState::TopicSelect,
        }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        match self.state {
            QuizState::TopicSelect => QuizPhase::TopicSelect,
            QuizState::SubtopicSelect { .. } => QuizPhase::SubtopicSelect,
            QuizState::InProgress(_) => QuizPhase::InProgress,
            QuizState::Result(_) => QuizPhase::Result,
            QuizState::Review(_) => QuizPhase::Review,
        }
    }

    /// The topic being browsed in `SubtopicSelect`.
    #[must_use]
    pub fn selected_topic(&self) -> Option<&Topic> {
        match &self.state {
            QuizState::SubtopicSelect { topic } => self.bank.topic(topic),
            _ => None,
        }
    }

    #[must_use]
    pub fn attempt(&self) -> Option<&QuizAttempt> {
        match &self.state {
            QuizState::InProgress(attempt) => Some(attempt),
            _ => None,
        }
    }

    /// The finished attempt, on both the result and review screens.
    #[must_use]
    pub fn result(&self) -> Option<&QuizResult> {
        match &self.state {
            QuizState::Result(result) | QuizState::Review(result) => Some(result),
            _ => None,
        }
    }

    /// # Errors
    ///
    /// Returns `QuizError::NoCurrentQuestion` unless an attempt is running
    /// and its cursor points at an existing question.
    pub fn current_question(&self) -> Result<CurrentQuestion<'_>, QuizError> {
        let attempt = self.attempt().ok_or(QuizError::NoCurrentQuestion)?;
        let question = self
            .bank
            .question(&attempt.topic, &attempt.subtopic, attempt.current_index)
            .ok_or(QuizError::NoCurrentQuestion)?;
        Ok(CurrentQuestion {
            topic: &attempt.topic,
            subtopic: &attempt.subtopic,
            index: attempt.current_index,
            total: attempt.total,
            question,
        })
    }

    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` outside `TopicSelect` and
    /// `QuizError::UnknownTopic` if the bank has no such topic.
    pub fn select_topic(&mut self, topic: &str) -> Result<(), QuizError> {
        self.expect_phase("select a topic", QuizPhase::TopicSelect)?;
        if self.bank.topic(topic).is_none() {
            return Err(QuizError::UnknownTopic(topic.to_string()));
        }
        self.state = QuizState::SubtopicSelect {
            topic: topic.to_string(),
        };
        Ok(())
    }

    /// Start an attempt on `subtopic` of the selected topic.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` outside `SubtopicSelect`,
    /// `UnknownSubtopic` for a name not in the topic, and `EmptySubtopic`
    /// when the subtopic has no questions.
    pub fn select_subtopic(&mut self, subtopic: &str, now: DateTime<Utc>) -> Result<(), QuizError> {
        let phase = self.phase();
        let QuizState::SubtopicSelect { topic } = &self.state else {
            return Err(QuizError::InvalidTransition {
                action: "select a subtopic",
                phase,
            });
        };
        let topic = topic.clone();
        let sub = self
            .bank
            .subtopic(&topic, subtopic)
            .ok_or_else(|| QuizError::UnknownSubtopic {
                topic: topic.clone(),
                subtopic: subtopic.to_string(),
            })?;
        if sub.is_empty() {
            return Err(QuizError::EmptySubtopic {
                topic,
                subtopic: subtopic.to_string(),
            });
        }
        let total = sub.len();

        self.state = QuizState::InProgress(QuizAttempt {
            topic,
            subtopic: subtopic.to_string(),
            current_index: 0,
            total,
            score: 0,
            draft: String::new(),
            started_at: now,
            answers: Vec::with_capacity(total),
        });
        Ok(())
    }

    /// Replace the answer draft of the running attempt.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` if no attempt is running.
    pub fn edit_answer(&mut self, text: impl Into<String>) -> Result<(), QuizError> {
        let phase = self.phase();
        match &mut self.state {
            QuizState::InProgress(attempt) => {
                attempt.draft = text.into();
                Ok(())
            }
            _ => Err(QuizError::InvalidTransition {
                action: "edit an answer",
                phase,
            }),
        }
    }

    /// Submit whatever is in the draft.
    ///
    /// # Errors
    ///
    /// See [`QuizEngine::submit_answer`].
    pub fn submit_draft(&mut self, now: DateTime<Utc>) -> Result<SubmitOutcome, QuizError> {
        let draft = self.attempt().map(|a| a.draft.clone()).unwrap_or_default();
        self.submit_answer(&draft, now)
    }

    /// Grade `text` against the current question and advance.
    ///
    /// On the last question the attempt ends: elapsed time and accuracy are
    /// computed and the leaderboard row is returned in `completed`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` if no attempt is running, or
    /// `NoCurrentQuestion` if the cursor no longer resolves.
    pub fn submit_answer(
        &mut self,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<SubmitOutcome, QuizError> {
        let phase = self.phase();
        let bank = Arc::clone(&self.bank);
        let QuizState::InProgress(attempt) = &mut self.state else {
            return Err(QuizError::InvalidTransition {
                action: "submit an answer",
                phase,
            });
        };
        let question = bank
            .question(&attempt.topic, &attempt.subtopic, attempt.current_index)
            .ok_or(QuizError::NoCurrentQuestion)?;

        let correct = question.accepts(text);
        if correct {
            attempt.score = attempt.score.saturating_add(1);
        }
        attempt.answers.push(AnsweredQuestion {
            question: question.question.clone(),
            correct_answer: question.answer.clone(),
            given: text.trim().to_string(),
            correct,
        });
        attempt.draft.clear();

        if !attempt.is_last_question() {
            attempt.current_index += 1;
            return Ok(SubmitOutcome {
                correct,
                completed: None,
            });
        }

        let elapsed = u64::try_from((now - attempt.started_at).num_seconds()).unwrap_or(0);
        let entry = LeaderboardEntry::new(
            attempt.topic.clone(),
            attempt.subtopic.clone(),
            attempt.score,
            attempt.total,
            elapsed,
        );
        let result = QuizResult {
            entry: entry.clone(),
            total: attempt.total,
            answers: std::mem::take(&mut attempt.answers),
        };
        self.state = QuizState::Result(result);

        Ok(SubmitOutcome {
            correct,
            completed: Some(entry),
        })
    }

    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` outside the result screen.
    pub fn enter_review(&mut self) -> Result<(), QuizError> {
        let phase = self.phase();
        let state = std::mem::replace(&mut self.state, QuizState::TopicSelect);
        match state {
            QuizState::Result(result) => {
                self.state = QuizState::Review(result);
                Ok(())
            }
            other => {
                self.state = other;
                Err(QuizError::InvalidTransition {
                    action: "enter review",
                    phase,
                })
            }
        }
    }

    pub fn back_to_topics(&mut self) {
        self.state = QuizState::TopicSelect;
    }

    fn expect_phase(&self, action: &'static str, expected: QuizPhase) -> Result<(), QuizError> {
        let phase = self.phase();
        if phase == expected {
            Ok(())
        } else {
            Err(QuizError::InvalidTransition { action, phase })
        }
    }
}
