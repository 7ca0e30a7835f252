//! Application state and its single update function.
//!
//! Every user action goes through [`AppState::update`], which mutates the
//! state synchronously and returns the side effects (persistence and
//! notifications) for the caller to run.

use std::collections::HashSet;
use std::fmt::Display;
use std::sync::Arc;

use chrono::NaiveDate;
use medico_core::Clock;
use medico_core::auth::AuthStore;
use medico_core::model::{
    Feedback, FeedbackDraft, Leaderboard, LeaderboardEntry, QuestionBank, Reminder,
    ReminderDraft, ReminderFilter, Section, Session,
};
use medico_core::quiz::QuizEngine;
use medico_core::reminders::{ReminderBook, ReminderId};

use crate::notifier::Notification;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(Section),
    Login {
        email: String,
        password: String,
    },
    Signup {
        email: String,
        password: String,
        confirm_password: String,
    },
    Logout,
    EditReminderDraft(ReminderDraft),
    AddReminder,
    DeleteReminder(usize),
    SetReminderFilter(ReminderFilter),
    SelectDate(Option<NaiveDate>),
    SelectTopic(String),
    SelectSubtopic(String),
    EditAnswer(String),
    SubmitAnswer,
    EnterReview,
    BackToTopics,
    SubmitFeedback(FeedbackDraft),
}

/// Work the reducer asks the runtime to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Rewrite the full reminder list.
    PersistReminders(Vec<Reminder>),
    /// Rewrite the full leaderboard.
    PersistLeaderboard(Vec<LeaderboardEntry>),
    Notify(Notification),
}

/// Inline messages shown next to each form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub login: Option<String>,
    pub signup: Option<String>,
    pub reminder: Option<String>,
    pub quiz: Option<String>,
    pub feedback: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppState {
    session: Session,
    auth: AuthStore,
    reminders: ReminderBook,
    reminder_draft: ReminderDraft,
    reminder_filter: ReminderFilter,
    selected_date: Option<NaiveDate>,
    notified: HashSet<ReminderId>,
    notifications: Vec<Notification>,
    quiz: QuizEngine,
    leaderboard: Leaderboard,
    feedback: Vec<Feedback>,
    errors: FormErrors,
}

impl AppState {
    /// Fresh state: logged out, demo account seeded, nothing persisted yet.
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self::restore(bank, Vec::new(), Vec::new())
    }

    /// State rebuilt from the persisted lists.
    #[must_use]
    pub fn restore(
        bank: Arc<QuestionBank>,
        reminders: Vec<Reminder>,
        leaderboard: Vec<LeaderboardEntry>,
    ) -> Self {
        Self {
            session: Session::new(),
            auth: AuthStore::with_default_user(),
            reminders: ReminderBook::from_reminders(reminders),
            reminder_draft: ReminderDraft::default(),
            reminder_filter: ReminderFilter::All,
            selected_date: None,
            notified: HashSet::new(),
            notifications: Vec::new(),
            quiz: QuizEngine::new(bank),
            leaderboard: Leaderboard::from_entries(leaderboard),
            feedback: Vec::new(),
            errors: FormErrors::default(),
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn auth(&self) -> &AuthStore {
        &self.auth
    }

    #[must_use]
    pub fn reminders(&self) -> &ReminderBook {
        &self.reminders
    }

    /// Notifications raised so far in this process, oldest first.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    #[must_use]
    pub fn reminder_draft(&self) -> &ReminderDraft {
        &self.reminder_draft
    }

    #[must_use]
    pub fn reminder_filter(&self) -> ReminderFilter {
        self.reminder_filter
    }

    #[must_use]
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizEngine {
        &self.quiz
    }

    #[must_use]
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    #[must_use]
    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    #[must_use]
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Apply one action. Returns the effects to run, in order.
    pub fn update(&mut self, action: Action, clock: &Clock) -> Vec<Effect> {
        let mut effects = Vec::new();
        match action {
            Action::Navigate(section) => {
                tracing::debug!(%section, "navigate");
                if self.session.visible() == Section::Tests && section != Section::Tests {
                    self.quiz.back_to_topics();
                }
                self.errors.login = None;
                self.errors.signup = None;
                self.session.navigate(section);
            }
            Action::Login { email, password } => match self.auth.login(&email, &password) {
                Ok(user) => {
                    tracing::info!(email = %user.email(), "logged in");
                    self.session.log_in(user.clone());
                    self.errors.login = None;
                }
                Err(err) => {
                    tracing::debug!(%email, "login rejected");
                    self.errors.login = Some(err.to_string());
                }
            },
            Action::Signup {
                email,
                password,
                confirm_password,
            } => {
                let result = self.auth.signup(&email, &password, &confirm_password);
                if record(&mut self.errors.signup, result).is_some() {
                    tracing::info!(%email, "account created");
                    self.session.navigate(Section::Login);
                }
            }
            Action::Logout => {
                tracing::info!("logged out");
                self.quiz.back_to_topics();
                self.session.log_out();
            }
            Action::EditReminderDraft(draft) => self.reminder_draft = draft,
            Action::AddReminder => {
                let result = self.reminders.add(&self.reminder_draft).map(|_| ());
                if record(&mut self.errors.reminder, result).is_some() {
                    self.reminder_draft = ReminderDraft::default();
                    self.reminders_changed(clock, &mut effects);
                }
            }
            Action::DeleteReminder(index) => {
                let result = self.reminders.delete(index);
                if record(&mut self.errors.reminder, result).is_some() {
                    self.reminders_changed(clock, &mut effects);
                }
            }
            Action::SetReminderFilter(filter) => self.reminder_filter = filter,
            Action::SelectDate(date) => {
                self.selected_date = date;
                // Picking a day pre-fills an empty draft date.
                if let Some(date) = date {
                    if self.reminder_draft.date.trim().is_empty() {
                        self.reminder_draft.date = date.format("%Y-%m-%d").to_string();
                    }
                }
            }
            Action::SelectTopic(topic) => {
                let result = self.quiz.select_topic(&topic);
                record(&mut self.errors.quiz, result);
            }
            Action::SelectSubtopic(subtopic) => {
                let result = self.quiz.select_subtopic(&subtopic, clock.now());
                record(&mut self.errors.quiz, result);
            }
            Action::EditAnswer(text) => {
                let result = self.quiz.edit_answer(text);
                record(&mut self.errors.quiz, result);
            }
            Action::SubmitAnswer => {
                let result = self.quiz.submit_draft(clock.now());
                if let Some(outcome) = record(&mut self.errors.quiz, result) {
                    if let Some(entry) = outcome.completed {
                        tracing::info!(
                            topic = %entry.topic,
                            subtopic = %entry.subtopic,
                            score = entry.score,
                            accuracy = entry.accuracy,
                            "quiz completed"
                        );
                        self.leaderboard.append(entry);
                        effects.push(Effect::PersistLeaderboard(
                            self.leaderboard.entries().to_vec(),
                        ));
                    }
                }
            }
            Action::EnterReview => {
                let result = self.quiz.enter_review();
                record(&mut self.errors.quiz, result);
            }
            Action::BackToTopics => {
                self.quiz.back_to_topics();
                self.errors.quiz = None;
            }
            Action::SubmitFeedback(draft) => {
                if let Some(feedback) = record(&mut self.errors.feedback, draft.validate()) {
                    self.feedback.push(feedback);
                }
            }
        }
        effects
    }

    /// Notifications for reminders inside their lead window that have not
    /// fired yet in this process.
    pub fn check_reminders(&mut self, clock: &Clock) -> Vec<Effect> {
        let now = clock.now_local();
        let mut effects = Vec::new();
        for (id, reminder) in self.reminders.due_for_notification(now) {
            if !self.notified.insert(id) {
                continue;
            }
            tracing::debug!(id, text = %reminder.text, "reminder due");
            let notification = Notification {
                title: reminder.kind.to_string(),
                body: reminder.notification_body(),
                fired_at: clock.now(),
            };
            self.notifications.push(notification.clone());
            effects.push(Effect::Notify(notification));
        }
        effects
    }

    fn reminders_changed(&mut self, clock: &Clock, effects: &mut Vec<Effect>) {
        effects.push(Effect::PersistReminders(self.reminders.reminders().to_vec()));
        effects.extend(self.check_reminders(clock));
    }
}

/// Store the error message in `slot` (or clear it) and pass the value on.
fn record<T, E: Display>(slot: &mut Option<String>, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => {
            *slot = None;
            Some(value)
        }
        Err(err) => {
            *slot = Some(err.to_string());
            None
        }
    }
}
