use std::sync::Arc;

use futures::{Stream, StreamExt};
use medico_core::model::QuestionBank;
use storage::repository::Storage;

use crate::Clock;
use crate::app_state::{Action, AppState, Effect};
use crate::error::AppServicesError;
use crate::notifier::{NotificationPermission, Notifier};

/// Composition root shared by the UI: clock, storage, notifier and the
/// question bank, plus the runtime that executes reducer effects.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    storage: Storage,
    notifier: Arc<dyn Notifier>,
    bank: Arc<QuestionBank>,
}

impl AppServices {
    #[must_use]
    pub fn new(clock: Clock, storage: Storage, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            clock,
            storage,
            notifier,
            bank: Arc::new(QuestionBank::builtin()),
        }
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::new(clock, storage, notifier))
    }

    #[must_use]
    pub fn with_bank(mut self, bank: Arc<QuestionBank>) -> Self {
        self.bank = bank;
        self
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    #[must_use]
    pub fn notifier(&self) -> Arc<dyn Notifier> {
        Arc::clone(&self.notifier)
    }

    #[must_use]
    pub fn bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    /// Load persisted lists once, ask for notification permission if it
    /// was never asked, and raise notifications for reminders already due.
    ///
    /// Unreadable storage degrades to empty lists.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if a startup effect fails.
    pub async fn bootstrap(&self) -> Result<AppState, AppServicesError> {
        if self.notifier.permission() == NotificationPermission::Default {
            let answer = self.notifier.request_permission().await;
            tracing::info!(permission = answer.as_str(), "notification permission");
        }

        let reminders = self
            .storage
            .reminders
            .load_reminders()
            .await
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "could not read reminders");
                Vec::new()
            });
        let leaderboard = self
            .storage
            .leaderboard
            .load_entries()
            .await
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "could not read leaderboard");
                Vec::new()
            });
        tracing::info!(
            reminders = reminders.len(),
            leaderboard = leaderboard.len(),
            "state restored"
        );

        let mut state = AppState::restore(self.bank(), reminders, leaderboard);
        let effects = state.check_reminders(&self.clock);
        self.run_effects(effects).await?;
        Ok(state)
    }

    /// Apply `action` to `state` using this service's clock.
    pub fn dispatch(&self, state: &mut AppState, action: Action) -> Vec<Effect> {
        state.update(action, &self.clock)
    }

    /// Execute effects in order. Notification failures are logged and
    /// skipped; persistence failures stop the run.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Storage` if a list cannot be written.
    pub async fn run_effects(&self, effects: Vec<Effect>) -> Result<(), AppServicesError> {
        for effect in effects {
            match effect {
                Effect::PersistReminders(reminders) => {
                    self.storage.reminders.save_reminders(&reminders).await?;
                }
                Effect::PersistLeaderboard(entries) => {
                    self.storage.leaderboard.save_entries(&entries).await?;
                }
                Effect::Notify(notification) => {
                    if let Err(err) = self.notifier.notify(&notification) {
                        tracing::warn!(error = %err, title = %notification.title, "notification skipped");
                    }
                }
            }
        }
        Ok(())
    }

    /// Run effect batches one at a time in the order they arrive, until the
    /// stream ends. A failed batch is logged and the next one still runs, so
    /// the latest full-list write is the one left in storage.
    pub async fn run_effect_stream<S>(&self, mut batches: S)
    where
        S: Stream<Item = Vec<Effect>> + Unpin,
    {
        while let Some(batch) = batches.next().await {
            if let Err(err) = self.run_effects(batch).await {
                tracing::warn!(error = %err, "effects failed");
            }
        }
    }
}
