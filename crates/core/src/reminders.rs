use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::model::{Reminder, ReminderDraft, ReminderError, ReminderFilter};

/// Per-process identity of a reminder entry, stable across deletes of other
/// entries. Never persisted.
pub type ReminderId = u64;

/// Insertion-ordered reminder list with the calendar's queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderBook {
    reminders: Vec<Reminder>,
    // parallel to `reminders`
    ids: Vec<ReminderId>,
    next_id: ReminderId,
}

impl ReminderBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_reminders(reminders: Vec<Reminder>) -> Self {
        let mut book = Self::new();
        for reminder in reminders {
            book.push(reminder);
        }
        book
    }

    #[must_use]
    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }

    /// Validate the draft and append the resulting reminder.
    ///
    /// # Errors
    ///
    /// Returns `ReminderError` when a required field is blank or a value
    /// does not parse. The list is unchanged on error.
    pub fn add(&mut self, draft: &ReminderDraft) -> Result<&Reminder, ReminderError> {
        let reminder = draft.validate()?;
        self.push(reminder);
        let last = self.reminders.len() - 1;
        Ok(&self.reminders[last])
    }

    /// Append `reminder` under a fresh id and return that id.
    pub fn push(&mut self, reminder: Reminder) -> ReminderId {
        let id = self.next_id;
        self.next_id += 1;
        self.reminders.push(reminder);
        self.ids.push(id);
        id
    }

    #[must_use]
    pub fn id_at(&self, index: usize) -> Option<ReminderId> {
        self.ids.get(index).copied()
    }

    /// Remove the reminder at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ReminderError::IndexOutOfRange` if no reminder sits there.
    pub fn delete(&mut self, index: usize) -> Result<Reminder, ReminderError> {
        if index >= self.reminders.len() {
            return Err(ReminderError::IndexOutOfRange {
                index,
                len: self.reminders.len(),
            });
        }
        self.ids.remove(index);
        Ok(self.reminders.remove(index))
    }

    #[must_use]
    pub fn for_date(&self, date: NaiveDate) -> Vec<&Reminder> {
        self.reminders.iter().filter(|r| r.date == date).collect()
    }

    #[must_use]
    pub fn has_reminders_on(&self, date: NaiveDate) -> bool {
        self.reminders.iter().any(|r| r.date == date)
    }

    /// Reminders accepted by `filter`, paired with their list index.
    #[must_use]
    pub fn filter(&self, filter: ReminderFilter) -> Vec<(usize, &Reminder)> {
        self.reminders
            .iter()
            .enumerate()
            .filter(|(_, r)| filter.accepts(r))
            .collect()
    }

    /// Reminders in the future whose lead window already covers `now`,
    /// paired with their entry id.
    #[must_use]
    pub fn due_for_notification(&self, now: NaiveDateTime) -> Vec<(ReminderId, &Reminder)> {
        self.ids
            .iter()
            .copied()
            .zip(&self.reminders)
            .filter(|(_, r)| is_due(r, now))
            .collect()
    }
}

/// True when `0 < instant - now <= lead`.
#[must_use]
pub fn is_due(reminder: &Reminder, now: NaiveDateTime) -> bool {
    let remaining = reminder.instant() - now;
    remaining > Duration::zero() && remaining <= reminder.notify_before.lead()
}
