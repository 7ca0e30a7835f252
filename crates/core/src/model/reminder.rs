use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReminderError {
    #[error("date is required")]
    MissingDate,

    #[error("reminder text is required")]
    MissingText,

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid time: {0}")]
    InvalidTime(String),

    #[error("invalid reminder type: {0}")]
    InvalidKind(String),

    #[error("invalid notification lead time: {0}")]
    InvalidNotifyBefore(String),

    #[error("no reminder at position {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

//
// ─── KIND / LEAD TIME ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReminderKind {
    #[default]
    Lesson,
    Test,
}

impl ReminderKind {
    pub const ALL: [ReminderKind; 2] = [ReminderKind::Lesson, ReminderKind::Test];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ReminderKind::Lesson => "Lesson",
            ReminderKind::Test => "Test",
        }
    }
}

impl fmt::Display for ReminderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReminderKind {
    type Err = ReminderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Lesson" => Ok(ReminderKind::Lesson),
            "Test" => Ok(ReminderKind::Test),
            other => Err(ReminderError::InvalidKind(other.to_string())),
        }
    }
}

/// How long before the reminder a notification may fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NotifyBefore {
    #[default]
    #[serde(rename = "1 hour")]
    OneHour,
    #[serde(rename = "1 day")]
    OneDay,
}

impl NotifyBefore {
    pub const ALL: [NotifyBefore; 2] = [NotifyBefore::OneHour, NotifyBefore::OneDay];

    #[must_use]
    pub fn lead(self) -> Duration {
        match self {
            NotifyBefore::OneHour => Duration::seconds(3_600),
            NotifyBefore::OneDay => Duration::seconds(86_400),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NotifyBefore::OneHour => "1 hour",
            NotifyBefore::OneDay => "1 day",
        }
    }
}

impl FromStr for NotifyBefore {
    type Err = ReminderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1 hour" => Ok(NotifyBefore::OneHour),
            "1 day" => Ok(NotifyBefore::OneDay),
            other => Err(ReminderError::InvalidNotifyBefore(other.to_string())),
        }
    }
}

//
// ─── REMINDER ──────────────────────────────────────────────────────────────────
//

/// A calendar entry created by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub date: NaiveDate,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: ReminderKind,
    #[serde(default, with = "hm_time")]
    pub time: Option<NaiveTime>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub notify_before: NotifyBefore,
}

impl Reminder {
    #[must_use]
    pub fn new(date: NaiveDate, text: impl Into<String>, kind: ReminderKind) -> Self {
        Self {
            date,
            text: text.into(),
            kind,
            time: None,
            details: None,
            notify_before: NotifyBefore::default(),
        }
    }

    #[must_use]
    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    #[must_use]
    pub fn with_notify_before(mut self, notify_before: NotifyBefore) -> Self {
        self.notify_before = notify_before;
        self
    }

    /// Local wall-clock instant of the reminder; midnight when no time is set.
    #[must_use]
    pub fn instant(&self) -> NaiveDateTime {
        self.date.and_time(self.time.unwrap_or(NaiveTime::MIN))
    }

    /// Notification body: the text, followed by details when present.
    #[must_use]
    pub fn notification_body(&self) -> String {
        match self.details.as_deref() {
            Some(details) => format!("{} - {details}", self.text),
            None => self.text.clone(),
        }
    }
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Raw form input for a new reminder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderDraft {
    pub date: String,
    pub text: String,
    pub kind: ReminderKind,
    pub time: String,
    pub details: String,
    pub notify_before: NotifyBefore,
}

impl ReminderDraft {
    /// Validate the form fields into a reminder.
    ///
    /// # Errors
    ///
    /// Returns `ReminderError::MissingDate`/`MissingText` for blank required
    /// fields, or `InvalidDate`/`InvalidTime` when a value does not parse.
    pub fn validate(&self) -> Result<Reminder, ReminderError> {
        let date = self.date.trim();
        if date.is_empty() {
            return Err(ReminderError::MissingDate);
        }
        let text = self.text.trim();
        if text.is_empty() {
            return Err(ReminderError::MissingText);
        }
        let date = parse_date(date)?;
        let time = match self.time.trim() {
            "" => None,
            raw => Some(parse_time(raw)?),
        };
        let details = Some(self.details.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        Ok(Reminder {
            date,
            text: text.to_string(),
            kind: self.kind,
            time,
            details,
            notify_before: self.notify_before,
        })
    }
}

/// Parse an ISO calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `ReminderError::InvalidDate` when the value does not parse.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ReminderError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ReminderError::InvalidDate(raw.to_string()))
}

/// Parse a clock time as `HH:MM`, tolerating a seconds suffix.
///
/// # Errors
///
/// Returns `ReminderError::InvalidTime` when the value does not parse.
pub fn parse_time(raw: &str) -> Result<NaiveTime, ReminderError> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| ReminderError::InvalidTime(raw.to_string()))
}

/// Which reminders the list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReminderFilter {
    #[default]
    All,
    Only(ReminderKind),
}

impl ReminderFilter {
    #[must_use]
    pub fn accepts(self, reminder: &Reminder) -> bool {
        match self {
            ReminderFilter::All => true,
            ReminderFilter::Only(kind) => reminder.kind == kind,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ReminderFilter::All => "All",
            ReminderFilter::Only(kind) => kind.as_str(),
        }
    }
}

impl FromStr for ReminderFilter {
    type Err = ReminderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "All" => Ok(ReminderFilter::All),
            other => other.parse().map(ReminderFilter::Only),
        }
    }
}

mod hm_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(time) => s.serialize_some(&time.format("%H:%M").to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => super::parse_time(value)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(date: &str, text: &str) -> ReminderDraft {
        ReminderDraft {
            date: date.into(),
            text: text.into(),
            ..ReminderDraft::default()
        }
    }

    #[test]
    fn draft_requires_date_and_text() {
        assert_eq!(draft("", "x").validate(), Err(ReminderError::MissingDate));
        assert_eq!(
            draft("2024-01-04", "  ").validate(),
            Err(ReminderError::MissingText)
        );
        assert!(matches!(
            draft("04/01/2024", "x").validate(),
            Err(ReminderError::InvalidDate(_))
        ));
    }

    #[test]
    fn draft_normalizes_optional_fields() {
        let mut form = draft("2024-01-04", " Test Deadline: Anatomy ");
        form.kind = ReminderKind::Test;
        form.time = "09:30".into();
        form.details = "   ".into();
        let reminder = form.validate().unwrap();

        assert_eq!(reminder.text, "Test Deadline: Anatomy");
        assert_eq!(reminder.time, NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(reminder.details, None);
        assert_eq!(reminder.notify_before, NotifyBefore::OneHour);
    }

    #[test]
    fn serialized_shape_uses_storage_keys() {
        let reminder = Reminder::new(
            NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
            "Anatomy lecture",
            ReminderKind::Lesson,
        )
        .with_time(NaiveTime::from_hms_opt(14, 0, 0).unwrap())
        .with_notify_before(NotifyBefore::OneDay);

        let json = serde_json::to_value(&reminder).unwrap();
        assert_eq!(json["date"], "2024-01-04");
        assert_eq!(json["type"], "Lesson");
        assert_eq!(json["time"], "14:00");
        assert_eq!(json["notifyBefore"], "1 day");

        let back: Reminder = serde_json::from_value(json).unwrap();
        assert_eq!(back, reminder);
    }

    #[test]
    fn missing_optional_keys_use_defaults() {
        let back: Reminder =
            serde_json::from_str(r#"{"date":"2024-01-04","text":"x","type":"Test","time":""}"#)
                .unwrap();
        assert_eq!(back.time, None);
        assert_eq!(back.details, None);
        assert_eq!(back.notify_before, NotifyBefore::OneHour);
        assert_eq!(back.instant().to_string(), "2024-01-04 00:00:00");
    }

    #[test]
    fn filter_parses_and_matches_kind() {
        let lesson = Reminder::new(NaiveDate::MIN, "a", ReminderKind::Lesson);
        let filter: ReminderFilter = "Test".parse().unwrap();
        assert!(!filter.accepts(&lesson));
        assert!(ReminderFilter::All.accepts(&lesson));
        assert!("Exam".parse::<ReminderFilter>().is_err());
    }
}
