use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, Utc};

/// Source of "now" for quiz timing and reminder checks.
///
/// `Fixed` clocks treat their UTC instant as the local wall-clock time so
/// reminder tests stay independent of the host time zone.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    Default,
    Fixed(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn default_clock() -> Self {
        Self::Default
    }

    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    /// Current instant, used for quiz start/finish timestamps.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::Default => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Current local wall-clock time, used to compare against reminder dates.
    #[must_use]
    pub fn now_local(&self) -> NaiveDateTime {
        match self {
            Clock::Default => Local::now().naive_local(),
            Clock::Fixed(t) => t.naive_utc(),
        }
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now_local().date()
    }

    /// Advance a fixed clock. Has no effect on `Clock::Default`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }

    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!(self, Clock::Fixed(_))
    }
}

/// Deterministic timestamp for tests (2024-01-03T09:00:00Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_704_272_400;

/// Returns a deterministic `DateTime<Utc>` for tests.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_local_time_as_utc_wall_clock() {
        let clock = fixed_clock();
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        assert_eq!(clock.now_local().format("%H:%M").to_string(), "09:00");
    }

    #[test]
    fn advance_moves_fixed_clock_only() {
        let mut clock = fixed_clock();
        clock.advance(Duration::seconds(90));
        assert_eq!(clock.now(), fixed_now() + Duration::seconds(90));

        let mut real = Clock::default_clock();
        real.advance(Duration::days(1));
        assert!(!real.is_fixed());
    }
}
