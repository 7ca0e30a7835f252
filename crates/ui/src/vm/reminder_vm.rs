use chrono::{Datelike, Days, NaiveDate};
use medico_core::model::{Reminder, ReminderFilter};
use medico_core::reminders::ReminderBook;

use crate::vm::time_fmt::{format_date, format_time};

/// A reminder row; `index` is its position in the full list, used for deletion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReminderRowVm {
    pub index: usize,
    pub date_label: String,
    pub time_label: String,
    pub kind_label: &'static str,
    pub text: String,
    pub details: Option<String>,
    pub notify_label: String,
}

impl ReminderRowVm {
    fn new(index: usize, reminder: &Reminder) -> Self {
        Self {
            index,
            date_label: format_date(reminder.date),
            time_label: format_time(reminder.time),
            kind_label: reminder.kind.as_str(),
            text: reminder.text.clone(),
            details: reminder.details.clone(),
            notify_label: format!("Notify {} before", reminder.notify_before.as_str()),
        }
    }
}

#[must_use]
pub fn map_reminder_rows(book: &ReminderBook, filter: ReminderFilter) -> Vec<ReminderRowVm> {
    book.filter(filter)
        .into_iter()
        .map(|(index, reminder)| ReminderRowVm::new(index, reminder))
        .collect()
}

#[must_use]
pub fn map_day_reminders(book: &ReminderBook, date: NaiveDate) -> Vec<ReminderRowVm> {
    book.reminders()
        .iter()
        .enumerate()
        .filter(|(_, reminder)| reminder.date == date)
        .map(|(index, reminder)| ReminderRowVm::new(index, reminder))
        .collect()
}

//
// ─── MONTH GRID ────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayCellVm {
    pub date: NaiveDate,
    pub day: u32,
    pub in_month: bool,
    pub has_reminders: bool,
    pub is_selected: bool,
    pub is_today: bool,
}

impl DayCellVm {
    #[must_use]
    pub fn class(&self) -> String {
        let mut class = String::from("day");
        if !self.in_month {
            class.push_str(" day-outside");
        }
        if self.has_reminders {
            class.push_str(" day-marked");
        }
        if self.is_selected {
            class.push_str(" day-selected");
        }
        if self.is_today {
            class.push_str(" day-today");
        }
        class
    }
}

/// Monday-first weeks covering one month, padded with neighbouring days.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarMonthVm {
    pub year: i32,
    pub month: u32,
    pub title: String,
    pub weeks: Vec<Vec<DayCellVm>>,
}

pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Build the grid for `year`/`month`. `None` when the month is out of range.
#[must_use]
pub fn month_grid(
    year: i32,
    month: u32,
    book: &ReminderBook,
    selected: Option<NaiveDate>,
    today: NaiveDate,
) -> Option<CalendarMonthVm> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_month) = shift_month(year, month, 1);
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
    let offset = u64::from(first.weekday().num_days_from_monday());
    let mut cursor = first.checked_sub_days(Days::new(offset))?;

    let mut weeks = Vec::new();
    while cursor <= last {
        let mut week = Vec::with_capacity(7);
        for _ in 0..7 {
            week.push(DayCellVm {
                date: cursor,
                day: cursor.day(),
                in_month: cursor.month() == month,
                has_reminders: book.has_reminders_on(cursor),
                is_selected: selected == Some(cursor),
                is_today: cursor == today,
            });
            cursor = cursor.succ_opt()?;
        }
        weeks.push(week);
    }

    Some(CalendarMonthVm {
        year,
        month,
        title: first.format("%B %Y").to_string(),
        weeks,
    })
}

/// Move `delta` months from `year`/`month` (1-based).
#[must_use]
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let month0 = i32::try_from(month.clamp(1, 12)).unwrap_or(1) - 1;
    let index = year * 12 + month0 + delta;
    let month = u32::try_from(index.rem_euclid(12)).unwrap_or(0) + 1;
    (index.div_euclid(12), month)
}

#[cfg(test)]
mod tests {
    use medico_core::model::ReminderKind;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn shift_month_wraps_years() {
        assert_eq!(shift_month(2024, 1, -1), (2023, 12));
        assert_eq!(shift_month(2024, 12, 1), (2025, 1));
        assert_eq!(shift_month(2024, 3, 0), (2024, 3));
    }

    #[test]
    fn weeks_start_on_monday() {
        let mut book = ReminderBook::new();
        book.push(Reminder::new(date(2024, 1, 4), "Test Deadline: Anatomy", ReminderKind::Test));

        // 2024-01-01 is a Monday
        let grid = month_grid(2024, 1, &book, Some(date(2024, 1, 4)), date(2024, 1, 3)).unwrap();
        assert_eq!(WEEKDAY_LABELS[0], "Mon");
        assert_eq!(grid.title, "January 2024");
        assert_eq!(grid.weeks.len(), 5);
        assert_eq!(grid.weeks[0][0].date, date(2024, 1, 1));
        assert!(grid.weeks[0][0].in_month);
        assert_eq!(grid.weeks[4][6].date, date(2024, 2, 4));
        assert!(!grid.weeks[4][6].in_month);

        let thursday = &grid.weeks[0][3];
        assert_eq!(thursday.day, 4);
        assert!(thursday.has_reminders);
        assert!(thursday.is_selected);
        assert_eq!(thursday.class(), "day day-marked day-selected");
        assert!(grid.weeks[0][2].is_today);

        // February opens on a Thursday: pad back to Monday 29 January
        let grid = month_grid(2024, 2, &book, None, date(2024, 1, 3)).unwrap();
        assert_eq!(grid.weeks[0][0].date, date(2024, 1, 29));
        assert_eq!(grid.weeks[0][3].date, date(2024, 2, 1));
        assert_eq!(grid.weeks.len(), 5);
    }

    #[test]
    fn rows_keep_full_list_indices_under_filter() {
        let mut book = ReminderBook::new();
        book.push(Reminder::new(date(2024, 1, 4), "Read chapter 3", ReminderKind::Lesson));
        book.push(Reminder::new(date(2024, 1, 5), "Anatomy quiz", ReminderKind::Test));

        let rows = map_reminder_rows(&book, ReminderFilter::Only(ReminderKind::Test));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[0].kind_label, "Test");
        assert_eq!(rows[0].time_label, "All day");
        assert_eq!(rows[0].notify_label, "Notify 1 hour before");

        let day = map_day_reminders(&book, date(2024, 1, 4));
        assert_eq!(day.len(), 1);
        assert_eq!(day[0].index, 0);
    }
}
