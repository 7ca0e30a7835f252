mod leaderboard_vm;
mod quiz_vm;
mod reminder_vm;
mod time_fmt;

pub use leaderboard_vm::{LeaderboardRowVm, TopicStatsVm, map_leaderboard_rows, map_topic_stats};
pub use quiz_vm::{QuestionVm, QuizVm, ResultVm, ReviewRowVm, SubtopicOptionVm, map_quiz};
pub use reminder_vm::{
    CalendarMonthVm, DayCellVm, ReminderRowVm, WEEKDAY_LABELS, map_day_reminders,
    map_reminder_rows, month_grid, shift_month,
};
pub use time_fmt::{format_accuracy, format_date, format_duration_secs, format_time};
