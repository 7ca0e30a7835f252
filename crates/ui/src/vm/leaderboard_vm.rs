use medico_core::model::{Leaderboard, TopicStats};

use crate::vm::time_fmt::{format_accuracy, format_duration_secs};

/// One leaderboard row, in completion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRowVm {
    pub topic: String,
    pub subtopic: String,
    pub score: u32,
    pub accuracy_label: String,
    pub time_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicStatsVm {
    pub topic: String,
    pub attempts: u32,
    pub best_score: u32,
    pub average_accuracy_label: String,
    pub total_time_label: String,
}

impl From<&TopicStats> for TopicStatsVm {
    fn from(stats: &TopicStats) -> Self {
        Self {
            topic: stats.topic.clone(),
            attempts: stats.attempts,
            best_score: stats.best_score,
            average_accuracy_label: format_accuracy(stats.average_accuracy),
            total_time_label: format_duration_secs(stats.total_time),
        }
    }
}

#[must_use]
pub fn map_leaderboard_rows(leaderboard: &Leaderboard) -> Vec<LeaderboardRowVm> {
    leaderboard
        .entries()
        .iter()
        .map(|entry| LeaderboardRowVm {
            topic: entry.topic.clone(),
            subtopic: entry.subtopic.clone(),
            score: entry.score,
            accuracy_label: format_accuracy(entry.accuracy),
            time_label: format_duration_secs(entry.time_spent),
        })
        .collect()
}

#[must_use]
pub fn map_topic_stats(leaderboard: &Leaderboard) -> Vec<TopicStatsVm> {
    leaderboard
        .topic_stats()
        .iter()
        .map(TopicStatsVm::from)
        .collect()
}
