use serde::{Deserialize, Serialize};

/// Outcome of one completed quiz attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub topic: String,
    pub subtopic: String,
    pub score: u32,
    /// Percentage rounded to two decimals.
    pub accuracy: f64,
    /// Whole seconds between starting and finishing the attempt.
    pub time_spent: u64,
}

impl LeaderboardEntry {
    #[must_use]
    pub fn new(
        topic: impl Into<String>,
        subtopic: impl Into<String>,
        score: u32,
        total: usize,
        time_spent: u64,
    ) -> Self {
        Self {
            topic: topic.into(),
            subtopic: subtopic.into(),
            score,
            accuracy: accuracy(score, total),
            time_spent,
        }
    }
}

/// `score / total * 100`, rounded to two decimals. Zero when `total` is zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn accuracy(score: u32, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(f64::from(score) / total as f64 * 100.0)
}

#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Append-only log of completed attempts, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

/// Per-topic aggregate shown on the analysis panel.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicStats {
    pub topic: String,
    pub attempts: u32,
    pub best_score: u32,
    pub average_accuracy: f64,
    pub total_time: u64,
}

impl Leaderboard {
    #[must_use]
    pub fn from_entries(entries: Vec<LeaderboardEntry>) -> Self {
        Self { entries }
    }

    pub fn append(&mut self, entry: LeaderboardEntry) {
        self.entries.push(entry);
    }

    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Aggregate entries per topic, in order of first appearance.
    #[must_use]
    pub fn topic_stats(&self) -> Vec<TopicStats> {
        let mut stats: Vec<(TopicStats, f64)> = Vec::new();
        for entry in &self.entries {
            let slot = match stats.iter().position(|(s, _)| s.topic == entry.topic) {
                Some(pos) => &mut stats[pos],
                None => {
                    stats.push((
                        TopicStats {
                            topic: entry.topic.clone(),
                            attempts: 0,
                            best_score: 0,
                            average_accuracy: 0.0,
                            total_time: 0,
                        },
                        0.0,
                    ));
                    let last = stats.len() - 1;
                    &mut stats[last]
                }
            };
            let (stat, accuracy_sum) = slot;
            stat.attempts = stat.attempts.saturating_add(1);
            stat.best_score = stat.best_score.max(entry.score);
            stat.total_time = stat.total_time.saturating_add(entry.time_spent);
            *accuracy_sum += entry.accuracy;
        }

        stats
            .into_iter()
            .map(|(mut stat, accuracy_sum)| {
                stat.average_accuracy = round2(accuracy_sum / f64::from(stat.attempts));
                stat
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_rounds_to_two_decimals() {
        assert_eq!(accuracy(2, 2), 100.0);
        assert_eq!(accuracy(1, 3), 33.33);
        assert_eq!(accuracy(2, 3), 66.67);
        assert_eq!(accuracy(0, 0), 0.0);
    }

    #[test]
    fn entry_serializes_with_camel_case_keys() {
        let entry = LeaderboardEntry::new("Anatomy", "General Anatomy", 2, 2, 42);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["timeSpent"], 42);
        assert_eq!(json["accuracy"], 100.0);
        assert_eq!(json["subtopic"], "General Anatomy");
    }

    #[test]
    fn topic_stats_group_in_first_seen_order() {
        let board = Leaderboard::from_entries(vec![
            LeaderboardEntry::new("Pathology", "Cell Injury", 1, 2, 10),
            LeaderboardEntry::new("Anatomy", "General Anatomy", 2, 2, 20),
            LeaderboardEntry::new("Pathology", "Inflammation", 2, 2, 30),
        ]);

        let stats = board.topic_stats();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].topic, "Pathology");
        assert_eq!(stats[0].attempts, 2);
        assert_eq!(stats[0].best_score, 2);
        assert_eq!(stats[0].average_accuracy, 75.0);
        assert_eq!(stats[0].total_time, 40);
        assert_eq!(stats[1].topic, "Anatomy");
    }
}
