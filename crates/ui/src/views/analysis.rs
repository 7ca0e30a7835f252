use dioxus::prelude::*;

use crate::context::use_app_state;
use crate::views::quiz::LeaderboardTable;
use crate::vm::{map_leaderboard_rows, map_topic_stats};

#[component]
pub fn AnalysisView() -> Element {
    let state = use_app_state();
    let (stats, rows) = {
        let state = state.read();
        (
            map_topic_stats(state.leaderboard()),
            map_leaderboard_rows(state.leaderboard()),
        )
    };

    rsx! {
        section { class: "page", id: "analysis",
            h2 { "Analysis" }
            p { "Analyze your performance and progress through detailed insights." }
            ul {
                li { "View subject-wise performance trends" }
                li { "Identify strengths and weaknesses" }
                li { "Access performance heatmaps for better focus" }
            }

            h3 { "Performance by topic" }
            if stats.is_empty() {
                p { "Complete a quiz in Tests to see your statistics." }
            } else {
                table { class: "stats-table",
                    thead {
                        tr {
                            th { "Topic" }
                            th { "Attempts" }
                            th { "Best score" }
                            th { "Average accuracy" }
                            th { "Total time" }
                        }
                    }
                    tbody {
                        for stat in stats {
                            tr { key: "{stat.topic}",
                                td { "{stat.topic}" }
                                td { "{stat.attempts}" }
                                td { "{stat.best_score}" }
                                td { "{stat.average_accuracy_label}" }
                                td { "{stat.total_time_label}" }
                            }
                        }
                    }
                }
            }

            LeaderboardTable { rows }
        }
    }
}
