use dioxus::prelude::*;
use services::Action;

use crate::context::{use_app_state, use_dispatch};
use crate::vm::{
    LeaderboardRowVm, QuestionVm, QuizVm, ResultVm, ReviewRowVm, SubtopicOptionVm,
    map_leaderboard_rows, map_quiz,
};

#[component]
pub fn TestsView() -> Element {
    let state = use_app_state();
    let (vm, error, rows) = {
        let state = state.read();
        (
            map_quiz(state.quiz()),
            state.errors().quiz.clone(),
            map_leaderboard_rows(state.leaderboard()),
        )
    };

    rsx! {
        section { class: "page", id: "tests",
            h2 { "Tests" }
            p { "Evaluate your knowledge with quizzes and exams tailored to your courses." }

            if let Some(message) = error {
                p { class: "form-error", "{message}" }
            }

            match vm {
                QuizVm::Topics(topics) => rsx! { TopicPicker { topics } },
                QuizVm::Subtopics { topic, options } => rsx! { SubtopicPicker { topic, options } },
                QuizVm::Question(question) => rsx! { QuestionCard { question } },
                QuizVm::Result(result) => rsx! {
                    ResultCard { result }
                    LeaderboardTable { rows }
                },
                QuizVm::Review { summary, rows } => rsx! { ReviewTable { summary, rows } },
            }
        }
    }
}

#[component]
fn TopicPicker(topics: Vec<String>) -> Element {
    let dispatch = use_dispatch();
    rsx! {
        h3 { "Choose a topic" }
        div { class: "choice-grid",
            for topic in topics {
                button {
                    key: "{topic}",
                    class: "btn choice",
                    onclick: {
                        let topic = topic.clone();
                        move |_| dispatch.call(Action::SelectTopic(topic.clone()))
                    },
                    "{topic}"
                }
            }
        }
    }
}

#[component]
fn SubtopicPicker(topic: String, options: Vec<SubtopicOptionVm>) -> Element {
    let dispatch = use_dispatch();
    rsx! {
        h3 { "{topic}: choose a subtopic" }
        div { class: "choice-grid",
            for option in options {
                button {
                    key: "{option.name}",
                    class: "btn choice",
                    onclick: {
                        let name = option.name.clone();
                        move |_| dispatch.call(Action::SelectSubtopic(name.clone()))
                    },
                    span { class: "choice-title", "{option.name}" }
                    span { class: "choice-meta", "{option.count_label}" }
                }
            }
        }
        button {
            class: "btn btn-secondary",
            onclick: move |_| dispatch.call(Action::BackToTopics),
            "Back to Topics"
        }
    }
}

#[component]
fn QuestionCard(question: QuestionVm) -> Element {
    let dispatch = use_dispatch();
    rsx! {
        div { class: "quiz-card",
            p { class: "quiz-meta", "{question.topic} / {question.subtopic}" }
            p { class: "quiz-progress", "{question.progress_label}" }
            h3 { class: "quiz-prompt", "{question.prompt}" }
            form {
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    dispatch.call(Action::SubmitAnswer);
                },
                input {
                    class: "quiz-answer",
                    r#type: "text",
                    placeholder: "Your answer",
                    value: "{question.draft}",
                    oninput: move |evt| dispatch.call(Action::EditAnswer(evt.value())),
                }
                button { class: "btn btn-primary", r#type: "submit", "{question.submit_label}" }
            }
            p { class: "quiz-score", "{question.score_label}" }
        }
    }
}

#[component]
fn ResultCard(result: ResultVm) -> Element {
    let dispatch = use_dispatch();
    rsx! {
        div { class: "quiz-card quiz-result",
            h3 { "Quiz Completed: {result.topic} / {result.subtopic}" }
            p { "{result.score_label}" }
            p { "Accuracy: {result.accuracy_label}" }
            p { "Time Spent: {result.time_label}" }
            div { class: "button-row",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| dispatch.call(Action::EnterReview),
                    "Review Answers"
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| dispatch.call(Action::BackToTopics),
                    "Back to Topics"
                }
            }
        }
    }
}

#[component]
fn ReviewTable(summary: ResultVm, rows: Vec<ReviewRowVm>) -> Element {
    let dispatch = use_dispatch();
    rsx! {
        h3 { "Review: {summary.topic} / {summary.subtopic}" }
        p { "{summary.score_label} ({summary.accuracy_label})" }
        table { class: "review-table",
            thead {
                tr {
                    th { "#" }
                    th { "Question" }
                    th { "Your answer" }
                    th { "Correct answer" }
                    th { "Result" }
                }
            }
            tbody {
                for row in rows {
                    tr { key: "{row.number}",
                        td { "{row.number}" }
                        td { "{row.question}" }
                        td { "{row.given}" }
                        td { "{row.correct_answer}" }
                        td { class: "verdict", "{row.verdict}" }
                    }
                }
            }
        }
        button {
            class: "btn btn-secondary",
            onclick: move |_| dispatch.call(Action::BackToTopics),
            "Back to Topics"
        }
    }
}

#[component]
pub fn LeaderboardTable(rows: Vec<LeaderboardRowVm>) -> Element {
    rsx! {
        div { class: "leaderboard",
            h3 { "Leaderboard" }
            if rows.is_empty() {
                p { "No quizzes completed yet." }
            } else {
                table {
                    thead {
                        tr {
                            th { "Topic" }
                            th { "Subtopic" }
                            th { "Score" }
                            th { "Accuracy" }
                            th { "Time Spent" }
                        }
                    }
                    tbody {
                        for row in rows {
                            tr {
                                td { "{row.topic}" }
                                td { "{row.subtopic}" }
                                td { "{row.score}" }
                                td { "{row.accuracy_label}" }
                                td { "{row.time_label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
