use medico_core::quiz::{QuizEngine, QuizPhase, QuizResult};

use crate::vm::time_fmt::{format_accuracy, format_duration_secs};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubtopicOptionVm {
    pub name: String,
    pub count_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub topic: String,
    pub subtopic: String,
    pub progress_label: String,
    pub prompt: String,
    pub draft: String,
    pub score_label: String,
    pub submit_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub topic: String,
    pub subtopic: String,
    pub score_label: String,
    pub accuracy_label: String,
    pub time_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewRowVm {
    pub number: usize,
    pub question: String,
    pub correct_answer: String,
    pub given: String,
    pub verdict: &'static str,
}

/// What the Tests panel should draw for the current quiz phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizVm {
    Topics(Vec<String>),
    Subtopics {
        topic: String,
        options: Vec<SubtopicOptionVm>,
    },
    Question(QuestionVm),
    Result(ResultVm),
    Review {
        summary: ResultVm,
        rows: Vec<ReviewRowVm>,
    },
}

#[must_use]
pub fn map_quiz(engine: &QuizEngine) -> QuizVm {
    match engine.phase() {
        QuizPhase::TopicSelect => QuizVm::Topics(
            engine
                .bank()
                .topics()
                .iter()
                .map(|topic| topic.name.clone())
                .collect(),
        ),
        QuizPhase::SubtopicSelect => match engine.selected_topic() {
            Some(topic) => QuizVm::Subtopics {
                topic: topic.name.clone(),
                options: topic
                    .subtopics
                    .iter()
                    .map(|sub| SubtopicOptionVm {
                        name: sub.name.clone(),
                        count_label: question_count_label(sub.len()),
                    })
                    .collect(),
            },
            None => QuizVm::Topics(Vec::new()),
        },
        QuizPhase::InProgress => map_question(engine),
        QuizPhase::Result => match engine.result() {
            Some(result) => QuizVm::Result(map_result(result)),
            None => QuizVm::Topics(Vec::new()),
        },
        QuizPhase::Review => match engine.result() {
            Some(result) => QuizVm::Review {
                summary: map_result(result),
                rows: map_review_rows(result),
            },
            None => QuizVm::Topics(Vec::new()),
        },
    }
}

fn map_question(engine: &QuizEngine) -> QuizVm {
    let (Ok(current), Some(attempt)) = (engine.current_question(), engine.attempt()) else {
        return QuizVm::Topics(Vec::new());
    };
    QuizVm::Question(QuestionVm {
        topic: current.topic.to_string(),
        subtopic: current.subtopic.to_string(),
        progress_label: format!("Question {} of {}", current.index + 1, current.total),
        prompt: current.question.question.clone(),
        draft: attempt.draft().to_string(),
        score_label: format!("Score: {}", attempt.score()),
        submit_label: if attempt.is_last_question() {
            "Finish"
        } else {
            "Submit"
        },
    })
}

fn map_result(result: &QuizResult) -> ResultVm {
    ResultVm {
        topic: result.entry.topic.clone(),
        subtopic: result.entry.subtopic.clone(),
        score_label: format!("Score: {} / {}", result.entry.score, result.total),
        accuracy_label: format_accuracy(result.entry.accuracy),
        time_label: format_duration_secs(result.entry.time_spent),
    }
}

fn map_review_rows(result: &QuizResult) -> Vec<ReviewRowVm> {
    result
        .answers
        .iter()
        .enumerate()
        .map(|(index, answered)| ReviewRowVm {
            number: index + 1,
            question: answered.question.clone(),
            correct_answer: answered.correct_answer.clone(),
            given: if answered.given.trim().is_empty() {
                "(no answer)".to_string()
            } else {
                answered.given.clone()
            },
            verdict: if answered.correct { "Correct" } else { "Incorrect" },
        })
        .collect()
}

fn question_count_label(count: usize) -> String {
    match count {
        1 => "1 question".to_string(),
        n => format!("{n} questions"),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use medico_core::model::QuestionBank;
    use medico_core::time::fixed_now;

    use super::*;

    fn engine() -> QuizEngine {
        QuizEngine::new(Arc::new(QuestionBank::builtin()))
    }

    #[test]
    fn idle_engine_lists_topics_in_bank_order() {
        let vm = map_quiz(&engine());
        assert_eq!(
            vm,
            QuizVm::Topics(vec![
                "Anatomy".to_string(),
                "Physiology".to_string(),
                "Pathology".to_string(),
                "Pharmacology".to_string(),
            ])
        );
    }

    #[test]
    fn subtopic_options_carry_question_counts() {
        let mut engine = engine();
        engine.select_topic("Anatomy").unwrap();
        let QuizVm::Subtopics { topic, options } = map_quiz(&engine) else {
            panic!("expected subtopics");
        };
        assert_eq!(topic, "Anatomy");
        assert_eq!(options[0].name, "General Anatomy");
        assert_eq!(options[0].count_label, "2 questions");
        assert_eq!(options[1].count_label, "3 questions");
    }

    #[test]
    fn last_question_offers_finish() {
        let mut engine = engine();
        engine.select_topic("Anatomy").unwrap();
        engine.select_subtopic("General Anatomy", fixed_now()).unwrap();
        let QuizVm::Question(first) = map_quiz(&engine) else {
            panic!("expected question");
        };
        assert_eq!(first.progress_label, "Question 1 of 2");
        assert_eq!(first.submit_label, "Submit");

        engine.submit_answer("skin", fixed_now()).unwrap();
        let QuizVm::Question(second) = map_quiz(&engine) else {
            panic!("expected question");
        };
        assert_eq!(second.progress_label, "Question 2 of 2");
        assert_eq!(second.score_label, "Score: 1");
        assert_eq!(second.submit_label, "Finish");
    }

    #[test]
    fn review_rows_show_given_answers() {
        let mut engine = engine();
        engine.select_topic("Anatomy").unwrap();
        engine.select_subtopic("General Anatomy", fixed_now()).unwrap();
        engine.submit_answer("Skin", fixed_now()).unwrap();
        engine.submit_answer("", fixed_now()).unwrap();

        let QuizVm::Result(result) = map_quiz(&engine) else {
            panic!("expected result");
        };
        assert_eq!(result.score_label, "Score: 1 / 2");
        assert_eq!(result.accuracy_label, "50.00%");

        engine.enter_review().unwrap();
        let QuizVm::Review { rows, .. } = map_quiz(&engine) else {
            panic!("expected review");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].given, "Skin");
        assert_eq!(rows[0].verdict, "Correct");
        assert_eq!(rows[1].given, "(no answer)");
        assert_eq!(rows[1].verdict, "Incorrect");
    }
}
