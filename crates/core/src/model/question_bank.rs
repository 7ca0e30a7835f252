//! Static quiz content: topics, their subtopics, and ordered questions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub answer: String,
}

impl Question {
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Trimmed, case-insensitive exact comparison against the stored answer.
    #[must_use]
    pub fn accepts(&self, submitted: &str) -> bool {
        submitted.trim().to_lowercase() == self.answer.trim().to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtopic {
    pub name: String,
    pub questions: Vec<Question>,
}

impl Subtopic {
    #[must_use]
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            name: name.into(),
            questions,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub subtopics: Vec<Subtopic>,
}

impl Topic {
    #[must_use]
    pub fn new(name: impl Into<String>, subtopics: Vec<Subtopic>) -> Self {
        Self {
            name: name.into(),
            subtopics,
        }
    }

    #[must_use]
    pub fn subtopic(&self, name: &str) -> Option<&Subtopic> {
        self.subtopics.iter().find(|sub| sub.name == name)
    }
}

/// Immutable topic → subtopic → questions tree, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuestionBank {
    topics: Vec<Topic>,
}

type BuiltinTable = &'static [(
    &'static str,
    &'static [(&'static str, &'static [(&'static str, &'static str)])],
)];

const BUILTIN: BuiltinTable = &[
    (
        "Anatomy",
        &[
            (
                "General Anatomy",
                &[
                    ("What is the largest organ of the human body?", "Skin"),
                    ("How many bones are in the adult human body?", "206"),
                ],
            ),
            (
                "Upper Limb",
                &[
                    ("Which nerve is injured in wrist drop?", "Radial nerve"),
                    ("Which is the most commonly fractured carpal bone?", "Scaphoid"),
                    (
                        "Which muscle initiates abduction of the arm at the shoulder?",
                        "Supraspinatus",
                    ),
                ],
            ),
        ],
    ),
    (
        "Physiology",
        &[
            (
                "Cardiovascular",
                &[
                    ("Which node is the natural pacemaker of the heart?", "SA node"),
                    (
                        "Which chamber pumps oxygenated blood into the aorta?",
                        "Left ventricle",
                    ),
                ],
            ),
            (
                "Respiratory",
                &[
                    ("What is the principal muscle of quiet inspiration?", "Diaphragm"),
                    (
                        "Which alveolar cells secrete surfactant?",
                        "Type II pneumocytes",
                    ),
                ],
            ),
        ],
    ),
    (
        "Pathology",
        &[
            (
                "Cell Injury",
                &[
                    ("What is programmed cell death called?", "Apoptosis"),
                    (
                        "Which type of necrosis is typical of tuberculosis?",
                        "Caseous necrosis",
                    ),
                ],
            ),
            (
                "Inflammation",
                &[
                    (
                        "Which leukocyte is first to arrive in acute inflammation?",
                        "Neutrophil",
                    ),
                    (
                        "Which cell dominates chronic inflammation?",
                        "Macrophage",
                    ),
                ],
            ),
        ],
    ),
    (
        "Pharmacology",
        &[
            (
                "Autonomic Drugs",
                &[
                    (
                        "What is the antidote for organophosphate poisoning?",
                        "Atropine",
                    ),
                    ("Which receptor does salbutamol stimulate?", "Beta-2"),
                ],
            ),
            (
                "Antimicrobials",
                &[
                    (
                        "Which drug is first-line for serious MRSA infections?",
                        "Vancomycin",
                    ),
                    (
                        "Which antibiotic class is associated with tendon rupture?",
                        "Fluoroquinolones",
                    ),
                ],
            ),
        ],
    ),
];

impl QuestionBank {
    #[must_use]
    pub fn new(topics: Vec<Topic>) -> Self {
        Self { topics }
    }

    /// The content shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        let topics = BUILTIN
            .iter()
            .map(|(topic, subtopics)| {
                let subtopics = subtopics
                    .iter()
                    .map(|(name, questions)| {
                        let questions = questions
                            .iter()
                            .map(|(q, a)| Question::new(*q, *a))
                            .collect();
                        Subtopic::new(*name, questions)
                    })
                    .collect();
                Topic::new(*topic, subtopics)
            })
            .collect();
        Self { topics }
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    #[must_use]
    pub fn topic(&self, name: &str) -> Option<&Topic> {
        self.topics.iter().find(|topic| topic.name == name)
    }

    #[must_use]
    pub fn subtopic(&self, topic: &str, subtopic: &str) -> Option<&Subtopic> {
        self.topic(topic).and_then(|t| t.subtopic(subtopic))
    }

    #[must_use]
    pub fn question(&self, topic: &str, subtopic: &str, index: usize) -> Option<&Question> {
        self.subtopic(topic, subtopic)
            .and_then(|sub| sub.questions.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bank_has_general_anatomy_with_two_questions() {
        let bank = QuestionBank::builtin();
        let sub = bank.subtopic("Anatomy", "General Anatomy").unwrap();
        assert_eq!(sub.len(), 2);
        assert_eq!(bank.topics().len(), 4);
        assert!(bank.topics().iter().all(|t| t.subtopics.iter().all(|s| !s.is_empty())));
    }

    #[test]
    fn lookups_fail_cleanly_for_unknown_names() {
        let bank = QuestionBank::builtin();
        assert!(bank.topic("Biochemistry").is_none());
        assert!(bank.subtopic("Anatomy", "Lower Limb").is_none());
        assert!(bank.question("Anatomy", "General Anatomy", 2).is_none());
    }

    #[test]
    fn answers_compare_trimmed_and_case_insensitive() {
        let q = Question::new("Largest organ?", "Skin");
        assert!(q.accepts("  skin "));
        assert!(q.accepts("SKIN"));
        assert!(!q.accepts("the skin"));
    }
}
