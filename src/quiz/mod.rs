//! Knowledge-check model: questions, shuffling and per-question selection.

mod card;
mod explanation;

pub use card::{OptionMark, OptionRow, QuestionCard, render_question};
pub use explanation::{BlockBody, Content, ExplanationBlock, ExplanationEntry};

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::collections::HashMap;

/// Multi-select questions take exactly this many answers.
pub const MULTI_SELECT_CAP: usize = 2;

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionManifest {
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: i64,
    pub question: String,
    #[serde(default)]
    pub multi_select: bool,
    #[serde(default)]
    pub options: Vec<OptionEntry>,
    #[serde(skip)]
    pub display_number: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionEntry {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
    #[serde(default)]
    pub explanation: ExplanationEntry,
}

/// Uniform in-place shuffle, then 1-based display numbers in the new order.
pub fn shuffle_questions<R: Rng + ?Sized>(questions: &mut [QuizQuestion], rng: &mut R) {
    questions.shuffle(rng);
    for (idx, question) in questions.iter_mut().enumerate() {
        question.display_number = idx + 1;
    }
}

/// Chosen options for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single(String),
    /// Insertion-ordered, never longer than [`MULTI_SELECT_CAP`].
    Multi(Vec<String>),
}

impl Selection {
    pub fn contains(&self, option_id: &str) -> bool {
        match self {
            Selection::Single(id) => id == option_id,
            Selection::Multi(ids) => ids.iter().any(|id| id == option_id),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Selection::Single(_) => 1,
            Selection::Multi(ids) => ids.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionStatus {
    Unanswered,
    PartiallySelected,
    Answered,
}

/// Result of a click on an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Selected,
    Deselected,
    /// Cap reached; the click changed nothing.
    Ignored,
}

/// Selections for every question on the page, keyed by question id.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    entries: HashMap<i64, Selection>,
}

impl SelectionState {
    pub fn get(&self, question_id: i64) -> Option<&Selection> {
        self.entries.get(&question_id)
    }

    #[cfg(test)]
    pub fn is_selected(&self, question_id: i64, option_id: &str) -> bool {
        self.get(question_id)
            .is_some_and(|selection| selection.contains(option_id))
    }

    /// Apply one click. Clicking a chosen option deselects it; a new option
    /// on a full multi-select question is ignored.
    pub fn select_option(
        &mut self,
        question_id: i64,
        option_id: &str,
        is_multi: bool,
    ) -> SelectionChange {
        if !is_multi {
            let already_chosen = matches!(
                self.entries.get(&question_id),
                Some(Selection::Single(current)) if current == option_id
            );
            return if already_chosen {
                self.entries.remove(&question_id);
                SelectionChange::Deselected
            } else {
                self.entries
                    .insert(question_id, Selection::Single(option_id.to_string()));
                SelectionChange::Selected
            };
        }

        let entry = self
            .entries
            .entry(question_id)
            .or_insert_with(|| Selection::Multi(Vec::new()));
        if let Selection::Single(previous) = entry {
            let previous = std::mem::take(previous);
            *entry = Selection::Multi(vec![previous]);
        }
        let Selection::Multi(ids) = entry else {
            return SelectionChange::Ignored;
        };

        let change = if let Some(pos) = ids.iter().position(|id| id == option_id) {
            ids.remove(pos);
            SelectionChange::Deselected
        } else if ids.len() < MULTI_SELECT_CAP {
            ids.push(option_id.to_string());
            SelectionChange::Selected
        } else {
            SelectionChange::Ignored
        };
        if ids.is_empty() {
            self.entries.remove(&question_id);
        }
        change
    }

    pub fn status(&self, question: &QuizQuestion) -> QuestionStatus {
        let count = self.get(question.id).map_or(0, Selection::len);
        let needed = if question.multi_select {
            MULTI_SELECT_CAP
        } else {
            1
        };
        if count == 0 {
            QuestionStatus::Unanswered
        } else if count < needed {
            QuestionStatus::PartiallySelected
        } else {
            QuestionStatus::Answered
        }
    }

    pub fn answered_count(&self, questions: &[QuizQuestion]) -> usize {
        questions
            .iter()
            .filter(|q| self.status(q) == QuestionStatus::Answered)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn question(id: i64, multi: bool) -> QuizQuestion {
        QuizQuestion {
            id,
            question: format!("Question {id}"),
            multi_select: multi,
            options: ["a", "b", "c", "d"]
                .iter()
                .map(|opt| OptionEntry {
                    id: opt.to_string(),
                    text: opt.to_uppercase(),
                    is_correct: *opt == "a",
                    explanation: ExplanationEntry::default(),
                })
                .collect(),
            display_number: 0,
        }
    }

    #[test]
    fn malformed_explanation_fields_keep_the_manifest_loadable() {
        let manifest: QuestionManifest = serde_json::from_str(
            r#"{
                "questions": [
                    {
                        "id": 1,
                        "question": "Which instance family is burstable?",
                        "options": [
                            {
                                "id": "a",
                                "text": "T3",
                                "isCorrect": true,
                                "explanation": {
                                    "speedComparison": 100,
                                    "examples": [{"name": "t3"}],
                                    "learnMore": [{"title": "Missing url"}]
                                }
                            },
                            {"id": "b", "text": "M5", "explanation": "plain text"}
                        ]
                    },
                    {
                        "id": 2,
                        "question": "What does S3 Glacier optimise for?",
                        "options": [
                            {"id": "a", "text": "Archive cost", "explanation": {"summary": "Cheap storage"}}
                        ]
                    }
                ]
            }"#,
        )
        .expect("manifest parses");

        assert_eq!(manifest.questions.len(), 2);
        let first = &manifest.questions[0].options[0].explanation;
        assert_eq!(first.speed_comparison, Some(Content::Text("100".to_string())));
        assert!(first.learn_more.is_empty());
        assert_eq!(
            manifest.questions[1].options[0].explanation.summary,
            Some(Content::Text("Cheap storage".to_string()))
        );
    }

    #[test]
    fn shuffle_keeps_every_question_and_numbers_in_order() {
        for n in [0usize, 1, 2, 7, 40] {
            let mut questions: Vec<QuizQuestion> =
                (0..n as i64).map(|id| question(id, false)).collect();
            let mut rng = StdRng::seed_from_u64(n as u64);
            shuffle_questions(&mut questions, &mut rng);

            let mut ids: Vec<i64> = questions.iter().map(|q| q.id).collect();
            ids.sort_unstable();
            assert_eq!(ids, (0..n as i64).collect::<Vec<_>>());
            let numbers: Vec<usize> = questions.iter().map(|q| q.display_number).collect();
            assert_eq!(numbers, (1..=n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn single_select_replaces_and_toggles() {
        let q = question(1, false);
        let mut state = SelectionState::default();
        assert_eq!(state.status(&q), QuestionStatus::Unanswered);

        assert_eq!(state.select_option(1, "a", false), SelectionChange::Selected);
        assert_eq!(state.status(&q), QuestionStatus::Answered);
        assert_eq!(state.select_option(1, "b", false), SelectionChange::Selected);
        assert_eq!(state.get(1), Some(&Selection::Single("b".to_string())));

        assert_eq!(state.select_option(1, "b", false), SelectionChange::Deselected);
        assert_eq!(state.status(&q), QuestionStatus::Unanswered);
    }

    #[test]
    fn multi_select_caps_at_two() {
        let q = question(2, true);
        let mut state = SelectionState::default();
        state.select_option(2, "a", true);
        assert_eq!(state.status(&q), QuestionStatus::PartiallySelected);
        state.select_option(2, "c", true);
        assert_eq!(state.status(&q), QuestionStatus::Answered);

        assert_eq!(state.select_option(2, "d", true), SelectionChange::Ignored);
        assert_eq!(
            state.get(2),
            Some(&Selection::Multi(vec!["a".to_string(), "c".to_string()]))
        );

        assert_eq!(state.select_option(2, "a", true), SelectionChange::Deselected);
        assert_eq!(state.select_option(2, "d", true), SelectionChange::Selected);
        assert_eq!(
            state.get(2),
            Some(&Selection::Multi(vec!["c".to_string(), "d".to_string()]))
        );
    }

    #[test]
    fn questions_do_not_share_selections() {
        let mut state = SelectionState::default();
        state.select_option(1, "a", false);
        state.select_option(2, "a", true);
        state.select_option(2, "b", true);
        state.select_option(1, "a", false);
        assert!(state.get(1).is_none());
        assert_eq!(state.get(2).map(Selection::len), Some(2));
    }

    #[test]
    fn manifest_decodes_camel_case_fields() {
        let manifest: QuestionManifest = serde_json::from_str(
            r#"{"questions": [{"id": 3, "question": "Pick two", "multiSelect": true,
                "options": [{"id": "x", "text": "X", "isCorrect": true,
                             "explanation": {"summary": "because"}}]}]}"#,
        )
        .expect("manifest parses");
        let q = &manifest.questions[0];
        assert!(q.multi_select);
        assert!(q.options[0].is_correct);
        assert_eq!(q.display_number, 0);
    }

    #[test]
    fn counts_answered_questions() {
        let questions = vec![question(1, false), question(2, true)];
        let mut state = SelectionState::default();
        state.select_option(1, "a", false);
        state.select_option(2, "a", true);
        assert_eq!(state.answered_count(&questions), 1);
    }
}
