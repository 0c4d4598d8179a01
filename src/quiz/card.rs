//! View-model for one question card.
//!
//! Both the initial full render and the repaint after a click go through
//! [`render_question`], so the two paths cannot disagree.

use super::explanation::{ExplanationBlock, explanation_blocks};
use super::{MULTI_SELECT_CAP, QuizQuestion, Selection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Neutral,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    pub id: String,
    pub text: String,
    pub selected: bool,
    pub mark: OptionMark,
    /// Empty unless the option is selected.
    pub explanation: Vec<ExplanationBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCard {
    pub question_id: i64,
    pub display_number: usize,
    pub prompt: String,
    pub multi_select: bool,
    pub selected_count: usize,
    pub options: Vec<OptionRow>,
}

impl QuestionCard {
    pub fn heading(&self) -> String {
        format!("{}. {}", self.display_number, self.prompt)
    }

    pub fn hint(&self) -> Option<String> {
        self.multi_select.then(|| {
            format!(
                "(Select {MULTI_SELECT_CAP}) {} of {MULTI_SELECT_CAP} chosen",
                self.selected_count
            )
        })
    }
}

pub fn render_question(question: &QuizQuestion, selection: Option<&Selection>) -> QuestionCard {
    let options = question
        .options
        .iter()
        .map(|option| {
            let selected = selection.is_some_and(|s| s.contains(&option.id));
            let (mark, explanation) = if selected {
                let mark = if option.is_correct {
                    OptionMark::Correct
                } else {
                    OptionMark::Incorrect
                };
                (mark, explanation_blocks(&option.explanation))
            } else {
                (OptionMark::Neutral, Vec::new())
            };
            OptionRow {
                id: option.id.clone(),
                text: option.text.clone(),
                selected,
                mark,
                explanation,
            }
        })
        .collect();

    QuestionCard {
        question_id: question.id,
        display_number: question.display_number,
        prompt: question.question.clone(),
        multi_select: question.multi_select,
        selected_count: selection.map_or(0, Selection::len),
        options,
    }
}
