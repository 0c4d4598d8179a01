use super::LoadPhase;
use super::catalog::CatalogState;
use crate::quiz::{QuestionCard, QuizQuestion, SelectionState, render_question};

/// Quiz page model. `cards[i]` is always the rendering of `questions[i]`.
pub struct QuizState {
    pub(in crate::app) source: String,
    pub(in crate::app) title: String,
    pub(in crate::app) phase: LoadPhase,
    pub(in crate::app) questions: Vec<QuizQuestion>,
    pub(in crate::app) selections: SelectionState,
    pub(in crate::app) cards: Vec<QuestionCard>,
    /// Catalog to go back to when the quiz was opened from it.
    pub(in crate::app) return_to: Option<Box<CatalogState>>,
}

impl QuizState {
    pub(in crate::app) fn new(source: String, title: Option<String>) -> Self {
        let title = title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| title_from_source(&source));
        Self {
            source,
            title,
            phase: LoadPhase::Loading,
            questions: Vec::new(),
            selections: SelectionState::default(),
            cards: Vec::new(),
            return_to: None,
        }
    }

    pub(in crate::app) fn render_all(&mut self) {
        self.cards = self
            .questions
            .iter()
            .map(|q| render_question(q, self.selections.get(q.id)))
            .collect();
    }

    /// Repaint a single card; siblings keep their previous rendering.
    pub(in crate::app) fn render_one(&mut self, question_id: i64) -> Option<usize> {
        let idx = self.questions.iter().position(|q| q.id == question_id)?;
        let question = &self.questions[idx];
        self.cards[idx] = render_question(question, self.selections.get(question_id));
        Some(idx)
    }

    pub(in crate::app) fn progress_label(&self) -> String {
        format!(
            "Answered {} of {}",
            self.selections.answered_count(&self.questions),
            self.questions.len()
        )
    }
}

/// `kc/ec2-basics.json` -> `ec2-basics`.
fn title_from_source(source: &str) -> String {
    let name = source.rsplit('/').next().unwrap_or(source);
    name.strip_suffix(".json").unwrap_or(name).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_file_stem_for_title() {
        let state = QuizState::new("kc/ec2-basics.json".to_string(), None);
        assert_eq!(state.title, "ec2-basics");
        let titled = QuizState::new("kc/x.json".to_string(), Some("EC2 Basics".to_string()));
        assert_eq!(titled.title, "EC2 Basics");
    }
}
