use super::super::state::{App, LoadPhase, PageState};
use super::Effect;
use crate::quiz::{QuizQuestion, SelectionChange, shuffle_questions};
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_quiz_loaded(
        &mut self,
        mut questions: Vec<QuizQuestion>,
        error: Option<String>,
    ) {
        let Some(state) = self.quiz_mut() else {
            return;
        };
        if let Some(error) = error {
            warn!(source = %state.source, "Knowledge check failed to load: {error}");
            state.phase = LoadPhase::Failed;
            return;
        }

        shuffle_questions(&mut questions, &mut rand::thread_rng());
        info!(
            source = %state.source,
            count = questions.len(),
            "Knowledge check loaded"
        );
        state.questions = questions;
        state.render_all();
        state.phase = LoadPhase::Ready;
    }

    pub(super) fn handle_option_clicked(
        &mut self,
        question_id: i64,
        option_id: String,
        multi_select: bool,
    ) {
        let Some(state) = self.quiz_mut() else {
            return;
        };
        let change = state
            .selections
            .select_option(question_id, &option_id, multi_select);
        if change == SelectionChange::Ignored {
            debug!(question_id, option = %option_id, "Selection cap reached");
            return;
        }
        if state.render_one(question_id).is_none() {
            warn!(question_id, "Selection for a question that is not on the page");
        }
    }

    pub(super) fn handle_copy_link(&mut self, url: String, effects: &mut Vec<Effect>) {
        if !url.trim().is_empty() {
            effects.push(Effect::CopyToClipboard(url));
        }
    }

    pub(super) fn handle_back_to_catalog(&mut self) {
        let Some(state) = self.quiz_mut() else {
            return;
        };
        if let Some(catalog) = state.return_to.take() {
            self.page = PageState::Catalog(*catalog);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::{CatalogState, LaunchPage, QuizState, test_app};
    use super::*;
    use crate::manifest::Location;
    use crate::quiz::{OptionMark, QuestionManifest, QuestionStatus};
    use std::path::PathBuf;

    const MANIFEST: &str = r#"{
        "questions": [
            {
                "id": 1,
                "question": "Which service stores objects?",
                "options": [
                    {"id": "a", "text": "S3", "isCorrect": true,
                     "explanation": {"summary": "Object storage."}},
                    {"id": "b", "text": "EBS", "isCorrect": false,
                     "explanation": {"summary": "Block storage."}}
                ]
            },
            {
                "id": 2,
                "question": "Pick two compute services.",
                "multiSelect": true,
                "options": [
                    {"id": "a", "text": "EC2", "isCorrect": true},
                    {"id": "b", "text": "Lambda", "isCorrect": true},
                    {"id": "c", "text": "Route 53", "isCorrect": false}
                ]
            },
            {
                "id": 3,
                "question": "Which is a CDN?",
                "options": [
                    {"id": "a", "text": "CloudFront", "isCorrect": true}
                ]
            }
        ]
    }"#;

    fn questions() -> Vec<QuizQuestion> {
        serde_json::from_str::<QuestionManifest>(MANIFEST)
            .expect("manifest")
            .questions
    }

    fn loaded_app() -> App {
        let (mut app, effects) = test_app(LaunchPage::Quiz {
            kc: "kc/aws.json".to_string(),
            title: Some("AWS Basics".to_string()),
        });
        assert_eq!(
            effects,
            vec![Effect::LoadQuiz {
                location: Location::File(PathBuf::from("fixtures/kc/aws.json")),
            }]
        );
        app.reduce(Message::QuizLoaded {
            questions: questions(),
            error: None,
        });
        app
    }

    fn state(app: &mut App) -> &mut QuizState {
        app.quiz_mut().expect("quiz page")
    }

    fn card_index(state: &QuizState, question_id: i64) -> usize {
        state
            .questions
            .iter()
            .position(|q| q.id == question_id)
            .expect("question present")
    }

    fn click(app: &mut App, question_id: i64, option_id: &str, multi_select: bool) {
        app.reduce(Message::OptionClicked {
            question_id,
            option_id: option_id.to_string(),
            multi_select,
        });
    }

    #[test]
    fn load_numbers_questions_in_shuffled_order() {
        let mut app = loaded_app();
        let state = state(&mut app);
        assert_eq!(state.phase, LoadPhase::Ready);
        let numbers: Vec<_> = state.questions.iter().map(|q| q.display_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        let mut ids: Vec<_> = state.questions.iter().map(|q| q.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(state.cards.len(), 3);
        for (question, card) in state.questions.iter().zip(&state.cards) {
            assert_eq!(question.id, card.question_id);
            assert_eq!(question.display_number, card.display_number);
        }
        assert_eq!(state.progress_label(), "Answered 0 of 3");
    }

    #[test]
    fn failed_load_is_terminal() {
        let (mut app, _) = test_app(LaunchPage::Quiz {
            kc: "kc/missing.json".to_string(),
            title: None,
        });
        app.reduce(Message::QuizLoaded {
            questions: Vec::new(),
            error: Some("No such file".to_string()),
        });
        let state = state(&mut app);
        assert_eq!(state.phase, LoadPhase::Failed);
        assert!(state.cards.is_empty());
    }

    #[test]
    fn click_repaints_only_the_clicked_card() {
        let mut app = loaded_app();
        let before = state(&mut app).cards.clone();

        click(&mut app, 1, "b", false);
        let state = state(&mut app);
        let idx = card_index(state, 1);
        for (i, card) in state.cards.iter().enumerate() {
            if i == idx {
                assert_ne!(*card, before[i]);
            } else {
                assert_eq!(*card, before[i]);
            }
        }
        let chosen = &state.cards[idx].options[1];
        assert!(chosen.selected);
        assert_eq!(chosen.mark, OptionMark::Incorrect);
        assert!(!chosen.explanation.is_empty());
        let other = &state.cards[idx].options[0];
        assert_eq!(other.mark, OptionMark::Neutral);
        assert!(other.explanation.is_empty());
    }

    #[test]
    fn single_select_replaces_then_clears() {
        let mut app = loaded_app();
        click(&mut app, 1, "a", false);
        click(&mut app, 1, "b", false);
        assert!(state(&mut app).selections.is_selected(1, "b"));
        assert!(!state(&mut app).selections.is_selected(1, "a"));

        click(&mut app, 1, "b", false);
        let state = state(&mut app);
        let question = &state.questions[card_index(state, 1)];
        assert_eq!(state.selections.status(question), QuestionStatus::Unanswered);
    }

    #[test]
    fn multi_select_caps_at_two() {
        let mut app = loaded_app();
        click(&mut app, 2, "a", true);
        {
            let state = state(&mut app);
            let question = &state.questions[card_index(state, 2)];
            assert_eq!(
                state.selections.status(question),
                QuestionStatus::PartiallySelected
            );
        }
        click(&mut app, 2, "b", true);
        let before = state(&mut app).cards.clone();
        click(&mut app, 2, "c", true);
        let state = state(&mut app);
        assert_eq!(state.cards, before);
        assert!(!state.selections.is_selected(2, "c"));
        assert_eq!(state.progress_label(), "Answered 1 of 3");
    }

    #[test]
    fn copy_link_emits_clipboard_write() {
        let mut app = loaded_app();
        let effects = app.reduce(Message::CopyLink("https://aws.amazon.com/s3/".to_string()));
        assert_eq!(
            effects,
            vec![Effect::CopyToClipboard(
                "https://aws.amazon.com/s3/".to_string()
            )]
        );
        assert!(app.reduce(Message::CopyLink("  ".to_string())).is_empty());
    }

    #[test]
    fn back_returns_to_the_catalog_it_came_from() {
        let mut app = loaded_app();
        app.reduce(Message::BackToCatalog);
        assert!(matches!(app.page, PageState::Quiz(_)));

        let mut catalog = CatalogState::new();
        catalog.last_link = Some("quiz.html?kc=kc%2Faws.json".to_string());
        state(&mut app).return_to = Some(Box::new(catalog));
        app.reduce(Message::BackToCatalog);
        match &app.page {
            PageState::Catalog(catalog) => {
                assert_eq!(
                    catalog.last_link.as_deref(),
                    Some("quiz.html?kc=kc%2Faws.json")
                );
            }
            _ => panic!("expected the catalog page"),
        }
    }
}
