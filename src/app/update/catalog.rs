use super::super::messages::TopicChoice;
use super::super::state::{App, CatalogState, LaunchPage, LoadPhase, PageState};
use super::Effect;
use crate::catalog::{Catalog, CatalogEntry, SortMode};
use crate::query::{QueryParams, detail_link};
use std::mem;
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_catalog_loaded(
        &mut self,
        entries: Vec<CatalogEntry>,
        error: Option<String>,
    ) {
        let Some(state) = self.catalog_mut() else {
            return;
        };
        if let Some(error) = error {
            warn!("Knowledge check catalog failed to load: {error}");
            state.phase = LoadPhase::Failed;
            return;
        }
        state.catalog = Catalog::new(entries);
        state.phase = LoadPhase::Ready;
        info!(
            count = state.catalog.entries().len(),
            topics = state.catalog.topics().len(),
            "Knowledge check catalog loaded"
        );
    }

    pub(super) fn handle_catalog_search_changed(&mut self, term: String) {
        if let Some(state) = self.catalog_mut() {
            state.catalog.set_search(term);
        }
    }

    pub(super) fn handle_catalog_topic_selected(&mut self, choice: TopicChoice) {
        if let Some(state) = self.catalog_mut() {
            state.catalog.set_topic(choice.into_filter());
        }
    }

    pub(super) fn handle_catalog_sort_selected(&mut self, mode: SortMode) {
        if let Some(state) = self.catalog_mut() {
            debug!(sort = mode.key(), "Catalog sort changed");
            state.catalog.set_sort(mode);
        }
    }

    /// Follow a card's detail link into the quiz page. The catalog is parked
    /// on the quiz so going back restores its filters.
    pub(super) fn handle_open_knowledge_check(&mut self, index: usize, effects: &mut Vec<Effect>) {
        let Some(state) = self.catalog_mut() else {
            return;
        };
        let Some(entry) = state.catalog.visible().get(index) else {
            warn!(index, "Ignoring click outside the visible catalog");
            return;
        };
        let link = detail_link(&entry.file, &entry.title);
        state.last_link = Some(link.clone());

        let params = QueryParams::parse(&link);
        let Some(kc) = params.get("kc").map(str::to_string) else {
            return;
        };
        let title = params.get("title").map(str::to_string);
        info!(link = %link, "Opening knowledge check");

        let parked = match &mut self.page {
            PageState::Catalog(catalog) => mem::replace(catalog, CatalogState::new()),
            _ => return,
        };
        effects.extend(self.enter_page(LaunchPage::Quiz { kc, title }));
        if let Some(quiz) = self.quiz_mut() {
            quiz.return_to = Some(Box::new(parked));
        }
    }
}
