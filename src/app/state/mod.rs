mod catalog;
mod constants;
mod gallery;
mod quiz;

use super::messages::Message;
use super::update::Effect;
use crate::config::AppConfig;
use crate::gallery::FolderSelection;
use crate::manifest::ContentRoot;
use crate::theme::ThemeToggle;
use iced::Task;
use std::path::PathBuf;

pub(in crate::app) use catalog::CatalogState;
pub(crate) use constants::*;
pub(in crate::app) use gallery::{GalleryState, ImageSlot};
pub(in crate::app) use quiz::QuizState;

/// Which page the window opens on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchPage {
    Gallery { folder: FolderSelection },
    Quiz { kc: String, title: Option<String> },
    Catalog,
}

/// Manifest lifecycle shared by all pages. `Failed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Failed,
    Ready,
}

pub enum PageState {
    Gallery(GalleryState),
    Quiz(QuizState),
    Catalog(CatalogState),
}

/// Core application state. Pages never share state; only the theme spans them.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) content_root: ContentRoot,
    pub(super) theme: ThemeToggle,
    pub(super) page: PageState,
}

impl App {
    /// Build the initial model and the effects that start its page load.
    pub(super) fn new(
        config: AppConfig,
        theme: ThemeToggle,
        launch: LaunchPage,
    ) -> (App, Vec<Effect>) {
        let content_root = ContentRoot::parse(&config.content_root);
        let mut app = App {
            page: PageState::Catalog(CatalogState::new()),
            content_root,
            theme,
            config,
        };
        let effects = app.enter_page(launch);
        (app, effects)
    }

    pub(super) fn bootstrap(
        config: AppConfig,
        theme: ThemeToggle,
        launch: LaunchPage,
    ) -> (App, Task<Message>) {
        let (mut app, effects) = App::new(config, theme, launch);
        let task = app.run_effects(effects);
        (app, task)
    }

    /// Swap in a fresh page model and request its manifest.
    pub(super) fn enter_page(&mut self, launch: LaunchPage) -> Vec<Effect> {
        match launch {
            LaunchPage::Gallery { folder } => {
                let location = self.content_root.resolve(&self.config.notes_manifest);
                self.page = PageState::Gallery(GalleryState::new(
                    folder.clone(),
                    self.config.default_view_mode,
                ));
                vec![Effect::LoadGallery {
                    location,
                    selection: folder,
                }]
            }
            LaunchPage::Quiz { kc, title } => {
                let location = self.content_root.resolve(&kc);
                self.page = PageState::Quiz(QuizState::new(kc, title));
                vec![Effect::LoadQuiz { location }]
            }
            LaunchPage::Catalog => {
                let location = self.content_root.resolve(&self.config.catalog_manifest);
                self.page = PageState::Catalog(CatalogState::new());
                vec![Effect::LoadCatalog { location }]
            }
        }
    }

    pub(super) fn download_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.download_dir)
    }

    pub(super) fn window_title(&self) -> String {
        match &self.page {
            PageState::Gallery(state) => format!("Gallery - {}", state.selection),
            PageState::Quiz(state) => format!("Knowledge Check - {}", state.title),
            PageState::Catalog(_) => "Knowledge Checks".to_string(),
        }
    }

    pub(super) fn gallery_mut(&mut self) -> Option<&mut GalleryState> {
        match &mut self.page {
            PageState::Gallery(state) => Some(state),
            _ => None,
        }
    }

    pub(super) fn quiz_mut(&mut self) -> Option<&mut QuizState> {
        match &mut self.page {
            PageState::Quiz(state) => Some(state),
            _ => None,
        }
    }

    pub(super) fn catalog_mut(&mut self) -> Option<&mut CatalogState> {
        match &mut self.page {
            PageState::Catalog(state) => Some(state),
            _ => None,
        }
    }

    pub(super) fn lightbox_open(&self) -> bool {
        matches!(&self.page, PageState::Gallery(state) if state.gallery.is_lightbox_open())
    }
}

#[cfg(test)]
pub(in crate::app) fn test_app(launch: LaunchPage) -> (App, Vec<Effect>) {
    use std::sync::atomic::{AtomicUsize, Ordering};
    static NEXT: AtomicUsize = AtomicUsize::new(0);
    let tag = format!("app-{}", NEXT.fetch_add(1, Ordering::Relaxed));
    let store = crate::cache::scratch_store(&tag);
    let mut config = AppConfig::default();
    config.content_root = "fixtures".to_string();
    App::new(config, ThemeToggle::load(store), launch)
}
