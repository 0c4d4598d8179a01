use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::ToggleTheme => self.handle_toggle_theme(),
            Message::KeyPressed { key, modifiers } => {
                if let Some(mapped) = self.shortcut_message_for_key(key, modifiers) {
                    return self.reduce(mapped);
                }
            }
            Message::GalleryLoaded { images, error } => {
                self.handle_gallery_loaded(images, error, &mut effects);
            }
            Message::GallerySearchChanged(term) => self.handle_gallery_search_changed(term),
            Message::ViewModeSelected(mode) => self.handle_view_mode_selected(mode),
            Message::ImageLoaded { file, bytes } => self.handle_image_loaded(file, bytes),
            Message::OpenLightbox(index) => self.handle_open_lightbox(index),
            Message::NavigateLightbox(direction) => self.handle_navigate_lightbox(direction),
            Message::CloseLightbox(origin) => self.handle_close_lightbox(origin),
            Message::DownloadCurrent => self.handle_download_current(&mut effects),
            Message::DownloadFinished { path, error } => self.handle_download_finished(path, error),
            Message::QuizLoaded { questions, error } => self.handle_quiz_loaded(questions, error),
            Message::OptionClicked {
                question_id,
                option_id,
                multi_select,
            } => self.handle_option_clicked(question_id, option_id, multi_select),
            Message::CopyLink(url) => self.handle_copy_link(url, &mut effects),
            Message::BackToCatalog => self.handle_back_to_catalog(),
            Message::CatalogLoaded { entries, error } => {
                self.handle_catalog_loaded(entries, error)
            }
            Message::CatalogSearchChanged(term) => self.handle_catalog_search_changed(term),
            Message::CatalogTopicSelected(choice) => self.handle_catalog_topic_selected(choice),
            Message::CatalogSortSelected(mode) => self.handle_catalog_sort_selected(mode),
            Message::OpenKnowledgeCheck(index) => {
                self.handle_open_knowledge_check(index, &mut effects)
            }
        }

        effects
    }

    fn handle_toggle_theme(&mut self) {
        self.theme.toggle();
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::super::state::{LaunchPage, test_app};
    use super::*;
    use crate::gallery::FolderSelection;
    use iced::keyboard::{Key, Modifiers, key};

    #[test]
    fn toggle_theme_flips_between_light_and_dark() {
        let (mut app, _) = test_app(LaunchPage::Catalog);
        let before = app.theme.is_dark();
        assert!(app.reduce(Message::ToggleTheme).is_empty());
        assert_ne!(app.theme.is_dark(), before);
        app.reduce(Message::ToggleTheme);
        assert_eq!(app.theme.is_dark(), before);
    }

    #[test]
    fn unmapped_key_is_ignored() {
        let (mut app, _) = test_app(LaunchPage::Gallery {
            folder: FolderSelection::All,
        });
        let effects = app.reduce(Message::KeyPressed {
            key: Key::Named(key::Named::Escape),
            modifiers: Modifiers::default(),
        });
        assert!(effects.is_empty());
        assert!(!app.lightbox_open());
    }
}
