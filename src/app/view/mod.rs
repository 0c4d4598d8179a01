mod catalog;
mod gallery;
mod quiz;

use super::messages::Message;
use super::state::{App, HEADING_FONT_SIZE_PX, PAGE_PADDING_PX, PageState};
use iced::alignment::Vertical;
use iced::widget::{Column, button, column, container, horizontal_space, row, text};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let page: Element<'_, Message> = match &self.page {
            PageState::Gallery(state) => self.gallery_view(state),
            PageState::Quiz(state) => self.quiz_view(state),
            PageState::Catalog(state) => self.catalog_view(state),
        };

        let mut header = row![
            text(self.page_heading()).size(HEADING_FONT_SIZE_PX),
            horizontal_space()
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill);

        if self.config.show_theme_toggle {
            header = header.push(
                button(self.theme.button_label())
                    .style(button::secondary)
                    .on_press(Message::ToggleTheme),
            );
        }

        let content: Column<'_, Message> = column![header, page]
            .spacing(12)
            .padding(PAGE_PADDING_PX)
            .height(Length::Fill);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    pub fn title(&self) -> String {
        self.window_title()
    }

    fn page_heading(&self) -> String {
        match &self.page {
            PageState::Gallery(_) => "Image Gallery".to_string(),
            PageState::Quiz(state) => state.title.clone(),
            PageState::Catalog(_) => "Knowledge Checks".to_string(),
        }
    }
}
