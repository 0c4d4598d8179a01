use super::super::messages::{Message, TopicChoice};
use super::super::state::{
    App, CAPTION_FONT_SIZE_PX, CARD_SPACING_PX, CATALOG_LOAD_ERROR, CatalogState, LoadPhase,
};
use crate::catalog::{CatalogEntry, SORT_MODES};
use iced::alignment::Vertical;
use iced::widget::{Column, button, column, container, pick_list, row, scrollable, text, text_input};
use iced::{Element, Length};

impl App {
    pub(super) fn catalog_view<'a>(&'a self, state: &'a CatalogState) -> Element<'a, Message> {
        match state.phase {
            LoadPhase::Loading => text("Loading knowledge checks...").into(),
            LoadPhase::Failed => text(CATALOG_LOAD_ERROR).style(text::danger).into(),
            LoadPhase::Ready => {
                let mut page = column![catalog_controls(state)].spacing(CARD_SPACING_PX);
                if let Some(link) = &state.last_link {
                    page = page.push(
                        text(format!("Last opened: {link}"))
                            .size(CAPTION_FONT_SIZE_PX)
                            .style(text::secondary),
                    );
                }
                page.push(catalog_cards(state)).height(Length::Fill).into()
            }
        }
    }
}

fn catalog_controls(state: &CatalogState) -> Element<'_, Message> {
    let catalog = &state.catalog;

    let search = text_input("Search by title or topic", catalog.search())
        .on_input(Message::CatalogSearchChanged)
        .width(Length::FillPortion(3));

    let topics: Vec<TopicChoice> = std::iter::once(TopicChoice::Any)
        .chain(catalog.topics().iter().cloned().map(TopicChoice::Topic))
        .collect();
    let topic = pick_list(
        topics,
        Some(TopicChoice::from_filter(catalog.topic())),
        Message::CatalogTopicSelected,
    )
    .width(Length::FillPortion(1));

    let sort = pick_list(SORT_MODES, Some(catalog.sort()), Message::CatalogSortSelected)
        .width(Length::FillPortion(1));

    row![search, topic, sort]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .into()
}

fn catalog_cards(state: &CatalogState) -> Element<'_, Message> {
    let visible = state.catalog.visible();
    if visible.is_empty() {
        return text("No knowledge checks found").into();
    }

    let cards = Column::with_children(
        visible
            .iter()
            .enumerate()
            .map(|(idx, entry)| catalog_card(entry, idx)),
    )
    .spacing(CARD_SPACING_PX)
    .width(Length::Fill);

    scrollable(cards).height(Length::Fill).into()
}

fn catalog_card(entry: &CatalogEntry, idx: usize) -> Element<'_, Message> {
    let body = column![
        text(&entry.title).size(18.0),
        text(&entry.topic)
            .size(CAPTION_FONT_SIZE_PX)
            .style(text::secondary),
    ]
    .spacing(4);

    button(container(body).padding(8).width(Length::Fill))
        .style(button::secondary)
        .width(Length::Fill)
        .on_press(Message::OpenKnowledgeCheck(idx))
        .into()
}
