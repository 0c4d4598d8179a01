use super::super::messages::Message;
use super::super::state::{
    App, CAPTION_FONT_SIZE_PX, CARD_SPACING_PX, GALLERY_LOAD_ERROR, GALLERY_SCROLL_ID,
    GalleryState, IMAGE_MISSING_LABEL, ImageSlot, LIST_THUMBNAIL_HEIGHT_PX, LoadPhase,
    THUMBNAIL_HEIGHT_PX, VIEW_MODES,
};
use crate::config::ViewMode;
use crate::gallery::{ClickOrigin, Direction, ImageEntry};
use iced::alignment::Vertical;
use iced::widget::{
    Column, Row, Space, button, column, container, horizontal_space, image, mouse_area, opaque,
    row, scrollable, stack, text, text_input,
};
use iced::{Color, Element, Length, Theme};

const LIGHTBOX_IMAGE_HEIGHT_PX: f32 = 520.0;

impl App {
    pub(super) fn gallery_view<'a>(&'a self, state: &'a GalleryState) -> Element<'a, Message> {
        let body: Element<'a, Message> = match state.phase {
            LoadPhase::Loading => text("Loading images...").into(),
            LoadPhase::Failed => text(GALLERY_LOAD_ERROR).style(text::danger).into(),
            LoadPhase::Ready => self.gallery_body(state),
        };

        let page = column![self.gallery_toolbar(state), body]
            .spacing(CARD_SPACING_PX)
            .height(Length::Fill);

        if state.gallery.is_lightbox_open() {
            stack![page, lightbox(state)].into()
        } else {
            page.into()
        }
    }

    fn gallery_toolbar<'a>(&'a self, state: &'a GalleryState) -> Element<'a, Message> {
        let search = text_input("Search images or folders", state.gallery.term())
            .on_input(Message::GallerySearchChanged)
            .width(Length::FillPortion(3));

        let modes = VIEW_MODES.iter().fold(Row::new().spacing(4), |acc, mode| {
            let active = *mode == state.view_mode;
            let style: fn(&Theme, button::Status) -> button::Style = if active {
                button::primary
            } else {
                button::secondary
            };
            acc.push(
                button(text(mode.to_string()))
                    .style(style)
                    .on_press(Message::ViewModeSelected(*mode)),
            )
        });

        let shown = state.gallery.filtered().len();
        let total = state.gallery.all().len();
        let noun = if total == 1 { "image" } else { "images" };
        let counter = text(if shown == total {
            format!("{total} {noun}")
        } else {
            format!("{shown} of {total} {noun}")
        });

        row![search, modes, horizontal_space(), counter]
            .spacing(10)
            .align_y(Vertical::Center)
            .width(Length::Fill)
            .into()
    }

    fn gallery_body<'a>(&'a self, state: &'a GalleryState) -> Element<'a, Message> {
        let images = state.gallery.filtered();
        if images.is_empty() {
            return text("No images found").into();
        }

        let cards: Element<'a, Message> = match state.view_mode {
            ViewMode::Grid => {
                let columns = self.config.grid_columns.max(1);
                let rows = images
                    .chunks(columns)
                    .enumerate()
                    .map(|(chunk_idx, chunk)| {
                        let mut cells: Vec<Element<'a, Message>> = chunk
                            .iter()
                            .enumerate()
                            .map(|(offset, entry)| {
                                grid_card(state, entry, chunk_idx * columns + offset)
                            })
                            .collect();
                        while cells.len() < columns {
                            cells.push(Space::with_width(Length::FillPortion(1)).into());
                        }
                        Row::with_children(cells).spacing(CARD_SPACING_PX).into()
                    })
                    .collect::<Vec<Element<'a, Message>>>();
                Column::with_children(rows).spacing(CARD_SPACING_PX).into()
            }
            ViewMode::List => Column::with_children(
                images
                    .iter()
                    .enumerate()
                    .map(|(idx, entry)| list_row(state, entry, idx)),
            )
            .spacing(6)
            .into(),
        };

        scrollable(container(cards).width(Length::Fill))
            .id(GALLERY_SCROLL_ID.clone())
            .height(Length::Fill)
            .into()
    }
}

fn thumbnail<'a>(state: &'a GalleryState, file: &str, height: f32) -> Element<'a, Message> {
    match state.slot(file) {
        ImageSlot::Ready(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .into(),
        ImageSlot::Missing => placeholder(IMAGE_MISSING_LABEL, height),
        ImageSlot::Loading => placeholder("Loading...", height),
    }
}

fn placeholder<'a>(label: &'a str, height: f32) -> Element<'a, Message> {
    container(text(label).size(CAPTION_FONT_SIZE_PX))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(height))
        .style(container::bordered_box)
        .into()
}

fn grid_card<'a>(state: &'a GalleryState, entry: &'a ImageEntry, idx: usize) -> Element<'a, Message> {
    let body = column![
        thumbnail(state, &entry.file, THUMBNAIL_HEIGHT_PX),
        text(&entry.name),
        text(&entry.folder)
            .size(CAPTION_FONT_SIZE_PX)
            .style(text::secondary),
    ]
    .spacing(4);

    button(body)
        .style(button::text)
        .width(Length::FillPortion(1))
        .on_press(Message::OpenLightbox(idx))
        .into()
}

fn list_row<'a>(state: &'a GalleryState, entry: &'a ImageEntry, idx: usize) -> Element<'a, Message> {
    let body = row![
        container(thumbnail(state, &entry.file, LIST_THUMBNAIL_HEIGHT_PX))
            .width(Length::Fixed(LIST_THUMBNAIL_HEIGHT_PX * 1.5)),
        column![
            text(&entry.name),
            text(&entry.folder)
                .size(CAPTION_FONT_SIZE_PX)
                .style(text::secondary),
        ]
        .spacing(2),
    ]
    .spacing(12)
    .align_y(Vertical::Center);

    button(body)
        .style(button::text)
        .width(Length::Fill)
        .on_press(Message::OpenLightbox(idx))
        .into()
}

/// Backdrop and panel. Presses on the panel are captured by its own
/// `mouse_area`, so only presses outside it reach the backdrop.
fn lightbox(state: &GalleryState) -> Element<'_, Message> {
    let Some(current) = state.gallery.current() else {
        return Space::new(Length::Shrink, Length::Shrink).into();
    };

    let header = row![
        text(state.gallery.counter_label().unwrap_or_default()),
        horizontal_space(),
        button("Close")
            .style(button::secondary)
            .on_press(Message::CloseLightbox(None)),
    ]
    .align_y(Vertical::Center);

    let controls = row![
        button("Previous").on_press(Message::NavigateLightbox(Direction::Previous)),
        button("Next").on_press(Message::NavigateLightbox(Direction::Next)),
        horizontal_space(),
        button("Download")
            .style(button::success)
            .on_press(Message::DownloadCurrent),
    ]
    .spacing(8)
    .align_y(Vertical::Center);

    let mut panel = column![
        header,
        thumbnail(state, &current.file, LIGHTBOX_IMAGE_HEIGHT_PX),
        text(&current.name),
        text(&current.folder)
            .size(CAPTION_FONT_SIZE_PX)
            .style(text::secondary),
        controls,
    ]
    .spacing(10)
    .max_width(900.0);

    if let Some(status) = &state.status {
        panel = panel.push(text(status).size(CAPTION_FONT_SIZE_PX));
    }

    let content = mouse_area(container(panel).padding(16).style(container::rounded_box))
        .on_press(Message::CloseLightbox(Some(ClickOrigin::Content)));

    let backdrop = container(content)
        .center(Length::Fill)
        .padding(24)
        .style(|_theme| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.8).into()),
            ..container::Style::default()
        });

    opaque(mouse_area(backdrop).on_press(Message::CloseLightbox(Some(ClickOrigin::Backdrop))))
}
