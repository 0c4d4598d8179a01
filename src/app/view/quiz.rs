use super::super::messages::Message;
use super::super::state::{
    App, CAPTION_FONT_SIZE_PX, CARD_SPACING_PX, LoadPhase, QUIZ_LOAD_ERROR, QUIZ_SCROLL_ID,
    QuizState,
};
use crate::quiz::{BlockBody, Content, ExplanationBlock, OptionMark, OptionRow, QuestionCard};
use iced::alignment::Vertical;
use iced::widget::{Column, button, column, container, horizontal_space, row, scrollable, text};
use iced::{Element, Length, Theme};

const QUESTION_FONT_SIZE_PX: f32 = 18.0;

impl App {
    pub(super) fn quiz_view<'a>(&'a self, state: &'a QuizState) -> Element<'a, Message> {
        let mut toolbar = row![].spacing(10).align_y(Vertical::Center);
        if state.return_to.is_some() {
            toolbar = toolbar.push(
                button("Back to knowledge checks")
                    .style(button::secondary)
                    .on_press(Message::BackToCatalog),
            );
        }
        toolbar = toolbar.push(horizontal_space());
        if state.phase == LoadPhase::Ready {
            toolbar = toolbar.push(text(state.progress_label()));
        }

        let body: Element<'a, Message> = match state.phase {
            LoadPhase::Loading => text("Loading questions...").into(),
            LoadPhase::Failed => container(text(QUIZ_LOAD_ERROR).style(text::danger))
                .padding(12)
                .style(container::bordered_box)
                .width(Length::Fill)
                .into(),
            LoadPhase::Ready if state.cards.is_empty() => {
                text("This knowledge check has no questions.").into()
            }
            LoadPhase::Ready => {
                let cards = Column::with_children(state.cards.iter().map(question_card))
                    .spacing(CARD_SPACING_PX)
                    .width(Length::Fill);
                scrollable(cards)
                    .id(QUIZ_SCROLL_ID.clone())
                    .height(Length::Fill)
                    .into()
            }
        };

        column![toolbar, body]
            .spacing(CARD_SPACING_PX)
            .height(Length::Fill)
            .into()
    }
}

fn question_card(card: &QuestionCard) -> Element<'_, Message> {
    let mut body = column![text(card.heading()).size(QUESTION_FONT_SIZE_PX)].spacing(8);
    if let Some(hint) = card.hint() {
        body = body.push(
            text(hint)
                .size(CAPTION_FONT_SIZE_PX)
                .style(text::secondary),
        );
    }
    for option in &card.options {
        body = body.push(option_row(card, option));
    }

    container(body)
        .padding(16)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

fn option_row<'a>(card: &QuestionCard, option: &'a OptionRow) -> Element<'a, Message> {
    let style: fn(&Theme, button::Status) -> button::Style = match option.mark {
        OptionMark::Correct => button::success,
        OptionMark::Incorrect => button::danger,
        OptionMark::Neutral => button::secondary,
    };
    let choice = button(text(&option.text))
        .width(Length::Fill)
        .style(style)
        .on_press(Message::OptionClicked {
            question_id: card.question_id,
            option_id: option.id.clone(),
            multi_select: card.multi_select,
        });

    if !option.selected {
        return choice.into();
    }

    let verdict = match option.mark {
        OptionMark::Correct => text("Correct").style(text::success),
        _ => text("Incorrect").style(text::danger),
    };
    let explanation = option
        .explanation
        .iter()
        .fold(column![verdict].spacing(8), |acc, block| acc.push(explanation_block(block)));

    column![
        choice,
        container(explanation)
            .padding([8, 16])
            .width(Length::Fill)
    ]
    .spacing(4)
    .into()
}

fn explanation_block(block: &ExplanationBlock) -> Element<'_, Message> {
    let label = text(&block.label).size(CAPTION_FONT_SIZE_PX + 1.0);
    let body: Element<'_, Message> = match &block.body {
        BlockBody::Content(Content::Text(paragraph)) => text(paragraph).into(),
        BlockBody::Content(Content::List(items)) => Column::with_children(
            items
                .iter()
                .map(|item| text(format!("\u{2022} {item}")).into()),
        )
        .spacing(2)
        .into(),
        BlockBody::Links(links) => Column::with_children(links.iter().map(|link| {
            button(text(&link.title))
                .style(button::text)
                .on_press(Message::CopyLink(link.url.clone()))
                .into()
        }))
        .push(
            text("Click a link to copy it.")
                .size(CAPTION_FONT_SIZE_PX)
                .style(text::secondary),
        )
        .spacing(2)
        .into(),
    };
    column![label, body].spacing(2).into()
}
