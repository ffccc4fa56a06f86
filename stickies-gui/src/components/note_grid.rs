use iced::{
    Alignment, Color, Element, Length, border,
    widget::{Row, button, center, column, container, row, scrollable, space, text, text_editor},
};
use stickies_lib::{
    NoteId,
    view::{Card, Command},
};

use crate::components::to_iced_color;

#[derive(Debug, Clone)]
pub enum Message {
    Edited(NoteId, text_editor::Action),
    StarPressed(NoteId),
    DeletePressed(NoteId),
}

/// Action used for communicating with the parent component
#[derive(Debug)]
pub enum Action {
    None,
    Dispatch(Command),
}

struct CardState {
    card: Card,
    editor: text_editor::Content,
}

/// The wrapping grid of note cards.
pub struct NoteGrid {
    cards: Vec<CardState>,
    card_width: f32,
}

impl NoteGrid {
    pub fn new(card_width: f32) -> Self {
        Self {
            cards: Vec::new(),
            card_width,
        }
    }

    /// Discard every card and build a fresh set.
    pub fn rebuild(&mut self, cards: Vec<Card>) {
        self.cards = cards
            .into_iter()
            .map(|card| CardState {
                editor: text_editor::Content::with_text(&card.content),
                card,
            })
            .collect();
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::Edited(id, action) => {
                let Some(state) = self.cards.iter_mut().find(|s| s.card.id == id) else {
                    return Action::None;
                };

                let is_edit = action.is_edit();
                state.editor.perform(action);

                // Cursor movement and selection don't change the note
                if !is_edit {
                    return Action::None;
                }

                let content = state.editor.text();
                state.card.content.clone_from(&content);

                Action::Dispatch(Command::UpdateContent(id, content))
            }
            Message::StarPressed(id) => Action::Dispatch(Command::ToggleStar(id)),
            Message::DeletePressed(id) => Action::Dispatch(Command::Delete(id)),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        if self.cards.is_empty() {
            return center(text("No notes yet")).into();
        }

        let cards = self.cards.iter().map(|state| self.card(state));

        scrollable(Row::with_children(cards).spacing(16).padding(16).wrap())
            .height(Length::Fill)
            .into()
    }

    fn card<'a>(&'a self, state: &'a CardState) -> Element<'a, Message> {
        let id = state.card.id;
        let background = to_iced_color(&state.card.background);

        container(
            column![
                text_editor(&state.editor)
                    .placeholder("Empty note")
                    .on_action(move |action| Message::Edited(id, action))
                    .height(160)
                    .style(|theme, status| text_editor::Style {
                        background: Color::TRANSPARENT.into(),
                        value: Color::BLACK,
                        ..text_editor::default(theme, status)
                    }),
                row![
                    text(&state.card.date).size(12),
                    space::horizontal(),
                    button(text(state.card.star_glyph()).size(18))
                        .style(button::text)
                        .on_press(Message::StarPressed(id)),
                    button(text("✕").size(16))
                        .style(button::text)
                        .on_press(Message::DeletePressed(id)),
                ]
                .align_y(Alignment::Center),
            ]
            .spacing(8),
        )
        .padding(12)
        .width(self.card_width)
        .style(move |_theme| container::Style {
            background: Some(background.into()),
            text_color: Some(Color::BLACK),
            border: border::rounded(8),
            ..container::Style::default()
        })
        .into()
    }
}
