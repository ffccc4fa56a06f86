use iced::{
    Element, border,
    widget::{Row, button, column, container, text},
};
use stickies_lib::{
    Swatch,
    view::{ColorPicker, Command},
};

use crate::components::to_iced_color;

#[derive(Debug, Clone)]
pub enum Message {
    SwatchSelected(Swatch),
    ClickedOutside,
}

/// Action used for communicating with the parent component
#[derive(Debug)]
pub enum Action {
    None,
    Dispatch(Command),
}

/// Popover offering the preset colours for a new note.
#[derive(Debug, Default)]
pub struct ColorPickerPanel {
    picker: ColorPicker,
}

impl ColorPickerPanel {
    pub fn is_open(&self) -> bool {
        self.picker.is_open()
    }

    pub fn toggle(&mut self) {
        self.picker.toggle();
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::SwatchSelected(swatch) => Action::Dispatch(self.picker.select(swatch)),
            Message::ClickedOutside => {
                self.picker.dismiss();
                Action::None
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        container(
            column![
                text("Pick a colour"),
                Row::with_children(Swatch::all().map(swatch_button)).spacing(8),
            ]
            .spacing(12),
        )
        .padding(16)
        .style(container::rounded_box)
        .into()
    }
}

fn swatch_button(swatch: Swatch) -> Element<'static, Message> {
    let color = to_iced_color(&swatch.into());

    button(text(""))
        .width(32)
        .height(32)
        .style(move |_theme, _status| button::Style {
            background: Some(color.into()),
            border: border::rounded(16),
            ..button::Style::default()
        })
        .on_press(Message::SwatchSelected(swatch))
        .into()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_select_closes_and_creates() {
        let mut panel = ColorPickerPanel::default();
        panel.toggle();

        let action = panel.update(Message::SwatchSelected(Swatch::Orange));

        assert!(!panel.is_open());
        assert!(matches!(
            action,
            Action::Dispatch(Command::Create(Some(color))) if color == stickies_lib::Color::from(Swatch::Orange)
        ));
    }

    #[test]
    fn test_click_outside_dismisses() {
        let mut panel = ColorPickerPanel::default();
        panel.toggle();

        assert!(matches!(
            panel.update(Message::ClickedOutside),
            Action::None
        ));
        assert!(!panel.is_open());
    }
}
