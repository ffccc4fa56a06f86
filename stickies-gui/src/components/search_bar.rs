use std::time::Duration;

use iced::{Element, Task, widget::text_input};
use stickies_lib::debounce::Debouncer;

#[derive(Debug, Clone)]
pub enum Message {
    Input(String),
    /// The quiet period after an input has passed, or `None` if a later input superseded it
    Settled(Option<String>),
}

/// Action used for communicating with the parent component
pub enum Action {
    None,
    Run(Task<Message>),
    Search(String),
}

pub struct SearchBar {
    input: String,
    debouncer: Debouncer,
}

impl SearchBar {
    pub fn new(delay: Duration) -> Self {
        Self {
            input: String::new(),
            debouncer: Debouncer::new(delay),
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::Input(text) => {
                self.input.clone_from(&text);
                Action::Run(Task::perform(
                    self.debouncer.schedule(text),
                    Message::Settled,
                ))
            }
            Message::Settled(Some(query)) => Action::Search(query),
            Message::Settled(None) => Action::None,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        text_input("Search notes...", &self.input)
            .on_input(Message::Input)
            .padding(8)
            .into()
    }
}
