use iced::{
    Alignment, Color, Element,
    Length::{self, Fill},
    Task, Theme, application,
    widget::{button, center, column, container, mouse_area, opaque, pick_list, row, space, stack, text},
};
use stickies_lib::{
    CoreConfig, NoteStore,
    config::Features,
    view::{Board, Command, Refresh},
};
use strum::IntoEnumIterator;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::{
    components::{
        color_picker::{self, ColorPickerPanel},
        note_grid::{self, NoteGrid},
        search_bar::{self, SearchBar},
    },
    config::{GuiConfig, theme},
};

pub mod components;
pub mod config;

fn main() -> iced::Result {
    application(App::new, App::update, App::view)
        .theme(App::theme)
        .title(App::title)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    NewNoteButtonPressed,
    ThemeSelected(theme::Theme),
    // Components
    NoteGrid(note_grid::Message),
    SearchBar(search_bar::Message),
    ColorPicker(color_picker::Message),
}

struct App {
    title: String,
    cfg: GuiConfig,
    features: Features,
    store: NoteStore,
    board: Board,
    // Components
    note_grid: NoteGrid,
    search_bar: SearchBar,
    color_picker: ColorPickerPanel,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        // Human friendly panicking in release mode
        human_panic::setup_panic!();

        // Logging
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::TRACE)
            .with_env_filter(EnvFilter::from_default_env())
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");

        let core = CoreConfig::load();
        let cfg = GuiConfig::load();

        let mut app = Self {
            title: "Stickies".into(),
            features: core.features,
            store: core.open_store(),
            board: Board::new(&core.features),
            note_grid: NoteGrid::new(cfg.card_width()),
            search_bar: SearchBar::new(core.search.debounce()),
            color_picker: ColorPickerPanel::default(),
            cfg,
        };

        app.render();

        (app, Task::none())
    }

    // Update application state based on messages passed by view()
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NewNoteButtonPressed => {
                if self.features.color_picker {
                    self.color_picker.toggle();
                } else {
                    self.dispatch(Command::Create(None));
                }
                Task::none()
            }
            Message::ThemeSelected(theme) => {
                self.cfg.theme = theme;
                self.cfg.save();
                Task::none()
            }
            // Redirect messages to relevant child components
            Message::NoteGrid(message) => match self.note_grid.update(message) {
                note_grid::Action::None => Task::none(),
                note_grid::Action::Dispatch(command) => {
                    self.dispatch(command);
                    Task::none()
                }
            },
            Message::SearchBar(message) => match self.search_bar.update(message) {
                search_bar::Action::None => Task::none(),
                search_bar::Action::Run(task) => task.map(Message::SearchBar),
                search_bar::Action::Search(query) => {
                    self.board.set_query(query);
                    self.render();
                    Task::none()
                }
            },
            Message::ColorPicker(message) => match self.color_picker.update(message) {
                color_picker::Action::None => Task::none(),
                color_picker::Action::Dispatch(command) => {
                    self.dispatch(command);
                    Task::none()
                }
            },
        }
    }

    // Render the application and pass along messages from components to update()
    pub fn view(&self) -> Element<'_, Message> {
        let mut toolbar = row![button(text("+ New note")).on_press(Message::NewNoteButtonPressed)]
            .spacing(12)
            .padding(12)
            .align_y(Alignment::Center);

        toolbar = if self.board.search_enabled() {
            toolbar.push(self.search_bar.view().map(Message::SearchBar))
        } else {
            toolbar.push(space::horizontal())
        };

        toolbar = toolbar.push(pick_list(
            theme::Theme::iter().collect::<Vec<_>>(),
            Some(self.cfg.theme),
            Message::ThemeSelected,
        ));

        let content = column![toolbar, self.note_grid.view().map(Message::NoteGrid)].height(Fill);

        if self.color_picker.is_open() {
            modal(
                content,
                self.color_picker.view().map(Message::ColorPicker),
                Some(Message::ColorPicker(color_picker::Message::ClickedOutside)),
            )
        } else {
            content.into()
        }
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn theme(&self) -> Theme {
        self.cfg.theme()
    }

    fn dispatch(&mut self, command: Command) {
        if self.store.dispatch(command) == Refresh::Rerender {
            self.render();
        }
    }

    /// Rebuild every card from the store, applying the current search.
    fn render(&mut self) {
        self.note_grid.rebuild(self.board.visible(&self.store));
    }
}

pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_click_outside: Option<Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let mouse_area = mouse_area(center(opaque(content)).style(|_theme| {
        container::Style {
            background: Some(
                Color {
                    a: 0.6,
                    ..Color::BLACK
                }
                .into(),
            ),
            ..container::Style::default()
        }
    }));

    stack![
        base.into(),
        opaque(if let Some(msg) = on_click_outside {
            mouse_area.on_press(msg)
        } else {
            mouse_area
        })
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
