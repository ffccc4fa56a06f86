use clap::Subcommand;
use stickies_lib::{
    Color, CoreConfig, NoteId, NoteStore, Swatch,
    view::{self, Board, Card},
};
use sysexits::ExitCode;
use tracing::warn;

use crate::render::{print_card, print_swatch};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List notes, newest first
    List {
        /// Only show notes containing this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Create a new note
    Add {
        /// A swatch name or a hex colour. Defaults to the configured colour.
        #[arg(short, long, value_parser = parse_color)]
        color: Option<Color>,
        /// Initial content, instead of the placeholder
        text: Option<String>,
    },
    /// Replace the content of a note
    Edit { id: NoteId, text: String },
    /// Star or unstar a note
    Star { id: NoteId },
    /// Change the colour of a note
    Color {
        id: NoteId,
        #[arg(value_parser = parse_color)]
        color: Color,
    },
    /// Delete a note
    Delete { id: NoteId },
    /// List the preset colours
    Swatches,
}

pub fn handle(store: &mut NoteStore, cfg: &CoreConfig, cmd: Command) -> ExitCode {
    match cmd {
        Command::List { search } => {
            let mut board = Board::new(&cfg.features);
            if let Some(query) = search {
                if !board.search_enabled() {
                    warn!("Search is disabled in the configuration, listing every note");
                }
                board.set_query(query);
            }

            let cards = board.visible(store);
            if cards.is_empty() {
                println!("No notes");
            }
            for card in &cards {
                print_card(card);
            }
        }
        Command::Add { color, text } => {
            store.dispatch(view::Command::Create(color));

            let created = store.notes().first().map(|n| n.id());
            if let (Some(id), Some(text)) = (created, text) {
                store.dispatch(view::Command::UpdateContent(id, text));
            }
            if let Some(note) = store.notes().first() {
                print_card(&Card::from(note));
            }
        }
        Command::Edit { id, text } => {
            return apply(store, id, view::Command::UpdateContent(id, text));
        }
        Command::Star { id } => return apply(store, id, view::Command::ToggleStar(id)),
        Command::Color { id, color } => {
            return apply(store, id, view::Command::SetColor(id, color));
        }
        Command::Delete { id } => {
            if store.get(id).is_none() {
                eprintln!("No note with id {id}");
                return ExitCode::DataErr;
            }
            store.dispatch(view::Command::Delete(id));
            println!("Deleted {id}");
        }
        Command::Swatches => {
            for swatch in Swatch::all() {
                print_swatch(swatch);
            }
        }
    }

    ExitCode::Ok
}

/// Apply a command addressed to an existing note and show the result.
fn apply(store: &mut NoteStore, id: NoteId, command: view::Command) -> ExitCode {
    if store.get(id).is_none() {
        eprintln!("No note with id {id}");
        return ExitCode::DataErr;
    }

    store.dispatch(command);

    if let Some(note) = store.get(id) {
        print_card(&Card::from(note));
    }

    ExitCode::Ok
}

fn parse_color(input: &str) -> Result<Color, String> {
    Color::from_user_input(input)
        .ok_or_else(|| format!("'{input}' is neither a swatch name nor a #rrggbb colour"))
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use stickies_lib::storage::MemoryStorage;

    use super::*;

    fn mock() -> NoteStore {
        NoteStore::open(Arc::new(MemoryStorage::new()), "notes")
    }

    #[test]
    fn test_add_with_text() {
        let mut store = mock();
        let cfg = CoreConfig::default();

        let code = handle(
            &mut store,
            &cfg,
            Command::Add {
                color: Some(Swatch::Blue.into()),
                text: Some("Buy milk".into()),
            },
        );

        assert_eq!(code, ExitCode::Ok);
        let note = store.notes().first().unwrap();
        assert_eq!(note.content(), "Buy milk");
        assert_eq!(note.color(), &Color::from(Swatch::Blue));
    }

    #[test]
    fn test_unknown_id() {
        let mut store = mock();
        let cfg = CoreConfig::default();

        let code = handle(&mut store, &cfg, Command::Star { id: NoteId::from(9) });
        assert_eq!(code, ExitCode::DataErr);

        let code = handle(&mut store, &cfg, Command::Delete { id: NoteId::from(9) });
        assert_eq!(code, ExitCode::DataErr);
    }

    #[test]
    fn test_star_and_delete() {
        let mut store = mock();
        let cfg = CoreConfig::default();
        let id = store.create(None).id();

        assert_eq!(handle(&mut store, &cfg, Command::Star { id }), ExitCode::Ok);
        assert!(store.get(id).unwrap().starred());

        assert_eq!(handle(&mut store, &cfg, Command::Delete { id }), ExitCode::Ok);
        assert!(store.is_empty());
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("pink"), Ok(Swatch::Pink.into()));
        assert_eq!(parse_color("#010203"), Ok(Color::new("#010203")));
        assert!(parse_color("chartreuse-ish").is_err());
    }
}
