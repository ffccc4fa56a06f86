use clap::Parser;
use colored::Colorize;
use stickies_lib::{CoreConfig, store::PersistStatus};
use sysexits::ExitCode;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod notes;
mod render;

#[derive(Parser, Debug)]
#[command(name = "stickies")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: notes::Command,

    /// Override the storage slot notes are kept in
    #[arg(short, long, global = true)]
    slot: Option<String>,
}

fn main() -> ExitCode {
    human_panic::setup_panic!();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let cli = Cli::parse();

    let mut cfg = CoreConfig::load();
    if let Some(slot) = cli.slot {
        cfg.storage_key = slot;
    }

    let mut store = cfg.open_store();
    let code = notes::handle(&mut store, &cfg, cli.command);

    if let PersistStatus::Unsaved { reason } = store.persist_status() {
        eprintln!("{} {reason}", "Changes were not saved:".red());
        return ExitCode::IoErr;
    }

    code
}
