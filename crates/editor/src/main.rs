use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use shapelab_lib::command::execute_json_batch;
use shapelab_lib::library::LibraryView;
use shapelab_lib::persistence::{FileStorage, NavigationHint, PersistenceStore};
use shapelab_lib::session::EditorSession;
use shapelab_lib::state::EditorSettings;

#[derive(Parser)]
#[command(name = "shapelab", version, about = "Compose primitive scenes and keep named snapshots")]
struct Cli {
    /// Directory holding saved scenes (defaults to the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a JSON array of editor commands and print the responses
    Run {
        /// Script file with the command array
        script: PathBuf,
    },
    /// List saved designs, most recent first
    List,
    /// Open a saved design in the next editor session
    Open {
        /// Library index (0 = most recent)
        index: usize,
    },
    /// Print the records of the most recent saved design
    Export,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shapelab=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = EditorSettings::load();

    let Some(storage) = resolve_storage(&cli, &settings) else {
        tracing::error!("No data directory available; pass --data-dir");
        return ExitCode::FAILURE;
    };

    match run(cli.command, storage, settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            tracing::error!("{msg}");
            ExitCode::FAILURE
        }
    }
}

fn resolve_storage(cli: &Cli, settings: &EditorSettings) -> Option<FileStorage> {
    cli.data_dir
        .clone()
        .or_else(|| settings.data_dir.clone())
        .map(FileStorage::new)
        .or_else(FileStorage::open_default)
}

fn run(command: Command, storage: FileStorage, settings: EditorSettings) -> Result<(), String> {
    match command {
        Command::Run { script } => {
            let json = std::fs::read_to_string(&script)
                .map_err(|e| format!("Failed to read script {}: {e}", script.display()))?;
            let mut session = EditorSession::with_settings(storage, settings);
            let responses = execute_json_batch(&mut session, &json)?;
            print_json(&responses)
        }

        Command::List => {
            let store = PersistenceStore::open(storage);
            match shapelab_lib::library::store_library_view(&store) {
                LibraryView::Empty { message } => println!("{message}"),
                LibraryView::Entries { entries } => {
                    for entry in entries {
                        println!(
                            "{:>3}  {:<24}  {}  ({} objects)",
                            entry.index, entry.name, entry.saved_at_display, entry.object_count
                        );
                    }
                }
            }
            Ok(())
        }

        Command::Open { index } => {
            let store = PersistenceStore::open(storage);
            let saved = store.load_at(index).map_err(|e| e.to_string())?;
            NavigationHint::request_open(store.storage(), index).map_err(|e| e.to_string())?;
            tracing::info!("Next session opens {:?}", saved.name);
            Ok(())
        }

        Command::Export => {
            let store = PersistenceStore::open(storage);
            let latest = store.load_latest().map_err(|e| e.to_string())?;
            tracing::info!("Exporting {:?} ({} objects)", latest.name, latest.data.len());
            print_json(&latest.data)
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| format!("Failed to encode output: {e}"))?;
    println!("{json}");
    Ok(())
}
