//! style-swap - find the text styles a design document uses and remap them in bulk.
//!
//! Plays the host's part from the command line: loads a document snapshot,
//! runs one session against it and optionally writes the result back out.

use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::process;

use style_swap::{Message, MemoryDocument, Result, Session, SwapSettings};

#[derive(Parser)]
#[command(name = "style-swap", version, about = "Remap text styles across a design document")]
struct Cli {
    /// Settings file (defaults to the per-user config directory)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every style used in the document
    Catalog {
        /// Document snapshot (JSON)
        document: PathBuf,
    },

    /// List styles whose name contains QUERY
    Suggest {
        document: PathBuf,
        query: String,
    },

    /// Remap styles by name
    Swap(SwapArgs),

    /// Print the effective settings
    Config {
        /// Also write them to the settings file
        #[arg(long)]
        init: bool,
    },
}

#[derive(Args)]
struct SwapArgs {
    document: PathBuf,

    /// JSON object mapping old style names to new ones, e.g. '{"Heading":"Title"}'
    #[arg(long, conflicts_with_all = ["map_file", "old", "new"])]
    map: Option<String>,

    /// File holding the JSON mapping
    #[arg(long, conflicts_with_all = ["old", "new"])]
    map_file: Option<PathBuf>,

    /// Style to replace
    #[arg(long)]
    old: Option<String>,

    /// Style to replace it with
    #[arg(long)]
    new: Option<String>,

    /// Write the updated document here
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => SwapSettings::load_from(path),
        None => SwapSettings::load(),
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_level.as_str()),
    )
    .init();

    match run(cli.command, settings, cli.settings) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Returns `false` when the session rejected its input.
fn run(command: Command, settings: SwapSettings, settings_path: Option<PathBuf>) -> Result<bool> {
    let mut progress = |visited: usize| log::debug!("scanned {} text nodes", visited);

    match command {
        Command::Catalog { document } => {
            let doc = MemoryDocument::load(&document)?;
            let session = Session::start(&doc, settings, &mut progress);
            for entry in session.catalog().entries() {
                println!("{}\t{}", entry.name, entry.id);
            }
            Ok(true)
        }
        Command::Suggest { document, query } => {
            let doc = MemoryDocument::load(&document)?;
            let session = Session::start(&doc, settings, &mut progress);
            for entry in session.suggest(&query) {
                println!("{}\t{}", entry.name, entry.id);
            }
            Ok(true)
        }
        Command::Swap(args) => {
            let mut doc = MemoryDocument::load(&args.document)?;
            let mut session = Session::start(&doc, settings, &mut progress);

            let message = match (args.map, args.map_file) {
                (Some(json), _) => Message::CheckAndUpdate { json },
                (None, Some(path)) => Message::CheckAndUpdate {
                    json: fs::read_to_string(path)?,
                },
                (None, None) => Message::RunWithParameters {
                    old_style: args.old,
                    new_style: args.new,
                },
            };

            let outcome = session.dispatch(&mut doc, message)?;
            for note in doc.notifications() {
                println!("{}", note);
            }

            if outcome.result.is_none() {
                return Ok(false);
            }
            if let Some(path) = args.output {
                doc.save(&path)?;
            }
            Ok(true)
        }
        Command::Config { init } => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
            if init {
                match settings_path {
                    Some(path) => settings.save_to(&path)?,
                    None => settings.save()?,
                }
            }
            Ok(true)
        }
    }
}
