//! Canopy CLI - replays scripted host input through the tree engine.
//!
//! Usage: canopy <COMMAND>
//!
//! Commands:
//!   replay  Run a script of clicks and key presses, printing NDJSON events
//!   check   Validate a tree document

mod paths;
mod render;
mod script;

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use canopy::{JsonEventSink, TreeDocument};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

/// Canopy - tree selection engine host
#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level written to the log file
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,

    /// Log file (defaults to the platform cache directory)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a script against a tree, writing events to stdout as NDJSON
    Replay {
        /// Tree document (JSON)
        tree: PathBuf,

        /// Script file; reads stdin when omitted
        script: Option<PathBuf>,

        /// Print the visible tree to stderr when the script finishes
        #[arg(long)]
        print_state: bool,

        /// Use ASCII icons when printing the tree
        #[arg(long)]
        ascii: bool,
    },

    /// Validate a tree document
    Check {
        /// Tree document (JSON)
        tree: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Replay {
            tree,
            script,
            print_state,
            ascii,
        } => replay(&tree, script.as_deref(), print_state, ascii),
        Commands::Check { tree } => check(&tree),
    }
}

fn init_logging(level: LogLevel, log_file: Option<&Path>) -> Result<()> {
    if level == LogLevel::Off {
        return Ok(());
    }
    let Some(path) = log_file.map(Path::to_path_buf).or_else(paths::log_file) else {
        eprintln!("No cache directory available, logging disabled");
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    WriteLogger::init(level.into(), Config::default(), file)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;
    Ok(())
}

fn load_document(path: &Path) -> Result<TreeDocument> {
    let file =
        File::open(path).with_context(|| format!("Failed to open tree {}", path.display()))?;
    TreeDocument::from_reader(file).with_context(|| format!("Invalid tree {}", path.display()))
}

fn replay(tree_path: &Path, script_path: Option<&Path>, print_state: bool, ascii: bool) -> Result<()> {
    let document = load_document(tree_path)?;
    info!(
        "Loaded {} nodes from {} ({} selection)",
        document.node_count(),
        tree_path.display(),
        document.config.selection_mode()
    );

    let source = match script_path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read script from stdin")?;
            buf
        }
    };
    let commands = script::parse_script(&source)?;

    let mut tree = document.into_engine();
    tree.set_sink(JsonEventSink::stdout());
    for command in &commands {
        script::apply(&mut tree, command);
    }
    info!("Replayed {} commands", commands.len());

    if print_state {
        eprint!("{}", render::render_tree(&tree, !ascii));
    }
    Ok(())
}

fn check(tree_path: &Path) -> Result<()> {
    let document = load_document(tree_path)?;
    println!(
        "{}: {} nodes, {} selection",
        tree_path.display(),
        document.node_count(),
        document.config.selection_mode()
    );
    Ok(())
}
