//! Bead Grid Designer - Terminal pattern designer for fuse-bead pegboards
//!
//! Without a subcommand this opens the interactive editor on the design in
//! the configured storage file. Subcommands give headless, scriptable access
//! to the same design.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use beadgrid::cli::{
    CliError, ColorsArgs, ConfigArgs, ExportArgs, InspectArgs, NewArgs, PaintArgs, TemplateArgs,
};

/// Bead Grid Designer - design fuse-bead patterns across linked pegboards
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start a new single-template design
    New(NewArgs),
    /// Show templates, arrangement and bead quantities
    Inspect(InspectArgs),
    /// Paint or erase one bead, or fill an area
    Paint(PaintArgs),
    /// Add, remove, clear and list templates
    Template(TemplateArgs),
    /// Show the palette and manage custom colors
    Colors(ColorsArgs),
    /// Write the printable pattern sheet
    Export(ExportArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self) -> Result<(), CliError> {
        match self {
            Self::New(args) => args.execute(),
            Self::Inspect(args) => args.execute(),
            Self::Paint(args) => args.execute(),
            Self::Template(args) => args.execute(),
            Self::Colors(args) => args.execute(),
            Self::Export(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let filter = if cli.verbose { "debug" } else { "warn" };

    let Some(command) = cli.command else {
        return run_editor(filter);
    };

    // Headless commands log to stderr so stdout stays parseable
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code().code());
    }
    Ok(())
}

/// Logs to a file in the config directory; the terminal belongs to the editor.
#[cfg(feature = "ratatui")]
fn init_file_logging(filter: &str) -> Result<()> {
    use anyhow::Context;
    use beadgrid::config::Config;
    use std::fs::{self, File};
    use std::sync::Mutex;

    let log_path = Config::log_file_path()?;
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .context(format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = File::create(&log_path)
        .context(format!("Failed to create log file: {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .init();
    Ok(())
}

#[cfg(feature = "ratatui")]
fn run_editor(filter: &str) -> Result<()> {
    use beadgrid::config::Config;
    use beadgrid::editor::DesignEditor;
    use beadgrid::services::FileStore;
    use beadgrid::tui;

    if let Err(e) = init_file_logging(filter) {
        eprintln!("Warning: logging disabled: {e:#}");
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {e:#}");
            Config::default()
        }
    };

    let storage_file = config.storage_file()?;
    tracing::info!(path = %storage_file.display(), "opening design store");
    let mut editor = DesignEditor::new(Box::new(FileStore::new(storage_file)));
    if editor.has_saved() {
        editor.load();
    }

    let mut app_state = tui::AppState::new(editor, config);
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    result
}

#[cfg(not(feature = "ratatui"))]
fn run_editor(_filter: &str) -> Result<()> {
    anyhow::bail!("This build has no terminal editor; use a subcommand (see --help)")
}
