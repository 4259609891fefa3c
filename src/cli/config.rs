//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use crate::models::RgbColor;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Store file holding the saved design
    #[arg(long, value_name = "FILE")]
    storage_file: Option<PathBuf>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Brush color selected at startup (#RRGGBB)
    #[arg(long, value_name = "HEX")]
    default_color: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    paths: PathsOutput,
    ui: UiOutput,
    editor: EditorOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    storage_file: String,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    show_help_on_startup: bool,
}

#[derive(Serialize, Debug)]
struct EditorOutput {
    default_color: String,
    show_individual_colors: bool,
    show_overall_colors: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let storage_file = config
            .storage_file()
            .map_err(|e| CliError::io(format!("Failed to resolve storage file: {e:#}")))?;

        if self.json {
            output_json(&config, &storage_file)?;
        } else {
            output_human_readable(&config, &storage_file);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.storage_file.is_none() && self.theme.is_none() && self.default_color.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --storage-file, --theme, or --default-color",
            ));
        }

        // Load current configuration
        let mut config = Config::load().unwrap_or_else(|_| Config::default());

        if let Some(path) = &self.storage_file {
            if path.is_dir() {
                return Err(CliError::validation(format!(
                    "Storage file path is a directory: {}",
                    path.display()
                )));
            }
            config.paths.storage_file = Some(path.clone());
        }

        if let Some(theme_str) = &self.theme {
            let theme: ThemeMode = theme_str
                .parse()
                .map_err(|e| CliError::validation(format!("{e}")))?;
            config.ui.theme_mode = theme;
        }

        if let Some(hex) = &self.default_color {
            let color = RgbColor::from_hex(hex)
                .map_err(|e| CliError::validation(format!("Invalid default color: {e}")))?;
            config.editor.default_color = color.to_hex();
        }

        // Save configuration
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config, storage_file: &std::path::Path) -> CliResult<()> {
    let output = ConfigOutput {
        paths: PathsOutput {
            storage_file: storage_file.to_string_lossy().to_string(),
        },
        ui: UiOutput {
            theme: config.ui.theme_mode.name().to_string(),
            show_help_on_startup: config.ui.show_help_on_startup,
        },
        editor: EditorOutput {
            default_color: config.editor.default_color.clone(),
            show_individual_colors: config.editor.show_individual_colors,
            show_overall_colors: config.editor.show_overall_colors,
        },
    };

    print_json(&output)
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config, storage_file: &std::path::Path) {
    println!("Bead Grid Designer Configuration");
    println!("================================");
    println!();

    println!("Paths:");
    println!("  Storage File: {}", storage_file.display());
    println!();

    println!("UI:");
    println!("  Theme: {}", config.ui.theme_mode.name());
    println!("  Show Help On Startup: {}", config.ui.show_help_on_startup);
    println!();

    println!("Editor:");
    println!("  Default Color: {}", config.editor.default_color);
    println!(
        "  Per-Template Quantities: {}",
        config.editor.show_individual_colors
    );
    println!("  Total Quantities: {}", config.editor.show_overall_colors);
}
