//! Bead palette and custom color commands.

use crate::cli::common::{print_json, save_design, slot_index, CliError, CliResult, StoreArgs};
use crate::models::{BeadPalette, RgbColor};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Show the bead palette and manage custom colors
#[derive(Debug, Clone, Args)]
pub struct ColorsArgs {
    /// Colors subcommand
    #[command(subcommand)]
    pub command: ColorsCommand,
}

/// Colors subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ColorsCommand {
    /// List palette colors and custom slots
    List(ColorsListArgs),
    /// Store a color in a custom slot
    Set(ColorsSetArgs),
    /// Empty a custom slot
    Clear(ColorsClearArgs),
}

/// List colors
#[derive(Debug, Clone, Args)]
pub struct ColorsListArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Set a custom color
#[derive(Debug, Clone, Args)]
pub struct ColorsSetArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Custom slot (1-10)
    #[arg(long, value_name = "N")]
    pub slot: usize,

    /// Color (#RRGGBB)
    #[arg(long, value_name = "HEX")]
    pub color: String,
}

/// Clear a custom color
#[derive(Debug, Clone, Args)]
pub struct ColorsClearArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Custom slot (1-10)
    #[arg(long, value_name = "N")]
    pub slot: usize,
}

#[derive(Debug, Serialize)]
struct PaletteEntry {
    name: String,
    color: RgbColor,
}

#[derive(Debug, Serialize)]
struct CustomEntry {
    slot: usize,
    name: String,
    color: Option<RgbColor>,
}

#[derive(Debug, Serialize)]
struct ColorsOutput {
    palette: Vec<PaletteEntry>,
    custom: Vec<CustomEntry>,
}

impl ColorsArgs {
    /// Execute the colors command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ColorsCommand::List(args) => args.execute(),
            ColorsCommand::Set(args) => args.execute(),
            ColorsCommand::Clear(args) => args.execute(),
        }
    }
}

impl ColorsListArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let (_, loaded) = self.store.load()?;
        let palette = BeadPalette::default();
        let custom = loaded.custom_colors.unwrap_or_default();

        let output = ColorsOutput {
            palette: palette
                .colors()
                .map(|c| PaletteEntry {
                    name: c.name.clone(),
                    color: c.color,
                })
                .collect(),
            custom: custom
                .slots()
                .iter()
                .enumerate()
                .map(|(i, color)| CustomEntry {
                    slot: i + 1,
                    name: format!("Custom {}", i + 1),
                    color: *color,
                })
                .collect(),
        };

        if self.json {
            return print_json(&output);
        }

        println!("Bead palette:");
        for (row_index, row) in palette.rows().iter().enumerate() {
            println!("  Row {}:", row_index + 1);
            for c in row {
                println!("    {}  {}", c.color, c.name);
            }
        }
        println!();
        println!("Custom colors:");
        for entry in &output.custom {
            match entry.color {
                Some(color) => println!("  {:>2}. {color}", entry.slot),
                None => println!("  {:>2}. (empty)", entry.slot),
            }
        }
        Ok(())
    }
}

impl ColorsSetArgs {
    /// Execute the set command
    pub fn execute(&self) -> CliResult<()> {
        let index = slot_index(self.slot)?;
        let color = RgbColor::from_hex(&self.color)
            .map_err(|e| CliError::validation(format!("Invalid color: {e}")))?;

        let (mut store, mut loaded) = self.store.load()?;
        let mut custom = loaded.custom_colors.unwrap_or_default();
        custom
            .set(index, Some(color))
            .map_err(|e| CliError::validation(format!("{e}")))?;
        loaded.custom_colors = Some(custom);
        save_design(&mut store, &loaded)?;

        println!("Custom {} set to {color}", self.slot);
        Ok(())
    }
}

impl ColorsClearArgs {
    /// Execute the clear command
    pub fn execute(&self) -> CliResult<()> {
        let index = slot_index(self.slot)?;

        let (mut store, mut loaded) = self.store.load()?;
        let mut custom = loaded.custom_colors.unwrap_or_default();
        custom
            .set(index, None)
            .map_err(|e| CliError::validation(format!("{e}")))?;
        loaded.custom_colors = Some(custom);
        save_design(&mut store, &loaded)?;

        println!("Custom {} cleared", self.slot);
        Ok(())
    }
}
