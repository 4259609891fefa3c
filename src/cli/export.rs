//! Export command for generating a printable pattern sheet.

use crate::cli::common::{CliError, CliResult, StoreArgs};
use crate::config::Config;
use crate::export::{self, SheetOptions};
use crate::models::BeadPalette;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Export the stored design as a Markdown pattern sheet
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Output path for markdown file (defaults to beadgrid_pattern_[date].md)
    #[arg(short, long = "out", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Include bead quantities for each template
    #[arg(long)]
    pub individual: bool,

    /// Leave out the total bead quantities
    #[arg(long)]
    pub no_overall: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let (_, loaded) = self.store.load()?;
        let config = Config::load().unwrap_or_default();

        let options = self.sheet_options(&config);
        let markdown = export::export_to_markdown(
            &loaded.layout,
            &BeadPalette::default(),
            &loaded.custom_colors.unwrap_or_default(),
            options,
        );

        let output_path = self.get_output_path();
        fs::write(&output_path, markdown)
            .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;

        println!("Exported pattern sheet to: {}", output_path.display());

        Ok(())
    }

    /// Flags win over the configured defaults.
    fn sheet_options(&self, config: &Config) -> SheetOptions {
        SheetOptions {
            show_individual_colors: self.individual || config.editor.show_individual_colors,
            show_overall_colors: !self.no_overall && config.editor.show_overall_colors,
        }
    }

    /// Get the output file path (either user-specified or auto-generated)
    fn get_output_path(&self) -> PathBuf {
        if let Some(ref path) = self.output {
            return path.clone();
        }

        crate::export::default_sheet_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(output: Option<PathBuf>) -> ExportArgs {
        ExportArgs {
            store: StoreArgs {
                store: Some(PathBuf::from("design.json")),
            },
            output,
            individual: false,
            no_overall: false,
        }
    }

    #[test]
    fn test_get_output_path_default() {
        let path = args(None).get_output_path();

        let path_str = path.to_string_lossy();
        assert!(path_str.starts_with("beadgrid_pattern_"));
        assert!(path_str.ends_with(".md"));
    }

    #[test]
    fn test_get_output_path_custom() {
        let custom_path = PathBuf::from("/tmp/my_pattern.md");
        assert_eq!(args(Some(custom_path.clone())).get_output_path(), custom_path);
    }

    #[test]
    fn test_sheet_options_flags_override_config() {
        let config = Config::default();
        assert_eq!(args(None).sheet_options(&config), SheetOptions::default());

        let mut flagged = args(None);
        flagged.individual = true;
        flagged.no_overall = true;
        let options = flagged.sheet_options(&config);
        assert!(options.show_individual_colors);
        assert!(!options.show_overall_colors);
    }
}
