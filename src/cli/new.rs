//! Create a fresh design in a store.

use crate::cli::common::{print_json, CliError, CliResult, StoreArgs};
use crate::models::{CustomColors, TemplateLayout};
use crate::services::DesignService;
use clap::Args;
use serde::Serialize;

/// Write a fresh single-template design
#[derive(Debug, Clone, Args)]
pub struct NewArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Overwrite a design already in the store
    #[arg(long)]
    pub force: bool,

    /// Output result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct NewOutput {
    store: String,
    template: String,
}

impl NewArgs {
    /// Execute the new command
    pub fn execute(&self) -> CliResult<()> {
        let mut store = self.store.open()?;

        let exists = DesignService::has_saved(&store).map_err(|e| {
            CliError::io(format!(
                "Failed to read store {}: {e:#}",
                store.path().display()
            ))
        })?;
        if exists && !self.force {
            return Err(CliError::validation(format!(
                "A design already exists in {} (use --force to overwrite)",
                store.path().display()
            )));
        }

        let layout = TemplateLayout::create_initial();
        DesignService::save(&mut store, &layout, &CustomColors::new())
            .map_err(|e| CliError::io(format!("Failed to save design: {e:#}")))?;

        let template = layout.templates()[0].id.to_string();
        if self.json {
            print_json(&NewOutput {
                store: store.path().to_string_lossy().to_string(),
                template,
            })?;
        } else {
            println!("Created new design in {}", store.path().display());
            println!("Template: {template}");
        }

        Ok(())
    }
}
