//! Template management commands for stored designs.

use crate::cli::common::{print_json, save_design, CliError, CliResult, StoreArgs};
use crate::cli::inspect::{summarize_templates, TemplateSummary};
use crate::models::{Direction, TemplateId};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Manage the templates of a design
#[derive(Debug, Clone, Args)]
pub struct TemplateArgs {
    /// Template subcommand
    #[command(subcommand)]
    pub command: TemplateCommand,
}

/// Template subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum TemplateCommand {
    /// List templates in display order
    List(ListArgs),
    /// Add an empty template next to an existing one
    Add(AddArgs),
    /// Remove a template
    Remove(RemoveArgs),
    /// Clear every bead of a template
    Clear(ClearArgs),
}

/// List templates
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Add a template
#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Template to add next to
    #[arg(long, value_name = "ID")]
    pub from: String,

    /// Side to add on (up, down, left, right)
    #[arg(short, long, value_name = "DIR")]
    pub direction: String,
}

/// Remove a template
#[derive(Debug, Clone, Args)]
pub struct RemoveArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Template id
    #[arg(long, value_name = "ID")]
    pub id: String,
}

/// Clear a template
#[derive(Debug, Clone, Args)]
pub struct ClearArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Template id
    #[arg(long, value_name = "ID")]
    pub id: String,
}

/// Template list response
#[derive(Debug, Clone, Serialize)]
pub struct TemplateListResponse {
    /// Templates in display order
    pub templates: Vec<TemplateSummary>,
    /// Total number of templates
    pub count: usize,
}

impl TemplateArgs {
    /// Execute the template command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            TemplateCommand::List(args) => args.execute(),
            TemplateCommand::Add(args) => args.execute(),
            TemplateCommand::Remove(args) => args.execute(),
            TemplateCommand::Clear(args) => args.execute(),
        }
    }
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let (_, loaded) = self.store.load()?;
        let templates = summarize_templates(&loaded.layout);

        if self.json {
            let count = templates.len();
            return print_json(&TemplateListResponse { templates, count });
        }

        println!("{} template(s):", templates.len());
        for t in &templates {
            println!(
                "  {}  {}:{}  {} bead(s){}",
                t.id,
                t.x,
                t.y,
                t.beads,
                if t.removable { "" } else { "  [locked]" }
            );
        }
        Ok(())
    }
}

impl AddArgs {
    /// Execute the add command
    pub fn execute(&self) -> CliResult<()> {
        let direction: Direction = self
            .direction
            .parse()
            .map_err(|e| CliError::validation(format!("{e}")))?;
        let (mut store, mut loaded) = self.store.load()?;

        let reference = TemplateId::from(self.from.as_str());
        let (layout, id) = loaded
            .layout
            .try_add_adjacent(&reference, direction)
            .map_err(|refusal| CliError::validation(format!("Cannot add template: {refusal}")))?;
        loaded.layout = layout;
        save_design(&mut store, &loaded)?;

        let added = loaded.layout.get(&id).map_or((0, 0), |t| t.position());
        println!(
            "Added template {id} at {}:{} ({direction} of {reference})",
            added.0, added.1
        );
        Ok(())
    }
}

impl RemoveArgs {
    /// Execute the remove command
    pub fn execute(&self) -> CliResult<()> {
        let (mut store, mut loaded) = self.store.load()?;

        let id = TemplateId::from(self.id.as_str());
        loaded.layout = loaded
            .layout
            .remove(&id)
            .map_err(|refusal| CliError::validation(format!("Cannot remove template: {refusal}")))?;
        save_design(&mut store, &loaded)?;

        println!("Removed template {id}");
        Ok(())
    }
}

impl ClearArgs {
    /// Execute the clear command
    pub fn execute(&self) -> CliResult<()> {
        let (mut store, mut loaded) = self.store.load()?;

        let id = TemplateId::from(self.id.as_str());
        let Some(template) = loaded.layout.get(&id) else {
            return Err(CliError::validation(format!("Unknown template: {id}")));
        };
        let removed = template.grid.bead_count();

        loaded.layout = loaded.layout.clear_template(&id);
        save_design(&mut store, &loaded)?;

        println!("Cleared template {id} ({removed} bead(s) removed)");
        Ok(())
    }
}
