//! Inspect a stored design.

use crate::cli::common::{print_json, CliResult, StoreArgs};
use crate::export::{overall_quantities, shopping_list, ColorQuantity};
use crate::models::{BeadPalette, Direction, TemplateLayout};
use clap::Args;
use serde::Serialize;

/// Show templates, their arrangement and bead quantities
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// One template in the inspection report
#[derive(Debug, Clone, Serialize)]
pub struct TemplateSummary {
    /// Template id
    pub id: String,
    /// Column in the layout
    pub x: i32,
    /// Row in the layout
    pub y: i32,
    /// Beads placed on this template
    pub beads: usize,
    /// Whether the template may be removed
    pub removable: bool,
    /// Sides where a template can still be added
    pub open_sides: Vec<String>,
}

/// Full inspection report
#[derive(Debug, Clone, Serialize)]
pub struct InspectOutput {
    /// Templates in display order
    pub templates: Vec<TemplateSummary>,
    /// Display grid, top row first; each slot holds a template id or null
    pub arrangement: Vec<Vec<Option<String>>>,
    /// Total beads
    pub total_beads: usize,
    /// Bead counts per color, most used first
    pub quantities: Vec<ColorQuantity>,
    /// Whether the design was upgraded from the single-grid format on load
    pub upgraded: bool,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let (_, loaded) = self.store.load()?;
        let palette = BeadPalette::default();
        let custom = loaded.custom_colors.unwrap_or_default();

        let output = InspectOutput {
            templates: summarize_templates(&loaded.layout),
            arrangement: arrangement_ids(&loaded.layout),
            total_beads: loaded.layout.bead_count(),
            quantities: overall_quantities(&loaded.layout, &palette, &custom),
            upgraded: loaded.upgraded,
        };

        if self.json {
            print_json(&output)
        } else {
            print_human_readable(&output);
            Ok(())
        }
    }
}

/// Summaries in display order.
#[must_use]
pub fn summarize_templates(layout: &TemplateLayout) -> Vec<TemplateSummary> {
    layout
        .arrange_for_display()
        .templates()
        .map(|t| TemplateSummary {
            id: t.id.to_string(),
            x: t.x,
            y: t.y,
            beads: t.grid.bead_count(),
            removable: layout.is_removable(&t.id),
            open_sides: Direction::ALL
                .iter()
                .filter(|d| layout.has_room(t.x, t.y, **d))
                .map(|d| d.name().to_string())
                .collect(),
        })
        .collect()
}

fn arrangement_ids(layout: &TemplateLayout) -> Vec<Vec<Option<String>>> {
    layout
        .arrange_for_display()
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|slot| slot.map(|t| t.id.to_string()))
                .collect()
        })
        .collect()
}

fn print_human_readable(output: &InspectOutput) {
    println!("Bead Design");
    println!("===========");
    println!();
    println!("Templates: {}", output.templates.len());
    println!("Beads: {}", output.total_beads);
    if output.upgraded {
        println!("(upgraded from a single-grid design)");
    }
    println!();

    for (index, t) in output.templates.iter().enumerate() {
        println!("[{}] {} at {}:{}", index + 1, t.id, t.x, t.y);
        println!("    Beads: {}", t.beads);
        println!("    Removable: {}", if t.removable { "yes" } else { "no" });
        if t.open_sides.is_empty() {
            println!("    Open sides: none");
        } else {
            println!("    Open sides: {}", t.open_sides.join(", "));
        }
    }
    println!();

    println!("Arrangement:");
    for row in &output.arrangement {
        let line: Vec<String> = row
            .iter()
            .map(|slot| match slot {
                Some(id) => output
                    .templates
                    .iter()
                    .position(|t| &t.id == id)
                    .map_or_else(|| "?".to_string(), |i| (i + 1).to_string()),
                None => ".".to_string(),
            })
            .collect();
        println!("  {}", line.join(" "));
    }
    println!();

    println!("Bead quantities:");
    for line in shopping_list(&output.quantities).lines() {
        println!("  {line}");
    }
}
