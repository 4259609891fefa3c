//! Paint a single cell of a stored design.

use crate::cli::common::{print_json, CliError, CliResult, StoreArgs};
use crate::constants::GRID_SIZE;
use crate::editor::{DesignEditor, Tool};
use crate::models::{RgbColor, TemplateId};
use clap::{ArgGroup, Args};
use serde::Serialize;

/// Press one cell with the pencil or the paint can
#[derive(Debug, Clone, Args)]
#[command(group(ArgGroup::new("brush").required(true).args(["color", "erase"])))]
pub struct PaintArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Template id
    #[arg(short, long, value_name = "ID")]
    pub template: String,

    /// Cell row (0-based)
    #[arg(short, long, value_name = "ROW")]
    pub row: usize,

    /// Cell column (0-based)
    #[arg(short, long, value_name = "COL")]
    pub col: usize,

    /// Bead color (#RRGGBB)
    #[arg(long, value_name = "HEX")]
    pub color: Option<String>,

    /// Use the eraser instead of a color
    #[arg(long)]
    pub erase: bool,

    /// Fill the connected same-color region instead of toggling one cell
    #[arg(long)]
    pub fill: bool,

    /// Output result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct PaintOutput {
    template: String,
    row: usize,
    col: usize,
    tool: &'static str,
    changed: bool,
    cell: Option<RgbColor>,
}

impl PaintArgs {
    /// Execute the paint command
    pub fn execute(&self) -> CliResult<()> {
        let brush = match &self.color {
            Some(hex) => Some(
                RgbColor::from_hex(hex)
                    .map_err(|e| CliError::validation(format!("Invalid color: {e}")))?,
            ),
            None => None,
        };

        if self.row >= GRID_SIZE || self.col >= GRID_SIZE {
            return Err(CliError::validation(format!(
                "Cell {}:{} is outside the {GRID_SIZE}x{GRID_SIZE} grid",
                self.row, self.col
            )));
        }

        let store = self.store.open()?;
        let path = store.path().to_path_buf();
        let mut editor = DesignEditor::open(Box::new(store)).map_err(|e| {
            CliError::io(format!(
                "Failed to load design from {}: {e:#}",
                path.display()
            ))
        })?;

        let id = TemplateId::from(self.template.as_str());
        if editor.layout().get(&id).is_none() {
            return Err(CliError::validation(format!("Unknown template: {id}")));
        }

        editor.select_color(brush);
        editor.set_tool(if self.fill { Tool::PaintCan } else { Tool::Pencil });
        let changed = editor.cell_press(&id, self.row, self.col);
        editor.release();

        if changed {
            editor
                .try_save()
                .map_err(|e| CliError::io(format!("Failed to save design: {e:#}")))?;
        }

        let cell = editor
            .layout()
            .get(&id)
            .and_then(|t| t.grid.get(self.row, self.col));

        if self.json {
            print_json(&PaintOutput {
                template: id.to_string(),
                row: self.row,
                col: self.col,
                tool: editor.tool().label(),
                changed,
                cell,
            })?;
        } else if changed {
            let shown = cell.map_or_else(|| "empty".to_string(), |c| editor.color_name(c));
            println!(
                "{} at {}:{} on {id}: now {shown}",
                editor.tool().label(),
                self.row,
                self.col
            );
        } else {
            println!("No change.");
        }

        Ok(())
    }
}
