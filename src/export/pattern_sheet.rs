//! Printable Markdown pattern sheet.
//!
//! Each template becomes a symbol chart: one character per bead, `.` for an
//! empty peg. A legend maps symbols back to bead colors. Templates appear in
//! display order (top row first, left to right), each with a small map
//! showing where it sits in the whole design.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::constants::APP_NAME;
use crate::export::bead_quantities::{
    format_bead_count, overall_quantities, template_quantities, total_beads, ColorQuantity,
};
use crate::models::{BeadPalette, CustomColors, RgbColor, Template, TemplateId, TemplateLayout};

/// Symbols handed out to colors, most used color first.
const SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Symbol for colors beyond the symbol set.
const OVERFLOW_SYMBOL: char = '*';

/// Symbol for empty pegs.
const EMPTY_SYMBOL: char = '.';

/// Which quantity sections to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetOptions {
    /// Per-template quantities. Ignored for single-template designs, where
    /// they would repeat the totals.
    pub show_individual_colors: bool,
    /// Totals across the whole design.
    pub show_overall_colors: bool,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            show_individual_colors: false,
            show_overall_colors: true,
        }
    }
}

/// Dated file name used when no output path is given.
#[must_use]
pub fn default_sheet_path() -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d");
    PathBuf::from(format!("beadgrid_pattern_{date}.md"))
}

/// Renders the full pattern sheet.
#[must_use]
pub fn export_to_markdown(
    layout: &TemplateLayout,
    palette: &BeadPalette,
    custom: &CustomColors,
    options: SheetOptions,
) -> String {
    let overall = overall_quantities(layout, palette, custom);
    let symbols = assign_symbols(&overall);
    let show_individual = options.show_individual_colors && layout.len() > 1;

    let mut output = String::new();
    let _ = writeln!(output, "# Bead Pattern\n");
    let _ = writeln!(
        output,
        "Generated by {} on {}\n",
        APP_NAME,
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    );
    let _ = writeln!(
        output,
        "Templates: {} | Beads: {}\n",
        layout.len(),
        total_beads(&overall)
    );

    output.push_str(&render_legend(&overall, &symbols));

    let arrangement = layout.arrange_for_display();
    for (index, template) in arrangement.templates().enumerate() {
        let _ = writeln!(
            output,
            "## Template {} (position {}:{})\n",
            index + 1,
            template.x,
            template.y
        );

        if layout.len() > 1 {
            output.push_str("```text\n");
            for line in template_map(layout, &template.id) {
                output.push_str(line.trim_end());
                output.push('\n');
            }
            output.push_str("```\n\n");
        }

        output.push_str(&render_chart(template, &symbols));

        if show_individual {
            output.push_str("### Template bead quantities\n\n");
            output.push_str(&render_quantity_list(&template_quantities(
                template, palette, custom,
            )));
        }
    }

    if options.show_overall_colors {
        output.push_str("## Total bead quantities\n\n");
        output.push_str(&render_quantity_list(&overall));
    }

    output
}

/// Miniature of the layout: `■` for the given template, `□` for the others,
/// blank where no template sits.
#[must_use]
pub fn template_map(layout: &TemplateLayout, current: &TemplateId) -> Vec<String> {
    layout
        .arrange_for_display()
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|slot| match slot {
                    Some(t) if &t.id == current => '■',
                    Some(_) => '□',
                    None => ' ',
                })
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn assign_symbols(quantities: &[ColorQuantity]) -> BTreeMap<RgbColor, char> {
    let mut symbols = SYMBOLS.chars();
    quantities
        .iter()
        .map(|q| (q.color, symbols.next().unwrap_or(OVERFLOW_SYMBOL)))
        .collect()
}

fn render_legend(quantities: &[ColorQuantity], symbols: &BTreeMap<RgbColor, char>) -> String {
    let mut output = String::from("## Legend\n\n");
    if quantities.is_empty() {
        output.push_str("No beads placed yet.\n\n");
        return output;
    }

    output.push_str("| Symbol | Color | Hex | Beads |\n");
    output.push_str("|--------|-------|-----|-------|\n");
    for q in quantities {
        let symbol = symbols.get(&q.color).copied().unwrap_or(OVERFLOW_SYMBOL);
        let _ = writeln!(
            output,
            "| `{}` | {} | {} | {} |",
            symbol, q.name, q.color, q.count
        );
    }
    let _ = writeln!(output, "\n`{EMPTY_SYMBOL}` marks an empty peg.\n");
    output
}

fn render_chart(template: &Template, symbols: &BTreeMap<RgbColor, char>) -> String {
    let mut output = String::from("```text\n");
    for row in template.grid.rows() {
        let line: Vec<String> = row
            .iter()
            .map(|cell| {
                cell.map_or(EMPTY_SYMBOL, |color| {
                    symbols.get(&color).copied().unwrap_or(OVERFLOW_SYMBOL)
                })
                .to_string()
            })
            .collect();
        output.push_str(&line.join(" "));
        output.push('\n');
    }
    output.push_str("```\n\n");
    output
}

fn render_quantity_list(quantities: &[ColorQuantity]) -> String {
    if quantities.is_empty() {
        return "No beads.\n\n".to_string();
    }

    let mut output = String::new();
    for q in quantities {
        let _ = writeln!(
            output,
            "- {} ({}): {}",
            q.name,
            q.color,
            format_bead_count(q.count)
        );
    }
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GRID_SIZE;
    use crate::models::Direction;

    const RED: RgbColor = RgbColor::new(255, 0, 0);
    const BLACK: RgbColor = RgbColor::new(0, 0, 0);

    fn design() -> TemplateLayout {
        let layout = TemplateLayout::create_initial();
        let origin = layout.templates()[0].id.clone();
        let (layout, below) = layout.try_add_adjacent(&origin, Direction::Down).unwrap();
        let origin_grid = layout
            .get(&origin)
            .unwrap()
            .grid
            .set_cell(0, 0, Some(RED))
            .set_cell(0, 1, Some(RED));
        let below_grid = layout.get(&below).unwrap().grid.set_cell(0, 0, Some(BLACK));
        layout
            .with_grid(&origin, origin_grid)
            .with_grid(&below, below_grid)
    }

    fn sheet(layout: &TemplateLayout, options: SheetOptions) -> String {
        export_to_markdown(
            layout,
            &BeadPalette::load().unwrap(),
            &CustomColors::new(),
            options,
        )
    }

    #[test]
    fn test_sheet_sections() {
        let output = sheet(&design(), SheetOptions::default());

        assert!(output.starts_with("# Bead Pattern\n"));
        assert!(output.contains("Templates: 2 | Beads: 3"));
        assert!(output.contains("## Legend"));
        assert!(output.contains("| `A` | Bright Red | #FF0000 | 2 |"));
        assert!(output.contains("| `B` | Black | #000000 | 1 |"));
        assert!(output.contains("## Template 1 (position 0:0)"));
        assert!(output.contains("## Template 2 (position 0:1)"));
        assert!(output.contains("## Total bead quantities"));
        assert!(output.contains("- Bright Red (#FF0000): 2 beads"));
        assert!(!output.contains("### Template bead quantities"));
    }

    #[test]
    fn test_chart_rows_use_symbols() {
        let output = sheet(&design(), SheetOptions::default());
        let mut expected_first_row = vec!["."; GRID_SIZE];
        expected_first_row[0] = "A";
        expected_first_row[1] = "A";
        assert!(output.contains(&expected_first_row.join(" ")));
    }

    #[test]
    fn test_individual_quantities_need_several_templates() {
        let options = SheetOptions {
            show_individual_colors: true,
            show_overall_colors: false,
        };

        let multi = sheet(&design(), options);
        assert_eq!(multi.matches("### Template bead quantities").count(), 2);
        assert!(!multi.contains("## Total bead quantities"));

        let single = sheet(&TemplateLayout::create_initial(), options);
        assert!(!single.contains("### Template bead quantities"));
        assert!(single.contains("No beads placed yet."));
    }

    #[test]
    fn test_template_map_marks_current() {
        let layout = design();
        let below = layout.template_at(0, 1).unwrap().id.clone();
        assert_eq!(template_map(&layout, &below), vec!["□", "■"]);
    }

    #[test]
    fn test_templates_follow_display_order() {
        let layout = TemplateLayout::create_initial();
        let origin = layout.templates()[0].id.clone();
        // Added last but displayed first because it is above the origin
        let layout = layout.add_adjacent(&origin, Direction::Up);
        let output = sheet(&layout, SheetOptions::default());
        assert!(output.contains("## Template 1 (position 0:-1)"));
        assert!(output.contains("## Template 2 (position 0:0)"));
    }
}
