//! Bead counts per color, for shopping lists and printed sheets.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::models::{BeadPalette, CustomColors, RgbColor, Template, TemplateLayout};

/// Number of beads of one color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorQuantity {
    /// Display name from the palette or custom slots
    pub name: String,
    /// Bead color
    pub color: RgbColor,
    /// Number of cells painted with it
    pub count: usize,
}

/// Counts beads across every template of a layout.
#[must_use]
pub fn overall_quantities(
    layout: &TemplateLayout,
    palette: &BeadPalette,
    custom: &CustomColors,
) -> Vec<ColorQuantity> {
    let mut counts = BTreeMap::new();
    for template in layout.templates() {
        for (color, count) in template.grid.color_counts() {
            *counts.entry(color).or_insert(0) += count;
        }
    }
    named_and_sorted(counts, palette, custom)
}

/// Counts beads of a single template.
#[must_use]
pub fn template_quantities(
    template: &Template,
    palette: &BeadPalette,
    custom: &CustomColors,
) -> Vec<ColorQuantity> {
    named_and_sorted(template.grid.color_counts(), palette, custom)
}

/// Most used colors first. Equal counts keep hex order, which the
/// `BTreeMap` iteration already provides and the stable sort preserves.
fn named_and_sorted(
    counts: BTreeMap<RgbColor, usize>,
    palette: &BeadPalette,
    custom: &CustomColors,
) -> Vec<ColorQuantity> {
    let mut quantities: Vec<ColorQuantity> = counts
        .into_iter()
        .map(|(color, count)| ColorQuantity {
            name: palette.display_name(color, custom),
            color,
            count,
        })
        .collect();
    quantities.sort_by(|a, b| b.count.cmp(&a.count));
    quantities
}

/// Sum of all counts.
#[must_use]
pub fn total_beads(quantities: &[ColorQuantity]) -> usize {
    quantities.iter().map(|q| q.count).sum()
}

/// `1 bead` / `12 beads`.
#[must_use]
pub fn format_bead_count(count: usize) -> String {
    if count == 1 {
        "1 bead".to_string()
    } else {
        format!("{count} beads")
    }
}

/// Plain-text shopping list, one color per line.
#[must_use]
pub fn shopping_list(quantities: &[ColorQuantity]) -> String {
    let mut output = String::new();
    for q in quantities {
        let _ = writeln!(
            output,
            "{} ({}): {}",
            q.name,
            q.color,
            format_bead_count(q.count)
        );
    }
    let _ = write!(
        output,
        "Total: {}",
        format_bead_count(total_beads(quantities))
    );
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Direction;

    const BLACK: RgbColor = RgbColor::new(0, 0, 0);
    const RED: RgbColor = RgbColor::new(255, 0, 0);
    const TEAL: RgbColor = RgbColor::new(0, 128, 128);

    fn two_template_layout() -> TemplateLayout {
        let layout = TemplateLayout::create_initial();
        let left = layout.templates()[0].id.clone();
        let (layout, right) = layout.try_add_adjacent(&left, Direction::Right).unwrap();

        let left_grid = layout
            .get(&left)
            .unwrap()
            .grid
            .set_cell(0, 0, Some(RED))
            .set_cell(0, 1, Some(RED))
            .set_cell(0, 2, Some(BLACK));
        let right_grid = layout
            .get(&right)
            .unwrap()
            .grid
            .set_cell(0, 0, Some(BLACK))
            .set_cell(0, 1, Some(TEAL))
            .set_cell(0, 2, Some(BLACK));

        layout
            .with_grid(&left, left_grid)
            .with_grid(&right, right_grid)
    }

    #[test]
    fn test_overall_quantities_sorted_by_count() {
        let palette = BeadPalette::load().unwrap();
        let quantities = overall_quantities(&two_template_layout(), &palette, &CustomColors::new());

        // Black 3, Red 2, Teal 1
        let summary: Vec<_> = quantities
            .iter()
            .map(|q| (q.name.as_str(), q.count))
            .collect();
        assert_eq!(
            summary,
            vec![("Black", 3), ("Bright Red", 2), ("Unknown", 1)]
        );
        assert_eq!(total_beads(&quantities), 6);
    }

    #[test]
    fn test_ties_are_ordered_by_hex() {
        let palette = BeadPalette::load().unwrap();
        let layout = TemplateLayout::create_initial();
        let id = layout.templates()[0].id.clone();
        let grid = layout.templates()[0]
            .grid
            .set_cell(0, 0, Some(RED))
            .set_cell(1, 0, Some(TEAL))
            .set_cell(2, 0, Some(BLACK));
        let layout = layout.with_grid(&id, grid);

        let quantities = overall_quantities(&layout, &palette, &CustomColors::new());
        let hexes: Vec<_> = quantities.iter().map(|q| q.color.to_hex()).collect();
        assert_eq!(hexes, vec!["#000000", "#008080", "#FF0000"]);
    }

    #[test]
    fn test_template_quantities_use_custom_names() {
        let palette = BeadPalette::load().unwrap();
        let mut custom = CustomColors::new();
        custom.set(1, Some(TEAL)).unwrap();

        let layout = two_template_layout();
        let right = layout.template_at(1, 0).unwrap();
        let quantities = template_quantities(right, &palette, &custom);

        assert_eq!(quantities.len(), 2);
        assert_eq!(quantities[0].name, "Black");
        assert_eq!(quantities[1].name, "Custom 2");
    }

    #[test]
    fn test_empty_layout_has_no_quantities() {
        let palette = BeadPalette::load().unwrap();
        let quantities = overall_quantities(
            &TemplateLayout::create_initial(),
            &palette,
            &CustomColors::new(),
        );
        assert!(quantities.is_empty());
        assert_eq!(shopping_list(&quantities), "Total: 0 beads");
    }

    #[test]
    fn test_shopping_list() {
        let palette = BeadPalette::load().unwrap();
        let quantities = overall_quantities(&two_template_layout(), &palette, &CustomColors::new());
        let list = shopping_list(&quantities);

        assert!(list.starts_with("Black (#000000): 3 beads\n"));
        assert!(list.contains("Unknown (#008080): 1 bead\n"));
        assert!(list.ends_with("Total: 6 beads"));
    }
}
