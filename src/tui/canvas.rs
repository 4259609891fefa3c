//! Pegboard widget.
//!
//! Templates are drawn on one continuous bead plane in display order, with a
//! one-bead gap between neighbors. A bead takes two terminal columns and one
//! row, which keeps it roughly square. The plane scrolls so the keyboard
//! cursor stays visible; mouse positions map back through the same geometry.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::AppState;
use crate::constants::GRID_SIZE;
use crate::models::{DisplayArrangement, TemplateId};

/// Terminal columns per bead.
pub const BEAD_WIDTH: u16 = 2;

/// Beads between neighboring templates.
pub const TEMPLATE_GAP: usize = 1;

/// Distance in beads from one template origin to the next.
const STRIDE: usize = GRID_SIZE + TEMPLATE_GAP;

/// Plane position of a cell in the template at a display slot.
#[must_use]
pub const fn bead_position(slot: (usize, usize), cell: (usize, usize)) -> (usize, usize) {
    (slot.0 * STRIDE + cell.0, slot.1 * STRIDE + cell.1)
}

/// Plane size in beads for an arrangement of `rows` x `cols` slots.
#[must_use]
pub const fn content_size(rows: usize, cols: usize) -> (usize, usize) {
    (
        (rows * STRIDE).saturating_sub(TEMPLATE_GAP),
        (cols * STRIDE).saturating_sub(TEMPLATE_GAP),
    )
}

/// Number of bead rows and columns visible in an area.
#[must_use]
pub fn view_size(area: Rect) -> (usize, usize) {
    (
        usize::from(area.height),
        usize::from(area.width / BEAD_WIDTH),
    )
}

/// New scroll offset on one axis so `target` is inside the view, moving as
/// little as possible and never past the end of the content.
#[must_use]
pub fn scroll_axis(scroll: usize, target: usize, view: usize, content: usize) -> usize {
    if view == 0 {
        return scroll;
    }
    let mut scroll = scroll;
    if target < scroll {
        scroll = target;
    } else if target >= scroll + view {
        scroll = target + 1 - view;
    }
    scroll.min(content.saturating_sub(view))
}

/// Cell under a plane position: `(slot row, slot col, row, col)`, or `None`
/// in the gap between templates.
#[must_use]
pub const fn cell_at_bead(bead: (usize, usize)) -> Option<(usize, usize, usize, usize)> {
    let (row_in, col_in) = (bead.0 % STRIDE, bead.1 % STRIDE);
    if row_in >= GRID_SIZE || col_in >= GRID_SIZE {
        return None;
    }
    Some((bead.0 / STRIDE, bead.1 / STRIDE, row_in, col_in))
}

/// Template cell under a screen position.
#[must_use]
pub fn hit_test(state: &AppState, x: u16, y: u16) -> Option<(TemplateId, usize, usize)> {
    let area = state.areas.canvas;
    if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
        return None;
    }

    let bead = (
        usize::from(y - area.y) + state.scroll.0,
        usize::from((x - area.x) / BEAD_WIDTH) + state.scroll.1,
    );
    let (slot_row, slot_col, row, col) = cell_at_bead(bead)?;

    let arrangement = state.editor.layout().arrange_for_display();
    let template = template_at_slot(&arrangement, slot_row, slot_col)?;
    Some((template.clone(), row, col))
}

fn template_at_slot<'a>(
    arrangement: &DisplayArrangement<'a>,
    row: usize,
    col: usize,
) -> Option<&'a TemplateId> {
    arrangement
        .rows()
        .get(row)?
        .get(col)
        .copied()
        .flatten()
        .map(|t| &t.id)
}

/// Pegboard widget
pub struct Canvas;

impl Canvas {
    /// Render the visible part of the bead plane into `area` (inside the border).
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let editor = &state.editor;
        let arrangement = editor.layout().arrange_for_display();

        let title = match state.focused_template() {
            Some(t) => format!(" Pegboard - template {}:{} ", t.x, t.y),
            None => " Pegboard ".to_string(),
        };
        let border = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        f.render_widget(
            border,
            Rect::new(
                area.x.saturating_sub(1),
                area.y.saturating_sub(1),
                area.width + 2,
                area.height + 2,
            ),
        );

        let (view_rows, view_cols) = view_size(area);
        let mut lines = Vec::with_capacity(view_rows);

        for screen_row in 0..view_rows {
            let mut spans = Vec::with_capacity(view_cols);
            for screen_col in 0..view_cols {
                let bead = (screen_row + state.scroll.0, screen_col + state.scroll.1);
                spans.push(Self::bead_span(state, &arrangement, bead));
            }
            lines.push(Line::from(spans));
        }

        let pegboard = Paragraph::new(lines).style(Style::default().bg(theme.background));
        f.render_widget(pegboard, area);
    }

    fn bead_span(
        state: &AppState,
        arrangement: &DisplayArrangement<'_>,
        bead: (usize, usize),
    ) -> Span<'static> {
        let theme = &state.theme;
        let blank = Span::styled("  ", Style::default().bg(theme.background));

        let Some((slot_row, slot_col, row, col)) = cell_at_bead(bead) else {
            return blank;
        };
        let Some(template) = arrangement
            .rows()
            .get(slot_row)
            .and_then(|r| r.get(slot_col))
            .copied()
            .flatten()
        else {
            return blank;
        };

        let focused = template.id == state.focus;
        let is_cursor = focused && state.cursor == (row, col);
        let dragging = state.editor.drag_template() == Some(&template.id);

        match template.grid.get(row, col) {
            Some(color) => {
                let bg = color.to_ratatui_color();
                if is_cursor {
                    let fg = if color.is_light() {
                        ratatui::style::Color::Black
                    } else {
                        ratatui::style::Color::White
                    };
                    Span::styled(
                        "[]",
                        Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled("  ", Style::default().bg(bg))
                }
            }
            None => {
                let peg = if focused || dragging {
                    theme.peg_focused
                } else {
                    theme.peg
                };
                if is_cursor {
                    Span::styled(
                        "[]",
                        Style::default()
                            .fg(theme.accent)
                            .bg(theme.background)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled("· ", Style::default().fg(peg).bg(theme.background))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::DesignEditor;
    use crate::models::Direction;
    use crate::services::MemoryStore;
    use crate::tui::ScreenAreas;

    #[test]
    fn test_bead_position_and_back() {
        let bead = bead_position((1, 2), (3, 4));
        assert_eq!(bead, (STRIDE + 3, 2 * STRIDE + 4));
        assert_eq!(cell_at_bead(bead), Some((1, 2, 3, 4)));
    }

    #[test]
    fn test_gap_has_no_cell() {
        assert_eq!(cell_at_bead((GRID_SIZE, 0)), None);
        assert_eq!(cell_at_bead((0, GRID_SIZE)), None);
        assert_eq!(cell_at_bead((STRIDE, STRIDE)), Some((1, 1, 0, 0)));
    }

    #[test]
    fn test_content_size() {
        assert_eq!(content_size(1, 1), (GRID_SIZE, GRID_SIZE));
        assert_eq!(content_size(1, 2), (GRID_SIZE, 2 * GRID_SIZE + TEMPLATE_GAP));
        assert_eq!(content_size(0, 0), (0, 0));
    }

    #[test]
    fn test_scroll_axis() {
        // Already visible
        assert_eq!(scroll_axis(0, 5, 10, 29), 0);
        // Past the end of the view
        assert_eq!(scroll_axis(0, 12, 10, 29), 3);
        // Before the start of the view
        assert_eq!(scroll_axis(8, 2, 10, 29), 2);
        // Content smaller than the view
        assert_eq!(scroll_axis(4, 3, 40, 29), 0);
        // Zero-sized view keeps the offset
        assert_eq!(scroll_axis(4, 3, 0, 29), 4);
    }

    #[test]
    fn test_hit_test_maps_screen_to_cell() {
        let mut editor = DesignEditor::new(Box::new(MemoryStore::new()));
        let origin = editor.layout().templates()[0].id.clone();
        let right = editor.add_adjacent(&origin, Direction::Right).unwrap();

        let mut config = crate::config::Config::default();
        config.ui.theme_mode = crate::config::ThemeMode::Dark;
        let mut state = AppState::new(editor, config);
        state.areas = ScreenAreas::default();
        state.areas.canvas = Rect::new(1, 4, 200, 40);

        // Column 3 of the first template, row 2
        assert_eq!(hit_test(&state, 1 + 6, 4 + 2), Some((origin, 2, 3)));
        // First column of the second template
        let x = 1 + BEAD_WIDTH * STRIDE as u16;
        assert_eq!(hit_test(&state, x, 4), Some((right, 0, 0)));
        // Gap and outside
        assert_eq!(hit_test(&state, 1 + BEAD_WIDTH * GRID_SIZE as u16, 4), None);
        assert_eq!(hit_test(&state, 0, 0), None);
    }
}
