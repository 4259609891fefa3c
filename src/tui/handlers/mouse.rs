//! Mouse input handler.
//!
//! Left button press, drag and release on the pegboard map to the editor's
//! cell events; a click on the palette bar selects a swatch.

use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::canvas;
use crate::tui::palette_bar::{self, PaletteHit};
use crate::tui::AppState;

/// Handle a mouse event outside popups
pub fn handle_mouse_input(state: &mut AppState, mouse: MouseEvent) -> Result<()> {
    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some((id, row, col)) = canvas::hit_test(state, x, y) {
                state.editor.cell_press(&id, row, col);
                state.focus_on(id);
                state.cursor = (row, col);
            } else if let Some(hit) = palette_bar::hit_test(state, x, y) {
                select_swatch(state, hit);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some((id, row, col)) = canvas::hit_test(state, x, y) {
                if state.editor.cell_drag_enter(&id, row, col) {
                    state.cursor = (row, col);
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => state.editor.release(),
        _ => {}
    }
    Ok(())
}

fn select_swatch(state: &mut AppState, hit: PaletteHit) {
    match hit {
        PaletteHit::Palette(color) => state.editor.select_color(Some(color)),
        PaletteHit::Custom(slot) => match state.editor.custom_colors().get(slot) {
            Some(color) => state.editor.select_color(Some(color)),
            None => state.set_status("Empty slot: press n to add a custom color"),
        },
        PaletteHit::Eraser => state.editor.select_eraser(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ThemeMode};
    use crate::editor::DesignEditor;
    use crate::models::{Direction, RgbColor};
    use crate::services::MemoryStore;
    use crate::tui::ScreenAreas;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    const BLACK: RgbColor = RgbColor::new(0, 0, 0);

    fn state() -> AppState {
        let mut config = Config::default();
        config.ui.show_help_on_startup = false;
        config.ui.theme_mode = ThemeMode::Dark;
        let mut state = AppState::new(DesignEditor::new(Box::new(MemoryStore::new())), config);
        state.areas = ScreenAreas::compute(Rect::new(0, 0, 160, 60));
        state
    }

    fn event(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Screen position of a bead in the top-left template.
    fn screen(state: &AppState, row: u16, col: u16) -> (u16, u16) {
        let area = state.areas.canvas;
        (area.x + col * canvas::BEAD_WIDTH, area.y + row)
    }

    #[test]
    fn test_click_paints_and_moves_cursor() {
        let mut state = state();
        let (x, y) = screen(&state, 2, 3);
        handle_mouse_input(&mut state, event(MouseEventKind::Down(MouseButton::Left), x, y))
            .unwrap();

        assert_eq!(state.cursor, (2, 3));
        assert_eq!(state.focused_template().unwrap().grid.get(2, 3), Some(BLACK));
    }

    #[test]
    fn test_drag_paints_a_stroke() {
        let mut state = state();
        let (x0, y) = screen(&state, 0, 0);
        handle_mouse_input(&mut state, event(MouseEventKind::Down(MouseButton::Left), x0, y))
            .unwrap();
        for col in 1..4 {
            let (x, y) = screen(&state, 0, col);
            handle_mouse_input(&mut state, event(MouseEventKind::Drag(MouseButton::Left), x, y))
                .unwrap();
        }
        handle_mouse_input(&mut state, event(MouseEventKind::Up(MouseButton::Left), x0, y))
            .unwrap();

        assert_eq!(state.editor.layout().bead_count(), 4);
        assert!(state.editor.drag_template().is_none());
    }

    #[test]
    fn test_drag_does_not_cross_templates() {
        let mut state = state();
        let origin = state.focus.clone();
        state.editor.add_adjacent(&origin, Direction::Right).unwrap();

        let (x, y) = screen(&state, 0, 0);
        handle_mouse_input(&mut state, event(MouseEventKind::Down(MouseButton::Left), x, y))
            .unwrap();
        // First bead of the second template
        let (x, y) = screen(&state, 0, (crate::constants::GRID_SIZE + 1) as u16);
        handle_mouse_input(&mut state, event(MouseEventKind::Drag(MouseButton::Left), x, y))
            .unwrap();

        assert_eq!(state.editor.layout().bead_count(), 1);
    }

    #[test]
    fn test_palette_click_selects_color() {
        let mut state = state();
        let area = state.areas.palette;
        let eraser_x = area.x + 11 * 4;
        handle_mouse_input(
            &mut state,
            event(MouseEventKind::Down(MouseButton::Left), eraser_x, area.y + 2),
        )
        .unwrap();
        assert_eq!(state.editor.brush(), None);

        let second = state.editor.palette().color_at(1).unwrap().color;
        handle_mouse_input(
            &mut state,
            event(MouseEventKind::Down(MouseButton::Left), area.x + 4, area.y),
        )
        .unwrap();
        assert_eq!(state.editor.brush(), Some(second));
    }

    #[test]
    fn test_empty_custom_slot_keeps_brush() {
        let mut state = state();
        let area = state.areas.palette;
        handle_mouse_input(
            &mut state,
            event(MouseEventKind::Down(MouseButton::Left), area.x, area.y + 2),
        )
        .unwrap();
        assert_eq!(state.editor.brush(), Some(BLACK));
        assert!(state.current_message().is_some());
    }
}
