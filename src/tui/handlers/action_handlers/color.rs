// Brush, tool and painting action handlers

use crate::tui::AppState;
use anyhow::Result;

/// Handle a key press on the cell under the cursor
pub fn handle_press_cell(state: &mut AppState) -> Result<bool> {
    let focus = state.focus.clone();
    let (row, col) = state.cursor;
    state.editor.cell_press(&focus, row, col);
    // A key press is a complete gesture
    state.editor.release();
    Ok(false)
}

/// Handle switching between pencil and paint can
pub fn handle_toggle_paint_can(state: &mut AppState) -> Result<bool> {
    state.editor.toggle_paint_can();
    Ok(false)
}

/// Handle eraser selection
pub fn handle_select_eraser(state: &mut AppState) -> Result<bool> {
    state.editor.select_eraser();
    Ok(false)
}

/// Handle moving to the next or previous color
pub fn handle_cycle_color(state: &mut AppState, forward: bool) -> Result<bool> {
    state.editor.cycle_color(forward);
    Ok(false)
}
