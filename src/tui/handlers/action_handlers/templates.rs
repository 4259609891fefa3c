// Template action handlers

use crate::shortcuts::Action;
use crate::tui::AppState;
use anyhow::Result;

/// Handle adding a template next to the focused one
pub fn handle_add_template(state: &mut AppState, action: Action) -> Result<bool> {
    let Some(direction) = action.add_direction() else {
        return Ok(false);
    };
    let focus = state.focus.clone();

    if let Some(id) = state.editor.add_adjacent(&focus, direction) {
        state.focus_on(id);
        state.set_status(format!("Template added {}", direction.name()));
    } else if let Err(refusal) = state.editor.layout().try_add_adjacent(&focus, direction) {
        state.set_error(format!("Cannot add template: {refusal}"));
    }
    Ok(false)
}

/// Handle removing the focused template
pub fn handle_remove_template(state: &mut AppState) -> Result<bool> {
    let focus = state.focus.clone();

    if state.editor.remove(&focus) {
        state.refocus();
        state.set_status("Template removed");
    } else if let Err(refusal) = state.editor.layout().remove(&focus) {
        state.set_error(format!("Cannot remove template: {refusal}"));
    }
    Ok(false)
}

/// Handle clearing every bead from the focused template
pub fn handle_clear_template(state: &mut AppState) -> Result<bool> {
    let focus = state.focus.clone();
    if state.editor.clear(&focus) {
        state.set_status("Template cleared");
    }
    Ok(false)
}
