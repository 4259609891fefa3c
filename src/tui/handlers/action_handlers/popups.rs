// Popup and overlay action handlers

use crate::tui::{AppState, PopupType};
use anyhow::Result;

/// Handle toggle help action
pub fn handle_toggle_help(state: &mut AppState) -> Result<bool> {
    if state.active_popup == Some(PopupType::Help) {
        state.active_popup = None;
    } else {
        state.help.scroll_to_top();
        state.active_popup = Some(PopupType::Help);
    }
    Ok(false)
}

/// Handle opening the hex entry for a new custom color
pub fn handle_open_custom_color_input(state: &mut AppState) -> Result<bool> {
    state.color_input.clear();
    state.active_popup = Some(PopupType::CustomColorInput);
    Ok(false)
}
