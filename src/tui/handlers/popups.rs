//! Popup input handlers.

use anyhow::Result;
use crossterm::event::{self, KeyCode, KeyModifiers};

use crate::models::RgbColor;
use crate::tui::{AppState, PopupType};

/// Approximate visible height of the help popup, for paging.
const HELP_PAGE: usize = 20;

/// Longest hex entry, with or without the leading `#`.
const HEX_INPUT_MAX: usize = 7;

/// Handle input for help overlay
pub fn handle_help_overlay_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match key.code {
        // Close help with Escape or '?'
        KeyCode::Esc | KeyCode::Char('?') => {
            state.active_popup = None;
            state.set_status("Press ? for help");
        }
        KeyCode::Up | KeyCode::Char('k') => state.help.scroll_up(),
        KeyCode::Down | KeyCode::Char('j') => state.help.scroll_down(),
        KeyCode::PageUp => state.help.page_up(HELP_PAGE),
        KeyCode::PageDown => state.help.page_down(HELP_PAGE),
        KeyCode::Home => state.help.scroll_to_top(),
        KeyCode::End => state.help.scroll_to_bottom(),
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(true),
        _ => {}
    }
    Ok(false)
}

/// Handle input for the custom color hex entry
pub fn handle_custom_color_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            state.active_popup = None;
            state.color_input.clear();
            state.set_status("Cancelled");
        }
        KeyCode::Enter => {
            match RgbColor::from_hex(&state.color_input) {
                Ok(color) => {
                    state.active_popup = None;
                    state.color_input.clear();
                    match state.editor.add_custom_color(color) {
                        Some(slot) => {
                            state.set_status(format!("Custom {} set to {}", slot + 1, color));
                        }
                        None => state.set_error("All custom slots are full"),
                    }
                }
                Err(e) => state.set_error(format!("Invalid color: {e}")),
            }
        }
        KeyCode::Backspace => {
            state.color_input.pop();
        }
        KeyCode::Char(c)
            if (c.is_ascii_hexdigit() || (c == '#' && state.color_input.is_empty()))
                && state.color_input.len() < HEX_INPUT_MAX =>
        {
            state.color_input.push(c.to_ascii_uppercase());
        }
        _ => {}
    }
    Ok(false)
}

/// Handle input when popup is active (dispatcher)
pub fn handle_popup_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match state.active_popup {
        Some(PopupType::Help) => handle_help_overlay_input(state, key),
        Some(PopupType::CustomColorInput) => handle_custom_color_input(state, key),
        None => Ok(false),
    }
}
