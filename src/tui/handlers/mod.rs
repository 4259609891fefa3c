//! Input handler modules for different TUI contexts.

pub mod action_handlers;
pub mod actions;
pub mod main;
pub mod mouse;
pub mod popups;

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};

use crate::tui::AppState;

// Re-export handler functions
pub use actions::dispatch_action;
pub use main::handle_main_input;
pub use mouse::handle_mouse_input;
pub use popups::handle_popup_input;

/// Route a key press to the open popup, or to the main shortcuts.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<()> {
    let should_quit = if state.active_popup.is_some() {
        handle_popup_input(state, key)?
    } else {
        handle_main_input(state, key)?
    };
    if should_quit {
        state.should_quit = true;
    }
    Ok(())
}

/// Route a mouse event; popups swallow the mouse.
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) -> Result<()> {
    if state.active_popup.is_some() {
        return Ok(());
    }
    handle_mouse_input(state, mouse)
}
