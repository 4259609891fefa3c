// Navigation action handlers

use crate::shortcuts::Action;
use crate::models::Direction;
use crate::tui::AppState;
use anyhow::Result;

/// Handle a cursor move, crossing into neighboring templates at the edges
pub fn handle_navigate(state: &mut AppState, action: Action) -> Result<bool> {
    let direction = match action {
        Action::NavigateUp => Direction::Up,
        Action::NavigateDown => Direction::Down,
        Action::NavigateLeft => Direction::Left,
        Action::NavigateRight => Direction::Right,
        _ => return Ok(false),
    };
    state.move_cursor(direction);
    Ok(false)
}
