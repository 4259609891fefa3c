//! Action dispatch for the main editor context.

use anyhow::Result;

use crate::shortcuts::Action;
use crate::tui::AppState;

use super::action_handlers::{color, file_ops, navigation, popups, templates};

/// Run an action. Returns `true` when the application should quit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    match action {
        // Cursor (4 actions)
        Action::NavigateUp
        | Action::NavigateDown
        | Action::NavigateLeft
        | Action::NavigateRight => navigation::handle_navigate(state, action),

        // Painting (6 actions)
        Action::PressCell => color::handle_press_cell(state),
        Action::TogglePaintCan => color::handle_toggle_paint_can(state),
        Action::SelectEraser => color::handle_select_eraser(state),
        Action::NextColor => color::handle_cycle_color(state, true),
        Action::PreviousColor => color::handle_cycle_color(state, false),
        Action::NewCustomColor => popups::handle_open_custom_color_input(state),

        // Templates (6 actions)
        Action::AddTemplateUp
        | Action::AddTemplateDown
        | Action::AddTemplateLeft
        | Action::AddTemplateRight => templates::handle_add_template(state, action),
        Action::RemoveTemplate => templates::handle_remove_template(state),
        Action::ClearTemplate => templates::handle_clear_template(state),

        // Pattern sheet (4 actions)
        Action::ToggleIndividualQuantities => file_ops::handle_toggle_individual(state),
        Action::ToggleOverallQuantities => file_ops::handle_toggle_overall(state),
        Action::ExportSheet => file_ops::handle_export_sheet(state),
        Action::CopyShoppingList => file_ops::handle_copy_shopping_list(state),

        // File operations (3 actions)
        Action::Save => file_ops::handle_save(state),
        Action::Load => file_ops::handle_load(state),
        Action::Quit => file_ops::handle_quit(state),

        // Help (1 action)
        Action::ToggleHelp => popups::handle_toggle_help(state),

        // Cancel (1 action)
        Action::Cancel => {
            // Abandon a drag left open by a lost mouse release
            state.editor.release();
            Ok(false)
        }
    }
}
