// File operations action handlers

use crate::export::default_sheet_path;
use crate::tui::AppState;
use anyhow::Result;
use std::fs;

/// Handle quit action
pub fn handle_quit(state: &mut AppState) -> Result<bool> {
    state.editor.release();
    Ok(true)
}

/// Handle save action
pub fn handle_save(state: &mut AppState) -> Result<bool> {
    state.editor.save();
    Ok(false)
}

/// Handle load action
pub fn handle_load(state: &mut AppState) -> Result<bool> {
    if state.editor.load() {
        state.refocus();
    }
    Ok(false)
}

/// Handle toggling per-template quantities on the pattern sheet
pub fn handle_toggle_individual(state: &mut AppState) -> Result<bool> {
    if state.editor.layout().len() < 2 {
        state.set_error("Per-template quantities need more than one template");
        return Ok(false);
    }
    let mut options = state.editor.sheet_options();
    options.show_individual_colors = !options.show_individual_colors;
    state.editor.set_sheet_options(options);
    state.set_status(if options.show_individual_colors {
        "Per-template quantities on"
    } else {
        "Per-template quantities off"
    });
    Ok(false)
}

/// Handle toggling total quantities on the pattern sheet
pub fn handle_toggle_overall(state: &mut AppState) -> Result<bool> {
    let mut options = state.editor.sheet_options();
    options.show_overall_colors = !options.show_overall_colors;
    state.editor.set_sheet_options(options);
    state.set_status(if options.show_overall_colors {
        "Total quantities on"
    } else {
        "Total quantities off"
    });
    Ok(false)
}

/// Handle writing the pattern sheet to a dated file in the working directory
pub fn handle_export_sheet(state: &mut AppState) -> Result<bool> {
    let output_path = default_sheet_path();
    match fs::write(&output_path, state.editor.pattern_sheet()) {
        Ok(()) => {
            tracing::info!(path = %output_path.display(), "pattern sheet exported");
            state.set_status(format!("Exported to: {}", output_path.display()));
        }
        Err(e) => {
            tracing::warn!(error = %e, "export failed");
            state.set_error(format!("Export failed: {e}"));
        }
    }
    Ok(false)
}

/// Handle copying the bead shopping list to the system clipboard
pub fn handle_copy_shopping_list(state: &mut AppState) -> Result<bool> {
    if state.editor.layout().bead_count() == 0 {
        state.set_error("No beads placed yet");
        return Ok(false);
    }
    let list = state.editor.shopping_list();
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(list)) {
        Ok(()) => state.set_status("Shopping list copied to clipboard"),
        Err(e) => state.set_error(format!("Failed to copy to clipboard: {e}")),
    }
    Ok(false)
}
