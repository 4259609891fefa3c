//! Editor sessions against a store file on disk.

mod fixtures;
use fixtures::*;

use beadgrid::editor::{DesignEditor, Tool};
use beadgrid::models::{CustomColors, Direction, RgbColor};
use beadgrid::services::FileStore;

fn editor_at(env: &TestEnv) -> DesignEditor {
    DesignEditor::new(Box::new(FileStore::new(env.store_path())))
}

#[test]
fn test_session_paint_save_and_reload() {
    let env = TestEnv::new();
    let mut editor = editor_at(&env);
    assert!(!editor.has_saved());

    let origin = editor.layout().templates()[0].id.clone();
    editor.select_color(Some(RED));
    assert!(editor.cell_press(&origin, 3, 3));
    assert!(editor.cell_drag_enter(&origin, 3, 4));
    assert!(!editor.cell_drag_enter(&origin, 3, 4), "Same cell twice");
    assert!(editor.cell_drag_enter(&origin, 3, 5));
    editor.release();

    let added = editor
        .add_adjacent(&origin, Direction::Down)
        .expect("Below the origin is free");
    assert!(editor.save());
    assert!(editor.has_saved());
    assert_eq!(editor.status().map(|s| s.text.as_str()), Some("Design saved!"));

    let mut reopened = editor_at(&env);
    assert!(reopened.has_saved());
    assert!(reopened.load());
    assert_eq!(reopened.layout().len(), 2);
    assert_eq!(reopened.layout().bead_count(), 3);
    assert_eq!(reopened.layout().get(&added).map(|t| t.position()), Some((0, 1)));
}

#[test]
fn test_drag_stays_on_starting_template() {
    let env = TestEnv::new();
    let mut editor = editor_at(&env);
    let origin = editor.layout().templates()[0].id.clone();
    let right = editor.add_adjacent(&origin, Direction::Right).unwrap();

    editor.select_color(Some(BLACK));
    editor.cell_press(&origin, 0, 28);
    assert!(!editor.cell_drag_enter(&right, 0, 0));
    editor.release();

    assert_eq!(editor.layout().get(&right).unwrap().grid.bead_count(), 0);
    assert_eq!(editor.layout().bead_count(), 1);
}

#[test]
fn test_paint_can_session() {
    let env = TestEnv::new();
    let mut editor = editor_at(&env);
    let origin = editor.layout().templates()[0].id.clone();

    editor.set_tool(Tool::PaintCan);
    editor.select_color(Some(RED));
    editor.cell_press(&origin, 10, 10);
    editor.release();

    editor.toggle_paint_can();
    assert_eq!(editor.tool(), Tool::Pencil);
    editor.select_eraser();
    editor.cell_press(&origin, 0, 0);
    editor.release();

    assert_eq!(editor.layout().bead_count(), 29 * 29 - 1);
}

#[test]
fn test_load_upgrades_legacy_design() {
    let env = TestEnv::new();
    let mut rows = vec![vec![String::new(); 29]; 29];
    rows[4][7] = "#000000".to_string();
    write_raw(
        &env.store_path(),
        Some(&serde_json::to_string(&rows).unwrap()),
        None,
    );

    let mut editor = editor_at(&env);
    assert!(editor.load());

    let template = &editor.layout().templates()[0];
    assert_eq!(template.position(), (0, 0));
    assert_eq!(template.grid.get(4, 7), Some(BLACK));
}

#[test]
fn test_corrupt_design_keeps_current() {
    let env = TestEnv::new();
    write_raw(&env.store_path(), Some("[[1, 2], \"oops\"]"), None);

    let mut editor = editor_at(&env);
    let origin = editor.layout().templates()[0].id.clone();
    editor.select_color(Some(RED));
    editor.cell_press(&origin, 1, 1);
    editor.release();

    assert!(!editor.load());
    let status = editor.status().expect("Failure is reported");
    assert!(status.is_error);
    assert_eq!(status.text, "Failed to load");
    assert_eq!(editor.layout().bead_count(), 1, "Current design is kept");
}

#[test]
fn test_missing_design_reported() {
    let env = TestEnv::new();
    let mut editor = editor_at(&env);

    assert!(!editor.load());
    assert_eq!(
        editor.status().map(|s| s.text.as_str()),
        Some("No saved design found")
    );
}

#[test]
fn test_custom_colors_persist() {
    let env = TestEnv::new();
    let teal = RgbColor::new(0, 128, 128);
    let mut editor = editor_at(&env);
    assert_eq!(editor.add_custom_color(teal), Some(0));
    assert_eq!(editor.brush(), Some(teal));
    assert!(editor.save());

    let design = env.read_design();
    let custom = design.custom_colors.unwrap_or_else(CustomColors::new);
    assert_eq!(custom.get(0), Some(teal));

    let mut reopened = editor_at(&env);
    assert!(reopened.load());
    assert_eq!(reopened.custom_colors().get(0), Some(teal));
    assert_eq!(reopened.color_name(teal), "Custom 1");
}
