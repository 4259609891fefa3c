//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use beadgrid::constants::{CUSTOM_COLORS_STORAGE_KEY, DESIGN_STORAGE_KEY};
use beadgrid::models::{
    BeadGrid, CustomColors, Direction, RgbColor, Template, TemplateId, TemplateLayout,
};
use beadgrid::services::{DesignService, FileStore, KeyValueStore, LoadOutcome, LoadedDesign};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub const RED: RgbColor = RgbColor::new(255, 0, 0);
pub const BLACK: RgbColor = RgbColor::new(0, 0, 0);

/// Path to the beadgrid binary
pub fn beadgrid_bin() -> &'static str {
    env!("CARGO_BIN_EXE_beadgrid")
}

/// Temp directory holding an isolated config directory and a store file.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("design.json")
    }

    /// Runs the binary with the isolated config directory. `--store` is
    /// appended when `with_store` is set.
    pub fn run(&self, args: &[&str], with_store: bool) -> Output {
        let mut cmd = Command::new(beadgrid_bin());
        cmd.env("BEADGRID_CONFIG_DIR", self.config_dir());
        cmd.current_dir(self.dir.path());
        cmd.args(args);
        if with_store {
            cmd.arg("--store").arg(self.store_path());
        }
        cmd.output().expect("Failed to execute command")
    }

    /// Runs with `--store` and parses stdout as JSON.
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let output = self.run(args, true);
        assert_eq!(
            output.status.code(),
            Some(0),
            "{args:?} should succeed. stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
    }

    pub fn write_design(&self, layout: &TemplateLayout, custom: &CustomColors) {
        write_design(&self.store_path(), layout, custom);
    }

    pub fn read_design(&self) -> LoadedDesign {
        read_design(&self.store_path())
    }

    pub fn store_contents(&self) -> String {
        std::fs::read_to_string(self.store_path()).unwrap_or_default()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes a design to a store file.
pub fn write_design(path: &Path, layout: &TemplateLayout, custom: &CustomColors) {
    let mut store = FileStore::new(path);
    DesignService::save(&mut store, layout, custom).expect("Failed to save design");
}

/// Reads a design from a store file, failing the test if there is none.
pub fn read_design(path: &Path) -> LoadedDesign {
    let store = FileStore::new(path);
    match DesignService::load(&store).expect("Failed to read store") {
        LoadOutcome::Loaded(design) => design,
        other => panic!("Expected a stored design, got {other:?}"),
    }
}

/// Writes raw values under the storage keys, for legacy and corrupt data.
pub fn write_raw(path: &Path, design: Option<&str>, custom: Option<&str>) {
    let mut store = FileStore::new(path);
    if let Some(design) = design {
        store
            .set(DESIGN_STORAGE_KEY, design)
            .expect("Failed to write design key");
    }
    if let Some(custom) = custom {
        store
            .set(CUSTOM_COLORS_STORAGE_KEY, custom)
            .expect("Failed to write custom colors key");
    }
}

/// Id of the template at a position.
pub fn id_at(layout: &TemplateLayout, x: i32, y: i32) -> TemplateId {
    layout
        .template_at(x, y)
        .unwrap_or_else(|| panic!("No template at {x}:{y}"))
        .id
        .clone()
}

/// Three templates in a row: (0,0), (1,0), (2,0).
pub fn test_layout_row() -> TemplateLayout {
    let layout = TemplateLayout::create_initial();
    let origin = layout.templates()[0].id.clone();
    let layout = layout.add_adjacent(&origin, Direction::Right);
    let middle = id_at(&layout, 1, 0);
    layout.add_adjacent(&middle, Direction::Right)
}

/// Single template with a few red and black beads.
pub fn test_layout_painted() -> TemplateLayout {
    let grid = BeadGrid::empty()
        .set_cell(0, 0, Some(RED))
        .set_cell(0, 1, Some(RED))
        .set_cell(5, 5, Some(BLACK));
    TemplateLayout::from_templates(vec![Template::with_grid(
        TemplateId::from("painted"),
        grid,
        0,
        0,
    )])
    .expect("Valid layout")
}
