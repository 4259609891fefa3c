//! End-to-end tests for `beadgrid config`.

mod fixtures;
use fixtures::*;

#[test]
fn test_config_show_defaults() {
    let env = TestEnv::new();
    let output = env.run(&["config", "show", "--json"], false);
    assert_eq!(output.status.code(), Some(0));

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["ui"]["theme"], "auto");
    assert_eq!(result["ui"]["show_help_on_startup"], true);
    assert_eq!(result["editor"]["default_color"], "#000000");
    assert_eq!(result["editor"]["show_individual_colors"], false);
    assert_eq!(result["editor"]["show_overall_colors"], true);
    assert!(result["paths"]["storage_file"]
        .as_str()
        .unwrap()
        .ends_with("storage.json"));
}

#[test]
fn test_config_show_human_readable() {
    let env = TestEnv::new();
    let output = env.run(&["config", "show"], false);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Bead Grid Designer Configuration"));
    assert!(stdout.contains("Theme: auto"));
}

#[test]
fn test_config_set_theme() {
    let env = TestEnv::new();
    let output = env.run(&["config", "set", "--theme", "dark"], false);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Configuration updated successfully."));
    assert!(env.config_dir().join("config.toml").exists());

    let output = env.run(&["config", "show", "--json"], false);
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["ui"]["theme"], "dark");
}

#[test]
fn test_config_set_requires_an_option() {
    let env = TestEnv::new();
    let output = env.run(&["config", "set"], false);

    assert_eq!(output.status.code(), Some(1));
    assert!(!env.config_dir().join("config.toml").exists());
}

#[test]
fn test_config_set_rejects_bad_values() {
    let env = TestEnv::new();

    let output = env.run(&["config", "set", "--theme", "purple"], false);
    assert_eq!(output.status.code(), Some(1));

    let output = env.run(&["config", "set", "--default-color", "red"], false);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid default color"));
}

#[test]
fn test_config_storage_file_used_by_commands() {
    let env = TestEnv::new();
    let custom_store = env.dir.path().join("elsewhere").join("beads.json");

    let output = env.run(
        &["config", "set", "--storage-file", custom_store.to_str().unwrap()],
        false,
    );
    assert_eq!(output.status.code(), Some(0));

    let output = env.run(&["new"], false);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(custom_store.exists());
    assert_eq!(read_design(&custom_store).layout.len(), 1);

    let output = env.run(&["inspect", "--json"], false);
    assert_eq!(output.status.code(), Some(0));
}
