//! End-to-end tests for `beadgrid new`.

mod fixtures;
use fixtures::*;

#[test]
fn test_new_creates_single_template() {
    let env = TestEnv::new();
    let result = env.run_json(&["new", "--json"]);

    let template = result["template"].as_str().expect("Should have template id");
    assert!(!template.is_empty());
    assert!(result["store"]
        .as_str()
        .unwrap()
        .ends_with("design.json"));

    let design = env.read_design();
    assert_eq!(design.layout.len(), 1);
    assert_eq!(design.layout.templates()[0].id.as_str(), template);
    assert_eq!(design.layout.bead_count(), 0);
}

#[test]
fn test_new_human_output() {
    let env = TestEnv::new();
    let output = env.run(&["new"], true);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Created new design in"));
    assert!(stdout.contains("Template: "));
}

#[test]
fn test_new_refuses_to_overwrite() {
    let env = TestEnv::new();
    env.write_design(&test_layout_painted(), &Default::default());
    let before = env.store_contents();

    let output = env.run(&["new"], true);

    assert_eq!(
        output.status.code(),
        Some(1),
        "Existing design without --force is a validation error"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--force"), "stderr: {stderr}");
    assert_eq!(env.store_contents(), before, "Store must be untouched");
}

#[test]
fn test_new_force_overwrites() {
    let env = TestEnv::new();
    env.write_design(&test_layout_row(), &Default::default());

    let output = env.run(&["new", "--force"], true);
    assert_eq!(output.status.code(), Some(0));

    let design = env.read_design();
    assert_eq!(design.layout.len(), 1);
}

#[test]
fn test_new_uses_configured_store() {
    let env = TestEnv::new();
    let output = env.run(&["new"], false);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let default_store = env.config_dir().join("storage.json");
    assert!(default_store.exists(), "Design should land in the config dir");
    assert_eq!(read_design(&default_store).layout.len(), 1);
}
