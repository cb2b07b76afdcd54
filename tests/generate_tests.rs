//! Generation through the one-shot subcommands

mod common;

use common::TestWorkspace;
use predicates::prelude::*;

#[test]
fn test_init_uses_directory_name() {
    let workspace = TestWorkspace::new();
    workspace.xpress().arg("init").assert().success();

    let manifest: serde_json::Value =
        serde_json::from_str(&workspace.read_file("package.json")).unwrap();
    let dir_name = workspace.path.file_name().unwrap().to_string_lossy();
    assert_eq!(manifest["name"], dir_name.as_ref());
    assert_eq!(manifest["version"], "1.0.0");
    assert_eq!(manifest["license"], "MIT");
    assert!(manifest.get("author").is_none());
}

#[test]
fn test_init_with_flags() {
    let workspace = TestWorkspace::new();
    workspace
        .xpress()
        .args(["init", "--name", "demo", "--author", "Ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("package.json written to"));

    let manifest: serde_json::Value =
        serde_json::from_str(&workspace.read_file("package.json")).unwrap();
    assert_eq!(
        manifest,
        serde_json::json!({"name": "demo", "version": "1.0.0", "author": "Ada", "license": "MIT"})
    );
}

#[test]
fn test_init_keeps_existing_without_yes() {
    let workspace = TestWorkspace::new();
    workspace.write_file("package.json", "{\"name\":\"keep\"}");

    workspace
        .xpress()
        .args(["init", "--name", "other"])
        .assert()
        .success();
    assert_eq!(workspace.read_file("package.json"), "{\"name\":\"keep\"}");

    workspace
        .xpress()
        .args(["init", "--name", "other", "-y"])
        .assert()
        .success();
    assert!(workspace.read_file("package.json").contains("\"other\""));
}

#[test]
fn test_dockerfile_with_runtime_version() {
    let workspace = TestWorkspace::new();
    workspace
        .xpress()
        .args(["dockerfile", "--runtime-version", "v18.16.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✔"));

    let dockerfile = workspace.read_file("Dockerfile");
    assert!(dockerfile.starts_with("FROM node:18.16.0"));
    assert!(!dockerfile.contains("{{version}}"));
}

#[test]
fn test_dockerfile_existing_untouched_without_yes() {
    let workspace = TestWorkspace::new();
    workspace.write_file("Dockerfile", "FROM scratch\n");

    workspace
        .xpress()
        .args(["dockerfile", "--runtime-version", "v20.0.0"])
        .assert()
        .code(0);
    assert_eq!(workspace.read_file("Dockerfile"), "FROM scratch\n");
}

#[test]
fn test_dockerfile_missing_runtime_fails() {
    let workspace = TestWorkspace::new();
    workspace.write_file("xpress.yaml", "runtime: xpress-no-such-runtime\n");

    workspace
        .xpress()
        .arg("dockerfile")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✖"));
    assert!(!workspace.file_exists("Dockerfile"));
}

#[test]
fn test_lint_prettier() {
    let workspace = TestWorkspace::new();
    workspace.xpress().args(["lint", "prettier"]).assert().success();

    assert!(workspace.file_exists(".prettierrc"));
    assert!(!workspace.file_exists(".eslintrc.json"));
}

#[test]
fn test_add_model() {
    let workspace = TestWorkspace::new();
    workspace.xpress().args(["add", "model", "User"]).assert().success();

    let model = workspace.read_file("models/User.js");
    assert!(model.contains("User"));
    assert!(!model.contains("{{name}}"));
}

#[test]
fn test_add_all() {
    let workspace = TestWorkspace::new();
    workspace.xpress().args(["add", "all", "Post"]).assert().success();

    assert!(workspace.file_exists("models/Post.js"));
    assert!(workspace.file_exists("controllers/Post.js"));
    assert!(workspace.file_exists("routes/Post.js"));
}

#[test]
fn test_add_invalid_name_is_fatal() {
    let workspace = TestWorkspace::new();
    workspace
        .xpress()
        .args(["add", "model", "../User"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
    assert!(!workspace.file_exists("models"));
}

#[test]
fn test_templates_override_directory() {
    let workspace = TestWorkspace::new();
    let templates = TestWorkspace::new();
    templates.write_file("model.js", "// custom {{name}}\n");

    workspace
        .xpress()
        .arg("--templates")
        .arg(&templates.path)
        .args(["add", "model", "User"])
        .assert()
        .success();
    assert_eq!(workspace.read_file("models/User.js"), "// custom User\n");
}

#[test]
fn test_templates_override_missing_template_fails() {
    let workspace = TestWorkspace::new();
    let templates = TestWorkspace::new();

    workspace
        .xpress()
        .arg("--templates")
        .arg(&templates.path)
        .args(["lint", "eslint"])
        .assert()
        .failure();
    assert!(!workspace.file_exists(".eslintrc.json"));
}
