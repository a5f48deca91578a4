use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn roster_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("roster"));
    cmd.current_dir(dir.path())
        .env_remove("ROSTER_CONFIG")
        .env_remove("ROSTER_STORE")
        .env_remove("ROSTER_MONGODB_URI")
        .env_remove("ROSTER_DATABASE")
        .env_remove("RUST_LOG");
    cmd
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    let temp_dir = TempDir::new().unwrap();
    roster_cmd(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("students, teachers and courses"));
}

#[test]
fn test_version() {
    let temp_dir = TempDir::new().unwrap();
    roster_cmd(&temp_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("roster"));
}

// =============================================================================
// Init
// =============================================================================

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();

    roster_cmd(&temp_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    let config = std::fs::read_to_string(temp_dir.path().join(".roster.yml")).unwrap();
    assert!(config.contains("backend: memory"));
    assert!(config.contains("port: 4000"));
}

#[test]
fn test_init_twice_fails() {
    let temp_dir = TempDir::new().unwrap();
    roster_cmd(&temp_dir).arg("init").assert().success();
    roster_cmd(&temp_dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

// =============================================================================
// Schema
// =============================================================================

#[test]
fn test_schema_prints_operations() {
    let temp_dir = TempDir::new().unwrap();
    roster_cmd(&temp_dir)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("enrollStudentInCourse"))
        .stdout(predicate::str::contains("coursesTaught"))
        .stdout(predicate::str::contains("deleteStudent(id: ID!): Boolean!"));
}

// =============================================================================
// Query and mutate
// =============================================================================

#[test]
fn test_query_empty_store() {
    let temp_dir = TempDir::new().unwrap();
    roster_cmd(&temp_dir)
        .args(["query", "{ students { id } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"students\": []"));
}

#[test]
fn test_query_with_variables() {
    let temp_dir = TempDir::new().unwrap();
    roster_cmd(&temp_dir)
        .args([
            "query",
            "query($id: ID!) { course(id: $id) { id } }",
            "--variables",
            r#"{"id": "000000000000000000000000"}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"course\": null"));
}

#[test]
fn test_invalid_variables_fail() {
    let temp_dir = TempDir::new().unwrap();
    roster_cmd(&temp_dir)
        .args(["query", "{ students { id } }", "--variables", "{not json"])
        .assert()
        .failure();
}

#[test]
fn test_mutate_creates_teacher() {
    let temp_dir = TempDir::new().unwrap();
    roster_cmd(&temp_dir)
        .args([
            "mutate",
            r#"createTeacher(name: "A", email: "a@x.com") { name coursesTaught }"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"A\""))
        .stdout(predicate::str::contains("\"coursesTaught\": []"));
}

#[test]
fn test_mutate_reports_teacher_not_found() {
    let temp_dir = TempDir::new().unwrap();
    roster_cmd(&temp_dir)
        .args([
            "mutate",
            r#"createCourse(title: "C1", description: "d", teacherId: "000000000000000000000000") { id }"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Teacher not found"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    roster_cmd(&temp_dir)
        .args(["--config", "nope.yml", "query", "{ students { id } }"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
