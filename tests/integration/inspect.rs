use predicates::prelude::*;

use crate::common::{ProjectFixture, TestEnvironment, run_in};

/// Test raw front matter as JSON
#[test]
fn test_inspect_json() {
    let env = TestEnvironment::new().unwrap();
    env.add_project(&ProjectFixture::featured("beta")).unwrap();

    let output = run_in(&env, &["inspect", "public/projects/beta.md"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["title"], "Beta");
    assert_eq!(value["featured"], true);
    assert_eq!(value["tags"], serde_json::json!(["rust", "cli"]));
    assert_eq!(value["links"]["live"], "https://beta.example.com");
}

/// Test raw values are kept as strings, including ones that look numeric
#[test]
fn test_inspect_keeps_strings() {
    let env = TestEnvironment::new().unwrap();
    env.add_raw_file("nums.md", "---\nyear: 2024\nurl: http://x.io:8080/a\nempty: []\n---\n")
        .unwrap();

    let output = run_in(&env, &["inspect", "public/projects/nums.md"]).output().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(value["year"], "2024");
    assert_eq!(value["url"], "http://x.io:8080/a");
    assert_eq!(value["empty"], serde_json::json!([""]));
}

/// Test a file without a header prints an empty mapping
#[test]
fn test_inspect_no_front_matter() {
    let env = TestEnvironment::new().unwrap();
    env.add_raw_file("plain.md", "# Just a heading\n").unwrap();

    run_in(&env, &["inspect", "public/projects/plain.md"])
        .assert()
        .success()
        .stdout(predicate::str::diff("{}\n"));
}

/// Test the project view applies defaults
#[test]
fn test_inspect_project_yaml() {
    let env = TestEnvironment::new().unwrap();
    env.add_raw_file("solo.md", "---\nfeatured: yes\n---\n").unwrap();

    run_in(&env, &["inspect", "public/projects/solo.md", "--project", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("slug: solo"))
        .stdout(predicate::str::contains("title: solo.md"))
        .stdout(predicate::str::contains("featured: false"));
}

/// Test a missing file is reported with a non-zero exit code
#[test]
fn test_inspect_missing_file() {
    let env = TestEnvironment::new().unwrap();

    run_in(&env, &["inspect", "nope.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("nope.md"));
}

/// Test a malformed object value fails
#[test]
fn test_inspect_malformed_object() {
    let env = TestEnvironment::new().unwrap();
    env.add_raw_file("bad.md", "---\nlinks: {github: nope}\n---\n").unwrap();

    run_in(&env, &["inspect", "public/projects/bad.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed front matter in 'bad.md'"));
}
