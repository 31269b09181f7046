use predicates::prelude::*;

use crate::common::{ConfigFixture, ProjectFixture, TestEnvironment, run_in};

/// Test table output with the default configuration
#[test]
fn test_list_table() {
    let env = TestEnvironment::with_sample_projects().unwrap();

    run_in(&env, &["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Projects"))
        .stdout(predicate::str::contains("alpha"))
        .stdout(predicate::str::contains("Beta"))
        .stdout(predicate::str::contains("January 5, 2024"))
        .stdout(predicate::str::contains("Total: 2 project(s)"));
}

/// Test listing an empty projects directory
#[test]
fn test_list_empty_directory() {
    let env = TestEnvironment::new().unwrap();

    run_in(&env, &["list"]).assert().success().stdout("No projects found.\n");
}

/// Test that a missing projects directory is an empty listing, not an error
#[test]
fn test_list_missing_directory() {
    let env = TestEnvironment::new().unwrap();
    env.remove_projects_dir().unwrap();

    run_in(&env, &["list", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

/// Test JSON output carries the defaults applied to missing fields
#[test]
fn test_list_json_defaults() {
    let env = TestEnvironment::new().unwrap();
    env.add_raw_file("bare.md", "no header here\n").unwrap();

    let output = run_in(&env, &["list", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let project = &value[0];
    assert_eq!(project["slug"], "bare");
    assert_eq!(project["title"], "bare.md");
    assert_eq!(project["description"], "");
    assert_eq!(project["tags"], serde_json::json!([]));
    assert_eq!(project["featured"], false);
    assert_eq!(project["links"]["github"], "");
}

/// Test JSON output of a fully populated project
#[test]
fn test_list_json_fields() {
    let env = TestEnvironment::new().unwrap();
    env.add_project(&ProjectFixture::featured("gamma").field("image", "/img/gamma.png"))
        .unwrap();

    let output = run_in(&env, &["list", "--format", "json"]).output().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let project = &value[0];

    assert_eq!(project["title"], "Gamma");
    assert_eq!(project["image"], "/img/gamma.png");
    assert_eq!(project["tags"], serde_json::json!(["rust", "cli"]));
    assert_eq!(project["featured"], true);
    assert_eq!(project["links"]["github"], "https://github.com/example/gamma");
    assert_eq!(project["links"]["live"], "https://gamma.example.com");
}

/// Test that projects are listed in file name order
#[test]
fn test_list_sorted_by_file_name() {
    let env = TestEnvironment::new().unwrap();
    env.add_project(&ProjectFixture::basic("zeta")).unwrap();
    env.add_project(&ProjectFixture::basic("alpha")).unwrap();
    env.add_project(&ProjectFixture::basic("mu")).unwrap();

    run_in(&env, &["list", "--format", "simple"])
        .assert()
        .success()
        .stdout(predicate::str::diff("alpha\nmu\nzeta\n"));
}

/// Test featured-first ordering and the featured filter
#[test]
fn test_list_featured() {
    let env = TestEnvironment::new().unwrap();
    env.add_project(&ProjectFixture::basic("alpha")).unwrap();
    env.add_project(&ProjectFixture::basic("beta")).unwrap();
    env.add_project(&ProjectFixture::featured("gamma")).unwrap();

    run_in(&env, &["list", "--format", "simple", "--featured-first"])
        .assert()
        .success()
        .stdout(predicate::str::diff("gamma\nalpha\nbeta\n"));

    run_in(&env, &["list", "--format", "simple", "--featured"])
        .assert()
        .success()
        .stdout(predicate::str::diff("gamma\n"));
}

/// Test hidden files and subdirectories are skipped
#[test]
fn test_list_skips_hidden_and_directories() {
    let env = TestEnvironment::with_sample_projects().unwrap();
    env.add_raw_file(".draft.md", "---\ntitle: Draft\n---\n").unwrap();
    std::fs::create_dir(env.projects_dir.join("assets")).unwrap();

    run_in(&env, &["list", "--format", "simple"])
        .assert()
        .success()
        .stdout(predicate::str::diff("alpha\nbeta\n"));
}

/// Test YAML output
#[test]
fn test_list_yaml() {
    let env = TestEnvironment::with_sample_projects().unwrap();

    run_in(&env, &["list", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("slug: alpha"))
        .stdout(predicate::str::contains("featured: true"));
}

/// Test the projects directory and title come from portfolio.toml
#[test]
fn test_list_uses_config_file() {
    let env = TestEnvironment::new().unwrap();
    env.write_config(&ConfigFixture::with_paths("My Work", "content", "site/index.html"))
        .unwrap();
    ProjectFixture::basic("delta").write_to(&env.root().join("content")).unwrap();

    run_in(&env, &["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("My Work"))
        .stdout(predicate::str::contains("delta"));
}

/// Test --projects-dir overrides the configured directory
#[test]
fn test_list_projects_dir_flag() {
    let env = TestEnvironment::with_sample_projects().unwrap();
    ProjectFixture::basic("omega").write_to(&env.root().join("other")).unwrap();

    run_in(&env, &["--projects-dir", "other", "list", "--format", "simple"])
        .assert()
        .success()
        .stdout(predicate::str::diff("omega\n"));
}
