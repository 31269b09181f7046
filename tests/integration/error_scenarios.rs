use predicates::prelude::*;
use std::fs;

use crate::common::{ConfigFixture, ProjectFixture, TestEnvironment, portfolio_cmd, run_in};

/// One malformed file empties the whole listing in the default mode
#[test]
fn test_malformed_file_lenient_listing_is_empty() {
    let env = TestEnvironment::with_sample_projects().unwrap();
    env.add_raw_file("broken.md", "---\nlinks: {not json}\n---\n").unwrap();

    run_in(&env, &["list", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"))
        .stderr(predicate::str::contains("broken.md"));

    run_in(&env, &["render", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found"));
}

/// With --strict the same file is a hard failure
#[test]
fn test_malformed_file_strict_fails() {
    let env = TestEnvironment::with_sample_projects().unwrap();
    env.add_raw_file("broken.md", "---\nlinks: {not json}\n---\n").unwrap();

    run_in(&env, &["list", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed front matter in 'broken.md'"))
        .stderr(predicate::str::contains("suggestion"));

    run_in(&env, &["render", "--strict"]).assert().failure();
    assert!(!env.output_path().exists());
}

/// Files with invalid UTF-8 still load, and the other projects still render
#[test]
fn test_invalid_utf8_project_still_renders() {
    let env = TestEnvironment::with_sample_projects().unwrap();
    fs::write(env.projects_dir.join("cafe.md"), b"---\ntitle: Caf\xe9\n---\n").unwrap();

    run_in(&env, &["render", "--stdout", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Caf\u{FFFD}"))
        .stdout(predicate::str::contains("id=\"project-alpha\""))
        .stdout(predicate::str::contains("id=\"project-beta\""))
        .stderr(predicate::str::contains("cafe.md"));

    run_in(&env, &["list", "--format", "simple"])
        .assert()
        .success()
        .stdout(predicate::str::diff("alpha\nbeta\ncafe\n"));
}

/// Invalid TOML in portfolio.toml is reported with the parser details
#[test]
fn test_invalid_config() {
    let env = TestEnvironment::new().unwrap();
    env.write_config(&ConfigFixture::invalid()).unwrap();

    run_in(&env, &["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration file syntax"));
}

/// Unknown keys in portfolio.toml are rejected
#[test]
fn test_unknown_config_key() {
    let env = TestEnvironment::new().unwrap();
    env.write_config(&ConfigFixture {
        content: "titel = \"typo\"\n".to_string(),
    })
    .unwrap();

    run_in(&env, &["list"]).assert().failure().stderr(predicate::str::contains("titel"));
}

/// An explicit --config that does not exist is an error
#[test]
fn test_missing_explicit_config() {
    let env = TestEnvironment::new().unwrap();

    run_in(&env, &["--config", "missing.toml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

/// PORTFOLIO_CONFIG selects the config file
#[test]
fn test_config_from_environment() {
    let env = TestEnvironment::new().unwrap();
    ProjectFixture::basic("eta").write_to(&env.root().join("elsewhere")).unwrap();
    fs::write(env.root().join("site.toml"), "projects_dir = \"elsewhere\"\n").unwrap();

    portfolio_cmd(env.root())
        .env("PORTFOLIO_CONFIG", "site.toml")
        .args(["list", "--format", "simple"])
        .assert()
        .success()
        .stdout(predicate::str::diff("eta\n"));
}

/// A broken custom template fails the render
#[test]
fn test_broken_template() {
    let env = TestEnvironment::with_sample_projects().unwrap();
    fs::write(env.root().join("broken.html"), "{% for card in cards %}").unwrap();

    run_in(&env, &["render", "--template", "broken.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// A missing custom template fails the render
#[test]
fn test_missing_template() {
    let env = TestEnvironment::with_sample_projects().unwrap();

    run_in(&env, &["render", "--template", "nope.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.html"));
}

/// Quiet mode suppresses the lenient-load error log
#[test]
fn test_quiet_still_reports_errors_only() {
    let env = TestEnvironment::new().unwrap();
    env.remove_projects_dir().unwrap();

    run_in(&env, &["--quiet", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("does not exist").not());

    run_in(&env, &["list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("does not exist"));
}
