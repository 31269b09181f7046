use predicates::prelude::*;
use std::fs;

use crate::common::{ConfigFixture, ProjectFixture, TestEnvironment, run_in};

/// Test rendering to the default output path
#[test]
fn test_render_default_output() {
    let env = TestEnvironment::with_sample_projects().unwrap();

    run_in(&env, &["render"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered 2 project(s)"));

    let html = env.read_file("dist/projects.html").unwrap();
    assert!(html.contains("<h1 class=\"text-4xl font-bold mb-8 text-center\">Projects</h1>"));
    assert!(html.contains("id=\"project-alpha\""));
    assert!(html.contains("href=\"/projects/beta\""));
    assert!(html.contains("January 5, 2024"));
    assert!(html.contains("<span class=\"badge badge-secondary\">rust</span>"));
    assert!(html.contains("href=\"https://github.com/example/beta\""));
    assert!(html.contains("Live Demo"));
    // alpha has no links
    assert!(html.contains("No Repo"));
    assert!(html.contains("No Demo"));
}

/// Test the empty listing message
#[test]
fn test_render_empty_listing() {
    let env = TestEnvironment::new().unwrap();

    run_in(&env, &["render", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found"))
        .stdout(predicate::str::contains("Check back later for new content!"))
        .stdout(predicate::str::contains("<article").not());
}

/// Test --output writes to the given path, creating parent directories
#[test]
fn test_render_output_flag() {
    let env = TestEnvironment::with_sample_projects().unwrap();

    run_in(&env, &["render", "-o", "public/generated/index.html"]).assert().success();

    let html = env.read_file("public/generated/index.html").unwrap();
    assert!(html.contains("id=\"project-beta\""));
    assert!(!env.output_path().exists());
}

/// Test values are HTML escaped
#[test]
fn test_render_escapes_values() {
    let env = TestEnvironment::new().unwrap();
    env.add_project(
        &ProjectFixture::new("xss.md")
            .field("title", "<script>alert(1)</script>")
            .field("description", "Fish & Chips"),
    )
    .unwrap();

    run_in(&env, &["render", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("&lt;script&gt;alert(1)&lt;/script&gt;"))
        .stdout(predicate::str::contains("Fish &amp; Chips"))
        .stdout(predicate::str::contains("<script>").not());
}

/// Test image and logo are only rendered for site-relative or http URLs
#[test]
fn test_render_image_filtering() {
    let env = TestEnvironment::new().unwrap();
    env.add_project(
        &ProjectFixture::new("pics.md")
            .field("title", "Pics")
            .field("image", "/img/pics.png")
            .field("logo", "logo.png"),
    )
    .unwrap();

    run_in(&env, &["render", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("src=\"/img/pics.png\""))
        .stdout(predicate::str::contains("logo.png").not());
}

/// Test featured-first ordering in the page
#[test]
fn test_render_featured_first() {
    let env = TestEnvironment::with_sample_projects().unwrap();

    let output = run_in(&env, &["render", "--stdout", "--featured-first"]).output().unwrap();
    assert!(output.status.success());

    let html = String::from_utf8(output.stdout).unwrap();
    let beta = html.find("id=\"project-beta\"").unwrap();
    let alpha = html.find("id=\"project-alpha\"").unwrap();
    assert!(beta < alpha);
}

/// Test a custom template configured in portfolio.toml
#[test]
fn test_render_custom_template_from_config() {
    let env = TestEnvironment::with_sample_projects().unwrap();
    fs::write(
        env.root().join("cards.html"),
        "{{ title }}:{% for card in cards %}[{{ card.slug }}]{% endfor %}",
    )
    .unwrap();
    fs::write(
        env.root().join("portfolio.toml"),
        "title = \"Work\"\ntemplate = \"cards.html\"\n",
    )
    .unwrap();

    run_in(&env, &["render", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Work:[alpha][beta]"));
}

/// Test --template overrides the configured template
#[test]
fn test_render_template_flag() {
    let env = TestEnvironment::with_sample_projects().unwrap();
    fs::write(env.root().join("count.html"), "{{ cards | length }}").unwrap();

    run_in(&env, &["render", "--stdout", "--template", "count.html"])
        .assert()
        .success()
        .stdout(predicate::str::diff("2"));
}

/// Test the configured output path and link prefix
#[test]
fn test_render_config_output() {
    let env = TestEnvironment::with_sample_projects().unwrap();
    env.write_config(&ConfigFixture {
        content: "output = \"site/work.html\"\nlink_prefix = \"/work/\"\n".to_string(),
    })
    .unwrap();

    run_in(&env, &["render"])
        .assert()
        .success()
        .stdout(predicate::str::contains("site/work.html"));

    let html = env.read_file("site/work.html").unwrap();
    assert!(html.contains("href=\"/work/alpha\""));
}
