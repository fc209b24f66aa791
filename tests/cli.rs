use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn setup_file(dir: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directory");
    }
    fs::write(&path, contents).expect("write file");
    path
}

fn check_links() -> Command {
    Command::cargo_bin("check-links").expect("binary")
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("stdout utf8")
}

#[test]
fn verbose_reports_web_link_as_valid() {
    let temp = TempDir::new().expect("tempdir");
    let doc = setup_file(temp.path(), "README.md", "[Home](http://example.com)\n");

    check_links()
        .arg("-v")
        .arg(&doc)
        .assert()
        .success()
        .stdout("VALID\thttp://example.com\n");
}

#[test]
fn missing_file_is_reported_in_both_modes() {
    let temp = TempDir::new().expect("tempdir");
    let doc = setup_file(temp.path(), "README.md", "[Missing](nofile.md)\n");

    check_links()
        .arg(&doc)
        .assert()
        .success()
        .stdout("INVALID\tnofile.md\n");

    check_links()
        .arg("--verbose")
        .arg(&doc)
        .assert()
        .success()
        .stdout("INVALID\tnofile.md\n");
}

#[test]
fn anchor_link_matches_named_anchor() {
    let temp = TempDir::new().expect("tempdir");
    let doc = setup_file(
        temp.path(),
        "README.md",
        "[Jump](#intro)\n\n<a name=\"intro\"></a>\n\n## Intro\n\nText.\n",
    );

    check_links()
        .arg("-v")
        .arg(&doc)
        .assert()
        .success()
        .stdout("VALID\t#intro\n");
}

#[test]
fn quiet_run_prints_only_invalid_links() {
    let temp = TempDir::new().expect("tempdir");
    setup_file(temp.path(), "guide.md", "# Guide\n");
    let doc = setup_file(
        temp.path(),
        "README.md",
        "- [Guide](guide.md)\n- [Gone](gone.md)\n",
    );

    check_links()
        .arg(&doc)
        .assert()
        .success()
        .stdout("INVALID\tgone.md\n");
}

#[test]
fn every_rule_in_document_order() {
    let temp = TempDir::new().expect("tempdir");
    setup_file(temp.path(), "docs/setup.md", "# Setup\n");
    setup_file(temp.path(), "LICENSE", "MIT\n");
    let doc = setup_file(
        temp.path(),
        "README.md",
        "\
# Project

<a name=\"top\"></a>

See [setup](docs/setup.md), the [license](/LICENSE) and [the site](https://example.com).

Broken: [old](docs/old.md), [root](/NOTICE), [nowhere](#nowhere).

[Back to top](#top) or [setup again](docs/setup.md).
",
    );

    let stdout = stdout_of(check_links().arg("-v").arg(&doc));
    assert_eq!(
        stdout,
        "\
VALID\tdocs/setup.md
VALID\t/LICENSE
VALID\thttps://example.com
INVALID\tdocs/old.md
INVALID\t/NOTICE
INVALID\t#nowhere
VALID\t#top
VALID\tdocs/setup.md
"
    );
}

#[test]
fn links_resolve_against_document_directory() {
    let temp = TempDir::new().expect("tempdir");
    setup_file(temp.path(), "docs/images/diagram.png", "png");
    let doc = setup_file(
        temp.path(),
        "docs/guide.md",
        "[diagram](images/diagram.png) [readme](README.md)\n",
    );
    // README.md exists one level up, not next to docs/guide.md
    setup_file(temp.path(), "README.md", "# Readme\n");

    check_links()
        .arg(&doc)
        .assert()
        .success()
        .stdout("INVALID\tREADME.md\n");
}

#[test]
fn non_ascii_and_spaced_targets_are_reported_as_written() {
    let temp = TempDir::new().expect("tempdir");
    setup_file(temp.path(), "résumé.md", "# CV\n");
    setup_file(temp.path(), "my notes.md", "- note\n");
    let doc = setup_file(
        temp.path(),
        "README.md",
        "\
[cv](résumé.md) [notes](<my notes.md>) [café](#café) [gone](<old notes.md>)

<a name=\"café\"></a>
",
    );

    let stdout = stdout_of(check_links().arg("-v").arg(&doc));
    assert_eq!(
        stdout,
        "\
VALID\trésumé.md
VALID\tmy notes.md
VALID\t#café
INVALID\told notes.md
"
    );

    check_links()
        .arg(&doc)
        .assert()
        .success()
        .stdout("INVALID\told notes.md\n");
}

#[test]
fn relative_path_argument_is_resolved_from_current_dir() {
    let temp = TempDir::new().expect("tempdir");
    setup_file(temp.path(), "notes/todo.md", "- item\n");
    setup_file(temp.path(), "notes/index.md", "[todo](todo.md)\n");

    check_links()
        .current_dir(temp.path())
        .args(["-v", "notes/index.md"])
        .assert()
        .success()
        .stdout("VALID\ttodo.md\n");
}

#[test]
fn document_without_links_prints_nothing() {
    let temp = TempDir::new().expect("tempdir");
    let doc = setup_file(temp.path(), "README.md", "# Title\n\nJust text.\n");

    check_links()
        .arg("-v")
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_document_fails() {
    let temp = TempDir::new().expect("tempdir");

    check_links()
        .arg(temp.path().join("absent.md"))
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("absent.md"));
}

#[test]
fn path_argument_is_required() {
    check_links().assert().failure();
}
