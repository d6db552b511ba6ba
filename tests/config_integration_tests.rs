//! Integration tests for the `config` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn config_validate_reports_problems() {
    let fixture = TestFixture::new();
    fixture.create_config("[pie]\nhole_size = 1.2\n\n[bar]\nbar_spacing = -0.1\n");

    beaned_charts!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("pie.hole_size"))
        .stderr(predicate::str::contains("bar.bar_spacing"));
}

#[test]
fn config_validate_missing_file() {
    let fixture = TestFixture::new();

    beaned_charts!()
        .current_dir(fixture.path())
        .args(["config", "validate", "--config", "nope.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error: [Config]"))
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn config_show_text_includes_local_values() {
    let fixture = TestFixture::new();
    fixture.create_config("[line]\ncolor = \"#10b981\"\n");

    beaned_charts!()
        .current_dir(fixture.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Source:"))
        .stdout(predicate::str::contains("color = \"#10b981\""));
}

#[test]
fn config_show_json() {
    let fixture = TestFixture::new();

    beaned_charts!()
        .current_dir(fixture.path())
        .args(["--no-config", "config", "show", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hole_size\": 0.0"));
}
