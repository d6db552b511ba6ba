//! Integration tests for the `demo` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn demo_prints_all_charts_in_order() {
    let fixture = TestFixture::new();

    let output = beaned_charts!()
        .current_dir(fixture.path())
        .args(["--no-config", "demo"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let positions: Vec<usize> = ["<!-- bar -->", "<!-- line -->", "<!-- donut -->", "<!-- area -->"]
        .iter()
        .map(|marker| stdout.find(marker).expect("marker missing"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn demo_writes_files_to_output_dir() {
    let fixture = TestFixture::new();

    beaned_charts!()
        .current_dir(fixture.path())
        .args(["--no-config", "demo", "--output-dir", "charts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    for name in ["bar", "line", "donut", "area"] {
        let svg = fixture.read(&format!("charts/{name}.svg"));
        assert!(svg.starts_with("<svg"));
    }
}

#[test]
fn demo_quiet_suppresses_progress() {
    let fixture = TestFixture::new();

    beaned_charts!()
        .current_dir(fixture.path())
        .args(["--no-config", "--quiet", "demo", "-o", "charts"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
