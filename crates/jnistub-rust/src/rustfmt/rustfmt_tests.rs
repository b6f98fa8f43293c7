#![allow(non_snake_case)]

use super::*;
use std::fs;
use tempfile::TempDir;

fn scratch_file(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("mod.rs");
    fs::write(&path, "fn   main( ) { }\n").unwrap();
    path
}

#[test]
fn Rustfmt___missing_program___reports_not_found() {
    let dir = TempDir::new().unwrap();
    let fmt = Rustfmt::new("jnistub-no-such-formatter");

    let warning = fmt.format(&scratch_file(&dir)).unwrap_err();

    assert!(matches!(warning, ToolInvocationWarning::NotFound { ref tool } if tool == "jnistub-no-such-formatter"));
}

#[cfg(unix)]
#[test]
fn Rustfmt___failing_program___reports_exit_status() {
    let dir = TempDir::new().unwrap();
    let fmt = Rustfmt::new("false");

    let warning = fmt.format(&scratch_file(&dir)).unwrap_err();

    assert!(matches!(warning, ToolInvocationWarning::NonZeroExit { .. }));
}

#[cfg(unix)]
#[test]
fn Rustfmt___succeeding_program___is_ok() {
    let dir = TempDir::new().unwrap();
    let path = scratch_file(&dir);
    let fmt = Rustfmt::new("true");

    assert!(fmt.format(&path).is_ok());
    assert_eq!(fs::read_to_string(path).unwrap(), "fn   main( ) { }\n");
}

#[test]
fn Rustfmt___default___runs_rustfmt() {
    assert_eq!(Rustfmt::default().program(), "rustfmt");
}
