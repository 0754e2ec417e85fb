// tests/integration_tests/properties_test.rs
use super::common::{create_test_file, read, run_session, setup_nested_project};
use anyhow::Result;
use rrep::{Outcome, ReplaceConfig, Session, scanner};
use std::fs;
use std::io;
use tempfile::TempDir;

#[test]
fn test_files_without_occurrences_keep_their_bytes() -> Result<()> {
    let temp_dir = setup_nested_project()?;
    let root = temp_dir.path();
    let before = fs::read(root.join("src/util.rs"))?;

    let config = ReplaceConfig::new("foo", "baz", "*", root)?;
    run_session(&config, "yes\n")?;

    assert_eq!(fs::read(root.join("src/util.rs"))?, before);

    Ok(())
}

#[test]
fn test_search_equal_to_replace_changes_nothing() -> Result<()> {
    let temp_dir = setup_nested_project()?;
    let config = ReplaceConfig::new("foo", "foo", "*", temp_dir.path())?;

    let (outcome, output) = run_session(&config, "yes\n")?;

    assert!(output.starts_with("0/5 files about to be modified!"));
    assert_eq!(outcome, Outcome::Applied { modified: vec![] });

    Ok(())
}

#[test]
fn test_dry_run_is_deterministic() -> Result<()> {
    let temp_dir = setup_nested_project()?;
    let config = ReplaceConfig::new("foo", "baz", "*", temp_dir.path())?;

    let mut outputs = Vec::new();
    let mut previews = Vec::new();
    for _ in 0..2 {
        let candidates = scanner::collect_candidates(&config)?;
        let mut session = Session::new(&config, io::empty(), Vec::<u8>::new());
        previews.push(session.preview(candidates)?);
        outputs.push(String::from_utf8(session.into_output())?);
    }

    assert_eq!(previews[0], previews[1]);
    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(previews[0].changed.len(), 4);
    assert_eq!(read(temp_dir.path(), "src/lib.rs")?, "pub fn foo() {}\n");

    Ok(())
}

#[test]
fn test_swapped_rerun_restores_clean_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "clean.txt", "alpha beta alpha")?;
    let config = ReplaceConfig::new("alpha", "gamma", "*", temp_dir.path())?;
    run_session(&config, "yes\n")?;
    assert_eq!(read(temp_dir.path(), "clean.txt")?, "gamma beta gamma");

    let swapped = ReplaceConfig::new("gamma", "alpha", "*", temp_dir.path())?;
    run_session(&swapped, "yes\n")?;

    assert_eq!(read(temp_dir.path(), "clean.txt")?, "alpha beta alpha");

    Ok(())
}

#[test]
fn test_swapped_rerun_cannot_restore_preexisting_replacement() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "mixed.txt", "alpha gamma")?;
    let config = ReplaceConfig::new("alpha", "gamma", "*", temp_dir.path())?;
    run_session(&config, "yes\n")?;

    let swapped = ReplaceConfig::new("gamma", "alpha", "*", temp_dir.path())?;
    run_session(&swapped, "yes\n")?;

    assert_eq!(read(temp_dir.path(), "mixed.txt")?, "alpha alpha");

    Ok(())
}

#[test]
fn test_apply_recomputes_from_current_contents() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "a.txt", "old")?;
    create_test_file(temp_dir.path(), "b.txt", "untouched")?;
    let config = ReplaceConfig::new("old", "new", "*", temp_dir.path())?;

    let candidates = scanner::collect_candidates(&config)?;
    let mut session = Session::new(&config, io::empty(), Vec::<u8>::new());
    let preview = session.preview(candidates)?;
    assert_eq!(preview.changed, vec![temp_dir.path().join("a.txt")]);

    // Edited between the two phases.
    create_test_file(temp_dir.path(), "b.txt", "now old too")?;
    let modified = session.apply(&preview.candidates)?;

    assert_eq!(modified.len(), 2);
    assert_eq!(read(temp_dir.path(), "b.txt")?, "now new too");

    Ok(())
}
