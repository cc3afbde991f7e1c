//! Integration tests for tree mirroring

use crate::integration::test_utils::{relative_files, write_tree};
use human_writer::mirror::path::absolutize;
use human_writer::mirror::walker::WalkerConfig;
use human_writer::mirror::Mirror;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test that the placeholder set equals the source file set
#[test]
fn test_placeholders_match_source_files() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source");
    let target = temp_dir.path().join("target");
    write_tree(
        &source,
        &[
            ("Cargo.toml", "[package]\n"),
            ("src/lib.rs", "pub mod a;\n"),
            ("src/a/mod.rs", ""),
            ("docs/guide/intro.md", "# Intro\n"),
            (".hidden", "x"),
        ],
    );
    fs::create_dir_all(source.join("empty_dir")).unwrap();

    let mirror = Mirror::new(absolutize(&source).unwrap(), absolutize(&target).unwrap()).unwrap();
    let tasks = mirror.plan();
    mirror.create_placeholders(&tasks).unwrap();

    assert_eq!(relative_files(&target), relative_files(&source));
    for task in &tasks {
        assert_eq!(fs::metadata(&task.target_path).unwrap().len(), 0);
    }
    // Empty directories produce no tasks and are not recreated.
    assert!(!target.join("empty_dir").exists());
}

/// Test that planned relative paths are the same set regardless of ordering
#[test]
fn test_unsorted_walk_yields_same_set() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source");
    write_tree(&source, &[("b.txt", "b"), ("a/c.txt", "c"), ("a.txt", "a")]);

    let sorted = Mirror::new(source.clone(), temp_dir.path().join("t1"))
        .unwrap()
        .plan();
    let unsorted = Mirror::with_config(
        source.clone(),
        temp_dir.path().join("t2"),
        WalkerConfig {
            sort_entries: false,
            ..WalkerConfig::default()
        },
    )
    .unwrap()
    .plan();

    let set = |tasks: &[human_writer::mirror::FileTask]| -> BTreeSet<PathBuf> {
        tasks.iter().map(|t| t.relative_path.clone()).collect()
    };
    assert_eq!(set(&sorted), set(&unsorted));
    assert_eq!(
        sorted.iter().map(|t| t.relative_path.clone()).collect::<Vec<_>>(),
        vec![
            PathBuf::from("a/c.txt"),
            PathBuf::from("a.txt"),
            PathBuf::from("b.txt")
        ]
    );
}

/// Test that an unreadable subdirectory is skipped while siblings are kept
#[cfg(unix)]
#[test]
fn test_unreadable_directory_is_skipped() {
    use crate::integration::test_utils::{lock_dir, unlock_dir};

    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source");
    write_tree(
        &source,
        &[("locked/secret.txt", "s"), ("open/visible.txt", "v"), ("top.txt", "t")],
    );

    let locked = source.join("locked");
    if !lock_dir(&locked) {
        unlock_dir(&locked);
        eprintln!("skipping: permissions are not enforced for this user");
        return;
    }

    let tasks = Mirror::new(source.clone(), temp_dir.path().join("target"))
        .unwrap()
        .plan();
    unlock_dir(&locked);

    let relative: Vec<PathBuf> = tasks.iter().map(|t| t.relative_path.clone()).collect();
    assert_eq!(
        relative,
        vec![PathBuf::from("open/visible.txt"), PathBuf::from("top.txt")]
    );
}

/// Test that an entry the walker fails on is skipped while siblings are kept
///
/// A symlink loop errors whatever the user's privileges are.
#[cfg(unix)]
#[test]
fn test_walk_error_entry_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source");
    write_tree(&source, &[("loop/inner.txt", "i"), ("open/visible.txt", "v")]);
    std::os::unix::fs::symlink(source.join("loop"), source.join("loop").join("again")).unwrap();

    let config = WalkerConfig {
        follow_symlinks: true,
        sort_entries: true,
    };
    let tasks = Mirror::with_config(source, temp_dir.path().join("target"), config)
        .unwrap()
        .plan();

    let relative: Vec<PathBuf> = tasks.iter().map(|t| t.relative_path.clone()).collect();
    assert_eq!(
        relative,
        vec![PathBuf::from("loop/inner.txt"), PathBuf::from("open/visible.txt")]
    );
}

/// Test that planning never writes to the target
#[test]
fn test_plan_is_side_effect_free() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source");
    let target = temp_dir.path().join("target");
    write_tree(&source, &[("a/b/c.txt", "c")]);

    let tasks = Mirror::new(source, target.clone()).unwrap().plan();
    assert_eq!(tasks.len(), 1);
    assert!(!target.exists());
}
