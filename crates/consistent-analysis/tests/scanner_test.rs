//! Target resolution against a real directory tree.

use std::fs;
use std::path::{Path, PathBuf};

use consistent_analysis::resolve_targets;
use consistent_core::config::ScanConfig;
use tempfile::TempDir;

fn touch(root: &Path, rel: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "package p\n").unwrap();
    path
}

fn tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    touch(root, "b.go");
    touch(root, "a.go");
    touch(root, "a_test.go");
    touch(root, "README.md");
    touch(root, "sub/c.go");
    touch(root, "sub/deeper/d.go");
    touch(root, "vendor/v/v.go");
    touch(root, "testdata/t.go");
    touch(root, ".hidden/h.go");
    dir
}

fn arg(path: PathBuf) -> String {
    path.to_string_lossy().into_owned()
}

fn names(files: &[PathBuf], root: &Path) -> Vec<String> {
    files
        .iter()
        .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect()
}

fn canonical_root(dir: &TempDir) -> PathBuf {
    std::path::absolute(dir.path()).unwrap()
}

#[test]
fn directory_target_lists_only_direct_go_files() {
    let dir = tree();
    let files = resolve_targets(&[arg(dir.path().to_path_buf())], &ScanConfig::default()).unwrap();
    assert_eq!(
        names(&files, &canonical_root(&dir)),
        vec!["a.go", "a_test.go", "b.go"]
    );
}

#[test]
fn recursive_target_skips_vendor_testdata_and_hidden() {
    let dir = tree();
    let target = format!("{}/...", dir.path().display());
    let files = resolve_targets(&[target], &ScanConfig::default()).unwrap();
    assert_eq!(
        names(&files, &canonical_root(&dir)),
        vec!["a.go", "a_test.go", "b.go", "sub/c.go", "sub/deeper/d.go"]
    );
}

#[test]
fn test_files_and_excludes_are_filtered() {
    let dir = tree();
    let config = ScanConfig {
        exclude: vec!["**/deeper/**".to_string()],
        include_tests: Some(false),
        ..Default::default()
    };
    let target = format!("{}/...", dir.path().display());
    let files = resolve_targets(&[target], &config).unwrap();
    assert_eq!(
        names(&files, &canonical_root(&dir)),
        vec!["a.go", "b.go", "sub/c.go"]
    );
}

#[test]
fn targets_keep_cli_order_without_duplicates() {
    let dir = tree();
    let sub = arg(dir.path().join("sub/c.go"));
    let targets = vec![sub.clone(), arg(dir.path().join("a.go")), sub];
    let files = resolve_targets(&targets, &ScanConfig::default()).unwrap();
    assert_eq!(names(&files, &canonical_root(&dir)), vec!["sub/c.go", "a.go"]);
}

#[test]
fn unsupported_targets_are_skipped() {
    let dir = tree();
    let targets = vec![
        arg(dir.path().join("README.md")),
        "github.com/some/pkg".to_string(),
        arg(dir.path().join("b.go")),
    ];
    let files = resolve_targets(&targets, &ScanConfig::default()).unwrap();
    assert_eq!(names(&files, &canonical_root(&dir)), vec!["b.go"]);
}

#[test]
fn oversized_files_are_skipped() {
    let dir = TempDir::new().unwrap();
    let big = dir.path().join("big.go");
    fs::write(&big, format!("package p\n// {}\n", "x".repeat(256))).unwrap();
    touch(dir.path(), "small.go");

    let config = ScanConfig {
        max_file_size: Some(64),
        ..Default::default()
    };
    let files = resolve_targets(&[arg(dir.path().to_path_buf())], &config).unwrap();
    assert_eq!(names(&files, &canonical_root(&dir)), vec!["small.go"]);
}
