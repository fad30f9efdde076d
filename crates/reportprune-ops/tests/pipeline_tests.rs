use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use reportprune_ops::{ExecutionMode, ExecutionResult, Executor};
use reportprune_plan::RetentionPlanner;
use reportprune_scan::{PruneConfig, ReportScanner};
use tempfile::TempDir;

fn write(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, rel).unwrap();
}

fn run(root: &Path, mode: ExecutionMode) -> ExecutionResult {
    let outcome = ReportScanner::new(PruneConfig::new(root))
        .unwrap()
        .scan()
        .unwrap();
    let plan = RetentionPlanner::new().plan(&outcome.files);
    Executor::new(mode).execute(&plan)
}

fn snapshot(root: &Path) -> BTreeMap<PathBuf, (u64, SystemTime)> {
    let mut files = BTreeMap::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let entry = entry.unwrap();
            let meta = entry.metadata().unwrap();
            if meta.is_dir() {
                stack.push(entry.path());
            } else {
                files.insert(entry.path(), (meta.len(), meta.modified().unwrap()));
            }
        }
    }
    files
}

fn downloaded_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "Radcom Daily HealthCheck Report/Data_Volume_Report_07022026.xlsx");
    write(root, "Radcom Daily HealthCheck Report/Data_Volume_Report_04022026.xlsx");
    write(root, "Radcom Daily HealthCheck Report/Data_Volume_Report_99992026.xlsx");
    write(root, "Radcom Daily HealthCheck Report/image001.png");
    write(root, "archive/Data_Volume_Report_31012026.xlsx");
    write(root, "archive/image002.JPG");
    write(root, "README.txt");
    temp
}

#[test]
fn test_live_run_keeps_latest() {
    let temp = downloaded_tree();
    let result = run(temp.path(), ExecutionMode::Live);

    assert!(result.is_success());
    assert_eq!(result.kept.unwrap().name, "Data_Volume_Report_07022026.xlsx");

    let deleted: Vec<&str> = result.deleted.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        &deleted[..2],
        ["Data_Volume_Report_04022026.xlsx", "Data_Volume_Report_31012026.xlsx"]
    );
    assert_eq!(deleted.len(), 4);

    let root = temp.path();
    assert!(root.join("Radcom Daily HealthCheck Report/Data_Volume_Report_07022026.xlsx").exists());
    assert!(root.join("Radcom Daily HealthCheck Report/Data_Volume_Report_99992026.xlsx").exists());
    assert!(root.join("README.txt").exists());
    assert!(!root.join("archive/image002.JPG").exists());
}

#[test]
fn test_second_run_is_idempotent() {
    let temp = downloaded_tree();
    let first = run(temp.path(), ExecutionMode::Live);
    let second = run(temp.path(), ExecutionMode::Live);

    assert_eq!(first.kept.as_ref().unwrap().path, second.kept.as_ref().unwrap().path);
    assert!(second.deleted.is_empty());
    assert!(second.errors.is_empty());
    assert!(second.skipped.is_empty());
}

#[test]
fn test_dry_run_leaves_tree_untouched() {
    let temp = downloaded_tree();
    let before = snapshot(temp.path());

    let result = run(temp.path(), ExecutionMode::DryRun);

    assert_eq!(snapshot(temp.path()), before);
    assert!(result.deleted.is_empty());
    assert_eq!(result.skipped.len(), 4);
    assert_eq!(result.kept.unwrap().name, "Data_Volume_Report_07022026.xlsx");
}

#[test]
fn test_images_pruned_without_reports() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "image001.png");
    write(temp.path(), "image002.jpg");

    let result = run(temp.path(), ExecutionMode::Live);

    assert!(result.kept.is_none());
    assert_eq!(result.deleted.len(), 2);
    assert!(snapshot(temp.path()).is_empty());
}

#[test]
fn test_single_report_survives() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "Data_Volume_Report_01011990.xlsx");

    let result = run(temp.path(), ExecutionMode::Live);

    assert_eq!(result.kept.unwrap().name, "Data_Volume_Report_01011990.xlsx");
    assert!(result.deleted.is_empty());
    assert!(temp.path().join("Data_Volume_Report_01011990.xlsx").exists());
}
