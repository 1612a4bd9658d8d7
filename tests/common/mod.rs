#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::{Path, PathBuf};

const TMPDIR: &str = "playground";

pub fn redirect_temp_dir() {
    unsafe {
        std::env::set_var("TMPDIR", TMPDIR);
    }

    // Ensure the TMPDIR exists
    if !Path::new(TMPDIR).exists() {
        std::fs::create_dir_all(TMPDIR).expect("Failed to create TMPDIR");
    }
}

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

/// A repository with `a.txt` ("hello") and `b.txt` ("world") tracked and
/// committed once with message "init" by user "john_doe".
#[fixture]
pub fn committed_repository_dir(repository_dir: TempDir) -> TempDir {
    write_file(repository_dir.path(), "a.txt", "hello");
    write_file(repository_dir.path(), "b.txt", "world");

    run_svcs_command(repository_dir.path(), &["config", "john_doe"])
        .assert()
        .success();
    run_svcs_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    run_svcs_command(repository_dir.path(), &["add", "b.txt"])
        .assert()
        .success();
    run_svcs_command(repository_dir.path(), &["commit", "init"])
        .assert()
        .success();

    repository_dir
}

pub fn run_svcs_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("svcs").expect("Failed to find svcs binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn write_file(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);

    // make sure the parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&path, content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", path, e));
}

pub fn read_file(dir: &Path, name: &str) -> String {
    std::fs::read_to_string(dir.join(name))
        .unwrap_or_else(|e| panic!("Failed to read file {:?}: {}", name, e))
}

pub fn read_log(dir: &Path) -> String {
    read_file(dir, "vcs/log.txt")
}

/// The identifier of the most recent commit, taken from the log header.
pub fn head_commit_id(dir: &Path) -> String {
    read_log(dir)
        .lines()
        .next()
        .and_then(|line| line.strip_prefix("commit "))
        .expect("Log has no commit header")
        .to_string()
}

pub fn snapshot_dir(dir: &Path, commit_id: &str) -> PathBuf {
    dir.join("vcs").join("commits").join(commit_id)
}

pub fn snapshot_count(dir: &Path) -> usize {
    std::fs::read_dir(dir.join("vcs").join("commits"))
        .expect("Failed to read commits directory")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .count()
}
