use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;
use common::{committed_repository_dir, head_commit_id, repository_dir, run_svcs_command, write_file};

#[rstest]
fn empty_log_reports_no_commits_yet(repository_dir: TempDir) {
    run_svcs_command(repository_dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No commits yet."));
}

#[rstest]
fn log_renders_one_block_per_commit_newest_first(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    let first_id = head_commit_id(dir);

    write_file(dir, "a.txt", "HELLO");
    run_svcs_command(dir, &["commit", "edit a"])
        .assert()
        .success();
    let second_id = head_commit_id(dir);

    let expected = format!(
        "commit {}\nAuthor: john_doe\nedit a\n\ncommit {}\nAuthor: john_doe\ninit\n\n",
        second_id, first_id
    );

    run_svcs_command(dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::eq(expected));
}
