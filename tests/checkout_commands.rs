use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;
use common::{
    committed_repository_dir, head_commit_id, read_file, repository_dir, run_svcs_command,
    write_file,
};

#[rstest]
fn restoring_a_prior_snapshot_rewinds_the_changed_file(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    let first_id = head_commit_id(dir);

    write_file(dir, "a.txt", "HELLO");
    run_svcs_command(dir, &["commit", "edit a"])
        .assert()
        .success();

    run_svcs_command(dir, &["checkout", &first_id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Switched to commit {}.",
            first_id
        )));

    assert_eq!(read_file(dir, "a.txt"), "hello");
    assert_eq!(read_file(dir, "b.txt"), "world");
}

#[rstest]
fn unknown_commit_id_mutates_nothing(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    write_file(dir, "a.txt", "HELLO");

    run_svcs_command(dir, &["checkout", &"0".repeat(40)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Commit does not exist."));

    assert_eq!(read_file(dir, "a.txt"), "HELLO");
}

#[rstest]
fn malformed_commit_id_is_reported_as_missing(committed_repository_dir: TempDir) {
    run_svcs_command(committed_repository_dir.path(), &["checkout", "not-a-commit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Commit does not exist."));
}

#[rstest]
fn checkout_without_an_id_reports_it(repository_dir: TempDir) {
    run_svcs_command(repository_dir.path(), &["checkout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Commit id was not passed."));
}

#[rstest]
fn untracked_files_are_left_untouched(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    let commit_id = head_commit_id(dir);

    write_file(dir, "scratch.txt", "not tracked");
    run_svcs_command(dir, &["checkout", &commit_id])
        .assert()
        .success();

    assert_eq!(read_file(dir, "scratch.txt"), "not tracked");
}

#[rstest]
fn a_deleted_tracked_file_is_recreated_by_checkout(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    let commit_id = head_commit_id(dir);

    std::fs::remove_file(dir.join("a.txt")).unwrap();
    run_svcs_command(dir, &["checkout", &commit_id])
        .assert()
        .success();

    assert_eq!(read_file(dir, "a.txt"), "hello");
}

#[rstest]
fn commit_then_checkout_round_trips_the_working_tree(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    write_file(dir, "a.txt", "HELLO");
    write_file(dir, "b.txt", "WORLD");
    run_svcs_command(dir, &["commit", "shout"])
        .assert()
        .success();
    let commit_id = head_commit_id(dir);

    write_file(dir, "a.txt", "something else entirely");
    run_svcs_command(dir, &["checkout", &commit_id])
        .assert()
        .success();

    assert_eq!(read_file(dir, "a.txt"), "HELLO");
    assert_eq!(read_file(dir, "b.txt"), "WORLD");
}
