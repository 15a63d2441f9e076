//! End-to-end lifecycle of a hook file: install, review, remove

use gouzi_config::{HookConfig, Interpreter};
use gouzi_core::HookKind;
use gouzi_engine::{install, remove, review};
use std::fs;
use tempfile::TempDir;

fn git_repo() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".git/hooks")).unwrap();
    dir
}

#[test]
fn install_then_review_reports_the_hook() {
    let repo = git_repo();
    let config = HookConfig::builder()
        .kind(HookKind::PreCommit)
        .before("echo start")
        .main("./run-tests")
        .after("echo done")
        .interpreter(Interpreter::Bash)
        .build();

    install(&config, repo.path()).unwrap();

    let report = review(repo.path()).unwrap();
    assert!(report.vcs_present);
    assert!(report.installed.contains(&"pre-commit".to_string()));
}

#[test]
fn install_remove_review_shows_hook_absent() {
    let repo = git_repo();
    let config = HookConfig::builder()
        .kind(HookKind::PreCommit)
        .main("./run-tests")
        .build();

    install(&config, repo.path()).unwrap();
    remove(HookKind::PreCommit, repo.path()).unwrap();

    let report = review(repo.path()).unwrap();
    assert!(report.vcs_present);
    assert!(!report.installed.contains(&"pre-commit".to_string()));
}

#[test]
fn operations_run_from_a_nested_directory() {
    let repo = git_repo();
    let nested = repo.path().join("src/module");
    fs::create_dir_all(&nested).unwrap();

    let config = HookConfig::builder()
        .kind(HookKind::PrePush)
        .main("cargo test")
        .build();

    let installed = install(&config, &nested).unwrap();
    assert_eq!(installed.path, repo.path().join(".git/hooks/pre-push"));

    let report = review(&nested).unwrap();
    assert_eq!(report.installed, ["pre-push"]);
}

#[test]
fn hooks_of_different_kinds_are_independent_files() {
    let repo = git_repo();
    for (kind, cmd) in [
        (HookKind::PreCommit, "echo commit"),
        (HookKind::PrePush, "echo push"),
        (HookKind::CommitMsg, "echo msg"),
    ] {
        let config = HookConfig::builder().kind(kind).main(cmd).build();
        install(&config, repo.path()).unwrap();
    }

    let report = review(repo.path()).unwrap();
    assert_eq!(report.installed, ["commit-msg", "pre-commit", "pre-push"]);

    remove(HookKind::PreCommit, repo.path()).unwrap();
    let report = review(repo.path()).unwrap();
    assert_eq!(report.installed, ["commit-msg", "pre-push"]);
}
