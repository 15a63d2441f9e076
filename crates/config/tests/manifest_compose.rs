//! Manifest-to-script integration: load a manifest, classify each entry and
//! compose the inline ones.

use gouzi_config::{Manifest, SourceOfTruth, classify, compose};
use gouzi_core::HookKind;
use std::fs;

#[test]
fn manifest_entries_classify_and_compose() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gouzi.toml");
    fs::write(
        &path,
        r#"
[hooks.pre-commit]
before = "echo start"
run = "./run-tests"
after = "echo done"
interpreter = "bash"

[hooks.pre-push]
file = "scripts/pre-push.sh"
"#,
    )
    .unwrap();

    let manifest = Manifest::load(&path).unwrap();
    let configs = manifest.configs();
    assert_eq!(configs.len(), 2);

    let pre_commit = &configs[0];
    assert_eq!(pre_commit.kind(), Some(HookKind::PreCommit));
    assert_eq!(classify(pre_commit).unwrap(), SourceOfTruth::Inline);
    assert_eq!(
        compose(pre_commit),
        "#!/bin/bash\necho start\n./run-tests\necho done"
    );

    let pre_push = &configs[1];
    assert_eq!(pre_push.kind(), Some(HookKind::PrePush));
    assert_eq!(classify(pre_push).unwrap(), SourceOfTruth::External);
    assert_eq!(
        pre_push.source_file().unwrap(),
        dir.path().join("scripts/pre-push.sh")
    );
}

#[test]
fn entry_with_both_sources_still_prefers_inline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gouzi.toml");
    fs::write(
        &path,
        "[hooks.commit-msg]\nrun = \"./check-msg\"\nfile = \"scripts/commit-msg.sh\"\n",
    )
    .unwrap();

    let manifest = Manifest::load(&path).unwrap();
    let config = &manifest.configs()[0];
    assert_eq!(classify(config).unwrap(), SourceOfTruth::Inline);
    assert_eq!(compose(config), "./check-msg");
}
