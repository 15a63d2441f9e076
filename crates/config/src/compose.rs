//! Script composition for inline configurations
//!
//! A pure function of the configuration: shebang first, then the before,
//! main and after fragments in that order. No timestamps, no environment
//! lookups; identical input always yields byte-identical output.

use crate::hook::HookConfig;
use crate::interpreter::Interpreter;

/// Compose the final script text from a configuration's inline parts
///
/// Each present, non-empty fragment contributes exactly one line. The result
/// carries no leading or trailing blank lines and no trailing newline; the
/// installer appends one when writing to disk.
pub fn compose(config: &HookConfig) -> String {
    let shebang = config.interpreter().map(Interpreter::shebang);

    let lines: Vec<&str> = shebang
        .into_iter()
        .chain(
            [config.before(), config.main(), config.after()]
                .into_iter()
                .flatten(),
        )
        .filter(|line| !line.is_empty())
        .collect();

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::Interpreter;
    use gouzi_core::HookKind;

    #[test]
    fn full_configuration_composes_in_order() {
        let config = HookConfig::builder()
            .kind(HookKind::PreCommit)
            .before("echo start")
            .main("./run-tests")
            .after("echo done")
            .interpreter(Interpreter::Bash)
            .build();
        assert_eq!(
            compose(&config),
            "#!/bin/bash\necho start\n./run-tests\necho done"
        );
    }

    #[test]
    fn missing_fragments_are_skipped() {
        let config = HookConfig::builder()
            .kind(HookKind::PreCommit)
            .main("./run-tests")
            .build();
        assert_eq!(compose(&config), "./run-tests");
    }

    #[test]
    fn empty_fragments_contribute_no_blank_lines() {
        let config = HookConfig::builder()
            .kind(HookKind::PreCommit)
            .before("")
            .main("./run-tests")
            .after("")
            .interpreter(Interpreter::Sh)
            .build();
        assert_eq!(compose(&config), "#!/bin/sh\n./run-tests");
    }

    #[test]
    fn shebang_only_when_interpreter_set() {
        let with = HookConfig::builder()
            .main("make check")
            .interpreter(Interpreter::Sh)
            .build();
        let without = HookConfig::builder().main("make check").build();
        assert_eq!(compose(&with), "#!/bin/sh\nmake check");
        assert_eq!(compose(&without), "make check");
    }

    #[test]
    fn compose_is_deterministic() {
        let config = HookConfig::builder()
            .kind(HookKind::PrePush)
            .before("echo push")
            .main("cargo test")
            .interpreter(Interpreter::Bash)
            .build();
        assert_eq!(compose(&config), compose(&config));
    }
}
