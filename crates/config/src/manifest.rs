//! Declarative hook manifest
//!
//! Projects describe their hooks in a `gouzi.toml` file:
//!
//! ```toml
//! [hooks.pre-commit]
//! before = "echo start"
//! run = "./run-tests"
//! after = "echo done"
//! interpreter = "bash"
//!
//! [hooks.pre-push]
//! file = "scripts/pre-push.sh"
//! ```
//!
//! Table keys are canonical hook file names; an unknown key fails loading
//! with `Error::UnknownHookKind`. Declaration order is preserved so installs
//! happen in the order the project wrote them.

use crate::hook::HookConfig;
use crate::interpreter::Interpreter;
use gouzi_core::{Error, HookKind, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One `[hooks.<name>]` table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HookEntry {
    /// Command that runs before the main command
    #[serde(default)]
    pub before: Option<String>,

    /// The main command
    #[serde(default)]
    pub run: Option<String>,

    /// Command that runs after the main command
    #[serde(default)]
    pub after: Option<String>,

    /// Interpreter for the shebang line
    #[serde(default)]
    pub interpreter: Option<Interpreter>,

    /// External script used verbatim as the hook body
    ///
    /// Relative paths resolve against the manifest's directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    #[serde(default)]
    hooks: IndexMap<String, HookEntry>,
}

/// A loaded hook manifest
#[derive(Debug, Clone)]
pub struct Manifest {
    entries: Vec<(HookKind, HookEntry)>,
    base_dir: PathBuf,
}

impl Manifest {
    /// Load and validate a manifest file
    ///
    /// # Errors
    ///
    /// Returns `Error::Manifest` when the file cannot be read or parsed, and
    /// `Error::UnknownHookKind` when a `[hooks.*]` key is not a canonical
    /// hook name.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let raw: RawManifest = toml::from_str(&content).map_err(|e| Error::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut entries = Vec::with_capacity(raw.hooks.len());
        for (name, entry) in raw.hooks {
            let Some(kind) = HookKind::resolve(&name) else {
                return Err(Error::UnknownHookKind { name });
            };
            entries.push((kind, entry));
        }

        let base_dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();
        Ok(Self { entries, base_dir })
    }

    /// Whether the manifest declares no hooks
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The finished configuration for one kind, if declared
    pub fn config(&self, kind: HookKind) -> Option<HookConfig> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(kind, entry)| self.config_for(*kind, entry))
    }

    /// Turn every declared entry into a finished configuration, in
    /// declaration order
    pub fn configs(&self) -> Vec<HookConfig> {
        self.entries
            .iter()
            .map(|(kind, entry)| self.config_for(*kind, entry))
            .collect()
    }

    fn config_for(&self, kind: HookKind, entry: &HookEntry) -> HookConfig {
        let mut builder = HookConfig::builder().kind(kind);
        if let Some(before) = &entry.before {
            builder = builder.before(before.clone());
        }
        if let Some(run) = &entry.run {
            builder = builder.main(run.clone());
        }
        if let Some(after) = &entry.after {
            builder = builder.after(after.clone());
        }
        if let Some(interpreter) = entry.interpreter {
            builder = builder.interpreter(interpreter);
        }
        if let Some(file) = &entry.file {
            let resolved = if file.is_absolute() {
                file.clone()
            } else {
                self.base_dir.join(file)
            };
            builder = builder.source_file(resolved);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_manifest(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gouzi.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_hooks_in_declaration_order() {
        let (_dir, path) = write_manifest(
            r#"
[hooks.pre-push]
run = "cargo test"

[hooks.pre-commit]
before = "echo start"
run = "./run-tests"
after = "echo done"
interpreter = "bash"
"#,
        );
        let manifest = Manifest::load(&path).unwrap();
        let configs = manifest.configs();
        assert_eq!(configs.len(), 2);
        assert_eq!(configs[0].kind(), Some(HookKind::PrePush));
        assert_eq!(configs[1].kind(), Some(HookKind::PreCommit));
        assert_eq!(configs[1].before(), Some("echo start"));
        assert_eq!(configs[1].main(), Some("./run-tests"));
        assert_eq!(configs[1].after(), Some("echo done"));
        assert_eq!(configs[1].interpreter(), Some(Interpreter::Bash));
    }

    #[test]
    fn unknown_hook_name_fails() {
        let (_dir, path) = write_manifest("[hooks.post-merge]\nrun = \"true\"\n");
        let err = Manifest::load(&path).unwrap_err();
        assert!(matches!(err, Error::UnknownHookKind { name } if name == "post-merge"));
    }

    #[test]
    fn relative_file_resolves_against_manifest_dir() {
        let (dir, path) = write_manifest("[hooks.pre-push]\nfile = \"scripts/pre-push.sh\"\n");
        let manifest = Manifest::load(&path).unwrap();
        let configs = manifest.configs();
        assert_eq!(
            configs[0].source_file().unwrap(),
            dir.path().join("scripts/pre-push.sh")
        );
    }

    #[test]
    fn parse_error_is_a_manifest_error() {
        let (_dir, path) = write_manifest("[hooks.pre-commit\n");
        assert!(matches!(
            Manifest::load(&path).unwrap_err(),
            Error::Manifest { .. }
        ));
    }

    #[test]
    fn unknown_field_is_a_manifest_error() {
        let (_dir, path) = write_manifest("[hooks.pre-commit]\ncommand = \"true\"\n");
        assert!(matches!(
            Manifest::load(&path).unwrap_err(),
            Error::Manifest { .. }
        ));
    }

    #[test]
    fn config_looks_up_one_declared_kind() {
        let (_dir, path) = write_manifest(
            "[hooks.pre-push]\nrun = \"cargo test\"\n\n[hooks.pre-commit]\nrun = \"cargo fmt\"\n",
        );
        let manifest = Manifest::load(&path).unwrap();

        let config = manifest.config(HookKind::PreCommit).unwrap();
        assert_eq!(config.kind(), Some(HookKind::PreCommit));
        assert_eq!(config.main(), Some("cargo fmt"));
        assert!(manifest.config(HookKind::CommitMsg).is_none());
    }

    #[test]
    fn misspelled_hooks_table_is_a_manifest_error() {
        // [hook.*] must not silently parse as an empty manifest
        let (_dir, path) = write_manifest("[hook.pre-commit]\nrun = \"true\"\n");
        assert!(matches!(
            Manifest::load(&path).unwrap_err(),
            Error::Manifest { .. }
        ));
    }

    #[test]
    fn missing_file_is_a_manifest_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gouzi.toml");
        assert!(matches!(
            Manifest::load(&path).unwrap_err(),
            Error::Manifest { .. }
        ));
    }
}
