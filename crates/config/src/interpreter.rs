//! Interpreter directives for composed hook scripts

use serde::{Deserialize, Serialize};

/// The interpreter a composed hook script declares in its shebang line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpreter {
    /// POSIX shell
    Sh,
    /// Bash
    Bash,
    /// PowerShell
    #[serde(alias = "powershell")]
    Pwsh,
}

impl Interpreter {
    /// The canonical shebang line for this interpreter, without a trailing
    /// newline
    pub fn shebang(self) -> &'static str {
        match self {
            Interpreter::Sh => "#!/bin/sh",
            Interpreter::Bash => "#!/bin/bash",
            Interpreter::Pwsh => "#!/bin/pwsh",
        }
    }
}

impl std::str::FromStr for Interpreter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sh" => Ok(Interpreter::Sh),
            "bash" => Ok(Interpreter::Bash),
            "pwsh" | "powershell" => Ok(Interpreter::Pwsh),
            other => Err(format!(
                "unknown interpreter '{other}' (expected sh, bash or pwsh)"
            )),
        }
    }
}

impl std::fmt::Display for Interpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Interpreter::Sh => "sh",
            Interpreter::Bash => "bash",
            Interpreter::Pwsh => "pwsh",
        };
        f.write_str(name)
    }
}
