//! Package installers the wheel URL is handed to

use dailybpy_core::Result;
use std::fmt;

use crate::exec::{self, ToolCommand};

pub const UV_PROGRAM: &str = "uv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallerKind {
    Pip,
    Uv,
}

impl fmt::Display for InstallerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallerKind::Pip => f.write_str("pip"),
            InstallerKind::Uv => f.write_str("uv"),
        }
    }
}

pub trait PackageInstaller {
    fn kind(&self) -> InstallerKind;

    /// Installs the wheel at `url`, with output going to the terminal
    fn install(&self, url: &str) -> Result<()>;
}

/// `pip` or `uv` run as a subprocess
#[derive(Debug, Clone)]
pub struct ToolInstaller {
    kind: InstallerKind,
    python: String,
    /// Whether `python` was chosen by the user rather than defaulted
    explicit_python: bool,
    uv_program: String,
}

impl ToolInstaller {
    pub fn pip(python: impl Into<String>) -> Self {
        Self {
            kind: InstallerKind::Pip,
            python: python.into(),
            explicit_python: true,
            uv_program: UV_PROGRAM.to_string(),
        }
    }

    /// `uv` targets `python` only when `explicit_python` is set, otherwise
    /// it picks the interpreter itself
    pub fn uv(python: impl Into<String>, explicit_python: bool) -> Self {
        Self {
            kind: InstallerKind::Uv,
            python: python.into(),
            explicit_python,
            uv_program: UV_PROGRAM.to_string(),
        }
    }

    pub fn with_uv_program(mut self, program: impl Into<String>) -> Self {
        self.uv_program = program.into();
        self
    }

    pub fn command(&self, url: &str) -> ToolCommand {
        match self.kind {
            InstallerKind::Pip => {
                ToolCommand::new(&self.python).args(["-m", "pip", "install", url])
            }
            InstallerKind::Uv => {
                let mut cmd = ToolCommand::new(&self.uv_program).args(["pip", "install"]);
                if self.explicit_python {
                    cmd = cmd.args(["--python", self.python.as_str()]);
                }
                cmd.arg(url)
            }
        }
    }
}

impl PackageInstaller for ToolInstaller {
    fn kind(&self) -> InstallerKind {
        self.kind
    }

    fn install(&self, url: &str) -> Result<()> {
        exec::run_inherited(&self.command(url))
    }
}
