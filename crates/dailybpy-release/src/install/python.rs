//! Probing the target Python interpreter

use dailybpy_core::config::PythonVersion;
use dailybpy_core::{DailybpyError, Result};

use crate::exec::{self, ToolCommand};

const VERSION_PROBE: &str = "import sys; print('%d.%d' % sys.version_info[:2])";

/// Interpreter the wheel is installed into
pub trait Interpreter {
    /// Program name or path, as passed to installers
    fn program(&self) -> &str;

    fn version(&self) -> Result<PythonVersion>;

    /// Imports `module` and returns what the probe printed
    fn import_check(&self, module: &str) -> Result<String>;
}

/// Interpreter reached through a subprocess
#[derive(Debug, Clone)]
pub struct PythonInterpreter {
    program: String,
}

impl PythonInterpreter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn probe(&self, code: &str) -> ToolCommand {
        ToolCommand::new(&self.program).args(["-c", code])
    }
}

/// Python snippet that imports `module` and prints a confirmation line
pub fn import_probe(module: &str) -> String {
    if module == "bpy" {
        "import bpy; print(f'Blender {bpy.app.version_string} loaded successfully')".to_string()
    } else {
        format!("import {module}; print('{module} loaded successfully')")
    }
}

impl Interpreter for PythonInterpreter {
    fn program(&self) -> &str {
        &self.program
    }

    fn version(&self) -> Result<PythonVersion> {
        let output = exec::run_checked(&self.probe(VERSION_PROBE))?;
        output.stdout.trim().parse()
    }

    fn import_check(&self, module: &str) -> Result<String> {
        let output = exec::run_captured(&self.probe(&import_probe(module)))?;
        if output.success() {
            Ok(output.stdout.trim().to_string())
        } else {
            let detail = output
                .stderr
                .lines()
                .rev()
                .find(|l| !l.trim().is_empty())
                .unwrap_or("no error output")
                .trim()
                .to_string();
            Err(DailybpyError::VerificationFailed(format!(
                "could not import {module}: {detail}"
            )))
        }
    }
}
