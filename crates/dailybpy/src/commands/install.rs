//! `dailybpy-install` - install the latest wheel for this machine

use anyhow::Result;
use dailybpy_core::config::consts;
use dailybpy_core::DailybpyError;
use dailybpy_release::install::{
    Interpreter, PythonInterpreter, SUPPORTED_PLATFORMS, TerminalPrompt, ToolInstaller,
    VersionCheck, WheelSpec, check_version, confirm_mismatch, detect_platform,
};
use dailybpy_release::{InstallPlan, Verification, install_and_verify, plan_install};
use log::debug;

use crate::cli::InstallCli;
use crate::output;

pub fn run(cli: InstallCli) -> Result<()> {
    output::header("Daily bpy Installer");

    let config = crate::load_config(cli.config.as_deref())?;
    let slug = cli.repo.unwrap_or_else(|| config.repository.slug.clone());

    let platform = match detect_platform() {
        Ok(p) => p,
        Err(e) => {
            println!();
            println!("Supported platforms:");
            for p in SUPPORTED_PLATFORMS {
                println!("  - {}", p);
            }
            return Err(e.into());
        }
    };

    let spec = WheelSpec::from_config(&config.package);
    let plan = plan_install(&spec, platform, &slug)?;
    println!();
    println!("Detected platform: {}", platform);
    println!("Target wheel: {}", plan.wheel_name);

    // Explicit choice from the command line or config, as opposed to the platform default
    let explicit_python = cli.python.or_else(|| config.installer.python.clone());
    let program = explicit_python
        .clone()
        .unwrap_or_else(|| consts::installer::PYTHON.to_string());
    let interpreter = PythonInterpreter::new(&program);
    debug!(
        "interpreter {} ({})",
        program,
        if explicit_python.is_some() { "explicit" } else { "default" }
    );

    let found = interpreter.version()?;
    if let VersionCheck::Mismatch { found, required } = check_version(found, spec.python) {
        println!();
        output::warning(&format!(
            "Python {} is required, but {} is Python {}",
            required, program, found
        ));
        println!("The installation may fail or the module may not work correctly.");
        confirm_mismatch(cli.yes, &mut TerminalPrompt)?;
    }

    let installer = if cli.uv {
        ToolInstaller::uv(&program, explicit_python.is_some())
    } else {
        ToolInstaller::pip(&program)
    };

    println!();
    println!("Installing {} from: {}", config.package.name, plan.wheel_url);
    println!("Running: {}", installer.command(&plan.wheel_url));

    let verification = match install_and_verify(
        &plan,
        &installer,
        &interpreter,
        &config.package.module,
        cli.skip_test,
    ) {
        Ok(v) => v,
        Err(e) => {
            if cli.uv && matches!(e, DailybpyError::ExternalToolMissing { .. }) {
                print_uv_hints();
            }
            print_troubleshooting(&slug, &plan);
            return Err(e.into());
        }
    };

    println!();
    output::success("Installation successful!");

    match verification {
        Verification::Skipped => {}
        Verification::Passed(line) => output::success(&line),
        Verification::Failed(e) => {
            output::warning(&e.to_string());
            output::warning(&format!(
                "{} import test failed. The module may not be correctly installed.",
                config.package.module
            ));
        }
    }

    println!();
    println!(
        "Installation complete! You can now use {} in Python:",
        config.package.module
    );
    if config.package.module == "bpy" {
        println!("  python -c 'import bpy; print(bpy.app.version_string)'");
    } else {
        println!("  python -c 'import {}'", config.package.module);
    }
    Ok(())
}

fn print_uv_hints() {
    println!();
    println!("'uv' was not found. Install it first:");
    println!("  pip install uv");
    println!("  OR visit: https://github.com/astral-sh/uv");
}

fn print_troubleshooting(slug: &str, plan: &InstallPlan) {
    println!();
    println!("Troubleshooting:");
    println!("  1. Check your internet connection");
    println!("  2. Verify the latest release exists at:");
    println!("     https://github.com/{}/releases", slug);
    println!("  3. Try downloading and installing manually:");
    println!("     pip install {}", plan.wheel_url);
}
