//! Integration tests for the command-line interface.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SDK_ENV: &str = "EVERYTHING_SDK_PATH";

fn preflight(dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(cargo_bin("everything-preflight"));
    cmd.current_dir(dir);
    cmd.env_remove(SDK_ENV);
    cmd.env_remove("EVERYTHING_PREFLIGHT_PROMPT_LAUNCH_SERVER");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    preflight(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pre-flight checks"))
        .stdout(predicate::str::contains("locate"))
        .stdout(predicate::str::contains("remedies"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    preflight(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_run_help_lists_flags() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    preflight(temp.path())
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-launch"))
        .stdout(predicate::str::contains("--non-interactive"));
    Ok(())
}

#[test]
fn cli_remedies_prints_numbered_list() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    preflight(temp.path())
        .arg("remedies")
        .assert()
        .success()
        .stdout(predicate::str::contains("Suggested solutions"))
        .stdout(predicate::str::contains("1. Install Everything (recommended)"))
        .stdout(predicate::str::contains("2. Set the environment variable"))
        .stdout(predicate::str::contains("4. Edit the configuration file"))
        .stdout(predicate::str::contains("voidtools.com"));
    Ok(())
}

#[test]
fn cli_locate_uses_env_var() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let dll = temp.path().join("Everything64-custom.dll");
    fs::write(&dll, b"")?;

    preflight(temp.path())
        .arg("locate")
        .env(SDK_ENV, &dll)
        .assert()
        .success()
        .stdout(predicate::str::contains("Everything64-custom.dll"))
        .stdout(predicate::str::contains("environment variable"));
    Ok(())
}

#[test]
fn cli_locate_finds_dll_in_working_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("Everything64.dll"), b"")?;

    preflight(temp.path())
        .arg("locate")
        .assert()
        .success()
        .stdout(predicate::str::contains("known location"));
    Ok(())
}

#[test]
fn cli_locate_env_var_to_missing_file_falls_through() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("Everything64.dll"), b"")?;

    preflight(temp.path())
        .arg("locate")
        .env(SDK_ENV, temp.path().join("missing.dll"))
        .assert()
        .success()
        .stdout(predicate::str::contains("known location"));
    Ok(())
}

#[test]
fn cli_locate_not_found_exits_1() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    preflight(temp.path())
        .arg("locate")
        .env(SDK_ENV, "")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Everything64.dll not found"));
    Ok(())
}

#[test]
fn cli_missing_explicit_config_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    preflight(temp.path())
        .args(["--config", "nope.yml", "remedies"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn cli_run_with_bad_config_exits_1() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("preflight.yml"), "unknown_section: true\n")?;

    preflight(temp.path())
        .args(["run", "--non-interactive"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Parse error"));
    Ok(())
}

#[test]
fn cli_run_with_missing_interpreter_aborts() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join("preflight.yml"),
        "server:\n  interpreter: no-such-python-0b4f\n",
    )?;

    preflight(temp.path())
        .args(["run", "--non-interactive"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Checking Python version"))
        .stderr(predicate::str::contains("no-such-python-0b4f"));
    Ok(())
}

#[cfg(unix)]
mod fake_interpreter {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    /// Project with a stand-in interpreter and a DLL in the working directory.
    ///
    /// The interpreter reports 3.10.1, imports anything, and runs `-m` by
    /// executing `server_body`.
    fn project(server_body: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        let script = root.join("fakepy");
        fs::write(
            &script,
            format!(
                "#!/bin/sh\n\
                 if [ \"$1\" = \"--version\" ]; then echo 'Python 3.10.1'; exit 0; fi\n\
                 if [ \"$1\" = \"-m\" ]; then {}; fi\n\
                 exit 0\n",
                server_body
            ),
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let dll = root.join("Everything64.dll");
        fs::write(&dll, b"").unwrap();
        fs::create_dir_all(root.join("server")).unwrap();

        fs::write(
            root.join("preflight.yml"),
            format!(
                "sdk:\n  search_paths:\n    - {}\n\
                 server:\n  interpreter: {}\n  module: fake_server\n  working_dir: server\n",
                dll.display(),
                script.display()
            ),
        )
        .unwrap();
        temp
    }

    fn run(root: &Path) -> Command {
        let mut cmd = preflight(root);
        cmd.args(["run", "--non-interactive"]);
        cmd
    }

    #[test]
    fn declining_prints_manual_instructions() {
        let temp = project("echo started; exit 0");
        run(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("All checks passed!"))
            .stdout(predicate::str::contains("Everything SDK DLL location"))
            .stdout(predicate::str::contains("To start the server manually"))
            .stdout(predicate::str::contains("-m fake_server"));
    }

    #[test]
    fn no_command_defaults_to_run() {
        let temp = project("exit 0");
        preflight(temp.path())
            .env("CI", "true")
            .assert()
            .success()
            .stdout(predicate::str::contains("To start the server manually"));
    }

    #[test]
    fn prompt_override_launches_server() {
        let temp = project("pwd; exit 0");
        run(temp.path())
            .env("EVERYTHING_PREFLIGHT_PROMPT_LAUNCH_SERVER", "Yes")
            .assert()
            .success()
            .stdout(predicate::str::contains("Starting MCP server"))
            .stdout(predicate::str::contains("Server started successfully"));
    }

    #[test]
    fn child_failure_is_reported_but_not_propagated() {
        let temp = project("echo 'ModuleNotFoundError: fake_server' >&2; exit 3");
        run(temp.path())
            .arg("--yes")
            .assert()
            .success()
            .stdout(predicate::str::contains("ModuleNotFoundError: fake_server"))
            .stderr(predicate::str::contains("exit code 3"));
    }

    #[test]
    fn no_launch_skips_prompt_even_with_override() {
        let temp = project("echo should-not-run; exit 0");
        run(temp.path())
            .arg("--no-launch")
            .env("EVERYTHING_PREFLIGHT_PROMPT_LAUNCH_SERVER", "y")
            .assert()
            .success()
            .stdout(predicate::str::contains("should-not-run").not());
    }
}
