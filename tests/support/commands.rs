//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a dem command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - DEM_HOME and HOME set to the temporary home directory
    /// - DEM_DB and DEM_LOG cleared so the caller's shell cannot leak in
    /// - NO_COLOR set so output is plain
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("dem").expect("failed to find dem binary");
        cmd.env("DEM_HOME", self.home.path());
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env_remove("DEM_DB");
        cmd.env_remove("DEM_LOG");
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Run dem with arbitrary arguments.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run dem")
    }

    /// Shortcut for `dem add` in the default scope.
    pub fn add(&self, key: &str, value: &str) -> Output {
        self.add_in(&[], key, value)
    }

    /// Shortcut for `dem add` with extra scope flags.
    pub fn add_in(&self, scope: &[&str], key: &str, value: &str) -> Output {
        self.cmd()
            .arg("add")
            .args([key, value])
            .args(scope)
            .output()
            .expect("failed to run dem add")
    }

    /// Shortcut for `dem get` in the default scope.
    pub fn get(&self, key: &str) -> Output {
        self.get_in(&[], key)
    }

    /// Shortcut for `dem get` with extra scope flags.
    pub fn get_in(&self, scope: &[&str], key: &str) -> Output {
        self.cmd()
            .args(["get", key])
            .args(scope)
            .output()
            .expect("failed to run dem get")
    }

    /// Shortcut for `dem delete`, answering the prompt with `answer`.
    pub fn delete_answering(&self, scope: &[&str], key: &str, answer: &str) -> Output {
        self.cmd()
            .args(["delete", key])
            .args(scope)
            .write_stdin(answer)
            .output()
            .expect("failed to run dem delete")
    }

    /// Shortcut for `dem delete` confirmed with "y".
    pub fn delete(&self, scope: &[&str], key: &str) -> Output {
        self.delete_answering(scope, key, "y\n")
    }

    /// Shortcut for `dem list` with extra flags.
    pub fn list(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("list")
            .args(args)
            .output()
            .expect("failed to run dem list")
    }
}
