//! Shared testing utilities for lode installer tests.

use assert_cmd::Command;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated home directory for installer
/// exercises.
///
/// `HOME` is pointed at a fresh temp directory for the lifetime of the
/// context (the installer re-reads it on every call) and restored on drop.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    original_home: Option<OsString>,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let original_home = env::var_os("HOME");

        unsafe {
            env::set_var("HOME", root.path());
        }

        Self { root, original_home }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Resolved `<home>/.lode/bin` directory.
    pub fn bin_dir(&self) -> PathBuf {
        self.root.path().join(".lode").join("bin")
    }

    /// Path of the POSIX shim for `name`.
    pub fn shim_path(&self, name: &str) -> PathBuf {
        self.bin_dir().join(name)
    }

    /// Path of the Windows batch shim for `name`.
    pub fn cmd_path(&self, name: &str) -> PathBuf {
        self.bin_dir().join(format!("{name}.cmd"))
    }

    /// Build a command for invoking the compiled `lode` binary in the sandbox.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("lode").expect("Failed to locate lode binary");
        cmd.env("HOME", self.home()).env_remove("USERPROFILE");
        cmd
    }

    /// Seed a shim artifact on disk without going through the installer.
    pub fn seed_artifact(&self, file_name: &str, content: &str) {
        fs::create_dir_all(self.bin_dir()).expect("Failed to create bin dir");
        fs::write(self.bin_dir().join(file_name), content).expect("Failed to seed artifact");
    }

    /// Read the POSIX shim body for `name`.
    pub fn read_shim(&self, name: &str) -> String {
        fs::read_to_string(self.shim_path(name)).expect("Failed to read shim")
    }

    /// Assert that the POSIX shim for `name` exists.
    pub fn assert_shim_exists(&self, name: &str) {
        assert!(self.shim_path(name).exists(), "shim for {} should exist", name);
    }

    /// Assert that no shim variant for `name` remains.
    pub fn assert_shim_absent(&self, name: &str) {
        assert!(!self.shim_path(name).exists(), "shim for {} should not exist", name);
        assert!(!self.cmd_path(name).exists(), "batch shim for {} should not exist", name);
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        match &self.original_home {
            Some(value) => unsafe {
                env::set_var("HOME", value);
            },
            None => unsafe {
                env::remove_var("HOME");
            },
        }
    }
}
