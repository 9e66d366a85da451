use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ShimStore;

/// Home-relative directory owned by the lode toolchain.
const LODE_DIR: &str = ".lode";
/// Subdirectory of [`LODE_DIR`] holding installed shims.
const BIN_DIR: &str = "bin";
/// Suffix of the Windows batch variant of a shim.
const CMD_SUFFIX: &str = ".cmd";

/// Filesystem-backed shim store rooted at a resolved bin directory.
#[derive(Debug, Clone)]
pub struct FilesystemShimStore {
    bin_dir: PathBuf,
}

impl FilesystemShimStore {
    /// Create a store writing to the given bin directory.
    pub fn new(bin_dir: PathBuf) -> Self {
        Self { bin_dir }
    }

    /// Resolve the store from the current home environment value.
    ///
    /// Reads `HOME` (falling back to `USERPROFILE` on Windows hosts) fresh on
    /// every call and appends `.lode/bin`; callers that change the variable
    /// between calls change the install target.
    pub fn from_env() -> Result<Self, AppError> {
        let home = env::var_os("HOME")
            .or_else(|| env::var_os("USERPROFILE"))
            .ok_or_else(|| AppError::config_error("HOME environment variable not set"))?;
        Ok(Self::new(PathBuf::from(home).join(LODE_DIR).join(BIN_DIR)))
    }

    /// The resolved bin directory.
    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    /// Whether the bin directory appears in the current `PATH`.
    pub fn on_search_path(&self) -> bool {
        match env::var_os("PATH") {
            Some(path) => env::split_paths(&path).any(|entry| entry == self.bin_dir),
            None => false,
        }
    }

    fn write(&self, path: &Path, body: &str) -> Result<(), AppError> {
        fs::write(path, body).map_err(|source| AppError::filesystem(path, source))
    }

    fn remove(&self, path: &Path) -> Result<bool, AppError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(AppError::filesystem(path, source)),
        }
    }
}

impl ShimStore for FilesystemShimStore {
    fn posix_path(&self, name: &str) -> PathBuf {
        self.bin_dir.join(name)
    }

    fn windows_path(&self, name: &str) -> PathBuf {
        self.bin_dir.join(format!("{name}{CMD_SUFFIX}"))
    }

    fn ensure_bin_dir(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.bin_dir)
            .map_err(|source| AppError::filesystem(&self.bin_dir, source))
    }

    fn write_posix(&self, name: &str, body: &str) -> Result<(), AppError> {
        let path = self.posix_path(name);
        self.write(&path, body)?;
        set_executable(&path)
    }

    fn write_windows(&self, name: &str, body: &str) -> Result<(), AppError> {
        self.write(&self.windows_path(name), body)
    }

    fn remove_posix(&self, name: &str) -> Result<bool, AppError> {
        self.remove(&self.posix_path(name))
    }

    fn remove_windows(&self, name: &str) -> Result<bool, AppError> {
        self.remove(&self.windows_path(name))
    }
}

/// Make a written shim executable by its owner (Unix only).
#[cfg(unix)]
fn set_executable(path: &Path) -> Result<(), AppError> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms =
        fs::metadata(path).map_err(|source| AppError::filesystem(path, source))?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).map_err(|source| AppError::filesystem(path, source))
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> Result<(), AppError> {
    Ok(())
}
