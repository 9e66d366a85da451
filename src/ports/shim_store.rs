//! Store port between the command layer and the on-disk shim directory.

use std::path::PathBuf;

use crate::domain::AppError;

/// Persistence seam for installed shims.
///
/// Commands depend on this port instead of ambient environment state, so the
/// install target is threaded explicitly and tests can point it anywhere.
pub trait ShimStore {
    /// Path of the POSIX shim for `name`.
    fn posix_path(&self, name: &str) -> PathBuf;

    /// Path of the Windows batch shim for `name`.
    fn windows_path(&self, name: &str) -> PathBuf;

    /// Create the bin directory (and missing parents). Existing is a no-op.
    fn ensure_bin_dir(&self) -> Result<(), AppError>;

    /// Write the POSIX shim body, overwriting, and mark it executable.
    fn write_posix(&self, name: &str, body: &str) -> Result<(), AppError>;

    /// Write the Windows batch shim body, overwriting.
    fn write_windows(&self, name: &str, body: &str) -> Result<(), AppError>;

    /// Remove the POSIX shim. Reports whether it existed.
    fn remove_posix(&self, name: &str) -> Result<bool, AppError>;

    /// Remove the Windows batch shim. Reports whether it existed.
    fn remove_windows(&self, name: &str) -> Result<bool, AppError>;
}
