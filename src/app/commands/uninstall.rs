use crate::domain::AppError;
use crate::ports::ShimStore;

/// Execute the uninstall command.
///
/// Removes every shim variant installed under `name`. Both variants are
/// attempted regardless of the host platform so artifacts left by either
/// platform's prior install get cleaned up; the call fails only when
/// neither file existed.
pub fn execute(store: &impl ShimStore, name: &str) -> Result<(), AppError> {
    let removed_posix = store.remove_posix(name)?;
    let removed_windows = store.remove_windows(name)?;

    if !removed_posix && !removed_windows {
        return Err(AppError::CommandNotFound(name.to_string()));
    }

    Ok(())
}
