use crate::domain::{AppError, Platform, ShimScripts};
use crate::ports::ShimStore;

/// Input for a single install operation.
#[derive(Debug, Clone)]
pub struct InstallRequest {
    /// Command name the shims are installed under.
    pub name: String,
    /// URL or filesystem path of the module the shims run.
    pub module_specifier: String,
    /// Runtime flags baked into the invocation line, in caller order.
    pub flags: Vec<String>,
}

/// Execute the install command.
///
/// Ensures the bin directory exists, renders the shim bodies for the target
/// platform, and persists them, overwriting any prior install of the same
/// name. The installed set is replaced wholesale: a POSIX-target install
/// also clears a stale batch shim left by an earlier Windows-target install
/// so the two variants can never disagree about what they run.
pub fn execute(
    store: &impl ShimStore,
    platform: Platform,
    request: &InstallRequest,
) -> Result<(), AppError> {
    store.ensure_bin_dir()?;

    let scripts = ShimScripts::generate(&request.module_specifier, &request.flags, platform);
    store.write_posix(&request.name, &scripts.posix)?;

    match &scripts.windows {
        Some(body) => store.write_windows(&request.name, body)?,
        None => {
            store.remove_windows(&request.name)?;
        }
    }

    Ok(())
}
