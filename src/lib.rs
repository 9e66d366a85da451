//! lode installer: deploy and remove executable shims that run lode modules
//! as local commands.
//!
//! `install` synthesizes platform-appropriate wrapper scripts under
//! `<home>/.lode/bin/` that defer to the lode runtime (`lode run <flags...>
//! <module specifier>`); `uninstall` locates and deletes them by name. The
//! runtime itself is only ever invoked by the generated scripts later on;
//! nothing here executes what it writes.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use app::commands::{install, uninstall};
use services::FilesystemShimStore;

pub use app::commands::install::InstallRequest;
pub use domain::{AppError, Platform, ShimScripts};
pub use ports::ShimStore;

/// Install `module_specifier` as the command `name` under `<home>/.lode/bin`.
///
/// Flags are baked into the generated shims verbatim, preserving order. The
/// install directory is resolved from the home environment on every call;
/// re-installing an existing name overwrites it wholesale.
pub fn install(name: &str, module_specifier: &str, flags: &[String]) -> Result<(), AppError> {
    let store = FilesystemShimStore::from_env()?;
    let request = InstallRequest {
        name: name.to_string(),
        module_specifier: module_specifier.to_string(),
        flags: flags.to_vec(),
    };

    install::execute(&store, Platform::host(), &request)?;
    println!("✅ Successfully installed {name}");

    if !store.on_search_path() {
        println!("ℹ️  Add {} to PATH", store.bin_dir().display());
        if Platform::host() == Platform::Posix {
            println!("    export PATH=\"{}:$PATH\"", store.bin_dir().display());
        }
    }

    Ok(())
}

/// Remove every shim installed under `name`.
///
/// Both platform variants are deleted when present; fails with
/// `"<name> not found"` when no artifact exists.
pub fn uninstall(name: &str) -> Result<(), AppError> {
    let store = FilesystemShimStore::from_env()?;
    uninstall::execute(&store, name)?;
    println!("✅ Successfully uninstalled {name}");
    Ok(())
}
