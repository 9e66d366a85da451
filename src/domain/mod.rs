pub mod error;
pub mod shim;

pub use error::AppError;
pub use shim::{Platform, ShimScripts};
