mod shim_filesystem;

pub use shim_filesystem::FilesystemShimStore;
