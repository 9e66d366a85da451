mod shim_store;

pub use shim_store::ShimStore;
