pub mod analysis;
pub mod handle;
