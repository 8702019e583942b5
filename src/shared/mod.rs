/// Shared kernel: error types, result alias and the build-scoped cache
pub mod build_cache;
pub mod error;
mod result;

pub use build_cache::BuildCache;
pub use result::Result;
