pub use cache::{CacheView, MemoryCache};
pub use path::{get, get_or};

pub mod cache;
pub mod mention;
pub mod path;
pub mod resolve;

#[cfg(test)]
pub(crate) mod testutil;
