pub mod atlas;
pub mod store;
pub mod texture;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
