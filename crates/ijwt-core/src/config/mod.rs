//! Site and engine configuration (`ijwt.toml`)

pub mod consts;
pub mod model;

pub use model::{CacheConfig, Config, EngineConfig, Mode, NetworkConfig, SiteConfig};
