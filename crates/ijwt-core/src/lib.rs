// Core modules
pub mod cache;
pub mod config;
pub mod dom;
pub mod engine;
pub mod error;
pub mod fetch;
pub mod hash;
pub mod passes;
pub mod qualifier;
pub mod resolve;
pub mod scan;
pub mod tree;

// Re-export commonly used types
pub use cache::{Cache, FileStore, MemoryStore, Store};
pub use config::{Config, Mode};
pub use dom::Document;
pub use engine::Engine;
pub use error::{IjwtError, Result};
pub use fetch::{DirFetcher, Fetch, FetchError, HttpFetcher, MemoryFetcher, Response};
pub use resolve::FileResolver;
pub use scan::{Placeholder, Scanner};
pub use tree::TreeNode;
