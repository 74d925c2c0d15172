//! Constants shared across the engine

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "ijwt.toml";

/// Default reserved prefix for placeholders, cache keys and marker classes
pub const DEFAULT_PREFIX: &str = "ijwt";

/// Default protocol + host used when no origin is configured
pub const DEFAULT_ORIGIN: &str = "http://localhost";

/// Default site-relative root prefix
pub const DEFAULT_SITE_PATH: &str = "/";

/// Default entry document
pub const DEFAULT_INDEX: &str = "index.html";

/// Default ordered include directories
pub const DEFAULT_DIRECTORIES: [&str; 5] = ["", "pages", "partials", "static/css", "static/scripts"];

/// Default HTTP request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Class suffixes for the post-collapse passes
pub mod classes {
    /// `<prefix>_cache`: persist the element's rendered content across runs
    pub const CACHE: &str = "cache";

    /// `<prefix>_remove`: delete the element from the final output
    pub const REMOVE: &str = "remove";
}
