use super::consts;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// ijwt.toml schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Protocol + host, e.g. `https://example.org`
    #[serde(default = "default_origin")]
    pub origin: String,
    /// Site-relative root prefix
    #[serde(default = "default_site_path", alias = "site_path")]
    pub path: String,
    /// Entry document rendered by default
    #[serde(default = "default_index", alias = "base_page")]
    pub index: String,
    #[serde(default)]
    pub mode: Mode,
    /// Ordered include directories, first match wins
    #[serde(default = "default_directories")]
    pub directories: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            path: default_site_path(),
            index: default_index(),
            mode: Mode::default(),
            directories: default_directories(),
        }
    }
}

/// Caching behavior switch.
///
/// The historical spelling `"developement"` is what gets written back out;
/// `"development"` is accepted on input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    #[serde(rename = "developement", alias = "development")]
    Development,
    #[serde(rename = "production")]
    Production,
}

impl Mode {
    pub fn is_production(self) -> bool {
        self == Mode::Production
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Include depth ceiling. Unset means unbounded.
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CacheConfig {
    /// Location of the persistent store file
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_origin() -> String {
    consts::DEFAULT_ORIGIN.to_string()
}

fn default_site_path() -> String {
    consts::DEFAULT_SITE_PATH.to_string()
}

fn default_index() -> String {
    consts::DEFAULT_INDEX.to_string()
}

fn default_directories() -> Vec<String> {
    consts::DEFAULT_DIRECTORIES
        .iter()
        .map(|d| d.to_string())
        .collect()
}

fn default_prefix() -> String {
    consts::DEFAULT_PREFIX.to_string()
}

fn default_timeout_secs() -> u64 {
    consts::DEFAULT_TIMEOUT_SECS
}

impl Config {
    /// Read ijwt.toml
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| crate::error::IjwtError::ConfigParseError(e.to_string()))?;

        Self::from_toml(&content)
    }

    /// Read ijwt.toml if it exists, defaults otherwise
    pub fn from_file_or_default(path: impl AsRef<std::path::Path>) -> crate::error::Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::error::Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| crate::error::IjwtError::ConfigParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write ijwt.toml
    pub fn to_file(&self, path: impl AsRef<std::path::Path>) -> crate::error::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::IjwtError::ConfigParseError(e.to_string()))?;

        std::fs::write(path.as_ref(), content).map_err(crate::error::IjwtError::IoError)?;

        Ok(())
    }

    fn validate(&self) -> crate::error::Result<()> {
        if self.engine.prefix.is_empty() {
            return Err(crate::error::IjwtError::ConfigInvalidValue {
                field: "engine.prefix".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.site.directories.is_empty() {
            return Err(crate::error::IjwtError::ConfigInvalidValue {
                field: "site.directories".to_string(),
                reason: "at least one directory is required".to_string(),
            });
        }
        if self.engine.max_depth == Some(0) {
            return Err(crate::error::IjwtError::ConfigInvalidValue {
                field: "engine.max_depth".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        self.site_base().map(|_| ())
    }

    /// Absolute URL every relative resource is re-rooted at: origin + site path
    pub fn site_base(&self) -> crate::error::Result<Url> {
        let origin = self.site.origin.trim_end_matches('/');
        let base = format!("{}{}", origin, self.site.path);
        Url::parse(&base).map_err(|e| crate::error::IjwtError::InvalidSiteBase {
            base,
            reason: e.to_string(),
        })
    }
}
