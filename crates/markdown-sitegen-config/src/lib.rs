//! Site configuration stored in `sitegen.toml`.
//!
//! ```toml
//! content_dir = "content"
//! static_dir = "static"
//! template_path = "template.html"
//! output_dir = "public"
//! base_path = "/"
//! ```
//!
//! Every key is optional. Paths may use `~` and `$VAR`, and relative paths
//! are taken relative to the directory holding the config file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid base_path {base_path:?} in {config_path}: it must start with '/'")]
    InvalidBasePath {
        config_path: PathBuf,
        base_path: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Markdown sources, one page per `.md` file.
    pub content_dir: PathBuf,
    /// Copied verbatim into the output before pages are generated.
    pub static_dir: PathBuf,
    pub template_path: PathBuf,
    pub output_dir: PathBuf,
    /// URL prefix the site is served under, e.g. `/my-project/`.
    pub base_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            template_path: PathBuf::from("template.html"),
            output_dir: PathBuf::from("public"),
            base_path: "/".to_string(),
        }
    }
}

impl Config {
    pub const FILE_NAME: &'static str = "sitegen.toml";

    /// Loads the config at `config_path`, or `Ok(None)` if there is no file.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.is_file() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;
        let config: Config = toml::from_str(&raw).map_err(|source| ConfigError::ConfigParseError {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        if !is_valid_base_path(&config.base_path) {
            return Err(ConfigError::InvalidBasePath {
                config_path: config_path.to_path_buf(),
                base_path: config.base_path,
            });
        }

        let base_dir = config_path.parent().unwrap_or(Path::new(""));
        Ok(Some(config.resolve_paths(base_dir)))
    }

    /// Loads `sitegen.toml` from the working directory.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from(Self::FILE_NAME)
    }

    fn resolve_paths(mut self, base_dir: &Path) -> Self {
        for path in [
            &mut self.content_dir,
            &mut self.static_dir,
            &mut self.template_path,
            &mut self.output_dir,
        ] {
            *path = resolve(path, base_dir);
        }
        self
    }
}

/// A base path is a URL prefix and must start with `/`.
pub fn is_valid_base_path(base_path: &str) -> bool {
    base_path.starts_with('/')
}

/// Expands `~` and `$VAR`, then anchors relative results at `base_dir`.
///
/// A path whose variables cannot be expanded is kept as written.
fn resolve(path: &Path, base_dir: &Path) -> PathBuf {
    let expanded = match shellexpand::full(&path.to_string_lossy()) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => path.to_path_buf(),
    };
    if expanded.is_absolute() {
        expanded
    } else {
        base_dir.join(expanded)
    }
}
