//! Page configuration loading

use std::path::{Path, PathBuf};

use benchboard_types::PageConfig;
use thiserror::Error;

/// Errors during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file {path} does not exist")]
    NotFound { path: PathBuf },

    #[error("failed to load configuration from {path}")]
    Load {
        path: PathBuf,
        #[source]
        source: confy::ConfyError,
    },
}

/// Load a TOML page configuration. Fields missing from the file keep their
/// defaults.
///
/// `confy::load_path` writes a default file when none exists, so a missing
/// path is rejected up front instead.
pub fn load_page_config(path: &Path) -> Result<PageConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let config = confy::load_path(path).map_err(|source| ConfigError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "Page configuration loaded");
    Ok(config)
}
