//! Dataset accessor
//!
//! The page data is produced elsewhere and embedded once; it is either a JSON
//! array addressed by numeric index or a JSON object addressed by id. Lookups
//! take the key exactly as it appears in a `data-*` attribute or URL
//! parameter, so both shapes are queried with a string.

mod config;
mod error;

#[cfg(test)]
mod tests;

use std::path::Path;

use hashbrown::HashMap;
use serde::Deserialize;

pub use config::{ChartConfig, ConfigIssue};
pub use error::DatasetError;

/// Read-only mapping from key to chart configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Dataset {
    Indexed(Vec<ChartConfig>),
    Keyed(HashMap<String, ChartConfig>),
}

impl Default for Dataset {
    fn default() -> Self {
        Self::Indexed(Vec::new())
    }
}

/// Array index spelled the way a JS array key is: plain digits, no leading zero.
fn canonical_index(key: &str) -> Option<usize> {
    let canonical = !key.is_empty()
        && key.bytes().all(|b| b.is_ascii_digit())
        && (key == "0" || !key.starts_with('0'));
    if canonical { key.parse().ok() } else { None }
}

impl Dataset {
    pub fn from_json(text: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let text = std::fs::read_to_string(path).map_err(|source| DatasetError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| DatasetError::ParseFile {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Look up a configuration. Absent keys are an expected case.
    pub fn get(&self, key: &str) -> Option<&ChartConfig> {
        match self {
            Self::Indexed(configs) => canonical_index(key).and_then(|index| configs.get(index)),
            Self::Keyed(configs) => configs.get(key),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Indexed(configs) => configs.len(),
            Self::Keyed(configs) => configs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keys with their configurations. Indexed datasets yield ascending
    /// indices; keyed datasets are sorted by key for stable output.
    pub fn entries(&self) -> Vec<(String, &ChartConfig)> {
        match self {
            Self::Indexed(configs) => configs
                .iter()
                .enumerate()
                .map(|(i, config)| (i.to_string(), config))
                .collect(),
            Self::Keyed(configs) => {
                let mut entries: Vec<_> = configs
                    .iter()
                    .map(|(key, config)| (key.clone(), config))
                    .collect();
                entries.sort_by(|a, b| a.0.cmp(&b.0));
                entries
            }
        }
    }
}
