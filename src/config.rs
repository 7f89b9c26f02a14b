//! # Configuration
//!
//! Settings read once at startup, from an optional YAML file.
//!
//! ```yaml
//! count: 2
//! max-frets: 14
//! fret-labels: [1, 3, 5, 7, 9, 12]
//! ```
//!
//! Every key is optional; missing keys take their defaults. The string tuning is not
//! configurable.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::TabError;
use crate::fretboard::{Fretboard, FRET_LIMIT, MAX_FRETS};
use crate::render::FRET_LABELS;

#[derive(Debug, Clone, PartialEq)]
pub struct TabConfig {
    /// Tabs to show per chord
    pub count: i64,
    /// Exclusive upper bound on fret numbers
    pub max_frets: u8,
    /// Frets numbered under each diagram
    pub fret_labels: Vec<u8>,
}

impl Default for TabConfig {
    fn default() -> Self {
        Self {
            count: 1,
            max_frets: MAX_FRETS,
            fret_labels: FRET_LABELS.to_vec(),
        }
    }
}

/// Raw configuration for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawConfig {
    pub count: Option<i64>,
    pub max_frets: Option<u8>,
    pub fret_labels: Option<Vec<u8>>,
}

impl TabConfig {
    /// Parse and validate a YAML document. An empty document gives the defaults.
    ///
    /// # Example
    /// ```
    /// use tabgen::TabConfig;
    ///
    /// let config = TabConfig::from_yaml("count: 3\nmax-frets: 12")?;
    /// assert_eq!(config.count, 3);
    /// assert_eq!(config.max_frets, 12);
    /// assert_eq!(config.fret_labels, vec![1, 3, 5, 7, 9]);
    /// # Ok::<(), tabgen::TabError>(())
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, TabError> {
        let raw: RawConfig = if source.trim().is_empty() {
            RawConfig::default()
        } else {
            serde_yaml::from_str(source).map_err(|e| TabError::Config(e.to_string()))?
        };
        Self::from_raw(raw)
    }

    /// Read and validate a YAML file.
    pub fn load(path: &Path) -> Result<Self, TabError> {
        let source = fs::read_to_string(path)
            .map_err(|e| TabError::Config(format!("cannot read '{}': {}", path.display(), e)))?;
        Self::from_yaml(&source)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, TabError> {
        let defaults = TabConfig::default();
        let count = raw.count.unwrap_or(defaults.count);
        let max_frets = raw.max_frets.unwrap_or(defaults.max_frets);

        if count < 1 {
            return Err(TabError::Config(format!(
                "count must be at least 1, got {}",
                count
            )));
        }
        if max_frets == 0 || max_frets > FRET_LIMIT {
            return Err(TabError::Config(format!(
                "max-frets must be between 1 and {}, got {}",
                FRET_LIMIT, max_frets
            )));
        }

        // Default labels beyond a shortened neck are dropped; explicit ones must fit.
        let fret_labels = match raw.fret_labels {
            Some(labels) => {
                if let Some(bad) = labels.iter().find(|&&label| label >= max_frets) {
                    return Err(TabError::Config(format!(
                        "fret label {} is outside the fret range 0..{}",
                        bad, max_frets
                    )));
                }
                labels
            }
            None => defaults
                .fret_labels
                .into_iter()
                .filter(|&label| label < max_frets)
                .collect(),
        };

        Ok(Self {
            count,
            max_frets,
            fret_labels,
        })
    }

    pub fn fretboard(&self) -> Fretboard {
        Fretboard::new(self.max_frets)
    }
}
