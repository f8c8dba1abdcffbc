//! Weight-profile configuration support.
//!
//! This module provides utilities for reading the composite-weight
//! coefficients from TOML configuration files, with environment-variable
//! override for the file location.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit configuration file path.
pub const CONFIG_ENV_VAR: &str = "FAIRSCALE_CONFIG";

/// Default configuration file name searched in the working directory.
pub const CONFIG_FILE_NAME: &str = "fairscale.toml";

/// Coefficients of the composite weight function.
///
/// Each coefficient scales one subject attribute; the defaults sum to 1.0
/// so the weight reads as a blend of the four signals. `preparation_gap`
/// multiplies `100 - preparation` and `ease` multiplies `100 - difficulty`,
/// so under the default profile easier, less-prepared subjects score higher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightProfile {
    /// Coefficient for `100 - preparation` (default 0.35).
    #[serde(default = "default_preparation_gap")]
    pub preparation_gap: f64,
    /// Coefficient for `syllabus_size` (default 0.30).
    #[serde(default = "default_syllabus_size")]
    pub syllabus_size: f64,
    /// Coefficient for `exam_weight` (default 0.15).
    #[serde(default = "default_exam_weight")]
    pub exam_weight: f64,
    /// Coefficient for `100 - difficulty` (default 0.20).
    #[serde(default = "default_ease")]
    pub ease: f64,
}

fn default_preparation_gap() -> f64 {
    0.35
}

fn default_syllabus_size() -> f64 {
    0.30
}

fn default_exam_weight() -> f64 {
    0.15
}

fn default_ease() -> f64 {
    0.20
}

impl Default for WeightProfile {
    fn default() -> Self {
        WeightProfile {
            preparation_gap: default_preparation_gap(),
            syllabus_size: default_syllabus_size(),
            exam_weight: default_exam_weight(),
            ease: default_ease(),
        }
    }
}

/// Top-level layout of a `fairscale.toml` file.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    weights: WeightProfile,
}

impl WeightProfile {
    /// Sum of the four coefficients. 1.0 under the default profile.
    pub fn coefficient_sum(&self) -> f64 {
        self.preparation_gap + self.syllabus_size + self.exam_weight + self.ease
    }

    /// Load a weight profile from a TOML file.
    ///
    /// Missing coefficients fall back to their defaults, so a file may
    /// override a single value. Negative coefficients are rejected; a
    /// coefficient sum far from 1.0 is accepted but logged, since it
    /// rescales every weight by the same factor.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(WeightProfile)` if successful
    /// * `Err` if the file cannot be read, parsed, or holds invalid values
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.weights.validate()?;
        Ok(config.weights)
    }

    /// Resolve the active weight profile.
    ///
    /// Resolution order:
    /// 1. File named by the `FAIRSCALE_CONFIG` environment variable
    /// 2. `fairscale.toml` in the current directory
    /// 3. Built-in defaults
    ///
    /// A path set via the environment variable must load successfully;
    /// an absent file in the working directory is not an error.
    pub fn from_env_or_default() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::load_from_path(&path);
        }

        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            return Self::load_from_path(&local);
        }

        Ok(Self::default())
    }

    fn validate(&self) -> Result<()> {
        let coefficients = [
            ("preparation_gap", self.preparation_gap),
            ("syllabus_size", self.syllabus_size),
            ("exam_weight", self.exam_weight),
            ("ease", self.ease),
        ];

        for (name, value) in coefficients {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("Weight coefficient '{}' must be a non-negative number, got {}", name, value);
            }
        }

        let sum = self.coefficient_sum();
        if sum <= 0.0 {
            anyhow::bail!("Weight coefficients must not all be zero");
        }
        if (sum - 1.0).abs() > 0.01 {
            log::warn!(
                "Weight coefficients sum to {:.3} instead of 1.0; weights are rescaled accordingly",
                sum
            );
        }

        Ok(())
    }
}
