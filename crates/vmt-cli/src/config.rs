//! # CLI Configuration
//!
//! Optional YAML defaults for the `vmt` subcommands:
//!
//! ```yaml
//! default_count: 15
//! page_size: 10
//! seed: 42
//! comment_probability: 0.3
//! supplier_probability: 0.5
//! ```
//!
//! Lookup order: the `--config` path (must exist), then `vmt.yaml` in the
//! current directory (when present), then built-in defaults. Explicit
//! command-line flags always override the file.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use vmt_core::CalendarDate;
use vmt_history::DEFAULT_PAGE_SIZE;
use vmt_mock::{GeneratorConfig, DEFAULT_VEHICLE_COUNT};

/// Config file picked up from the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "vmt.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Vehicles to generate when `--count` is not given.
    pub default_count: usize,
    /// Table rows per page when `--page-size` is not given.
    pub page_size: usize,
    /// Generator seed when `--seed` is not given. Unseeded runs differ.
    pub seed: Option<u64>,
    pub comment_probability: f64,
    pub supplier_probability: f64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_count: DEFAULT_VEHICLE_COUNT,
            page_size: DEFAULT_PAGE_SIZE,
            seed: None,
            comment_probability: 0.3,
            supplier_probability: 0.5,
        }
    }
}

impl CliConfig {
    /// Resolve the configuration for this run.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_with_fallback(explicit, Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Like [`CliConfig::load`], with the implicit file at `fallback`.
    pub fn load_with_fallback(explicit: Option<&Path>, fallback: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if fallback.is_file() => Self::from_file(fallback),
            None => {
                tracing::debug!("no config file; using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("invalid config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file deserializes as YAML null.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            bail!("page_size must be at least 1");
        }
        for (name, p) in [
            ("comment_probability", self.comment_probability),
            ("supplier_probability", self.supplier_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                bail!("{name} must be between 0 and 1, got {p}");
            }
        }
        Ok(())
    }

    /// Generator settings for a run anchored at `reference_date`.
    pub fn generator_config(&self, reference_date: CalendarDate) -> GeneratorConfig {
        GeneratorConfig {
            default_count: self.default_count,
            comment_probability: self.comment_probability,
            supplier_probability: self.supplier_probability,
            ..GeneratorConfig::with_reference_date(reference_date)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.default_count, 15);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_partial_yaml() {
        let config = CliConfig::from_yaml("seed: 42\npage_size: 25\n").unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.page_size, 25);
        assert_eq!(config.default_count, 15);
        assert_eq!(CliConfig::from_yaml("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(CliConfig::from_yaml("rows_per_page: 5\n").is_err());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(CliConfig::from_yaml("page_size: 0\n").is_err());
        assert!(CliConfig::from_yaml("comment_probability: 1.5\n").is_err());
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");
        let err = CliConfig::load_with_fallback(Some(&missing), &dir.path().join("vmt.yaml"))
            .unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }

    #[test]
    fn test_fallback_file_is_optional() {
        let dir = tempfile::tempdir().unwrap();
        let fallback = dir.path().join("vmt.yaml");
        assert_eq!(
            CliConfig::load_with_fallback(None, &fallback).unwrap(),
            CliConfig::default()
        );

        std::fs::write(&fallback, "default_count: 3\n").unwrap();
        let config = CliConfig::load_with_fallback(None, &fallback).unwrap();
        assert_eq!(config.default_count, 3);
    }

    #[test]
    fn test_generator_config_carries_probabilities() {
        let config = CliConfig {
            comment_probability: 1.0,
            supplier_probability: 0.0,
            ..CliConfig::default()
        };
        let reference = CalendarDate::parse("2024-06-30").unwrap();
        let generator = config.generator_config(reference);
        assert_eq!(generator.reference_date, reference);
        assert_eq!(generator.comment_probability, 1.0);
        assert_eq!(generator.supplier_probability, 0.0);
    }
}
