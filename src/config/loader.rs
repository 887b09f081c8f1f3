//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the nursery's
//! fee schedule from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{FeeSchedule, FundingConfig, NurseryConfig, NurseryMetadata, RateConfig};

/// Loads and provides access to the nursery's fee configuration.
///
/// # Directory Structure
///
/// ```text
/// config/little_lodge/
/// ├── nursery.yaml        # Nursery name and contact details
/// ├── funding.yaml        # Weekly funded hours per tier and pattern
/// └── rates/
///     └── 2025-09-01.yaml # Hourly rate and resource fees from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use nursery_fees::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/little_lodge").unwrap();
/// let schedule = loader.current_schedule().unwrap();
/// println!("{}: £{}/hour", loader.nursery().name, schedule.hourly_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: NurseryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any rate file combined with the funding table fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<NurseryMetadata>(&path.join("nursery.yaml"))?;
        let funding = Self::load_yaml::<FundingConfig>(&path.join("funding.yaml"))?;
        let rates = Self::load_rates(&path.join("rates"))?;

        for rate_config in &rates {
            FeeSchedule::new(rate_config, funding).validate()?;
        }

        debug!(
            path = %path.display(),
            nursery = %metadata.name,
            rate_files = rates.len(),
            "Loaded fee configuration"
        );

        Ok(Self {
            config: NurseryConfig::new(metadata, funding, rates),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all rate files from the rates directory.
    fn load_rates(rates_dir: &Path) -> EngineResult<Vec<RateConfig>> {
        let rates_dir_str = rates_dir.display().to_string();

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut rates = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                rates.push(Self::load_yaml::<RateConfig>(&path)?);
            }
        }

        if rates.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(rates)
    }

    /// Returns the underlying nursery configuration.
    pub fn config(&self) -> &NurseryConfig {
        &self.config
    }

    /// Returns the nursery metadata.
    pub fn nursery(&self) -> &NurseryMetadata {
        self.config.nursery()
    }

    /// Returns the fee schedule in effect on `date`.
    ///
    /// The most recent rate file effective on or before `date` is combined
    /// with the funding table.
    pub fn schedule_for(&self, date: NaiveDate) -> EngineResult<FeeSchedule> {
        self.config
            .rates()
            .iter()
            .rfind(|rc| rc.effective_date <= date)
            .map(|rc| FeeSchedule::new(rc, *self.config.funding()))
            .ok_or(EngineError::ScheduleNotFound { date })
    }

    /// Returns the fee schedule built from the newest rate file.
    pub fn current_schedule(&self) -> EngineResult<FeeSchedule> {
        self.config
            .rates()
            .last()
            .map(|rc| FeeSchedule::new(rc, *self.config.funding()))
            .ok_or_else(|| EngineError::ConfigNotFound {
                path: "rates (no rate files loaded)".to_string(),
            })
    }
}
