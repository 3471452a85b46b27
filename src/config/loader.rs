//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading family rate
//! schedules from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::calculation::{parse_clock_time, to_working_day};
use crate::error::{Endpoint, EngineError, EngineResult};

use super::schedule::{FamilyId, FamilyRegistry, FamilySchedule, RateTier};
use super::types::{FamiliesConfig, FamilyEntry};

/// Name of the schedule file inside a configuration directory.
pub const FAMILIES_FILE: &str = "families.yaml";

/// Loads and provides access to the family rate schedules.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── families.yaml   # Family names, descriptions and rate tiers
/// ```
///
/// Tier boundaries are written as clock times and must lie in the
/// 5:00 PM to 4:00 AM window:
///
/// ```yaml
/// families:
///   A:
///     name: Family A
///     description: $15/hr before 11PM, $20/hr after
///     tiers:
///       - until: "11:00 PM"
///         rate: 15
///         label: Before 11:00 PM
///       - until: "4:00 AM"
///         rate: 20
///         label: 11:00 PM - 4:00 AM
/// ```
///
/// # Example
///
/// ```no_run
/// use babysitter_pay::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// let schedule = loader.get_family("A").unwrap();
/// println!("{}: {}", schedule.name(), schedule.description());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    registry: FamilyRegistry,
}

impl ConfigLoader {
    /// Loads the schedules from `families.yaml` in the given directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file is not valid YAML for the expected shape (`ConfigParseError`)
    /// - A schedule breaks the tier invariants (`InvalidSchedule`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref().join(FAMILIES_FILE);
        let path_str = path.display().to_string();

        let content = fs::read_to_string(&path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&path_str, &content)
    }

    /// Parses schedules from YAML text.
    ///
    /// `source` names the origin of the text in error messages.
    ///
    /// # Example
    ///
    /// ```
    /// use babysitter_pay::config::ConfigLoader;
    ///
    /// let yaml = r#"
    /// families:
    ///   Z:
    ///     name: Family Z
    ///     tiers:
    ///       - until: "4:00 AM"
    ///         rate: 10
    ///         label: All night
    /// "#;
    ///
    /// let loader = ConfigLoader::from_yaml_str("inline", yaml).unwrap();
    /// assert_eq!(loader.registry().len(), 1);
    /// ```
    pub fn from_yaml_str(source: &str, content: &str) -> EngineResult<Self> {
        let config: FamiliesConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        let schedules = config
            .families
            .into_iter()
            .map(|(id, entry)| Self::build_schedule(&id, entry))
            .collect::<EngineResult<Vec<_>>>()?;

        let registry = FamilyRegistry::new(schedules)?;
        debug!(source, families = registry.len(), "Loaded family schedules");

        Ok(Self { registry })
    }

    /// Converts one file entry into a validated schedule.
    fn build_schedule(id: &str, entry: FamilyEntry) -> EngineResult<FamilySchedule> {
        let family_id = FamilyId::new(id).ok_or_else(|| EngineError::InvalidSchedule {
            family: id.to_string(),
            message: "family id must not be blank".to_string(),
        })?;

        let tiers = entry
            .tiers
            .into_iter()
            .map(|tier| -> EngineResult<RateTier> {
                let cutoff = parse_clock_time(&tier.until)
                    .and_then(|time| to_working_day(time, Endpoint::End))
                    .map_err(|e| EngineError::InvalidSchedule {
                        family: id.to_string(),
                        message: format!("tier '{}' has an invalid cutoff: {}", tier.label, e),
                    })?;
                Ok(RateTier {
                    cutoff,
                    rate: tier.rate,
                    label: tier.label,
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        FamilySchedule::new(family_id, entry.name, entry.description, tiers)
    }

    /// Returns the loaded family registry.
    pub fn registry(&self) -> &FamilyRegistry {
        &self.registry
    }

    /// Consumes the loader, returning the family registry.
    pub fn into_registry(self) -> FamilyRegistry {
        self.registry
    }

    /// Gets a family's schedule by id.
    ///
    /// # Returns
    ///
    /// Returns the schedule if found, or `UnknownFamily` error.
    pub fn get_family(&self, id: &str) -> EngineResult<&FamilySchedule> {
        self.registry.get(id)
    }
}
