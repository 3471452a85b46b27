//! Family schedule configuration for the babysitter pay engine.
//!
//! This module loads the per-family rate schedules from YAML, validates them
//! and exposes them through a [`FamilyRegistry`].
//!
//! # Example
//!
//! ```no_run
//! use babysitter_pay::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! for schedule in config.registry().schedules() {
//!     println!("{}: {}", schedule.id(), schedule.description());
//! }
//! ```

mod loader;
mod schedule;
mod types;

pub use loader::{ConfigLoader, FAMILIES_FILE};
pub use schedule::{FamilyId, FamilyRegistry, FamilySchedule, RateTier};
pub use types::{FamiliesConfig, FamilyEntry, TierEntry};
