//! Babysitter pay engine
//!
//! This crate calculates a babysitter's pay for a single night. A shift runs
//! somewhere between 5:00 PM and 4:00 AM, is paid in whole hours, and each
//! family pays different hourly rates depending on the time of night.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
