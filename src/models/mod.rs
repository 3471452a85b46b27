//! Core data models for the babysitter pay engine.
//!
//! This module contains the time values, the validated shift and the pay
//! result types used throughout the engine.

mod clock;
mod pay_result;
mod shift;

pub use clock::{ClockTime, HOURS_PER_DAY, WorkingDayTime};
pub use pay_result::{PayResult, PaySegment};
pub use shift::Shift;
