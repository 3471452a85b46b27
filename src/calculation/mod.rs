//! Calculation logic for the babysitter pay engine.
//!
//! This module contains the steps of a pay calculation: parsing clock times,
//! validating them against the overnight window, resolving the paid hours of
//! the shift, splitting it across a family's rate tiers and labelling each
//! segment. [`calculate`] runs the whole pipeline.

mod calculate;
mod period_formatter;
mod rate_segmenter;
mod shift_resolver;
mod time_parser;
mod window;

pub use calculate::calculate;
pub use period_formatter::{format_period, format_working_day_time};
pub use rate_segmenter::{SegmentationResult, segment_shift};
pub use shift_resolver::resolve_shift;
pub use time_parser::parse_clock_time;
pub use window::{is_within_window, to_working_day};
