//! Rate-tier segmentation of a shift.
//!
//! This module splits the paid part of a shift into contiguous segments, one
//! per rate tier actually worked, and prices each of them.

use rust_decimal::Decimal;
use tracing::trace;

use crate::config::FamilySchedule;
use crate::models::{PaySegment, Shift};

use super::period_formatter::format_period;

/// The result of segmenting a shift by a family's rate tiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentationResult {
    /// Segments in chronological order.
    pub segments: Vec<PaySegment>,
    /// Sum of the pay of every segment.
    pub total_pay: Decimal,
}

/// Splits the paid interval of `shift` into per-tier segments.
///
/// Only `[start, start + total_hours)` is segmented; a trailing partial hour
/// is never paid, so a tier that begins inside that remainder produces no
/// segment. Each tier covers instants strictly before its cutoff, so a shift
/// that reaches a cutoff exactly continues in the next tier.
///
/// The returned segments are gap-free, do not overlap, and their hours sum to
/// exactly `shift.total_hours()`.
///
/// # Example
///
/// ```no_run
/// use babysitter_pay::calculation::{resolve_shift, segment_shift};
/// use babysitter_pay::config::ConfigLoader;
/// use babysitter_pay::models::WorkingDayTime;
/// use rust_decimal::Decimal;
///
/// let registry = ConfigLoader::load("./config").unwrap().into_registry();
/// let schedule = registry.get("A").unwrap();
///
/// let t = |h: i64| WorkingDayTime::from_hours(Decimal::from(h)).unwrap();
/// let shift = resolve_shift(t(21), t(25)).unwrap();
///
/// let result = segment_shift(&shift, schedule);
/// assert_eq!(result.segments.len(), 2);
/// assert_eq!(result.total_pay, Decimal::from(70));
/// ```
pub fn segment_shift(shift: &Shift, schedule: &FamilySchedule) -> SegmentationResult {
    let billable_end = shift.billable_end();
    let mut cursor = shift.start();
    let mut segments = Vec::new();
    let mut total_pay = Decimal::ZERO;

    for tier in schedule.tiers() {
        if cursor >= billable_end {
            break;
        }

        let segment_end = tier.cutoff.min(billable_end);
        if cursor < segment_end {
            let hours = segment_end.hours() - cursor.hours();
            let pay = hours * tier.rate;

            trace!(
                family = %schedule.id(),
                tier = %tier.label,
                start = %cursor,
                end = %segment_end,
                hours = %hours,
                "Segment assigned to tier"
            );

            segments.push(PaySegment {
                period: format_period(cursor, segment_end),
                tier: tier.label.clone(),
                start: cursor,
                end: segment_end,
                hours,
                rate: tier.rate,
                pay,
            });
            total_pay += pay;
            cursor = segment_end;
        }
    }

    SegmentationResult {
        segments,
        total_pay,
    }
}
