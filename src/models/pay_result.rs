//! Pay result models.
//!
//! This module contains the [`PayResult`] type returned by
//! [`calculate`](crate::calculation::calculate) and the [`PaySegment`] lines that
//! make up its breakdown.

use rust_decimal::Decimal;
use serde::Serialize;

use super::WorkingDayTime;

/// The part of a shift paid at a single rate tier.
///
/// # Example
///
/// ```
/// use babysitter_pay::models::{PaySegment, WorkingDayTime};
/// use rust_decimal::Decimal;
///
/// let segment = PaySegment {
///     period: "9:00 PM - 11:00 PM".to_string(),
///     tier: "Before 11:00 PM".to_string(),
///     start: WorkingDayTime::from_hours(Decimal::from(21)).unwrap(),
///     end: WorkingDayTime::from_hours(Decimal::from(23)).unwrap(),
///     hours: Decimal::from(2),
///     rate: Decimal::from(15),
///     pay: Decimal::from(30),
/// };
/// assert_eq!(segment.pay, segment.hours * segment.rate);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaySegment {
    /// Human-readable clock range, e.g. `"9:00 PM - 11:00 PM"`.
    pub period: String,
    /// The label of the rate tier this segment was paid under.
    pub tier: String,
    /// Start of the segment on the working-day scale.
    pub start: WorkingDayTime,
    /// End of the segment on the working-day scale (exclusive).
    pub end: WorkingDayTime,
    /// Hours in the segment.
    pub hours: Decimal,
    /// Hourly rate of the tier.
    pub rate: Decimal,
    /// `hours * rate`.
    pub pay: Decimal,
}

/// The complete result of a pay calculation for one shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayResult {
    /// Sum of the pay of every segment.
    pub total_pay: Decimal,
    /// Full hours worked; any partial final hour is not counted.
    pub total_hours: u32,
    /// Per-tier segments in chronological order.
    pub breakdown: Vec<PaySegment>,
    /// The family the shift was worked for.
    pub family: String,
}

impl PayResult {
    /// Average hourly earnings over the paid hours, without trailing zeros.
    pub fn average_rate(&self) -> Decimal {
        if self.total_hours == 0 {
            return Decimal::ZERO;
        }
        (self.total_pay / Decimal::from(self.total_hours)).normalize()
    }

    /// Sum of the hours of every segment.
    pub fn breakdown_hours(&self) -> Decimal {
        self.breakdown.iter().map(|s| s.hours).sum()
    }
}
