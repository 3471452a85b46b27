//! Shift model.
//!
//! A [`Shift`] is a validated start/end pair on the working-day scale together
//! with the number of full hours it contains.

use rust_decimal::Decimal;
use serde::Serialize;

use super::WorkingDayTime;

/// A validated babysitting shift.
///
/// Shifts are produced by [`resolve_shift`](crate::calculation::resolve_shift),
/// which guarantees `end > start` and at least one full hour between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shift {
    start: WorkingDayTime,
    end: WorkingDayTime,
    total_hours: u32,
}

impl Shift {
    pub(crate) fn from_parts(start: WorkingDayTime, end: WorkingDayTime, total_hours: u32) -> Self {
        Self {
            start,
            end,
            total_hours,
        }
    }

    /// The normalized start time.
    pub fn start(&self) -> WorkingDayTime {
        self.start
    }

    /// The normalized end time as entered, including any partial final hour.
    pub fn end(&self) -> WorkingDayTime {
        self.end
    }

    /// The number of full hours worked.
    pub fn total_hours(&self) -> u32 {
        self.total_hours
    }

    /// The exact duration between start and end, in hours.
    pub fn duration(&self) -> Decimal {
        self.end.hours() - self.start.hours()
    }

    /// The end of the paid interval: `start + total_hours`.
    ///
    /// Any partial hour after this instant is not paid.
    pub fn billable_end(&self) -> WorkingDayTime {
        // start + floor(end - start) never passes end, which is itself in the window
        self.start
            .checked_add_hours(self.total_hours)
            .unwrap_or(self.end)
    }

    /// The unpaid remainder after the last full hour.
    pub fn discarded_hours(&self) -> Decimal {
        self.end.hours() - self.billable_end().hours()
    }
}
