//! Clock and working-day time values.
//!
//! A [`ClockTime`] is an ordinary time of day. A [`WorkingDayTime`] is the same
//! instant placed on the continuous 17–28 overnight axis, where the hours after
//! midnight are shifted by 24 so that the whole shift sorts monotonically.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::Serialize;

/// Hours in a day; the offset applied to post-midnight times.
pub const HOURS_PER_DAY: u32 = 24;

/// A time of day at minute resolution, on a 0–24 clock.
///
/// # Example
///
/// ```
/// use babysitter_pay::models::ClockTime;
/// use rust_decimal::Decimal;
///
/// let time = ClockTime::from_hm(17, 30).unwrap();
/// assert_eq!(time.fractional_hours(), Decimal::new(175, 1));
/// assert!(ClockTime::from_hm(24, 0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Creates a clock time from an hour (0–23) and minute (0–59).
    ///
    /// Returns `None` when either component is out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// The hour component (0–23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// The minute component (0–59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// The time as a fractional hour, e.g. 5:30 PM is `17.5`.
    pub fn fractional_hours(&self) -> Decimal {
        Decimal::from(self.hour()) + Decimal::from(self.minute()) / Decimal::from(60)
    }

    /// Returns the underlying `chrono` time.
    pub fn as_naive_time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// A fractional hour on the overnight working-day scale, always within
/// `[17, 28]`.
///
/// Evening hours keep their clock value; hours from midnight to 4:00 AM are
/// represented as 24–28. Values can only be created inside the window, so every
/// `WorkingDayTime` in the engine is known to be valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct WorkingDayTime(Decimal);

impl WorkingDayTime {
    /// The earliest instant of the working day (5:00 PM).
    pub const WINDOW_START: u32 = 17;
    /// The latest instant of the working day (4:00 AM the next morning).
    pub const WINDOW_END: u32 = 28;

    /// Wraps an hour value already on the working-day scale.
    ///
    /// Returns `None` when the value lies outside `[17, 28]`.
    ///
    /// # Example
    ///
    /// ```
    /// use babysitter_pay::models::WorkingDayTime;
    /// use rust_decimal::Decimal;
    ///
    /// assert!(WorkingDayTime::from_hours(Decimal::from(25)).is_some());
    /// assert!(WorkingDayTime::from_hours(Decimal::from(29)).is_none());
    /// ```
    pub fn from_hours(hours: Decimal) -> Option<Self> {
        let in_range = hours >= Decimal::from(Self::WINDOW_START)
            && hours <= Decimal::from(Self::WINDOW_END);
        in_range.then_some(Self(hours))
    }

    /// The start of the permitted window, 17 (5:00 PM).
    pub fn window_start() -> Self {
        Self(Decimal::from(Self::WINDOW_START))
    }

    /// The end of the permitted window, 28 (4:00 AM).
    pub fn window_end() -> Self {
        Self(Decimal::from(Self::WINDOW_END))
    }

    /// The value on the working-day scale.
    pub fn hours(&self) -> Decimal {
        self.0
    }

    /// The value mapped back onto the 0–24 clock.
    pub fn clock_hours(&self) -> Decimal {
        let day = Decimal::from(HOURS_PER_DAY);
        if self.0 >= day { self.0 - day } else { self.0 }
    }

    /// Returns this time moved forward by a whole number of hours, if the
    /// result still lies inside the window.
    pub fn checked_add_hours(&self, hours: u32) -> Option<Self> {
        Self::from_hours(self.0 + Decimal::from(hours))
    }
}

impl fmt::Display for WorkingDayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}
