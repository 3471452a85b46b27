//! Overnight window validation and working-day normalization.
//!
//! Shifts may only start and end between 5:00 PM and 4:00 AM. Accepted times
//! are moved onto the 17–28 working-day scale so that a time after midnight
//! compares greater than any evening time. [`format_working_day_time`] is the
//! inverse mapping.
//!
//! [`format_working_day_time`]: super::format_working_day_time

use rust_decimal::Decimal;

use crate::error::{Endpoint, EngineError, EngineResult};
use crate::models::{ClockTime, HOURS_PER_DAY, WorkingDayTime};

/// Returns true if the time lies within the permitted window: at or after
/// 5:00 PM, or at or before 4:00 AM.
///
/// # Example
///
/// ```
/// use babysitter_pay::calculation::is_within_window;
/// use babysitter_pay::models::ClockTime;
///
/// assert!(is_within_window(ClockTime::from_hm(17, 0).unwrap()));
/// assert!(is_within_window(ClockTime::from_hm(4, 0).unwrap()));
/// assert!(!is_within_window(ClockTime::from_hm(4, 1).unwrap()));
/// assert!(!is_within_window(ClockTime::from_hm(12, 0).unwrap()));
/// ```
pub fn is_within_window(time: ClockTime) -> bool {
    let hours = time.fractional_hours();
    hours >= Decimal::from(WorkingDayTime::WINDOW_START)
        || hours <= Decimal::from(WorkingDayTime::WINDOW_END - HOURS_PER_DAY)
}

/// Validates a clock time against the overnight window and maps it onto the
/// working-day scale.
///
/// Evening times keep their value; times from midnight to 4:00 AM gain 24.
///
/// # Errors
///
/// Returns [`EngineError::OutOfWindow`] naming `endpoint` when the time falls
/// between 4:00 AM and 5:00 PM.
///
/// # Example
///
/// ```
/// use babysitter_pay::calculation::to_working_day;
/// use babysitter_pay::error::Endpoint;
/// use babysitter_pay::models::ClockTime;
/// use rust_decimal::Decimal;
///
/// let one_am = ClockTime::from_hm(1, 0).unwrap();
/// let normalized = to_working_day(one_am, Endpoint::End).unwrap();
/// assert_eq!(normalized.hours(), Decimal::from(25));
/// ```
pub fn to_working_day(time: ClockTime, endpoint: Endpoint) -> EngineResult<WorkingDayTime> {
    if !is_within_window(time) {
        return Err(EngineError::OutOfWindow { endpoint });
    }

    let hours = time.fractional_hours();
    let shifted = if hours >= Decimal::from(WorkingDayTime::WINDOW_START) {
        hours
    } else {
        hours + Decimal::from(HOURS_PER_DAY)
    };

    WorkingDayTime::from_hours(shifted).ok_or(EngineError::OutOfWindow { endpoint })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn clock(hour: u32, minute: u32) -> ClockTime {
        ClockTime::from_hm(hour, minute).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_accepts_window_edges() {
        assert!(is_within_window(clock(17, 0)));
        assert!(is_within_window(clock(23, 0)));
        assert!(is_within_window(clock(0, 0)));
        assert!(is_within_window(clock(4, 0)));
    }

    #[test]
    fn test_rejects_daytime_hours() {
        assert!(!is_within_window(clock(16, 0)));
        assert!(!is_within_window(clock(16, 59)));
        assert!(!is_within_window(clock(5, 0)));
        assert!(!is_within_window(clock(12, 0)));
        assert!(!is_within_window(clock(4, 30)));
    }

    #[test]
    fn test_evening_times_are_unchanged() {
        let result = to_working_day(clock(21, 30), Endpoint::Start).unwrap();
        assert_eq!(result.hours(), dec("21.5"));
    }

    #[test]
    fn test_post_midnight_times_gain_24() {
        assert_eq!(
            to_working_day(clock(0, 0), Endpoint::End).unwrap().hours(),
            dec("24")
        );
        assert_eq!(
            to_working_day(clock(4, 0), Endpoint::End).unwrap().hours(),
            dec("28")
        );
    }

    #[test]
    fn test_out_of_window_reports_endpoint() {
        assert_eq!(
            to_working_day(clock(16, 0), Endpoint::Start),
            Err(EngineError::OutOfWindow {
                endpoint: Endpoint::Start
            })
        );
        assert_eq!(
            to_working_day(clock(5, 0), Endpoint::End),
            Err(EngineError::OutOfWindow {
                endpoint: Endpoint::End
            })
        );
    }
}
