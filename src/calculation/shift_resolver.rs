//! Shift ordering and minimum-duration checks.

use rust_decimal::prelude::ToPrimitive;

use crate::error::{EngineError, EngineResult};
use crate::models::{Shift, WorkingDayTime};

/// Resolves a normalized start/end pair into a [`Shift`].
///
/// The paid duration is the whole number of hours between the two times;
/// a trailing partial hour is dropped.
///
/// # Errors
///
/// - [`EngineError::Ordering`] if `end` is before `start`
/// - [`EngineError::MinimumDuration`] if less than one full hour separates
///   them (including `end == start`)
///
/// # Example
///
/// ```
/// use babysitter_pay::calculation::resolve_shift;
/// use babysitter_pay::models::WorkingDayTime;
/// use rust_decimal::Decimal;
///
/// let start = WorkingDayTime::from_hours(Decimal::new(175, 1)).unwrap(); // 5:30 PM
/// let end = WorkingDayTime::from_hours(Decimal::from(21)).unwrap(); // 9:00 PM
/// let shift = resolve_shift(start, end).unwrap();
/// assert_eq!(shift.total_hours(), 3);
/// ```
pub fn resolve_shift(start: WorkingDayTime, end: WorkingDayTime) -> EngineResult<Shift> {
    if end < start {
        return Err(EngineError::Ordering);
    }

    let duration = end.hours() - start.hours();
    // duration is within [0, 11], so the conversion cannot fail
    let total_hours = duration.floor().to_u32().unwrap_or(0);

    if total_hours < 1 {
        return Err(EngineError::MinimumDuration);
    }

    Ok(Shift::from_parts(start, end, total_hours))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn wdt(s: &str) -> WorkingDayTime {
        WorkingDayTime::from_hours(Decimal::from_str(s).unwrap()).unwrap()
    }

    #[test]
    fn test_whole_hours() {
        let shift = resolve_shift(wdt("17"), wdt("21")).unwrap();
        assert_eq!(shift.total_hours(), 4);
        assert_eq!(shift.start(), wdt("17"));
        assert_eq!(shift.end(), wdt("21"));
    }

    #[test]
    fn test_across_midnight() {
        let shift = resolve_shift(wdt("21"), wdt("25")).unwrap();
        assert_eq!(shift.total_hours(), 4);
    }

    #[test]
    fn test_partial_hour_is_floored() {
        let shift = resolve_shift(wdt("17"), wdt("19.75")).unwrap();
        assert_eq!(shift.total_hours(), 2);
    }

    #[test]
    fn test_full_window() {
        let shift = resolve_shift(wdt("17"), wdt("28")).unwrap();
        assert_eq!(shift.total_hours(), 11);
    }

    #[test]
    fn test_end_before_start_is_ordering_error() {
        assert_eq!(
            resolve_shift(wdt("22"), wdt("21")),
            Err(EngineError::Ordering)
        );
    }

    #[test]
    fn test_equal_times_fail_minimum_duration() {
        assert_eq!(
            resolve_shift(wdt("17"), wdt("17")),
            Err(EngineError::MinimumDuration)
        );
    }

    #[test]
    fn test_under_one_hour_fails_minimum_duration() {
        assert_eq!(
            resolve_shift(wdt("17"), wdt("17.5")),
            Err(EngineError::MinimumDuration)
        );
        assert_eq!(
            resolve_shift(wdt("23.5"), wdt("24.25")),
            Err(EngineError::MinimumDuration)
        );
    }
}
