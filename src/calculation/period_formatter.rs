//! Rendering working-day times as 12-hour clock labels.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::WorkingDayTime;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Formats a working-day time as a 12-hour clock label such as `"11:00 PM"`.
///
/// Times at or after 24 are first mapped back onto the 0–24 clock. Fractional
/// hours are shown as minutes, rounded to the nearest minute.
///
/// # Example
///
/// ```
/// use babysitter_pay::calculation::format_working_day_time;
/// use babysitter_pay::models::WorkingDayTime;
/// use rust_decimal::Decimal;
///
/// let t = |h: i64| WorkingDayTime::from_hours(Decimal::from(h)).unwrap();
/// assert_eq!(format_working_day_time(t(17)), "5:00 PM");
/// assert_eq!(format_working_day_time(t(24)), "12:00 AM");
/// assert_eq!(format_working_day_time(t(28)), "4:00 AM");
/// ```
pub fn format_working_day_time(time: WorkingDayTime) -> String {
    let minutes = (time.clock_hours() * Decimal::from(60))
        .round()
        .to_u32()
        .unwrap_or(0)
        % MINUTES_PER_DAY;
    let (hour, minute) = (minutes / 60, minutes % 60);

    match hour {
        0 => format!("12:{:02} AM", minute),
        1..=11 => format!("{}:{:02} AM", hour, minute),
        12 => format!("12:{:02} PM", minute),
        _ => format!("{}:{:02} PM", hour - 12, minute),
    }
}

/// Formats a segment's `[start, end)` bounds as `"<start> - <end>"`.
///
/// # Example
///
/// ```
/// use babysitter_pay::calculation::format_period;
/// use babysitter_pay::models::WorkingDayTime;
/// use rust_decimal::Decimal;
///
/// let t = |h: i64| WorkingDayTime::from_hours(Decimal::from(h)).unwrap();
/// assert_eq!(format_period(t(23), t(25)), "11:00 PM - 1:00 AM");
/// ```
pub fn format_period(start: WorkingDayTime, end: WorkingDayTime) -> String {
    format!(
        "{} - {}",
        format_working_day_time(start),
        format_working_day_time(end)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn wdt(s: &str) -> WorkingDayTime {
        WorkingDayTime::from_hours(Decimal::from_str(s).unwrap()).unwrap()
    }

    #[test]
    fn test_formats_evening_hours() {
        assert_eq!(format_working_day_time(wdt("17")), "5:00 PM");
        assert_eq!(format_working_day_time(wdt("21")), "9:00 PM");
        assert_eq!(format_working_day_time(wdt("23")), "11:00 PM");
    }

    #[test]
    fn test_formats_post_midnight_hours() {
        assert_eq!(format_working_day_time(wdt("24")), "12:00 AM");
        assert_eq!(format_working_day_time(wdt("25")), "1:00 AM");
        assert_eq!(format_working_day_time(wdt("28")), "4:00 AM");
    }

    #[test]
    fn test_formats_fractional_hours_as_minutes() {
        assert_eq!(format_working_day_time(wdt("17.5")), "5:30 PM");
        assert_eq!(format_working_day_time(wdt("24.25")), "12:15 AM");
        assert_eq!(format_working_day_time(wdt("23.75")), "11:45 PM");
    }

    #[test]
    fn test_rounds_repeating_fractions_to_nearest_minute() {
        // 5:20 PM as produced by 20/60
        let third = Decimal::from(20) / Decimal::from(60);
        let time = WorkingDayTime::from_hours(Decimal::from(17) + third).unwrap();
        assert_eq!(format_working_day_time(time), "5:20 PM");
    }

    #[test]
    fn test_format_period_ranges() {
        assert_eq!(format_period(wdt("17"), wdt("21")), "5:00 PM - 9:00 PM");
        assert_eq!(format_period(wdt("23"), wdt("25")), "11:00 PM - 1:00 AM");
        assert_eq!(format_period(wdt("23"), wdt("24")), "11:00 PM - 12:00 AM");
        assert_eq!(format_period(wdt("24"), wdt("28")), "12:00 AM - 4:00 AM");
    }
}
