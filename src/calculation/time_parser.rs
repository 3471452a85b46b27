//! Free-form clock time parsing.
//!
//! Accepts the 12-hour forms `"5:00 PM"`, `"5 PM"` and `"5PM"` as well as the
//! 24-hour forms `"17:00"` and `"17"`. Parsing is case-insensitive and ignores
//! surrounding whitespace.

use crate::error::{EngineError, EngineResult};
use crate::models::ClockTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Parses a time string into a [`ClockTime`].
///
/// For 12-hour input, 12 PM is noon and 12 AM is midnight; other PM hours
/// gain 12. Minutes default to zero when omitted.
///
/// # Errors
///
/// Returns [`EngineError::ParseError`] when the input is empty, when the hour
/// or minute is not a number, or when either is out of range for the format.
///
/// # Example
///
/// ```
/// use babysitter_pay::calculation::parse_clock_time;
///
/// let time = parse_clock_time(" 12:30 am ").unwrap();
/// assert_eq!((time.hour(), time.minute()), (0, 30));
///
/// let time = parse_clock_time("17:15").unwrap();
/// assert_eq!((time.hour(), time.minute()), (17, 15));
///
/// assert!(parse_clock_time("five").is_err());
/// ```
pub fn parse_clock_time(input: &str) -> EngineResult<ClockTime> {
    let cleaned = input.trim().to_ascii_uppercase();
    if cleaned.is_empty() {
        return Err(parse_error(input, "time is required"));
    }

    let (body, meridiem) = split_meridiem(&cleaned);
    let (hour_text, minute_text) = match body.split_once(':') {
        Some((hour, minute)) => (hour.trim(), Some(minute.trim())),
        None => (body, None),
    };

    let hour: u32 = hour_text
        .parse()
        .map_err(|_| parse_error(input, "hour is not a number"))?;
    let minute: u32 = match minute_text {
        Some(text) => text
            .parse()
            .map_err(|_| parse_error(input, "minutes are not a number"))?,
        None => 0,
    };

    let hour = match meridiem {
        Some(meridiem) => {
            if !(1..=12).contains(&hour) {
                return Err(parse_error(input, "hour must be between 1 and 12"));
            }
            match (meridiem, hour) {
                (Meridiem::Am, 12) => 0,
                (Meridiem::Am, h) => h,
                (Meridiem::Pm, 12) => 12,
                (Meridiem::Pm, h) => h + 12,
            }
        }
        None if hour > 23 => return Err(parse_error(input, "hour must be between 0 and 23")),
        None => hour,
    };

    ClockTime::from_hm(hour, minute)
        .ok_or_else(|| parse_error(input, "minutes must be between 0 and 59"))
}

fn split_meridiem(cleaned: &str) -> (&str, Option<Meridiem>) {
    if let Some(body) = cleaned.strip_suffix("AM") {
        (body.trim_end(), Some(Meridiem::Am))
    } else if let Some(body) = cleaned.strip_suffix("PM") {
        (body.trim_end(), Some(Meridiem::Pm))
    } else {
        (cleaned, None)
    }
}

fn parse_error(input: &str, message: &str) -> EngineError {
    EngineError::ParseError {
        input: input.to_string(),
        message: message.to_string(),
    }
}
