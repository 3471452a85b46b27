//! Top-level pay calculation.

use tracing::{debug, info};

use crate::config::FamilyRegistry;
use crate::error::{Endpoint, EngineResult};
use crate::models::PayResult;

use super::rate_segmenter::segment_shift;
use super::shift_resolver::resolve_shift;
use super::time_parser::parse_clock_time;
use super::window::to_working_day;

/// Calculates the pay for one babysitting shift.
///
/// The start and end times are parsed, checked against the 5:00 PM to
/// 4:00 AM window, resolved into a whole number of paid hours and then split
/// across the family's rate tiers.
///
/// # Errors
///
/// Checks run in this order, and the first failure is returned:
/// 1. [`ParseError`](crate::error::EngineError::ParseError) for either time
/// 2. [`OutOfWindow`](crate::error::EngineError::OutOfWindow) for the start,
///    then the end
/// 3. [`Ordering`](crate::error::EngineError::Ordering) if the end is before
///    the start
/// 4. [`MinimumDuration`](crate::error::EngineError::MinimumDuration) if no
///    full hour was worked
/// 5. [`UnknownFamily`](crate::error::EngineError::UnknownFamily) if the
///    family has no schedule
///
/// # Example
///
/// ```no_run
/// use babysitter_pay::calculation::calculate;
/// use babysitter_pay::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let registry = ConfigLoader::load("./config")?.into_registry();
/// let result = calculate("9:00 PM", "1:00 AM", "A", &registry)?;
///
/// assert_eq!(result.total_hours, 4);
/// assert_eq!(result.total_pay, Decimal::from(70));
/// # Ok::<(), babysitter_pay::error::EngineError>(())
/// ```
pub fn calculate(
    start_time: &str,
    end_time: &str,
    family: &str,
    registry: &FamilyRegistry,
) -> EngineResult<PayResult> {
    debug!(start_time, end_time, family, "Calculating shift pay");

    let start_clock = parse_clock_time(start_time)?;
    let end_clock = parse_clock_time(end_time)?;

    let start = to_working_day(start_clock, Endpoint::Start)?;
    let end = to_working_day(end_clock, Endpoint::End)?;

    let shift = resolve_shift(start, end)?;
    let schedule = registry.get(family)?;
    let segmentation = segment_shift(&shift, schedule);

    info!(
        family = %schedule.id(),
        total_hours = shift.total_hours(),
        discarded_hours = %shift.discarded_hours().normalize(),
        segments = segmentation.segments.len(),
        total_pay = %segmentation.total_pay.normalize(),
        "Shift pay calculated"
    );

    Ok(PayResult {
        total_pay: segmentation.total_pay,
        total_hours: shift.total_hours(),
        breakdown: segmentation.segments,
        family: schedule.id().to_string(),
    })
}
