//! Family rate schedules.
//!
//! A [`FamilySchedule`] is an ordered list of [`RateTier`]s that together cover
//! the whole overnight window. Schedules are validated when they are built, so
//! the segmentation code can rely on strictly increasing cutoffs and a final
//! cutoff of 28 (4:00 AM).

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{EngineError, EngineResult};
use crate::models::WorkingDayTime;

/// Identifier of a family, e.g. `"A"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FamilyId(String);

impl FamilyId {
    /// Creates an identifier from trimmed text, or `None` if it is blank.
    pub fn new(id: &str) -> Option<Self> {
        let trimmed = id.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FamilyId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FamilyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A contiguous band of the working day paid at one hourly rate.
///
/// The tier covers every instant strictly before `cutoff` that is not covered
/// by an earlier tier; the cutoff instant itself belongs to the next tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateTier {
    /// Exclusive upper bound of the tier.
    pub cutoff: WorkingDayTime,
    /// Hourly rate.
    pub rate: Decimal,
    /// Display label, e.g. `"Before 11:00 PM"`.
    pub label: String,
}

/// The validated rate schedule of one family.
///
/// # Example
///
/// ```
/// use babysitter_pay::config::{FamilyId, FamilySchedule, RateTier};
/// use babysitter_pay::models::WorkingDayTime;
/// use rust_decimal::Decimal;
///
/// let tier = |cutoff: i64, rate: i64| RateTier {
///     cutoff: WorkingDayTime::from_hours(Decimal::from(cutoff)).unwrap(),
///     rate: Decimal::from(rate),
///     label: String::new(),
/// };
///
/// let schedule = FamilySchedule::new(
///     FamilyId::new("A").unwrap(),
///     "Family A",
///     "",
///     vec![tier(23, 15), tier(28, 20)],
/// )
/// .unwrap();
///
/// let eleven_pm = WorkingDayTime::from_hours(Decimal::from(23)).unwrap();
/// assert_eq!(schedule.rate_at(eleven_pm), Decimal::from(20));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilySchedule {
    id: FamilyId,
    name: String,
    description: String,
    tiers: Vec<RateTier>,
}

impl FamilySchedule {
    /// Builds a schedule, checking the tier invariants.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSchedule`] if:
    /// - there are no tiers
    /// - the first cutoff is not after 5:00 PM
    /// - cutoffs are not strictly increasing
    /// - the final cutoff is not 4:00 AM (28)
    /// - any rate is negative
    pub fn new(
        id: FamilyId,
        name: impl Into<String>,
        description: impl Into<String>,
        tiers: Vec<RateTier>,
    ) -> EngineResult<Self> {
        let invalid = |message: &str| EngineError::InvalidSchedule {
            family: id.to_string(),
            message: message.to_string(),
        };

        let Some(first) = tiers.first() else {
            return Err(invalid("at least one rate tier is required"));
        };
        if first.cutoff <= WorkingDayTime::window_start() {
            return Err(invalid("first cutoff must be after 5:00 PM"));
        }
        if tiers.windows(2).any(|pair| pair[1].cutoff <= pair[0].cutoff) {
            return Err(invalid("cutoffs must be strictly increasing"));
        }
        if tiers.last().map(|t| t.cutoff) != Some(WorkingDayTime::window_end()) {
            return Err(invalid("final cutoff must be 4:00 AM"));
        }
        if tiers.iter().any(|t| t.rate < Decimal::ZERO) {
            return Err(invalid("rates must not be negative"));
        }

        Ok(Self {
            id,
            name: name.into(),
            description: description.into(),
            tiers,
        })
    }

    /// The family identifier.
    pub fn id(&self) -> &FamilyId {
        &self.id
    }

    /// Display name of the family.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short summary of the family's rates.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Tiers in ascending cutoff order.
    pub fn tiers(&self) -> &[RateTier] {
        &self.tiers
    }

    /// Returns the start of each tier paired with the tier.
    ///
    /// The first tier starts at 5:00 PM; each later tier starts at the
    /// previous tier's cutoff.
    pub fn tier_bounds(&self) -> impl Iterator<Item = (WorkingDayTime, &RateTier)> + '_ {
        let starts = std::iter::once(WorkingDayTime::window_start())
            .chain(self.tiers.iter().map(|t| t.cutoff));
        starts.zip(self.tiers.iter())
    }

    /// The hourly rate in force at `time`.
    pub fn rate_at(&self, time: WorkingDayTime) -> Decimal {
        self.tiers
            .iter()
            .find(|tier| time < tier.cutoff)
            .or_else(|| self.tiers.last())
            .map(|tier| tier.rate)
            .unwrap_or(Decimal::ZERO)
    }
}

/// The set of families the engine can calculate pay for.
#[derive(Debug, Clone, Default)]
pub struct FamilyRegistry {
    schedules: BTreeMap<FamilyId, FamilySchedule>,
}

impl FamilyRegistry {
    /// Builds a registry from validated schedules.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSchedule`] if two schedules share an id.
    pub fn new(schedules: impl IntoIterator<Item = FamilySchedule>) -> EngineResult<Self> {
        let mut map = BTreeMap::new();
        for schedule in schedules {
            let id = schedule.id().clone();
            if map.insert(id.clone(), schedule).is_some() {
                return Err(EngineError::InvalidSchedule {
                    family: id.to_string(),
                    message: "family is defined more than once".to_string(),
                });
            }
        }
        Ok(Self { schedules: map })
    }

    /// Looks up a family's schedule. Surrounding whitespace is ignored; the
    /// id itself is case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownFamily`] when no schedule is configured.
    pub fn get(&self, family: &str) -> EngineResult<&FamilySchedule> {
        self.schedules
            .get(family.trim())
            .ok_or_else(|| EngineError::UnknownFamily {
                family: family.to_string(),
            })
    }

    /// All schedules ordered by family id.
    pub fn schedules(&self) -> impl Iterator<Item = &FamilySchedule> {
        self.schedules.values()
    }

    /// Number of configured families.
    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    /// Returns true if no families are configured.
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }
}
