//! Option lists offered by the selection controls

use std::fmt;
use std::iter::Rev;
use std::ops::RangeInclusive;

/// Oldest model year the workshop accepts
pub const MIN_MODEL_YEAR: i32 = 2000;

const FIRST_SLOT_HOUR: u8 = 9;
const LAST_SLOT_HOUR: u8 = 18;

/// Model years from `current_year` down to [`MIN_MODEL_YEAR`], newest first.
///
/// The iterator is lazy and `Clone`, so callers can restart it freely. A
/// `current_year` before [`MIN_MODEL_YEAR`] yields nothing.
pub fn year_options(current_year: i32) -> Rev<RangeInclusive<i32>> {
    (MIN_MODEL_YEAR..=current_year).rev()
}

/// An hour-aligned appointment slot between 09:00 and 18:00
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    hour: u8,
}

impl TimeSlot {
    /// Slot starting at `hour`, if the workshop is open then
    pub fn from_hour(hour: u8) -> Option<Self> {
        (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR)
            .contains(&hour)
            .then_some(Self { hour })
    }

    /// Parse a slot label such as "10:00"
    #[allow(dead_code)]
    pub fn parse(s: &str) -> Option<Self> {
        let (hour, minute) = s.trim().split_once(':')?;
        if minute != "00" {
            return None;
        }
        hour.parse().ok().and_then(Self::from_hour)
    }

    #[allow(dead_code)]
    pub fn hour(&self) -> u8 {
        self.hour
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.hour)
    }
}

/// All bookable slots in ascending order
pub fn time_slots() -> impl Iterator<Item = TimeSlot> + Clone {
    (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR).map(|hour| TimeSlot { hour })
}
