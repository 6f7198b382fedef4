//! Parking fee computation.
//!
//! Occupancy is billed per started hour at a flat rate. A zero-length stay
//! bills zero hours.

use std::fmt;

use chrono::{DateTime, Utc};

/// Price of one billed hour, in whole currency units.
pub const HOURLY_RATE: i64 = 5;

pub const CURRENCY: &str = "Euro";

const MICROS_PER_HOUR: u64 = 3_600_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fee {
    pub billed_hours: i64,
    pub amount: i64,
}

impl fmt::Display for Fee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, CURRENCY)
    }
}

/// Number of started hours between `entry` and `exit`.
///
/// Sub-second precision counts: one microsecond past a full hour starts the
/// next one. An exit before the entry bills nothing.
pub fn billed_hours(entry: DateTime<Utc>, exit: DateTime<Utc>) -> i64 {
    let elapsed = exit - entry;
    let micros = match elapsed.num_microseconds() {
        Some(micros) => micros.max(0) as u64,
        // Only overflows past ~292k years; second precision is plenty there.
        None => (elapsed.num_seconds().max(0) as u64).saturating_mul(1_000_000),
    };

    micros.div_ceil(MICROS_PER_HOUR) as i64
}

pub fn fee(entry: DateTime<Utc>, exit: DateTime<Utc>) -> Fee {
    let billed_hours = billed_hours(entry, exit);
    Fee {
        billed_hours,
        amount: billed_hours * HOURLY_RATE,
    }
}
