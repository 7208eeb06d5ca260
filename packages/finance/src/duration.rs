use std::ops::Add;

use cosmwasm_std::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub type Units = u64;

/// A timespan between two [Timestamp]-s, kept in nanoseconds to match
/// the block-time resolution.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct Duration(Units);

impl Duration {
    const UNITS_IN_SECOND: Units = 1_000_000_000;

    pub const YEAR: Duration = Duration::from_nanos(365 * 24 * 60 * 60 * Self::UNITS_IN_SECOND);

    pub const fn from_nanos(nanos: Units) -> Self {
        Self(nanos)
    }

    pub const fn from_secs(secs: u32) -> Self {
        Self::from_nanos(secs as Units * Self::UNITS_IN_SECOND)
    }

    pub fn between(start: &Timestamp, end: &Timestamp) -> Self {
        debug_assert!(start <= end);

        Self(end.nanos() - start.nanos())
    }

    pub const fn nanos(&self) -> Units {
        self.0
    }
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: Duration) -> Self::Output {
        self.plus_nanos(rhs.nanos())
    }
}
