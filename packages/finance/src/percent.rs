use std::fmt::{Display, Formatter, Result as FmtResult};

use cosmwasm_std::{Uint128, Uint256};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub type Units = u32;

/// A per-annum rate or a ratio bound, kept in basis points.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct Percent(Units);

impl Percent {
    pub const ZERO: Self = Self(0);
    pub const HUNDRED: Self = Self(10_000);

    pub const fn from_percent(units: u16) -> Self {
        Self(units as Units * 100)
    }

    pub const fn from_bps(units: Units) -> Self {
        Self(units)
    }

    pub const fn units(&self) -> Units {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// This part of the given amount, floored.
    pub fn of(&self, amount: Uint128) -> Result<Uint128> {
        let part: Uint256 =
            amount.full_mul(Uint128::from(self.0)) / Uint256::from(Self::HUNDRED.0);

        part
            .try_into()
            .map_err(|_| Error::Overflow("a percent of an amount"))
    }

    /// Whether `part / whole <= self`, compared as exact rationals.
    ///
    /// Cross-multiplies in 256 bits, so a ratio right at the bound is
    /// accepted and one a single unit above it is not.
    pub fn covers(&self, part: Uint128, whole: Uint128) -> bool {
        part.full_mul(Uint128::from(Self::HUNDRED.0)) <= whole.full_mul(Uint128::from(self.0))
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
    }
}
