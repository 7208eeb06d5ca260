use cosmwasm_std::{Uint128, Uint256};

use crate::error::{Error, Result};

/// Decimals of the fixed-point stable-value rates quoted by the oracle.
pub const DECIMALS: u32 = 18;

const SCALE: u128 = 10u128.pow(DECIMALS);

/// Total stable value of `amount` units at the given per-unit `rate`.
///
/// `rate` is an 18-decimal fixed-point price; the result is floored,
/// never rounded up, so a market-cap comparison against an exact
/// minimum errs on the holders' side.
pub fn total(amount: Uint128, rate: Uint128) -> Result<Uint128> {
    let total: Uint256 = amount.full_mul(rate) / Uint256::from(SCALE);

    total
        .try_into()
        .map_err(|_| Error::Overflow("price total"))
}

#[cfg(test)]
mod test {
    use cosmwasm_std::Uint128;

    use crate::price;

    fn rate(int: u128, frac_hundredths: u128) -> Uint128 {
        Uint128::new(int * 10u128.pow(18) + frac_hundredths * 10u128.pow(16))
    }

    #[test]
    fn at_a_fractional_rate() {
        // 1,000,000 units at 0.08 each
        assert_eq!(
            Uint128::new(80_000),
            price::total(Uint128::new(1_000_000), rate(0, 8)).unwrap()
        );
        // ... and at 0.03 each
        assert_eq!(
            Uint128::new(30_000),
            price::total(Uint128::new(1_000_000), rate(0, 3)).unwrap()
        );
    }

    #[test]
    fn floors() {
        // 3 units at 0.08: 0.24 floors to 0
        assert_eq!(
            Uint128::zero(),
            price::total(Uint128::new(3), rate(0, 8)).unwrap()
        );
        assert_eq!(
            Uint128::new(1),
            price::total(Uint128::new(13), rate(0, 8)).unwrap()
        );
    }

    #[test]
    fn overflow() {
        assert!(price::total(Uint128::MAX, rate(2, 0)).is_err());
    }
}
