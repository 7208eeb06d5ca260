use cosmwasm_std::{Uint128, Uint256};

use crate::{
    duration::Duration,
    error::{Error, Result},
    percent::Percent,
};

/// Simple, non-compounding interest accrued over the given period.
///
/// Computes `principal * rate * period / YEAR` at nanosecond resolution,
/// multiplying before dividing to keep the precision, and floors the
/// result. The 256-bit intermediate cannot overflow: the factors are at
/// most 128, 32 and 64 bits wide.
pub fn interest(rate: Percent, principal: Uint128, period: Duration) -> Result<Uint128> {
    let due: Uint256 = Uint256::from(principal)
        * Uint256::from(rate.units())
        * Uint256::from(period.nanos())
        / (Uint256::from(Percent::HUNDRED.units()) * Uint256::from(Duration::YEAR.nanos()));

    due.try_into()
        .map_err(|_| Error::Overflow("interest accrual"))
}

#[cfg(test)]
mod test {
    use cosmwasm_std::Uint128;

    use crate::{duration::Duration, interest, percent::Percent};

    #[test]
    fn zero_period() {
        assert_eq!(
            Uint128::zero(),
            interest::interest(
                Percent::from_percent(10),
                Uint128::new(1000),
                Duration::from_nanos(0)
            )
            .unwrap()
        );
    }

    #[test]
    fn full_year() {
        assert_eq!(
            Uint128::new(100),
            interest::interest(
                Percent::from_percent(10),
                Uint128::new(1000),
                Duration::YEAR
            )
            .unwrap()
        );
    }

    #[test]
    fn half_year() {
        let year_nanos = Duration::YEAR.nanos();
        assert_eq!(
            Uint128::new(50),
            interest::interest(
                Percent::from_percent(10),
                Uint128::new(1000),
                Duration::from_nanos(year_nanos / 2)
            )
            .unwrap()
        );
    }

    #[test]
    fn floors() {
        // 10% of 5 over a year is 0.5, floored away
        assert_eq!(
            Uint128::zero(),
            interest::interest(Percent::from_percent(10), Uint128::new(5), Duration::YEAR)
                .unwrap()
        );
    }

    #[test]
    fn monotone_in_time() {
        let rate = Percent::from_bps(1_234);
        let principal = Uint128::new(987_654_321);
        let mut last = Uint128::zero();
        for secs in [0u32, 1, 59, 3_600, 86_400, 31_536_000] {
            let due =
                interest::interest(rate, principal, Duration::from_secs(secs)).unwrap();
            assert!(due >= last);
            last = due;
        }
    }

    #[test]
    fn max_principal_no_overflow() {
        // a century at 100% on the maximum principal overflows Uint128
        assert!(interest::interest(
            Percent::from_percent(100),
            Uint128::MAX,
            Duration::from_nanos(Duration::YEAR.nanos() * 100)
        )
        .is_err());
        // ... while the year itself stays exact
        assert_eq!(
            Uint128::MAX,
            interest::interest(Percent::from_percent(100), Uint128::MAX, Duration::YEAR)
                .unwrap()
        );
    }
}
