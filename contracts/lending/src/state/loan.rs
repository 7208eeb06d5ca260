use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, Order, Storage, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

use finance::{
    duration::Duration,
    error::Error as FinanceError,
    interest,
    percent::Percent,
};
use registry::Asset;

use crate::error::{ContractError, Result};

use super::LoanId;

#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema)]
#[cfg_attr(any(test, feature = "testing"), derive(PartialEq, Eq))]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum LoanState {
    Active,
    Repaid,
    Liquidated,
}

/// One collateralized borrowing position.
///
/// Loans are append-only: an id is assigned once and stays addressable
/// forever, also after the loan reaches a terminal state.
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema)]
#[cfg_attr(any(test, feature = "testing"), derive(PartialEq, Eq))]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct Loan {
    pub borrower: Addr,
    pub asset: Asset,
    pub principal: Uint128,
    pub interest_rate: Percent,
    pub duration: Duration,
    pub collateral_value: Uint128,
    pub start_time: Timestamp,
    pub state: LoanState,
    /// The repayment amount frozen at the settlement instant
    pub settled_payment: Option<Uint128>,
}

impl Loan {
    const STORAGE: Map<'static, LoanId, Loan> = Map::new("loans");
    const IDS: Item<'static, LoanId> = Item::new("loan_ids");
    const BY_BORROWER: Map<'static, (Addr, LoanId), ()> = Map::new("loans_by_borrower");

    pub fn open(
        borrower: Addr,
        asset: Asset,
        principal: Uint128,
        interest_rate: Percent,
        duration: Duration,
        collateral_value: Uint128,
        start_time: Timestamp,
    ) -> Self {
        Self {
            borrower,
            asset,
            principal,
            interest_rate,
            duration,
            collateral_value,
            start_time,
            state: LoanState::Active,
            settled_payment: None,
        }
    }

    /// Appends the loan to the ledger, assigning it the next sequential id.
    pub fn append(storage: &mut dyn Storage, loan: &Self) -> Result<LoanId> {
        let id = Self::IDS.may_load(storage)?.unwrap_or_default();

        Self::IDS.save(storage, &(id + 1))?;
        Self::BY_BORROWER.save(storage, (loan.borrower.clone(), id), &())?;
        Self::STORAGE.save(storage, id, loan).map(|()| id).map_err(Into::into)
    }

    pub fn load(storage: &dyn Storage, id: LoanId) -> Result<Self> {
        Self::STORAGE
            .may_load(storage, id)?
            .ok_or(ContractError::NoLoan {})
    }

    pub fn save(&self, storage: &mut dyn Storage, id: LoanId) -> Result<()> {
        Self::STORAGE.save(storage, id, self).map_err(Into::into)
    }

    /// All ids ever assigned to the borrower's loans, in creation order.
    pub fn by_borrower<'r>(
        storage: &'r dyn Storage,
        borrower: Addr,
    ) -> impl Iterator<Item = Result<LoanId>> + 'r {
        Self::BY_BORROWER
            .prefix(borrower)
            .keys(storage, None, None, Order::Ascending)
            .map(|record| record.map_err(Into::into))
    }

    /// The amount settling the loan at `now`.
    ///
    /// Simple interest accrues linearly from `start_time`; once the loan
    /// is settled the amount stays frozen at the settlement instant.
    pub fn repayment_due(&self, now: &Timestamp) -> Result<Uint128> {
        if let Some(frozen) = self.settled_payment {
            return Ok(frozen);
        }

        let elapsed = if *now <= self.start_time {
            Duration::default()
        } else {
            Duration::between(&self.start_time, now)
        };

        interest::interest(self.interest_rate, self.principal, elapsed)
            .map_err(Into::into)
            .and_then(|due| {
                self.principal
                    .checked_add(due)
                    .map_err(|_| FinanceError::Overflow("repayment amount").into())
            })
    }

    pub fn expired(&self, now: &Timestamp) -> bool {
        self.start_time + self.duration <= *now
    }

    pub fn ensure_active(&self) -> Result<()> {
        if let LoanState::Active = self.state {
            Ok(())
        } else {
            Err(ContractError::AlreadySettled {})
        }
    }

    pub fn repay(&mut self, payment: Uint128) -> Result<()> {
        self.settle(LoanState::Repaid, payment)
    }

    pub fn liquidate(&mut self, outstanding: Uint128) -> Result<()> {
        self.settle(LoanState::Liquidated, outstanding)
    }

    fn settle(&mut self, into: LoanState, payment: Uint128) -> Result<()> {
        self.ensure_active().map(|()| {
            self.state = into;
            self.settled_payment = Some(payment);
        })
    }
}

#[cfg(test)]
mod test {
    use cosmwasm_std::{testing, Addr, Timestamp, Uint128};

    use finance::{duration::Duration, percent::Percent};
    use registry::Asset;

    use crate::{error::ContractError, state::loan::LoanState};

    use super::Loan;

    fn asset(token_id: &str) -> Asset {
        Asset {
            collection: Addr::unchecked("domains"),
            token_id: token_id.into(),
        }
    }

    fn open(principal: u128, rate: Percent, start: Timestamp) -> Loan {
        Loan::open(
            Addr::unchecked("borrower"),
            asset("my-domain.tld"),
            Uint128::new(principal),
            rate,
            Duration::from_secs(86_400),
            Uint128::new(principal * 2),
            start,
        )
    }

    #[test]
    fn no_accrual_at_start() {
        let start = Timestamp::from_seconds(1_000);
        let l = open(1_000, Percent::from_percent(10), start);
        assert_eq!(Uint128::new(1_000), l.repayment_due(&start).unwrap());
        // a clock reading before the start does not underflow
        assert_eq!(
            Uint128::new(1_000),
            l.repayment_due(&start.minus_seconds(10)).unwrap()
        );
    }

    #[test]
    fn a_year_at_ten_percent() {
        let start = Timestamp::from_seconds(0);
        let l = open(1_000, Percent::from_bps(1_000), start);
        assert_eq!(
            Uint128::new(1_100),
            l.repayment_due(&(start + Duration::YEAR)).unwrap()
        );
    }

    #[test]
    fn accrual_is_monotone() {
        let start = Timestamp::from_seconds(0);
        let l = open(987_654_321, Percent::from_bps(1_234), start);
        let mut last = Uint128::zero();
        for days in [0u64, 1, 30, 365, 3_650] {
            let due = l.repayment_due(&start.plus_seconds(days * 86_400)).unwrap();
            assert!(last <= due);
            last = due;
        }
    }

    #[test]
    fn settlement_freezes_the_amount() {
        let start = Timestamp::from_seconds(0);
        let mut l = open(1_000, Percent::from_bps(1_000), start);
        let at_settlement = l.repayment_due(&(start + Duration::YEAR)).unwrap();
        l.repay(at_settlement).unwrap();
        assert_eq!(LoanState::Repaid, l.state);
        assert_eq!(
            at_settlement,
            l.repayment_due(&(start + Duration::YEAR + Duration::YEAR))
                .unwrap()
        );
    }

    #[test]
    fn no_second_settlement() {
        let start = Timestamp::from_seconds(0);
        let mut l = open(1_000, Percent::from_bps(1_000), start);
        l.liquidate(Uint128::new(1_000)).unwrap();
        assert_eq!(
            Err(ContractError::AlreadySettled {}),
            l.repay(Uint128::new(1_000))
        );
        assert_eq!(
            Err(ContractError::AlreadySettled {}),
            l.liquidate(Uint128::new(1_000))
        );
    }

    #[test]
    fn expiry_is_strict() {
        let start = Timestamp::from_seconds(1_000);
        let l = open(1_000, Percent::from_bps(1_000), start);
        let expiry = start + l.duration;
        assert!(!l.expired(&expiry.minus_nanos(1)));
        assert!(l.expired(&expiry));
        assert!(l.expired(&expiry.plus_seconds(1)));
    }

    #[test]
    fn ids_are_sequential_and_indexed() {
        let mut deps = testing::mock_dependencies();
        let start = Timestamp::from_seconds(0);

        let first = open(1_000, Percent::from_bps(1_000), start);
        let second = open(2_000, Percent::from_bps(1_000), start);
        let mut third = open(3_000, Percent::from_bps(1_000), start);
        third.borrower = Addr::unchecked("someone-else");

        assert_eq!(0, Loan::append(deps.as_mut().storage, &first).unwrap());
        assert_eq!(1, Loan::append(deps.as_mut().storage, &second).unwrap());
        assert_eq!(2, Loan::append(deps.as_mut().storage, &third).unwrap());

        assert_eq!(first, Loan::load(deps.as_ref().storage, 0).unwrap());
        assert_eq!(
            Err(ContractError::NoLoan {}),
            Loan::load(deps.as_ref().storage, 3)
        );

        let of_borrower: Vec<_> =
            Loan::by_borrower(deps.as_ref().storage, Addr::unchecked("borrower"))
                .collect::<Result<_, _>>()
                .unwrap();
        assert_eq!(vec![0, 1], of_borrower);

        let of_other: Vec<_> =
            Loan::by_borrower(deps.as_ref().storage, Addr::unchecked("someone-else"))
                .collect::<Result<_, _>>()
                .unwrap();
        assert_eq!(vec![2], of_other);
    }
}
