use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, Storage, Uint128, Uint256};
use cw_storage_plus::{Item, Map};

use finance::price;
use registry::Asset;

use crate::error::{ContractError, Result};

use super::ShareClassId;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct ShareInfo {
    pub name: String,
    pub symbol: String,
}

/// One asset split into a fungible share class.
///
/// Records are append-only and keyed by their share class, so a
/// bought-out record stays redeemable forever; a per-asset index points
/// at the latest record, the only one that may still be bought out.
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema)]
#[cfg_attr(any(test, feature = "testing"), derive(PartialEq, Eq))]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct Record {
    pub asset: Asset,
    pub share_info: ShareInfo,
    pub total_supply: Uint128,
    /// Shares not yet burned through the exchange
    pub outstanding: Uint128,
    pub min_buyout_price: Uint128,
    pub original_owner: Addr,
    pub bought_out: bool,
    pub buyout_price: Option<Uint128>,
    /// Stable value backing the outstanding shares after a buyout
    pub redemption_pool: Uint128,
}

impl Record {
    const STORAGE: Map<'static, ShareClassId, Record> = Map::new("records");
    const IDS: Item<'static, ShareClassId> = Item::new("share_class_ids");
    const LATEST: Map<'static, (Addr, String), ShareClassId> = Map::new("latest_records");

    /// Appends a record for the asset under a fresh share class.
    ///
    /// Rejected while a not-yet-bought-out record exists; a bought-out
    /// predecessor is terminal and only gets superseded in the index.
    pub fn create(
        storage: &mut dyn Storage,
        asset: Asset,
        share_info: ShareInfo,
        total_supply: Uint128,
        min_buyout_price: Uint128,
        original_owner: Addr,
    ) -> Result<(ShareClassId, Self)> {
        if let Some(latest) = Self::LATEST.may_load(storage, asset.key())? {
            if !Self::STORAGE.load(storage, latest)?.bought_out {
                return Err(ContractError::AlreadyFractionalized {});
            }
        }

        let share_class = Self::IDS.may_load(storage)?.unwrap_or_default();
        Self::IDS.save(storage, &(share_class + 1))?;

        let record = Self {
            asset,
            share_info,
            total_supply,
            outstanding: total_supply,
            min_buyout_price,
            original_owner,
            bought_out: false,
            buyout_price: None,
            redemption_pool: Uint128::zero(),
        };

        Self::LATEST.save(storage, record.asset.key(), &share_class)?;
        Self::STORAGE
            .save(storage, share_class, &record)
            .map(|()| (share_class, record))
            .map_err(Into::into)
    }

    pub fn load(storage: &dyn Storage, share_class: ShareClassId) -> Result<Self> {
        Self::STORAGE
            .may_load(storage, share_class)?
            .ok_or(ContractError::NoRecord {})
    }

    pub fn load_latest(storage: &dyn Storage, asset: &Asset) -> Result<(ShareClassId, Self)> {
        Self::LATEST
            .may_load(storage, asset.key())?
            .ok_or(ContractError::NotFractionalized {})
            .and_then(|share_class| {
                Self::load(storage, share_class).map(|record| (share_class, record))
            })
    }

    pub fn save(&self, storage: &mut dyn Storage, share_class: ShareClassId) -> Result<()> {
        Self::STORAGE
            .save(storage, share_class, self)
            .map_err(Into::into)
    }

    /// The greater of the floor price and the fully-diluted market cap
    /// at the given oracle rate.
    pub fn buyout_price_with(&self, rate: Uint128) -> Result<Uint128> {
        price::total(self.total_supply, rate)
            .map(|market_cap| market_cap.max(self.min_buyout_price))
            .map_err(Into::into)
    }

    pub fn ensure_not_bought_out(&self) -> Result<()> {
        if self.bought_out {
            Err(ContractError::AlreadyBoughtOut {})
        } else {
            Ok(())
        }
    }

    /// The one forward transition: funds the redemption pool and makes
    /// the record terminal.
    pub fn mark_bought_out(&mut self, price: Uint128) -> Result<()> {
        self.ensure_not_bought_out().map(|()| {
            self.bought_out = true;
            self.buyout_price = Some(price);
            self.redemption_pool = price;
        })
    }

    /// Burns `amount` shares' worth of pool claim, floored.
    ///
    /// The division is against the current pool and the current
    /// outstanding supply, so the dust a floored payout leaves behind
    /// stays claimable by later redeemers and the final share drains
    /// the pool exactly.
    pub fn redeem(&mut self, amount: Uint128) -> Result<Uint128> {
        if !self.bought_out {
            return Err(ContractError::NotBoughtOut {});
        }

        debug_assert!(!amount.is_zero());
        debug_assert!(amount <= self.outstanding);

        let payout: Uint128 = (amount.full_mul(self.redemption_pool)
            / Uint256::from(self.outstanding))
        .try_into()
        .map_err(|_| finance::error::Error::Overflow("share redemption"))?;

        self.outstanding -= amount;
        self.redemption_pool -= payout;

        Ok(payout)
    }
}

#[cfg(test)]
mod test {
    use cosmwasm_std::{testing, Addr, Uint128};

    use registry::Asset;

    use crate::error::ContractError;

    use super::{Record, ShareInfo};

    fn asset(token_id: &str) -> Asset {
        Asset {
            collection: Addr::unchecked("domains"),
            token_id: token_id.into(),
        }
    }

    fn share_info() -> ShareInfo {
        ShareInfo {
            name: "My Domain Shares".into(),
            symbol: "MYD".into(),
        }
    }

    fn create(storage: &mut dyn cosmwasm_std::Storage, token_id: &str, supply: u128) -> u64 {
        Record::create(
            storage,
            asset(token_id),
            share_info(),
            Uint128::new(supply),
            Uint128::new(50_000),
            Addr::unchecked("owner"),
        )
        .expect("creation should succeed")
        .0
    }

    #[test]
    fn one_active_record_per_asset() {
        let mut deps = testing::mock_dependencies();

        let first = create(deps.as_mut().storage, "a.tld", 100);
        assert_eq!(0, first);
        assert_eq!(
            Err(ContractError::AlreadyFractionalized {}),
            Record::create(
                deps.as_mut().storage,
                asset("a.tld"),
                share_info(),
                Uint128::new(100),
                Uint128::new(1),
                Addr::unchecked("owner"),
            )
            .map(|(share_class, _)| share_class)
        );

        // an unrelated asset gets the next class
        assert_eq!(1, create(deps.as_mut().storage, "b.tld", 100));
    }

    #[test]
    fn bought_out_record_gets_superseded() {
        let mut deps = testing::mock_dependencies();

        let first = create(deps.as_mut().storage, "a.tld", 100);
        let (_, mut record) = Record::load_latest(deps.as_ref().storage, &asset("a.tld")).unwrap();
        record.mark_bought_out(Uint128::new(60_000)).unwrap();
        record.save(deps.as_mut().storage, first).unwrap();

        let second = create(deps.as_mut().storage, "a.tld", 500);
        assert_ne!(first, second);

        let (latest, _) = Record::load_latest(deps.as_ref().storage, &asset("a.tld")).unwrap();
        assert_eq!(second, latest);
        // the terminal record stays addressable for redemption
        assert!(Record::load(deps.as_ref().storage, first).unwrap().bought_out);
    }

    #[test]
    fn no_second_buyout() {
        let mut record = Record {
            asset: asset("a.tld"),
            share_info: share_info(),
            total_supply: Uint128::new(100),
            outstanding: Uint128::new(100),
            min_buyout_price: Uint128::new(50_000),
            original_owner: Addr::unchecked("owner"),
            bought_out: false,
            buyout_price: None,
            redemption_pool: Uint128::zero(),
        };

        record.mark_bought_out(Uint128::new(80_000)).unwrap();
        assert_eq!(Some(Uint128::new(80_000)), record.buyout_price);
        assert_eq!(
            Err(ContractError::AlreadyBoughtOut {}),
            record.mark_bought_out(Uint128::new(80_000))
        );
    }

    #[test]
    fn greater_of_pricing() {
        let record = Record {
            asset: asset("a.tld"),
            share_info: share_info(),
            total_supply: Uint128::new(1_000_000),
            outstanding: Uint128::new(1_000_000),
            min_buyout_price: Uint128::new(50_000),
            original_owner: Addr::unchecked("owner"),
            bought_out: false,
            buyout_price: None,
            redemption_pool: Uint128::zero(),
        };

        let rate = |hundredths: u128| Uint128::new(hundredths * 10u128.pow(16));

        // market cap 80,000 wins over the 50,000 floor
        assert_eq!(
            Uint128::new(80_000),
            record.buyout_price_with(rate(8)).unwrap()
        );
        // market cap 30,000 loses to the floor
        assert_eq!(
            Uint128::new(50_000),
            record.buyout_price_with(rate(3)).unwrap()
        );
    }

    #[test]
    fn redemption_leaves_dust_then_drains() {
        let mut record = Record {
            asset: asset("a.tld"),
            share_info: share_info(),
            total_supply: Uint128::new(3),
            outstanding: Uint128::new(3),
            min_buyout_price: Uint128::new(100),
            original_owner: Addr::unchecked("owner"),
            bought_out: false,
            buyout_price: None,
            redemption_pool: Uint128::zero(),
        };

        assert_eq!(
            Err(ContractError::NotBoughtOut {}),
            record.redeem(Uint128::new(1))
        );

        record.mark_bought_out(Uint128::new(100)).unwrap();

        // 1 * 100 / 3 floors to 33, the dust stays in the pool
        assert_eq!(Uint128::new(33), record.redeem(Uint128::new(1)).unwrap());
        assert_eq!(Uint128::new(67), record.redemption_pool);
        // 1 * 67 / 2 floors to 33
        assert_eq!(Uint128::new(33), record.redeem(Uint128::new(1)).unwrap());
        // the last share takes the rest of the pool, dust included
        assert_eq!(Uint128::new(34), record.redeem(Uint128::new(1)).unwrap());
        assert_eq!(Uint128::zero(), record.redemption_pool);
        assert_eq!(Uint128::zero(), record.outstanding);
    }
}
