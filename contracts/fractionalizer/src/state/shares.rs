use cosmwasm_std::{Addr, Storage, Uint128};
use cw_storage_plus::Map;

use crate::error::{ContractError, Result};

use super::ShareClassId;

/// The engine's own book of the fungible share balances it mints.
pub struct Shares;

impl Shares {
    const BALANCES: Map<'static, (ShareClassId, Addr), Uint128> = Map::new("share_balances");

    pub fn mint(
        storage: &mut dyn Storage,
        share_class: ShareClassId,
        to: Addr,
        amount: Uint128,
    ) -> Result<()> {
        debug_assert!(!amount.is_zero());

        Self::BALANCES
            .update(storage, (share_class, to), |balance| {
                balance
                    .unwrap_or_default()
                    .checked_add(amount)
                    .map_err(|_| finance::error::Error::Overflow("share supply").into())
            })
            .map(|_| ())
    }

    pub fn burn(
        storage: &mut dyn Storage,
        share_class: ShareClassId,
        holder: Addr,
        amount: Uint128,
    ) -> Result<()> {
        let key = (share_class, holder);
        let balance = Self::BALANCES
            .may_load(storage, key.clone())?
            .unwrap_or_default();

        if balance < amount {
            return Err(ContractError::InsufficientShares {});
        }

        let left = balance - amount;
        if left.is_zero() {
            Self::BALANCES.remove(storage, key);
            Ok(())
        } else {
            Self::BALANCES.save(storage, key, &left).map_err(Into::into)
        }
    }

    pub fn balance(
        storage: &dyn Storage,
        share_class: ShareClassId,
        holder: Addr,
    ) -> Result<Uint128> {
        Self::BALANCES
            .may_load(storage, (share_class, holder))
            .map(Option::unwrap_or_default)
            .map_err(Into::into)
    }
}
