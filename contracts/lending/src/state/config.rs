use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, Storage};
use cw_storage_plus::Item;

use finance::{duration::Duration, percent::Percent};
use ledger::LedgerRef;

use crate::{
    error::{ContractError, Result},
    msg::InstantiateMsg,
};

/// Per-deployment parameters, frozen at instantiation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct Config {
    pub stable_ledger: LedgerRef,
    pub liquidation_beneficiary: Addr,
    pub max_ltv: Percent,
    pub min_duration: Duration,
    pub max_duration: Duration,
}

impl Config {
    const STORAGE: Item<'static, Config> = Item::new("config");

    pub fn try_new(msg: InstantiateMsg) -> Result<Self> {
        if msg.max_ltv.is_zero() || Percent::HUNDRED < msg.max_ltv {
            return Err(ContractError::InvalidConfiguration(
                "the maximum loan-to-value must be within (0%, 100%]",
            ));
        }
        if msg.min_duration_secs == 0 || msg.max_duration_secs < msg.min_duration_secs {
            return Err(ContractError::InvalidConfiguration(
                "the duration bounds must be non-zero and ordered",
            ));
        }

        Ok(Self {
            stable_ledger: LedgerRef::new(msg.stable_ledger),
            liquidation_beneficiary: msg.liquidation_beneficiary,
            max_ltv: msg.max_ltv,
            min_duration: Duration::from_secs(msg.min_duration_secs),
            max_duration: Duration::from_secs(msg.max_duration_secs),
        })
    }

    pub fn store(&self, storage: &mut dyn Storage) -> Result<()> {
        Self::STORAGE.save(storage, self).map_err(Into::into)
    }

    pub fn load(storage: &dyn Storage) -> Result<Self> {
        Self::STORAGE.load(storage).map_err(Into::into)
    }
}
