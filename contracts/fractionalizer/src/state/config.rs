use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::Storage;
use cw_storage_plus::Item;

use ledger::LedgerRef;
use oracle::OracleRef;

use crate::{error::Result, msg::InstantiateMsg};

/// Per-deployment collaborator handles, frozen at instantiation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct Config {
    pub stable_ledger: LedgerRef,
    pub price_oracle: OracleRef,
}

impl Config {
    const STORAGE: Item<'static, Config> = Item::new("config");

    pub fn new(msg: InstantiateMsg) -> Self {
        Self {
            stable_ledger: LedgerRef::new(msg.stable_ledger),
            price_oracle: OracleRef::new(msg.price_oracle),
        }
    }

    pub fn store(&self, storage: &mut dyn Storage) -> Result<()> {
        Self::STORAGE.save(storage, self).map_err(Into::into)
    }

    pub fn load(storage: &dyn Storage) -> Result<Self> {
        Self::STORAGE.load(storage).map_err(Into::into)
    }
}
