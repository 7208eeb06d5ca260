use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, Uint128};

use registry::Asset;

use crate::state::{
    config::Config,
    record::{Record, ShareInfo},
    ShareClassId,
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct InstantiateMsg {
    /// The cw20 stable-value ledger buyouts and redemptions settle in
    pub stable_ledger: Addr,
    /// The oracle quoting share-class prices
    pub price_oracle: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Lock the asset and mint a fresh fungible share class against it
    ///
    /// The caller must own the asset and have approved the engine to
    /// transfer it. The whole supply goes to the distribution target.
    Fractionalize {
        asset: Asset,
        share_info: ShareInfo,
        total_supply: Uint128,
        min_buyout_price: Uint128,
        distribution_target: String,
    },
    /// Acquire the whole asset at the current buyout price, funding the
    /// redemption pool the outstanding shares then claim against
    Buyout { asset: Asset },
    /// Burn shares for their pro-rata part of the redemption pool
    Exchange {
        share_class: ShareClassId,
        amount: Uint128,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum QueryMsg {
    Config(),
    /// The latest fractionalization record of the asset
    Record { asset: Asset },
    /// What a buyout of the asset settles at, as of the query block
    BuyoutPrice { asset: Asset },
    ShareBalance {
        share_class: ShareClassId,
        address: Addr,
    },
}

pub type ConfigResponse = Config;

pub type RecordResponse = Record;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct BuyoutPriceResponse {
    pub price: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct ShareBalanceResponse {
    pub balance: Uint128,
}
