use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, QuerierWrapper, Uint128};

use crate::{
    error::{Error, Result},
    msg::{PriceResponse, QueryMsg},
};

/// A handle to the external price oracle.
///
/// The oracle may be stale or manipulable; a rate is read at most once
/// per operation and never assumed authoritative beyond that read.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct OracleRef {
    addr: Addr,
}

impl OracleRef {
    pub fn new(addr: Addr) -> Self {
        Self { addr }
    }

    pub fn addr(&self) -> &Addr {
        &self.addr
    }

    /// The current per-unit rate of the share class, as an
    /// 18-decimal fixed-point stable-value amount.
    pub fn price_of(&self, querier: &QuerierWrapper<'_>, share_class: u64) -> Result<Uint128> {
        querier
            .query_wasm_smart(self.addr.clone(), &QueryMsg::Price { share_class })
            .map(|resp: PriceResponse| resp.rate)
            .map_err(|error| Error::FailedToFetchPrice { share_class, error })
    }
}
