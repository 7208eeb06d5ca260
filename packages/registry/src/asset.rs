use std::fmt::{Display, Formatter, Result as FmtResult};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::Addr;

/// Identity of a registry asset: the cw721 collection contract that is
/// its system of record plus the token id within it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct Asset {
    pub collection: Addr,
    pub token_id: String,
}

impl Asset {
    /// The composite storage key of this asset.
    pub fn key(&self) -> (Addr, String) {
        (self.collection.clone(), self.token_id.clone())
    }
}

impl Display for Asset {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}/{}", self.collection, self.token_id)
    }
}
