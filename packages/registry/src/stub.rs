use cosmwasm_std::{Addr, QuerierWrapper};
use cw721::{Cw721ExecuteMsg, Cw721QueryMsg, OwnerOfResponse};

use platform::batch::Batch;

use crate::{
    asset::Asset,
    error::{Error, Result},
};

/// The committed custody state of an asset: its owner and the spenders
/// the owner has approved to move it.
pub struct Holder {
    owner: Addr,
    approvals: Vec<String>,
}

impl Holder {
    pub fn owner(&self) -> &Addr {
        &self.owner
    }

    pub fn approves(&self, spender: &Addr) -> bool {
        self.approvals.iter().any(|approved| approved == spender)
    }
}

pub fn holder(querier: &QuerierWrapper<'_>, asset: &Asset) -> Result<Holder> {
    querier
        .query_wasm_smart(
            asset.collection.clone(),
            &Cw721QueryMsg::OwnerOf {
                token_id: asset.token_id.clone(),
                include_expired: Some(false),
            },
        )
        .map(|resp: OwnerOfResponse| Holder {
            owner: Addr::unchecked(resp.owner),
            approvals: resp
                .approvals
                .into_iter()
                .map(|approval| approval.spender)
                .collect(),
        })
        .map_err(|error| Error::QueryHolder {
            asset: asset.to_string(),
            error,
        })
}

/// Schedules handing the asset over to the recipient.
pub fn transfer(asset: &Asset, recipient: &Addr, batch: Batch) -> Result<Batch> {
    batch
        .schedule_execute_wasm_no_reply_no_funds(
            asset.collection.clone(),
            &Cw721ExecuteMsg::TransferNft {
                recipient: recipient.into(),
                token_id: asset.token_id.clone(),
            },
        )
        .map_err(Into::into)
}
