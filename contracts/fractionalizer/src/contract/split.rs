use cosmwasm_std::{DepsMut, Env, MessageInfo, Uint128};

use platform::{batch::Batch, message::Response as MessageResponse};
use registry::Asset;

use crate::{
    error::{ContractError, Result},
    event,
    state::{
        record::{Record, ShareInfo},
        shares::Shares,
        ShareClassId,
    },
};

pub(super) fn try_fractionalize(
    deps: DepsMut<'_>,
    env: Env,
    info: MessageInfo,
    asset: Asset,
    share_info: ShareInfo,
    total_supply: Uint128,
    min_buyout_price: Uint128,
    distribution_target: String,
) -> Result<(ShareClassId, MessageResponse)> {
    if total_supply.is_zero() {
        return Err(ContractError::InvalidSupply {});
    }
    if min_buyout_price.is_zero() {
        return Err(ContractError::InvalidMinimumPrice {});
    }

    let target = deps
        .api
        .addr_validate(&distribution_target)
        .map_err(|_| ContractError::InvalidDistributionTarget {})?;

    let engine = env.contract.address.clone();

    let custody = registry::holder(&deps.querier, &asset)?;
    if custody.owner() != &info.sender {
        return Err(ContractError::NotTokenOwner {});
    }
    if !custody.approves(&engine) {
        return Err(ContractError::TransferFailed(
            "the asset is not approved to the engine",
        ));
    }

    let (share_class, record) = Record::create(
        deps.storage,
        asset.clone(),
        share_info,
        total_supply,
        min_buyout_price,
        info.sender,
    )?;
    Shares::mint(deps.storage, share_class, target.clone(), total_supply)?;

    let batch = registry::transfer(&asset, &engine, Batch::default())?;

    let emitter = event::emit_asset_fractionalized(
        &env,
        share_class,
        &record.asset,
        total_supply,
        target,
    );

    Ok((
        share_class,
        MessageResponse::messages_with_event(batch, emitter),
    ))
}
