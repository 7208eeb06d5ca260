use cosmwasm_std::{DepsMut, Env, MessageInfo, Uint128};

use platform::{batch::Batch, message::Response as MessageResponse};
use registry::Asset;

use crate::{
    error::{ContractError, Result},
    event,
    state::{config::Config, record::Record, shares::Shares, ShareClassId},
};

pub(super) fn try_buyout(
    deps: DepsMut<'_>,
    env: Env,
    info: MessageInfo,
    asset: Asset,
) -> Result<MessageResponse> {
    let config = Config::load(deps.storage)?;
    let (share_class, mut record) = Record::load_latest(deps.storage, &asset)?;

    record.ensure_not_bought_out()?;

    let rate = config.price_oracle.price_of(&deps.querier, share_class)?;
    let price = record.buyout_price_with(rate)?;

    let engine = env.contract.address.clone();
    if !config
        .stable_ledger
        .can_spend(&deps.querier, &info.sender, &engine, price)?
    {
        return Err(ContractError::InsufficientPayment {});
    }

    record.mark_bought_out(price)?;
    record.save(deps.storage, share_class)?;

    let batch = config
        .stable_ledger
        .transfer_from(&info.sender, &engine, price, Batch::default())?;
    let batch = registry::transfer(&record.asset, &info.sender, batch)?;

    Ok(MessageResponse::messages_with_event(
        batch,
        event::emit_asset_bought_out(&env, share_class, &record.asset, info.sender, price),
    ))
}

pub(super) fn try_exchange(
    deps: DepsMut<'_>,
    env: Env,
    info: MessageInfo,
    share_class: ShareClassId,
    amount: Uint128,
) -> Result<MessageResponse> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount("zero share amount"));
    }

    let config = Config::load(deps.storage)?;
    let mut record = Record::load(deps.storage, share_class)?;

    if !record.bought_out {
        return Err(ContractError::NotBoughtOut {});
    }

    Shares::burn(deps.storage, share_class, info.sender.clone(), amount)?;

    let payout = record.redeem(amount)?;
    record.save(deps.storage, share_class)?;

    let batch = config
        .stable_ledger
        .transfer(&info.sender, payout, Batch::default())?;

    Ok(MessageResponse::messages_with_event(
        batch,
        event::emit_shares_redeemed(&env, share_class, info.sender, amount, payout),
    ))
}
