use cosmwasm_std::{Addr, Env, Uint128};

use platform::emit::{Emit, Emitter};
use registry::Asset;

use crate::state::ShareClassId;

pub fn emit_asset_fractionalized(
    env: &Env,
    share_class: ShareClassId,
    asset: &Asset,
    total_supply: Uint128,
    distribution_target: Addr,
) -> Emitter {
    Emitter::of_type("asset-fractionalized")
        .emit_tx_info(env)
        .emit_to_string_value("share-class", share_class)
        .emit("collection", asset.collection.clone())
        .emit("token-id", asset.token_id.clone())
        .emit_amount("total-supply", total_supply)
        .emit("target", distribution_target)
}

pub fn emit_asset_bought_out(
    env: &Env,
    share_class: ShareClassId,
    asset: &Asset,
    buyer: Addr,
    price: Uint128,
) -> Emitter {
    Emitter::of_type("asset-bought-out")
        .emit_tx_info(env)
        .emit_to_string_value("share-class", share_class)
        .emit("collection", asset.collection.clone())
        .emit("token-id", asset.token_id.clone())
        .emit("buyer", buyer)
        .emit_amount("price", price)
}

pub fn emit_shares_redeemed(
    env: &Env,
    share_class: ShareClassId,
    holder: Addr,
    amount: Uint128,
    payout: Uint128,
) -> Emitter {
    Emitter::of_type("shares-redeemed")
        .emit_tx_info(env)
        .emit_to_string_value("share-class", share_class)
        .emit("holder", holder)
        .emit_amount("amount", amount)
        .emit_amount("payout", payout)
}
