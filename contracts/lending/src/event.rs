use cosmwasm_std::{Addr, Env, Uint128};

use finance::percent::Percent;
use platform::emit::{Emit, Emitter};
use registry::Asset;

use crate::state::LoanId;

pub fn emit_loan_created(
    env: &Env,
    id: LoanId,
    borrower: Addr,
    asset: &Asset,
    principal: Uint128,
    interest_rate: Percent,
    duration_secs: u32,
) -> Emitter {
    Emitter::of_type("loan-created")
        .emit_tx_info(env)
        .emit_to_string_value("id", id)
        .emit("borrower", borrower)
        .emit("collection", asset.collection.clone())
        .emit("token-id", asset.token_id.clone())
        .emit_amount("principal", principal)
        .emit_percent_amount("rate", interest_rate)
        .emit_to_string_value("duration", duration_secs)
}

pub fn emit_loan_repaid(env: &Env, id: LoanId, payment: Uint128) -> Emitter {
    Emitter::of_type("loan-repaid")
        .emit_tx_info(env)
        .emit_to_string_value("id", id)
        .emit_amount("payment", payment)
}

pub fn emit_loan_liquidated(env: &Env, id: LoanId, beneficiary: Addr) -> Emitter {
    Emitter::of_type("loan-liquidated")
        .emit_tx_info(env)
        .emit_to_string_value("id", id)
        .emit("beneficiary", beneficiary)
}
