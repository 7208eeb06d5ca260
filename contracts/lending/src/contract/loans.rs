use cosmwasm_std::{DepsMut, Env, MessageInfo, Uint128};

use finance::{duration::Duration, percent::Percent};
use platform::{batch::Batch, message::Response as MessageResponse};
use registry::Asset;

use crate::{
    error::{ContractError, Result},
    event,
    state::{config::Config, loan::Loan, LoanId},
};

#[allow(clippy::too_many_arguments)]
pub(super) fn try_create(
    deps: DepsMut<'_>,
    env: Env,
    info: MessageInfo,
    asset: Asset,
    principal: Uint128,
    interest_rate: Percent,
    duration_secs: u32,
    collateral_value: Uint128,
) -> Result<(LoanId, MessageResponse)> {
    let config = Config::load(deps.storage)?;

    if principal.is_zero() {
        return Err(ContractError::InvalidAmount("zero principal"));
    }
    if collateral_value.is_zero() {
        return Err(ContractError::InvalidAmount("zero collateral value"));
    }

    let duration = Duration::from_secs(duration_secs);
    if duration < config.min_duration || config.max_duration < duration {
        return Err(ContractError::InvalidDuration {
            min: config.min_duration,
            max: config.max_duration,
        });
    }

    if !config.max_ltv.covers(principal, collateral_value) {
        return Err(ContractError::ExcessiveLtv {
            max: config.max_ltv,
        });
    }

    let engine = env.contract.address.clone();

    let custody = registry::holder(&deps.querier, &asset)?;
    if custody.owner() != &info.sender {
        return Err(ContractError::TransferFailed(
            "the caller does not hold the asset",
        ));
    }
    if !custody.approves(&engine) {
        return Err(ContractError::TransferFailed(
            "the asset is not approved to the engine",
        ));
    }

    let reserves = config.stable_ledger.balance(&deps.querier, &engine)?;
    if reserves < principal {
        return Err(ContractError::TransferFailed(
            "the reserves do not cover the principal",
        ));
    }

    let loan = Loan::open(
        info.sender.clone(),
        asset.clone(),
        principal,
        interest_rate,
        duration,
        collateral_value,
        env.block.time,
    );
    let loan_id = Loan::append(deps.storage, &loan)?;

    let batch = registry::transfer(&asset, &engine, Batch::default())?;
    let batch = config
        .stable_ledger
        .transfer(&info.sender, principal, batch)?;

    let emitter = event::emit_loan_created(
        &env,
        loan_id,
        info.sender,
        &asset,
        principal,
        interest_rate,
        duration_secs,
    );

    Ok((
        loan_id,
        MessageResponse::messages_with_event(batch, emitter),
    ))
}

pub(super) fn try_repay(
    deps: DepsMut<'_>,
    env: Env,
    info: MessageInfo,
    loan_id: LoanId,
) -> Result<MessageResponse> {
    let config = Config::load(deps.storage)?;
    let mut loan = Loan::load(deps.storage, loan_id)?;

    loan.ensure_active()?;
    if loan.borrower != info.sender {
        return Err(ContractError::NotBorrower {});
    }

    let engine = env.contract.address.clone();
    let payment = loan.repayment_due(&env.block.time)?;

    if !config
        .stable_ledger
        .can_spend(&deps.querier, &loan.borrower, &engine, payment)?
    {
        return Err(ContractError::InsufficientPayment {});
    }

    loan.repay(payment)?;
    loan.save(deps.storage, loan_id)?;

    let batch = config
        .stable_ledger
        .transfer_from(&loan.borrower, &engine, payment, Batch::default())?;
    let batch = registry::transfer(&loan.asset, &loan.borrower, batch)?;

    Ok(MessageResponse::messages_with_event(
        batch,
        event::emit_loan_repaid(&env, loan_id, payment),
    ))
}

/// Permissionless by design: the only guard is the expiry predicate, so
/// anyone may trigger a liquidation the instant it becomes due.
pub(super) fn try_liquidate(
    deps: DepsMut<'_>,
    env: Env,
    loan_id: LoanId,
) -> Result<MessageResponse> {
    let config = Config::load(deps.storage)?;
    let mut loan = Loan::load(deps.storage, loan_id)?;

    loan.ensure_active()?;
    if !loan.expired(&env.block.time) {
        return Err(ContractError::NotExpired {});
    }

    let outstanding = loan.repayment_due(&env.block.time)?;
    loan.liquidate(outstanding)?;
    loan.save(deps.storage, loan_id)?;

    // the unpaid principal is the lender's loss; no stable value moves
    let batch = registry::transfer(&loan.asset, &config.liquidation_beneficiary, Batch::default())?;

    Ok(MessageResponse::messages_with_event(
        batch,
        event::emit_loan_liquidated(&env, loan_id, config.liquidation_beneficiary),
    ))
}
