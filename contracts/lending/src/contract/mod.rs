use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo,
    Response as CwResponse,
};

use platform::{error as platform_error, response};

use crate::{
    error::{ContractError, Result},
    msg::{BorrowerLoansResponse, ExecuteMsg, InstantiateMsg, QueryMsg, RepaymentResponse},
    state::{config::Config, loan::Loan},
};

mod loans;

#[entry_point]
pub fn instantiate(
    deps: DepsMut<'_>,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<CwResponse> {
    deps.api.addr_validate(msg.stable_ledger.as_str())?;
    deps.api.addr_validate(msg.liquidation_beneficiary.as_str())?;

    Config::try_new(msg)
        .and_then(|config| config.store(deps.storage))
        .map(|()| response::empty_response())
        .inspect_err(platform_error::log(deps.api))
}

#[entry_point]
pub fn execute(
    deps: DepsMut<'_>,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<CwResponse> {
    let api = deps.api;
    match msg {
        ExecuteMsg::CreateLoan {
            asset,
            principal,
            interest_rate,
            duration_secs,
            collateral_value,
        } => loans::try_create(
            deps,
            env,
            info,
            asset,
            principal,
            interest_rate,
            duration_secs,
            collateral_value,
        )
        .and_then(|(loan_id, message_response)| {
            response::response_with_messages::<_, _, ContractError>(loan_id, message_response)
        }),
        ExecuteMsg::RepayLoan { loan_id } => loans::try_repay(deps, env, info, loan_id)
            .map(response::response_only_messages),
        ExecuteMsg::LiquidateLoan { loan_id } => loans::try_liquidate(deps, env, loan_id)
            .map(response::response_only_messages),
    }
    .inspect_err(platform_error::log(api))
}

#[entry_point]
pub fn query(deps: Deps<'_>, env: Env, msg: QueryMsg) -> Result<Binary> {
    match msg {
        QueryMsg::Config() => to_json_binary(&Config::load(deps.storage)?),
        QueryMsg::Loan { loan_id } => to_json_binary(&Loan::load(deps.storage, loan_id)?),
        QueryMsg::RepaymentAmount { loan_id } => {
            let amount = Loan::load(deps.storage, loan_id)?.repayment_due(&env.block.time)?;

            to_json_binary(&RepaymentResponse { amount })
        }
        QueryMsg::BorrowerLoans { borrower } => {
            let loan_ids: Vec<_> =
                Loan::by_borrower(deps.storage, borrower).collect::<Result<_>>()?;

            to_json_binary(&BorrowerLoansResponse { loan_ids })
        }
    }
    .map_err(ContractError::ConvertToBinary)
    .inspect_err(platform_error::log(deps.api))
}
