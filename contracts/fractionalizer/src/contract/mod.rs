use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo,
    Response as CwResponse,
};

use platform::{error as platform_error, response};

use crate::{
    error::{ContractError, Result},
    msg::{BuyoutPriceResponse, ExecuteMsg, InstantiateMsg, QueryMsg, ShareBalanceResponse},
    state::{config::Config, record::Record, shares::Shares},
};

mod buyout;
mod split;

#[entry_point]
pub fn instantiate(
    deps: DepsMut<'_>,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<CwResponse> {
    deps.api.addr_validate(msg.stable_ledger.as_str())?;
    deps.api.addr_validate(msg.price_oracle.as_str())?;

    Config::new(msg)
        .store(deps.storage)
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
        ExecuteMsg::Fractionalize {
            asset,
            share_info,
            total_supply,
            min_buyout_price,
            distribution_target,
        } => split::try_fractionalize(
            deps,
            env,
            info,
            asset,
            share_info,
            total_supply,
            min_buyout_price,
            distribution_target,
        )
        .and_then(|(share_class, message_response)| {
            response::response_with_messages::<_, _, ContractError>(share_class, message_response)
        }),
        ExecuteMsg::Buyout { asset } => buyout::try_buyout(deps, env, info, asset)
            .map(response::response_only_messages),
        ExecuteMsg::Exchange {
            share_class,
            amount,
        } => buyout::try_exchange(deps, env, info, share_class, amount)
            .map(response::response_only_messages),
    }
    .inspect_err(platform_error::log(api))
}

#[entry_point]
pub fn query(deps: Deps<'_>, _env: Env, msg: QueryMsg) -> Result<Binary> {
    match msg {
        QueryMsg::Config() => to_json_binary(&Config::load(deps.storage)?),
        QueryMsg::Record { asset } => {
            let (_, record) = Record::load_latest(deps.storage, &asset)?;

            to_json_binary(&record)
        }
        QueryMsg::BuyoutPrice { asset } => {
            let (share_class, record) = Record::load_latest(deps.storage, &asset)?;

            let price = if let Some(frozen) = record.buyout_price {
                frozen
            } else {
                let rate = Config::load(deps.storage)?
                    .price_oracle
                    .price_of(&deps.querier, share_class)?;

                record.buyout_price_with(rate)?
            };

            to_json_binary(&BuyoutPriceResponse { price })
        }
        QueryMsg::ShareBalance {
            share_class,
            address,
        } => {
            let balance = Shares::balance(deps.storage, share_class, address)?;

            to_json_binary(&ShareBalanceResponse { balance })
        }
    }
    .map_err(ContractError::ConvertToBinary)
    .inspect_err(platform_error::log(deps.api))
}
