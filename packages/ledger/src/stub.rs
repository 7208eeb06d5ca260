use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, QuerierWrapper, Uint128};
use cw20::{AllowanceResponse, BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use platform::batch::Batch;

use crate::error::{Error, Result};

/// A handle to the stable-value cw20 ledger.
///
/// The ledger is the system of record for funds; nothing read through it
/// is cached beyond the scope of a single operation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct LedgerRef {
    addr: Addr,
}

impl LedgerRef {
    pub fn new(addr: Addr) -> Self {
        Self { addr }
    }

    pub fn addr(&self) -> &Addr {
        &self.addr
    }

    pub fn balance(&self, querier: &QuerierWrapper<'_>, account: &Addr) -> Result<Uint128> {
        querier
            .query_wasm_smart(
                self.addr.clone(),
                &Cw20QueryMsg::Balance {
                    address: account.into(),
                },
            )
            .map(|resp: BalanceResponse| resp.balance)
            .map_err(|error| Error::QueryBalance {
                account: account.into(),
                error,
            })
    }

    pub fn allowance(
        &self,
        querier: &QuerierWrapper<'_>,
        owner: &Addr,
        spender: &Addr,
    ) -> Result<Uint128> {
        querier
            .query_wasm_smart(
                self.addr.clone(),
                &Cw20QueryMsg::Allowance {
                    owner: owner.into(),
                    spender: spender.into(),
                },
            )
            .map(|resp: AllowanceResponse| resp.allowance)
            .map_err(|error| Error::QueryAllowance {
                owner: owner.into(),
                spender: spender.into(),
                error,
            })
    }

    /// Whether a `transfer_from(owner -> ...)` of `amount` initiated by
    /// `spender` would go through, judged by the committed balance and
    /// allowance.
    pub fn can_spend(
        &self,
        querier: &QuerierWrapper<'_>,
        owner: &Addr,
        spender: &Addr,
        amount: Uint128,
    ) -> Result<bool> {
        self.balance(querier, owner).and_then(|balance| {
            if balance < amount {
                Ok(false)
            } else {
                self.allowance(querier, owner, spender)
                    .map(|allowance| allowance >= amount)
            }
        })
    }

    /// Schedules paying out of the engine's own balance.
    ///
    /// A zero amount schedules nothing; the ledger rejects empty transfers.
    pub fn transfer(&self, recipient: &Addr, amount: Uint128, batch: Batch) -> Result<Batch> {
        if amount.is_zero() {
            return Ok(batch);
        }

        batch
            .schedule_execute_wasm_no_reply_no_funds(
                self.addr.clone(),
                &Cw20ExecuteMsg::Transfer {
                    recipient: recipient.into(),
                    amount,
                },
            )
            .map_err(Into::into)
    }

    /// Schedules pulling pre-approved funds from `owner` to `recipient`.
    pub fn transfer_from(
        &self,
        owner: &Addr,
        recipient: &Addr,
        amount: Uint128,
        batch: Batch,
    ) -> Result<Batch> {
        if amount.is_zero() {
            return Ok(batch);
        }

        batch
            .schedule_execute_wasm_no_reply_no_funds(
                self.addr.clone(),
                &Cw20ExecuteMsg::TransferFrom {
                    owner: owner.into(),
                    recipient: recipient.into(),
                    amount,
                },
            )
            .map_err(Into::into)
    }
}
