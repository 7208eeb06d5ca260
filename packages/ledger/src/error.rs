use thiserror::Error;

use cosmwasm_std::StdError;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("[Ledger] Failed to query the balance of {account}! Cause: {error}")]
    QueryBalance { account: String, error: StdError },

    #[error("[Ledger] Failed to query the allowance of {owner} towards {spender}! Cause: {error}")]
    QueryAllowance {
        owner: String,
        spender: String,
        error: StdError,
    },

    #[error("[Ledger] {0}")]
    Platform(#[from] platform::error::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
