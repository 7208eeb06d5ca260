use thiserror::Error;

use cosmwasm_std::StdError;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("[Registry] Failed to query the holder of {asset}! Cause: {error}")]
    QueryHolder { asset: String, error: StdError },

    #[error("[Registry] {0}")]
    Platform(#[from] platform::error::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
