use thiserror::Error;

use cosmwasm_std::StdError;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error(
        "[Oracle; Stub] Failed to fetch the price of share class {share_class}! Possibly no price is available! Cause: {error}"
    )]
    FailedToFetchPrice { share_class: u64, error: StdError },
}

pub type Result<T> = std::result::Result<T, Error>;
