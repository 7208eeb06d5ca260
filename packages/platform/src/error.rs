use std::fmt::Display;

use thiserror::Error;

use cosmwasm_std::{Api, StdError};

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("[Platform] [Std] An error occured on data serialization: {0}")]
    Serialization(StdError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// An error-reporting closure for the entry points' `inspect_err`.
pub fn log<Err>(api: &dyn Api) -> impl FnOnce(&Err) + '_
where
    Err: Display,
{
    move |err| api.debug(&format!("{err}"))
}
