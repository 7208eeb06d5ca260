use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("[Finance] Overflow on {0}")]
    Overflow(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
