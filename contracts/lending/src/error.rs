use thiserror::Error;

use cosmwasm_std::StdError;

use finance::{duration::Duration, percent::Percent};

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("[Lending] [Std] {0}")]
    Std(#[from] StdError),

    #[error("[Lending] Failed to convert query response to binary! Cause: {0}")]
    ConvertToBinary(StdError),

    #[error("[Lending] {0}")]
    Finance(#[from] finance::error::Error),

    #[error("[Lending] {0}")]
    Platform(#[from] platform::error::Error),

    #[error("[Lending] {0}")]
    Registry(#[from] registry::error::Error),

    #[error("[Lending] {0}")]
    Ledger(#[from] ledger::error::Error),

    #[error("[Lending] Invalid configuration! {0}")]
    InvalidConfiguration(&'static str),

    #[error("[Lending] Invalid amount! {0}")]
    InvalidAmount(&'static str),

    #[error("[Lending] The loan duration is out of the [{min:?}, {max:?}] bounds")]
    InvalidDuration { min: Duration, max: Duration },

    #[error("[Lending] The loan-to-value ratio exceeds {max}")]
    ExcessiveLtv { max: Percent },

    #[error("[Lending] The loan does not exist")]
    NoLoan {},

    #[error("[Lending] Only the borrower may repay the loan")]
    NotBorrower {},

    #[error("[Lending] The loan has already been settled")]
    AlreadySettled {},

    #[error("[Lending] The loan has not expired yet")]
    NotExpired {},

    #[error("[Lending] The borrower's balance or allowance does not cover the repayment")]
    InsufficientPayment {},

    #[error("[Lending] A transfer would not go through! {0}")]
    TransferFailed(&'static str),
}

pub type Result<T> = std::result::Result<T, ContractError>;
