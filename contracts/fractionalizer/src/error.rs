use thiserror::Error;

use cosmwasm_std::StdError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("[Fractionalizer] [Std] {0}")]
    Std(#[from] StdError),

    #[error("[Fractionalizer] Failed to convert query response to binary! Cause: {0}")]
    ConvertToBinary(StdError),

    #[error("[Fractionalizer] {0}")]
    Finance(#[from] finance::error::Error),

    #[error("[Fractionalizer] {0}")]
    Platform(#[from] platform::error::Error),

    #[error("[Fractionalizer] {0}")]
    Registry(#[from] registry::error::Error),

    #[error("[Fractionalizer] {0}")]
    Ledger(#[from] ledger::error::Error),

    #[error("[Fractionalizer] {0}")]
    Oracle(#[from] oracle::error::Error),

    #[error("[Fractionalizer] The total share supply must be positive")]
    InvalidSupply {},

    #[error("[Fractionalizer] The minimum buyout price must be positive")]
    InvalidMinimumPrice {},

    #[error("[Fractionalizer] The distribution target is not a valid address")]
    InvalidDistributionTarget {},

    #[error("[Fractionalizer] Invalid amount! {0}")]
    InvalidAmount(&'static str),

    #[error("[Fractionalizer] Only the asset owner may fractionalize it")]
    NotTokenOwner {},

    #[error("[Fractionalizer] The asset is already fractionalized")]
    AlreadyFractionalized {},

    #[error("[Fractionalizer] The asset is not fractionalized")]
    NotFractionalized {},

    #[error("[Fractionalizer] The asset has already been bought out")]
    AlreadyBoughtOut {},

    #[error("[Fractionalizer] The share class has not been bought out yet")]
    NotBoughtOut {},

    #[error("[Fractionalizer] The share class does not exist")]
    NoRecord {},

    #[error("[Fractionalizer] The holder's shares do not cover the exchanged amount")]
    InsufficientShares {},

    #[error("[Fractionalizer] The buyer's balance or allowance does not cover the buyout price")]
    InsufficientPayment {},

    #[error("[Fractionalizer] A transfer would not go through! {0}")]
    TransferFailed(&'static str),
}

pub type Result<T> = std::result::Result<T, ContractError>;
