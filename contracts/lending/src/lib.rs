#[cfg(not(feature = "library"))]
pub mod contract;
pub mod error;
#[cfg(not(feature = "library"))]
mod event;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
