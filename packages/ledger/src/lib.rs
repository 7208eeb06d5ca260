pub use crate::stub::LedgerRef;

pub mod error;
mod stub;
