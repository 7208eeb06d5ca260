pub use crate::stub::OracleRef;

pub mod error;
pub mod msg;
mod stub;
