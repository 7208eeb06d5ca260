pub mod config;
pub mod loan;

pub type LoanId = u64;
