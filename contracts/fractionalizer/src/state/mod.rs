pub mod config;
pub mod record;
pub mod shares;

pub type ShareClassId = u64;
