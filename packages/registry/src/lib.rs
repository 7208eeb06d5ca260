pub use crate::{
    asset::Asset,
    stub::{holder, transfer, Holder},
};

mod asset;
pub mod error;
mod stub;
