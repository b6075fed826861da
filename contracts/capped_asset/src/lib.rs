#![no_std]

mod contract;
mod events;
mod storage;
mod types;

#[cfg(test)]
mod test;

pub use contract::{CappedAsset, CappedAssetClient};
pub use types::{AllowanceValue, Error, TokenMetadata};
