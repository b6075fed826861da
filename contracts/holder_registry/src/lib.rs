#![no_std]

mod contract;
mod events;
mod storage;
mod types;

#[cfg(test)]
mod test;

pub use contract::{HolderRegistry, HolderRegistryClient};
pub use types::{Error, IdentityRecord};
