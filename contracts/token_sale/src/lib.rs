#![no_std]

mod contract;
mod events;
mod registry;
pub mod rounds;
mod storage;
mod types;
pub mod vesting;


pub use contract::{TokenSaleContract, TokenSaleContractClient};
pub use types::{Epoch, Error, Round, SaleConfig, SaleStatus, MAX_EPOCHS, MAX_ROUNDS};
