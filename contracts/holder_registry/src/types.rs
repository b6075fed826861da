use soroban_sdk::{contracterror, contracttype, Address};
use upgradeability::UpgradeError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotSaleManager = 3,
    IdentityNotFound = 4,
    InvalidAmount = 5,
    ClaimExceedsLocked = 6,
    MathOverflow = 7,
    NotAuthorized = 8,
}

impl From<UpgradeError> for Error {
    fn from(err: UpgradeError) -> Self {
        match err {
            UpgradeError::AlreadyInitialized => Error::AlreadyInitialized,
            UpgradeError::NotInitialized => Error::NotInitialized,
            _ => Error::NotAuthorized,
        }
    }
}

/// One record per buyer. `claimed_total` never exceeds `locked_total`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IdentityRecord {
    pub id: u64,
    pub owner: Address,
    pub locked_total: i128,
    pub claimed_total: i128,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Controller,
    NextId,
    Identity(u64),
    IdentityOf(Address),
}
