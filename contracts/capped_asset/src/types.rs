use soroban_sdk::{contracterror, contracttype, Address, String};
use upgradeability::UpgradeError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    CapExceeded = 3,
    InvalidAmount = 4,
    InvalidCap = 5,
    InsufficientBalance = 6,
    InsufficientAllowance = 7,
    InvalidExpiration = 8,
    NotAuthorized = 9,
    MathOverflow = 10,
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

#[derive(Clone)]
#[contracttype]
pub struct TokenMetadata {
    pub decimal: u32,
    pub name: String,
    pub symbol: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[derive(Clone)]
#[contracttype]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Metadata,
    Cap,
    TotalMinted,
    Balance(Address),
    Allowance(AllowanceKey),
}
