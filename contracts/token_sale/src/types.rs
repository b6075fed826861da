use soroban_sdk::{contracterror, contracttype, Address};
use upgradeability::UpgradeError;

pub const MAX_ROUNDS: u32 = 32;
pub const MAX_EPOCHS: u32 = 64;

/// Schema written by `initialize_v2`.
pub const SCHEMA_V2: u32 = 2;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    InvalidInput = 4,
    NoEpochs = 5,
    EpochBpsInvalid = 6,
    NotConfigured = 7,
    AlreadyConfigured = 8,
    SaleNotOpen = 9,
    SaleAlreadyOpen = 10,
    ZeroAmount = 11,
    AllRoundsSoldOut = 12,
    PaymentTransferFailed = 13,
    NotOwner = 14,
    NoLocked = 15,
    NothingToClaim = 16,
    AssetTransferFailed = 17,
    MathOverflow = 18,
    PaymentTooSmall = 19,
    NothingToRecover = 20,
    MigrationFailed = 21,
    RegistryCallFailed = 22,
}

impl From<UpgradeError> for Error {
    fn from(err: UpgradeError) -> Self {
        match err {
            UpgradeError::AlreadyInitialized => Error::AlreadyInitialized,
            UpgradeError::NotInitialized => Error::NotInitialized,
            UpgradeError::NotAuthorized => Error::NotAuthorized,
            UpgradeError::IncompatibleVersion | UpgradeError::MigrationFailed => {
                Error::MigrationFailed
            }
        }
    }
}

/// A price tier. `price` is in payment-asset smallest units per whole sale
/// token; `0 <= sold <= total_amount`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Round {
    pub price: i128,
    pub total_amount: i128,
    pub sold: i128,
}

impl Round {
    pub fn remaining(&self) -> i128 {
        self.total_amount - self.sold
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Epoch {
    pub start_time: u64,
    pub bps: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub payment_token: Address,
    pub sale_token: Address,
    pub registry: Address,
    pub treasury: Address,
    /// `10^decimals` of the sale token.
    pub unit: i128,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum SaleStatus {
    Unconfigured = 0,
    RoundsSet = 1,
    EpochsSet = 2,
    FullyConfigured = 3,
    Open = 4,
}

/// Keys are append-only: later schema versions add variants, never reshape
/// existing ones.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Config,
    Rounds,
    CurrentRound,
    Epochs,
    Opened,
    TotalRaised,
    TotalSold,
    TotalReleased,
    // v2
    UpgradeAdmin,
}
