#![no_std]

use soroban_sdk::{contracterror, contracttype, symbol_short, Address, BytesN, Env};

pub mod migration;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;


/// Schema version written by every contract's first `initialize`.
pub const INITIAL_VERSION: u32 = 1;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum UpgradeError {
    NotAuthorized = 100,
    AlreadyInitialized = 101,
    NotInitialized = 102,
    IncompatibleVersion = 103,
    MigrationFailed = 104,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct UpgradeHistory {
    pub wasm_hash: BytesN<32>,
    /// Schema version live when the code was swapped.
    pub version: u32,
    pub upgraded_at: u64,
}

pub mod storage {
    use super::*;
    use soroban_sdk::{Symbol, Vec};

    pub const VERSION: Symbol = symbol_short!("VERSION");
    pub const ADMIN: Symbol = symbol_short!("UP_ADMIN");
    pub const HISTORY: Symbol = symbol_short!("HISTORY");

    pub fn get_version(env: &Env) -> u32 {
        env.storage().instance().get(&VERSION).unwrap_or(0)
    }

    pub fn set_version(env: &Env, version: u32) {
        env.storage().instance().set(&VERSION, &version);
    }

    pub fn get_admin(env: &Env) -> Option<Address> {
        env.storage().instance().get(&ADMIN)
    }

    pub fn set_admin(env: &Env, admin: &Address) {
        env.storage().instance().set(&ADMIN, admin);
    }

    pub fn add_history(env: &Env, history: UpgradeHistory) {
        let mut list: Vec<UpgradeHistory> = env
            .storage()
            .persistent()
            .get(&HISTORY)
            .unwrap_or(Vec::new(env));
        list.push_back(history);
        env.storage().persistent().set(&HISTORY, &list);
    }
}

/// Marks a freshly deployed contract as schema version 1 and records who may
/// swap its code.
pub fn init_version(env: &Env, admin: &Address) -> Result<(), UpgradeError> {
    if storage::get_version(env) != 0 {
        return Err(UpgradeError::AlreadyInitialized);
    }
    storage::set_version(env, INITIAL_VERSION);
    storage::set_admin(env, admin);
    Ok(())
}

/// One-shot transition to `target`. Only the step from `target - 1` is
/// accepted; replaying a version that is already live fails.
pub fn reinitialize(env: &Env, target: u32) -> Result<u32, UpgradeError> {
    let current = storage::get_version(env);
    if current == 0 {
        return Err(UpgradeError::NotInitialized);
    }
    if current >= target {
        return Err(UpgradeError::AlreadyInitialized);
    }
    if current.checked_add(1) != Some(target) {
        return Err(UpgradeError::IncompatibleVersion);
    }
    storage::set_version(env, target);
    Ok(current)
}

pub fn authorize_upgrade(env: &Env) -> Result<Address, UpgradeError> {
    let admin = storage::get_admin(env).ok_or(UpgradeError::NotAuthorized)?;
    admin.require_auth();
    Ok(admin)
}

/// Swaps the running code. Stored data is untouched; any new state the code
/// needs is added later through its `initialize_vN` step.
pub fn execute_upgrade(env: &Env, new_wasm_hash: BytesN<32>) -> Result<(), UpgradeError> {
    authorize_upgrade(env)?;

    let version = storage::get_version(env);
    if version == 0 {
        return Err(UpgradeError::NotInitialized);
    }

    storage::add_history(
        env,
        UpgradeHistory {
            wasm_hash: new_wasm_hash.clone(),
            version,
            upgraded_at: env.ledger().timestamp(),
        },
    );
    env.events().publish(
        (symbol_short!("upgrade"), symbol_short!("upgraded")),
        (new_wasm_hash.clone(), version),
    );

    env.deployer().update_current_contract_wasm(new_wasm_hash);
    Ok(())
}
