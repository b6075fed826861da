use crate::events;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, Address, BytesN, Env};

contractmeta!(
    key = "Description",
    val = "Per-buyer identity records holding locked and claimed sale balances"
);

/// Only the registered controller may mutate balances, and it must sign.
fn require_controller(env: &Env, caller: &Address) -> Result<(), Error> {
    match get_controller(env) {
        Some(controller) if controller == *caller => {
            caller.require_auth();
            Ok(())
        }
        _ => Err(Error::NotSaleManager),
    }
}

fn load_identity(env: &Env, id: u64) -> Result<IdentityRecord, Error> {
    read_identity(env, id).ok_or(Error::IdentityNotFound)
}

#[contract]
pub struct HolderRegistry;

#[contractimpl]
impl HolderRegistry {
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        admin.require_auth();
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        write_admin(&env, &admin);
        set_identity_count(&env, 0);
        upgradeability::init_version(&env, &admin)?;

        events::emit_initialized(&env, admin);
        Ok(())
    }

    /// Points the registry at the sale contract allowed to mutate balances.
    pub fn set_controller(env: Env, controller: Address) -> Result<(), Error> {
        let admin = get_admin(&env)?;
        admin.require_auth();

        write_controller(&env, &controller);

        events::emit_controller_set(&env, controller);
        Ok(())
    }

    // Controller operations

    /// Returns the owner's id, minting the next one on first use.
    pub fn get_or_create(env: Env, caller: Address, owner: Address) -> Result<u64, Error> {
        require_controller(&env, &caller)?;

        let existing = get_identity_of(&env, &owner);
        if existing != 0 {
            return Ok(existing);
        }

        let id = get_identity_count(&env)
            .checked_add(1)
            .ok_or(Error::MathOverflow)?;
        write_identity(
            &env,
            &IdentityRecord {
                id,
                owner: owner.clone(),
                locked_total: 0,
                claimed_total: 0,
            },
        );
        set_identity_of(&env, &owner, id);
        set_identity_count(&env, id);

        events::emit_created(&env, id, owner);
        Ok(id)
    }

    pub fn increase_locked(env: Env, caller: Address, id: u64, amount: i128) -> Result<(), Error> {
        require_controller(&env, &caller)?;

        let mut record = load_identity(&env, id)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        record.locked_total = record
            .locked_total
            .checked_add(amount)
            .ok_or(Error::MathOverflow)?;
        write_identity(&env, &record);

        events::emit_locked(&env, id, amount, record.locked_total);
        Ok(())
    }

    pub fn record_claim(env: Env, caller: Address, id: u64, amount: i128) -> Result<(), Error> {
        require_controller(&env, &caller)?;

        let mut record = load_identity(&env, id)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        let claimed = record
            .claimed_total
            .checked_add(amount)
            .ok_or(Error::MathOverflow)?;
        if claimed > record.locked_total {
            return Err(Error::ClaimExceedsLocked);
        }
        record.claimed_total = claimed;
        write_identity(&env, &record);

        events::emit_claimed(&env, id, amount, claimed);
        Ok(())
    }

    // Reads

    pub fn identity_of(env: Env, owner: Address) -> u64 {
        get_identity_of(&env, &owner)
    }

    pub fn total_locked(env: Env, id: u64) -> i128 {
        read_identity(&env, id).map_or(0, |r| r.locked_total)
    }

    pub fn total_claimed(env: Env, id: u64) -> i128 {
        read_identity(&env, id).map_or(0, |r| r.claimed_total)
    }

    pub fn owner_of(env: Env, id: u64) -> Option<Address> {
        read_identity(&env, id).map(|r| r.owner)
    }

    pub fn get_identity(env: Env, id: u64) -> Option<IdentityRecord> {
        read_identity(&env, id)
    }

    pub fn identity_count(env: Env) -> u64 {
        get_identity_count(&env)
    }

    pub fn controller(env: Env) -> Option<Address> {
        get_controller(&env)
    }

    // Upgrades

    pub fn version(env: Env) -> u32 {
        upgradeability::storage::get_version(&env)
    }

    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        Ok(upgradeability::execute_upgrade(&env, new_wasm_hash)?)
    }
}
