use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_controller(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Controller)
}

pub fn write_controller(env: &Env, controller: &Address) {
    env.storage().instance().set(&DataKey::Controller, controller);
}

/// Ids already handed out; the next one is `count + 1`.
pub fn get_identity_count(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::NextId).unwrap_or(0)
}

pub fn set_identity_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::NextId, &count);
}

pub fn read_identity(env: &Env, id: u64) -> Option<IdentityRecord> {
    env.storage().persistent().get(&DataKey::Identity(id))
}

pub fn write_identity(env: &Env, record: &IdentityRecord) {
    env.storage()
        .persistent()
        .set(&DataKey::Identity(record.id), record);
}

pub fn get_identity_of(env: &Env, owner: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::IdentityOf(owner.clone()))
        .unwrap_or(0)
}

pub fn set_identity_of(env: &Env, owner: &Address, id: u64) {
    env.storage()
        .persistent()
        .set(&DataKey::IdentityOf(owner.clone()), &id);
}
