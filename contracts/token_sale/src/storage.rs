use crate::types::*;
use soroban_sdk::{Address, Env, Vec};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn is_opened(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Opened)
        .unwrap_or(false)
}

pub fn set_opened(env: &Env) {
    env.storage().instance().set(&DataKey::Opened, &true);
}

pub fn has_rounds(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Rounds)
}

pub fn get_rounds(env: &Env) -> Vec<Round> {
    env.storage()
        .persistent()
        .get(&DataKey::Rounds)
        .unwrap_or(Vec::new(env))
}

pub fn set_rounds(env: &Env, rounds: &Vec<Round>) {
    env.storage().persistent().set(&DataKey::Rounds, rounds);
}

pub fn get_current_round(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::CurrentRound)
        .unwrap_or(0)
}

pub fn set_current_round(env: &Env, index: u32) {
    env.storage().instance().set(&DataKey::CurrentRound, &index);
}

pub fn has_epochs(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Epochs)
}

pub fn get_epochs(env: &Env) -> Vec<Epoch> {
    env.storage()
        .persistent()
        .get(&DataKey::Epochs)
        .unwrap_or(Vec::new(env))
}

pub fn set_epochs(env: &Env, epochs: &Vec<Epoch>) {
    env.storage().persistent().set(&DataKey::Epochs, epochs);
}

pub fn get_total_raised(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalRaised)
        .unwrap_or(0)
}

pub fn set_total_raised(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalRaised, &amount);
}

pub fn get_total_sold(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSold)
        .unwrap_or(0)
}

pub fn set_total_sold(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalSold, &amount);
}

pub fn get_total_released(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalReleased)
        .unwrap_or(0)
}

pub fn set_total_released(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalReleased, &amount);
}

pub fn get_upgrade_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::UpgradeAdmin)
}

pub fn set_upgrade_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::UpgradeAdmin, admin);
}
