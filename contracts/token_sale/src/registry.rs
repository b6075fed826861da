use soroban_sdk::{contractclient, Address, Env};

/// The slice of the holder registry the sale calls into. The sale passes its
/// own address as `caller`.
#[contractclient(name = "RegistryClient")]
pub trait HolderRegistryInterface {
    fn get_or_create(env: Env, caller: Address, owner: Address) -> u64;
    fn increase_locked(env: Env, caller: Address, id: u64, amount: i128);
    fn record_claim(env: Env, caller: Address, id: u64, amount: i128);
    fn owner_of(env: Env, id: u64) -> Option<Address>;
    fn total_locked(env: Env, id: u64) -> i128;
    fn total_claimed(env: Env, id: u64) -> i128;
}
