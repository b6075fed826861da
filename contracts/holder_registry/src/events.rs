use soroban_sdk::{symbol_short, Address, Env, Symbol};

const TOPIC: Symbol = symbol_short!("registry");

pub fn emit_initialized(env: &Env, admin: Address) {
    env.events().publish((TOPIC, symbol_short!("init")), admin);
}

pub fn emit_controller_set(env: &Env, controller: Address) {
    env.events()
        .publish((TOPIC, symbol_short!("ctrl")), controller);
}

pub fn emit_created(env: &Env, id: u64, owner: Address) {
    env.events()
        .publish((TOPIC, symbol_short!("created"), owner), id);
}

pub fn emit_locked(env: &Env, id: u64, amount: i128, locked_total: i128) {
    env.events()
        .publish((TOPIC, symbol_short!("locked"), id), (amount, locked_total));
}

pub fn emit_claimed(env: &Env, id: u64, amount: i128, claimed_total: i128) {
    env.events().publish(
        (TOPIC, symbol_short!("claimed"), id),
        (amount, claimed_total),
    );
}
