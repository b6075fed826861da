use soroban_sdk::{symbol_short, Address, Env, Symbol};

const TOPIC: Symbol = symbol_short!("asset");

pub fn emit_initialized(env: &Env, admin: Address, cap: i128) {
    env.events()
        .publish((TOPIC, symbol_short!("init")), (admin, cap));
}

pub fn emit_mint(env: &Env, to: Address, amount: i128, total_minted: i128) {
    env.events()
        .publish((TOPIC, symbol_short!("mint"), to), (amount, total_minted));
}

pub fn emit_transfer(env: &Env, from: Address, to: Address, amount: i128) {
    env.events()
        .publish((TOPIC, symbol_short!("transfer"), from, to), amount);
}

pub fn emit_approve(env: &Env, from: Address, spender: Address, amount: i128, expiration: u32) {
    env.events().publish(
        (TOPIC, symbol_short!("approve"), from, spender),
        (amount, expiration),
    );
}

pub fn emit_burn(env: &Env, from: Address, amount: i128) {
    env.events()
        .publish((TOPIC, symbol_short!("burn"), from), amount);
}

pub fn emit_admin_changed(env: &Env, previous: Address, admin: Address) {
    env.events()
        .publish((TOPIC, symbol_short!("set_admin")), (previous, admin));
}
