use soroban_sdk::{symbol_short, Address, Env, Symbol};

const TOPIC: Symbol = symbol_short!("sale");

pub fn emit_initialized(env: &Env, admin: Address, sale_token: Address, unit: i128) {
    env.events()
        .publish((TOPIC, symbol_short!("init")), (admin, sale_token, unit));
}

pub fn emit_rounds_configured(env: &Env, count: u32, total: i128) {
    env.events()
        .publish((TOPIC, symbol_short!("rounds")), (count, total));
}

pub fn emit_epochs_configured(env: &Env, count: u32) {
    env.events().publish((TOPIC, symbol_short!("epochs")), count);
}

pub fn emit_opened(env: &Env, at: u64) {
    env.events().publish((TOPIC, symbol_short!("opened")), at);
}

pub fn emit_bought(env: &Env, buyer: Address, identity_id: u64, payment: i128, tokens: i128) {
    env.events().publish(
        (TOPIC, symbol_short!("bought"), buyer),
        (identity_id, payment, tokens),
    );
}

pub fn emit_round_advanced(env: &Env, from: u32, to: u32) {
    env.events()
        .publish((TOPIC, symbol_short!("round_adv")), (from, to));
}

pub fn emit_claimed(env: &Env, holder: Address, identity_id: u64, amount: i128, vested_bps: u32) {
    env.events().publish(
        (TOPIC, symbol_short!("claimed"), holder),
        (identity_id, amount, vested_bps),
    );
}

pub fn emit_surplus_withdrawn(env: &Env, to: Address, amount: i128) {
    env.events()
        .publish((TOPIC, symbol_short!("surplus")), (to, amount));
}

pub fn emit_migrated(env: &Env, from_version: u32, to_version: u32, upgrade_admin: Address) {
    env.events().publish(
        (TOPIC, symbol_short!("migrated")),
        (from_version, to_version, upgrade_admin),
    );
}
