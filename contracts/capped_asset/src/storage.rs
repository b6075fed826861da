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

pub fn get_metadata(env: &Env) -> Result<TokenMetadata, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Metadata)
        .ok_or(Error::NotInitialized)
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&DataKey::Metadata, metadata);
}

pub fn get_cap(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::Cap).unwrap_or(0)
}

pub fn set_cap(env: &Env, cap: i128) {
    env.storage().instance().set(&DataKey::Cap, &cap);
}

pub fn get_total_minted(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalMinted)
        .unwrap_or(0)
}

pub fn set_total_minted(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalMinted, &amount);
}

pub fn get_balance(env: &Env, id: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(id.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, id: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(id.clone()), &amount);
}

pub fn receive_balance(env: &Env, id: &Address, amount: i128) -> Result<(), Error> {
    let balance = get_balance(env, id)
        .checked_add(amount)
        .ok_or(Error::MathOverflow)?;
    set_balance(env, id, balance);
    Ok(())
}

pub fn spend_balance(env: &Env, id: &Address, amount: i128) -> Result<(), Error> {
    let balance = get_balance(env, id);
    if balance < amount {
        return Err(Error::InsufficientBalance);
    }
    set_balance(env, id, balance - amount);
    Ok(())
}

fn allowance_key(from: &Address, spender: &Address) -> DataKey {
    DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    })
}

/// Allowance still usable at the current ledger; expired entries read as zero.
pub fn get_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let value: Option<AllowanceValue> = env
        .storage()
        .persistent()
        .get(&allowance_key(from, spender));
    match value {
        Some(value) if value.expiration_ledger >= env.ledger().sequence() => value,
        Some(value) => AllowanceValue {
            amount: 0,
            expiration_ledger: value.expiration_ledger,
        },
        None => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

pub fn set_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), Error> {
    if amount > 0 && expiration_ledger < env.ledger().sequence() {
        return Err(Error::InvalidExpiration);
    }
    env.storage().persistent().set(
        &allowance_key(from, spender),
        &AllowanceValue {
            amount,
            expiration_ledger,
        },
    );
    Ok(())
}

pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), Error> {
    let allowance = get_allowance(env, from, spender);
    if allowance.amount < amount {
        return Err(Error::InsufficientAllowance);
    }
    if amount > 0 {
        set_allowance(
            env,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        )?;
    }
    Ok(())
}
