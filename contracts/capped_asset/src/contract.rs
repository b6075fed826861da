use crate::events;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, Address, BytesN, Env, String};

contractmeta!(
    key = "Description",
    val = "Mintable value token with an immutable supply cap"
);

fn check_nonnegative(amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

#[contract]
pub struct CappedAsset;

#[contractimpl]
impl CappedAsset {
    pub fn initialize(
        env: Env,
        admin: Address,
        decimal: u32,
        name: String,
        symbol: String,
        cap: i128,
    ) -> Result<(), Error> {
        admin.require_auth();
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        if cap <= 0 {
            return Err(Error::InvalidCap);
        }

        write_admin(&env, &admin);
        set_metadata(
            &env,
            &TokenMetadata {
                decimal,
                name,
                symbol,
            },
        );
        set_cap(&env, cap);
        set_total_minted(&env, 0);
        upgradeability::init_version(&env, &admin)?;

        events::emit_initialized(&env, admin, cap);
        Ok(())
    }

    /// Mints `amount` to `to`. Nothing is written when the cap would be
    /// exceeded.
    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), Error> {
        let admin = get_admin(&env)?;
        admin.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        let total = get_total_minted(&env)
            .checked_add(amount)
            .ok_or(Error::CapExceeded)?;
        if total > get_cap(&env) {
            return Err(Error::CapExceeded);
        }

        receive_balance(&env, &to, amount)?;
        set_total_minted(&env, total);

        events::emit_mint(&env, to, amount, total);
        Ok(())
    }

    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), Error> {
        let admin = get_admin(&env)?;
        admin.require_auth();

        write_admin(&env, &new_admin);
        upgradeability::storage::set_admin(&env, &new_admin);

        events::emit_admin_changed(&env, admin, new_admin);
        Ok(())
    }

    // Token interface

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        get_allowance(&env, &from, &spender).amount
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), Error> {
        from.require_auth();
        check_nonnegative(amount)?;

        set_allowance(&env, &from, &spender, amount, expiration_ledger)?;

        events::emit_approve(&env, from, spender, amount, expiration_ledger);
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        get_balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        check_nonnegative(amount)?;

        spend_balance(&env, &from, amount)?;
        receive_balance(&env, &to, amount)?;

        events::emit_transfer(&env, from, to, amount);
        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        spender.require_auth();
        check_nonnegative(amount)?;

        spend_allowance(&env, &from, &spender, amount)?;
        spend_balance(&env, &from, amount)?;
        receive_balance(&env, &to, amount)?;

        events::emit_transfer(&env, from, to, amount);
        Ok(())
    }

    /// Burning lowers `total_minted`, freeing room under the cap.
    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        check_nonnegative(amount)?;

        spend_balance(&env, &from, amount)?;
        set_total_minted(&env, get_total_minted(&env) - amount);

        events::emit_burn(&env, from, amount);
        Ok(())
    }

    pub fn burn_from(env: Env, spender: Address, from: Address, amount: i128) -> Result<(), Error> {
        spender.require_auth();
        check_nonnegative(amount)?;

        spend_allowance(&env, &from, &spender, amount)?;
        spend_balance(&env, &from, amount)?;
        set_total_minted(&env, get_total_minted(&env) - amount);

        events::emit_burn(&env, from, amount);
        Ok(())
    }

    pub fn decimals(env: Env) -> Result<u32, Error> {
        Ok(get_metadata(&env)?.decimal)
    }

    pub fn name(env: Env) -> Result<String, Error> {
        Ok(get_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        Ok(get_metadata(&env)?.symbol)
    }

    // Supply reads

    pub fn cap(env: Env) -> i128 {
        get_cap(&env)
    }

    pub fn total_minted(env: Env) -> i128 {
        get_total_minted(&env)
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        get_admin(&env)
    }

    // Upgrades

    pub fn version(env: Env) -> u32 {
        upgradeability::storage::get_version(&env)
    }

    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        Ok(upgradeability::execute_upgrade(&env, new_wasm_hash)?)
    }
}
