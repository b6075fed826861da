use crate::events;
use crate::registry::RegistryClient;
use crate::rounds;
use crate::storage::*;
use crate::types::*;
use crate::vesting;
use soroban_sdk::{contract, contractimpl, contractmeta, token, Address, BytesN, Env, Vec};
use upgradeability::migration::{execute_migration, Migratable};
use upgradeability::UpgradeError;

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Tiered token sale with epoch-based vesting"
);

fn require_admin(env: &Env) -> Result<Address, Error> {
    let admin = get_admin(env)?;
    admin.require_auth();
    Ok(admin)
}

fn ensure_not_open(env: &Env) -> Result<(), Error> {
    if is_opened(env) {
        return Err(Error::SaleAlreadyOpen);
    }
    Ok(())
}

fn sale_status(env: &Env) -> SaleStatus {
    if is_opened(env) {
        return SaleStatus::Open;
    }
    match (has_rounds(env), has_epochs(env)) {
        (true, true) => SaleStatus::FullyConfigured,
        (true, false) => SaleStatus::RoundsSet,
        (false, true) => SaleStatus::EpochsSet,
        (false, false) => SaleStatus::Unconfigured,
    }
}

/// Sale-token units the contract must keep: sold but unreleased holdings
/// plus round capacity that can still be bought.
fn reserved(env: &Env) -> Result<i128, Error> {
    let mut total = get_total_sold(env)
        .checked_sub(get_total_released(env))
        .ok_or(Error::MathOverflow)?;
    for round in get_rounds(env).iter() {
        total = total
            .checked_add(round.remaining())
            .ok_or(Error::MathOverflow)?;
    }
    Ok(total)
}

/// v1 sales had a single admin for everything. v2 hands the right to swap
/// code to the `UpgradeAdmin` written just before the migration runs.
struct UpgradeAdminMigration;

impl Migratable for UpgradeAdminMigration {
    const TARGET_VERSION: u32 = SCHEMA_V2;

    fn migrate(env: &Env, _from_version: u32) -> Result<(), UpgradeError> {
        let upgrade_admin = get_upgrade_admin(env).ok_or(UpgradeError::MigrationFailed)?;
        upgradeability::storage::set_admin(env, &upgrade_admin);
        Ok(())
    }
}

#[contract]
pub struct TokenSaleContract;

#[contractimpl]
impl TokenSaleContract {
    /// Initialize the sale. The scaling unit is fixed here from the sale
    /// token's decimals.
    pub fn initialize(
        env: Env,
        admin: Address,
        payment_token: Address,
        sale_token: Address,
        registry: Address,
        treasury: Address,
    ) -> Result<(), Error> {
        admin.require_auth();
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }

        let decimals = match token::Client::new(&env, &sale_token).try_decimals() {
            Ok(Ok(decimals)) => decimals,
            _ => return Err(Error::InvalidInput),
        };
        let unit = fp_math::pow10(decimals).ok_or(Error::MathOverflow)?;

        set_config(
            &env,
            &SaleConfig {
                payment_token,
                sale_token: sale_token.clone(),
                registry,
                treasury,
                unit,
            },
        );
        set_admin(&env, &admin);
        set_current_round(&env, 0);
        set_total_raised(&env, 0);
        set_total_sold(&env, 0);
        set_total_released(&env, 0);
        upgradeability::init_version(&env, &admin)?;

        events::emit_initialized(&env, admin, sale_token, unit);
        Ok(())
    }

    /// Adds the v2 upgrade admin. Runs once, after `initialize`.
    pub fn initialize_v2(env: Env, admin: Address, upgrade_admin: Address) -> Result<(), Error> {
        let stored = get_admin(&env)?;
        if stored != admin {
            return Err(Error::NotAuthorized);
        }
        admin.require_auth();

        // Rolled back with the rest of the call if the migration fails.
        set_upgrade_admin(&env, &upgrade_admin);
        let from_version = execute_migration::<UpgradeAdminMigration>(&env)?;

        events::emit_migrated(&env, from_version, SCHEMA_V2, upgrade_admin);
        Ok(())
    }

    // Configuration

    pub fn configure_rounds(
        env: Env,
        prices: Vec<i128>,
        amounts: Vec<i128>,
        expected_total: i128,
    ) -> Result<(), Error> {
        require_admin(&env)?;
        ensure_not_open(&env)?;
        if has_rounds(&env) {
            return Err(Error::AlreadyConfigured);
        }
        rounds::validate(&prices, &amounts, expected_total, MAX_ROUNDS)?;

        let mut configured = Vec::new(&env);
        for (price, total_amount) in prices.iter().zip(amounts.iter()) {
            configured.push_back(Round {
                price,
                total_amount,
                sold: 0,
            });
        }
        set_rounds(&env, &configured);
        set_current_round(&env, 0);

        events::emit_rounds_configured(&env, configured.len(), expected_total);
        Ok(())
    }

    pub fn configure_claim_schedule(env: Env, epochs: Vec<Epoch>) -> Result<(), Error> {
        require_admin(&env)?;
        ensure_not_open(&env)?;
        if has_epochs(&env) {
            return Err(Error::AlreadyConfigured);
        }
        vesting::validate(&epochs)?;

        set_epochs(&env, &epochs);

        events::emit_epochs_configured(&env, epochs.len());
        Ok(())
    }

    pub fn open_sale(env: Env) -> Result<(), Error> {
        require_admin(&env)?;
        ensure_not_open(&env)?;
        if !has_rounds(&env) || !has_epochs(&env) {
            return Err(Error::NotConfigured);
        }

        set_opened(&env);

        events::emit_opened(&env, env.ledger().timestamp());
        Ok(())
    }

    // Buyer / holder

    /// Buys at the current round price and locks the result against the
    /// buyer's identity. Returns the sale-token amount locked.
    pub fn buy(env: Env, buyer: Address, payment_amount: i128) -> Result<i128, Error> {
        buyer.require_auth();

        let config = get_config(&env)?;
        if !is_opened(&env) {
            return Err(Error::SaleNotOpen);
        }
        if payment_amount == 0 {
            return Err(Error::ZeroAmount);
        }
        if payment_amount < 0 {
            return Err(Error::InvalidInput);
        }

        let mut sale_rounds = get_rounds(&env);
        let cursor = get_current_round(&env);
        let fill = rounds::fill(&mut sale_rounds, cursor, payment_amount, config.unit)?;

        // Capacity is committed before the payment pull.
        set_rounds(&env, &sale_rounds);
        if fill.cursor != cursor {
            set_current_round(&env, fill.cursor);
            events::emit_round_advanced(&env, cursor, fill.cursor);
        }

        let payment = token::Client::new(&env, &config.payment_token);
        match payment.try_transfer(&buyer, &config.treasury, &payment_amount) {
            Ok(Ok(())) => {}
            _ => return Err(Error::PaymentTransferFailed),
        }

        let this = env.current_contract_address();
        let registry = RegistryClient::new(&env, &config.registry);
        let identity_id = match registry.try_get_or_create(&this, &buyer) {
            Ok(Ok(id)) => id,
            _ => return Err(Error::RegistryCallFailed),
        };
        match registry.try_increase_locked(&this, &identity_id, &fill.tokens) {
            Ok(Ok(())) => {}
            _ => return Err(Error::RegistryCallFailed),
        }

        let raised = get_total_raised(&env)
            .checked_add(payment_amount)
            .ok_or(Error::MathOverflow)?;
        let sold = get_total_sold(&env)
            .checked_add(fill.tokens)
            .ok_or(Error::MathOverflow)?;
        set_total_raised(&env, raised);
        set_total_sold(&env, sold);

        events::emit_bought(&env, buyer, identity_id, payment_amount, fill.tokens);
        Ok(fill.tokens)
    }

    /// Releases whatever has vested since the last claim.
    pub fn claim(env: Env, holder: Address, identity_id: u64) -> Result<i128, Error> {
        holder.require_auth();

        let config = get_config(&env)?;
        let registry = RegistryClient::new(&env, &config.registry);
        if registry.owner_of(&identity_id) != Some(holder.clone()) {
            return Err(Error::NotOwner);
        }

        let locked = registry.total_locked(&identity_id);
        if locked == 0 {
            return Err(Error::NoLocked);
        }
        let claimed = registry.total_claimed(&identity_id);
        let bps = vesting::vested_bps(&get_epochs(&env), env.ledger().timestamp());
        let amount = vesting::claimable(locked, claimed, bps)?;
        if amount <= 0 {
            return Err(Error::NothingToClaim);
        }

        let this = env.current_contract_address();
        match registry.try_record_claim(&this, &identity_id, &amount) {
            Ok(Ok(())) => {}
            _ => return Err(Error::RegistryCallFailed),
        }

        let sale_token = token::Client::new(&env, &config.sale_token);
        match sale_token.try_transfer(&this, &holder, &amount) {
            Ok(Ok(())) => {}
            _ => return Err(Error::AssetTransferFailed),
        }

        let released = get_total_released(&env)
            .checked_add(amount)
            .ok_or(Error::MathOverflow)?;
        set_total_released(&env, released);

        events::emit_claimed(&env, holder, identity_id, amount, bps);
        Ok(amount)
    }

    /// Sends sale tokens not owed to any holder to `to`.
    pub fn withdraw_surplus(env: Env, to: Address) -> Result<i128, Error> {
        require_admin(&env)?;
        let config = get_config(&env)?;

        let this = env.current_contract_address();
        let sale_token = token::Client::new(&env, &config.sale_token);
        let surplus = sale_token
            .balance(&this)
            .checked_sub(reserved(&env)?)
            .ok_or(Error::MathOverflow)?;
        if surplus <= 0 {
            return Err(Error::NothingToRecover);
        }

        match sale_token.try_transfer(&this, &to, &surplus) {
            Ok(Ok(())) => {}
            _ => return Err(Error::AssetTransferFailed),
        }

        events::emit_surplus_withdrawn(&env, to, surplus);
        Ok(surplus)
    }

    // View functions

    pub fn status(env: Env) -> SaleStatus {
        sale_status(&env)
    }

    pub fn current_round_index(env: Env) -> u32 {
        get_current_round(&env)
    }

    pub fn round_count(env: Env) -> u32 {
        get_rounds(&env).len()
    }

    pub fn get_round(env: Env, index: u32) -> Option<Round> {
        get_rounds(&env).get(index)
    }

    pub fn get_rounds(env: Env) -> Vec<Round> {
        get_rounds(&env)
    }

    pub fn get_epochs(env: Env) -> Vec<Epoch> {
        get_epochs(&env)
    }

    pub fn vested_bps(env: Env) -> u32 {
        vesting::vested_bps(&get_epochs(&env), env.ledger().timestamp())
    }

    /// Amount `claim` would release right now, or 0.
    pub fn claimable(env: Env, identity_id: u64) -> Result<i128, Error> {
        let config = get_config(&env)?;
        let registry = RegistryClient::new(&env, &config.registry);
        let bps = vesting::vested_bps(&get_epochs(&env), env.ledger().timestamp());
        let amount = vesting::claimable(
            registry.total_locked(&identity_id),
            registry.total_claimed(&identity_id),
            bps,
        )?;
        Ok(amount.max(0))
    }

    pub fn total_raised(env: Env) -> i128 {
        get_total_raised(&env)
    }

    pub fn total_sold(env: Env) -> i128 {
        get_total_sold(&env)
    }

    pub fn total_released(env: Env) -> i128 {
        get_total_released(&env)
    }

    pub fn get_config(env: Env) -> Result<SaleConfig, Error> {
        get_config(&env)
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        get_admin(&env)
    }

    pub fn upgrade_admin(env: Env) -> Option<Address> {
        get_upgrade_admin(&env)
    }

    // Upgrades

    pub fn version(env: Env) -> u32 {
        upgradeability::storage::get_version(&env)
    }

    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        Ok(upgradeability::execute_upgrade(&env, new_wasm_hash)?)
    }
}
