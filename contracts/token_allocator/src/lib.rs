// Token Allocator - fixed treasury buckets paid out once per allocation
#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, symbol_short, token,
    Address, BytesN, Env, Symbol,
};
use upgradeability::UpgradeError;

pub mod distribution;


pub use distribution::{split_supply, SupplySplit};

contractmeta!(
    key = "Description",
    val = "One-shot treasury category payouts"
);

// Storage keys
const ADMIN: Symbol = symbol_short!("ADMIN");
const TOKEN: Symbol = symbol_short!("TOKEN");

// Event topic
const TOPIC: Symbol = symbol_short!("alloc");

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    InvalidAmount = 4,
    NoWallet = 5,
    NoAllocation = 6,
    AlreadyDisbursed = 7,
    AssetTransferFailed = 8,
    MathOverflow = 9,
}

impl From<UpgradeError> for Error {
    fn from(err: UpgradeError) -> Self {
        match err {
            UpgradeError::AlreadyInitialized => Error::AlreadyInitialized,
            UpgradeError::NotInitialized => Error::NotInitialized,
            _ => Error::NotAuthorized,
        }
    }
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Category {
    Ecosystem = 0,
    Community = 1,
    Team = 2,
    Reserve = 3,
    Partnership = 4,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Ecosystem,
        Category::Community,
        Category::Team,
        Category::Reserve,
        Category::Partnership,
    ];
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CategoryAllocation {
    pub wallet: Option<Address>,
    pub amount: i128,
    pub disbursed: bool,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Category(Category),
}

#[contract]
pub struct TokenAllocatorContract;

#[contractimpl]
impl TokenAllocatorContract {
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        admin.require_auth();
        if env.storage().instance().has(&ADMIN) {
            return Err(Error::AlreadyInitialized);
        }

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&TOKEN, &token);
        upgradeability::init_version(&env, &admin)?;

        env.events()
            .publish((TOPIC, symbol_short!("init")), (admin, token));
        Ok(())
    }

    /// Overwrites the wallet and amount of `category` and makes it payable
    /// again.
    pub fn set_category(
        env: Env,
        category: Category,
        wallet: Address,
        amount: i128,
    ) -> Result<(), Error> {
        Self::require_admin(&env)?;
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let allocation = CategoryAllocation {
            wallet: Some(wallet.clone()),
            amount,
            disbursed: false,
        };
        env.storage()
            .persistent()
            .set(&DataKey::Category(category), &allocation);

        env.events().publish(
            (TOPIC, symbol_short!("category")),
            (category, wallet, amount),
        );
        Ok(())
    }

    /// Pays the category's amount to its wallet from this contract's balance.
    pub fn unlock(env: Env, category: Category) -> Result<i128, Error> {
        Self::require_admin(&env)?;

        let mut allocation = Self::load_category(&env, category);
        let wallet = allocation.wallet.clone().ok_or(Error::NoWallet)?;
        if allocation.amount == 0 {
            return Err(Error::NoAllocation);
        }
        if allocation.disbursed {
            return Err(Error::AlreadyDisbursed);
        }

        let token = Self::load_token(&env)?;
        Self::execute_token_transfer(
            &env,
            &token,
            &env.current_contract_address(),
            &wallet,
            allocation.amount,
        )?;

        allocation.disbursed = true;
        env.storage()
            .persistent()
            .set(&DataKey::Category(category), &allocation);

        env.events().publish(
            (TOPIC, symbol_short!("unlocked")),
            (category, wallet, allocation.amount),
        );
        Ok(allocation.amount)
    }

    // Reads

    pub fn get_category(env: Env, category: Category) -> CategoryAllocation {
        Self::load_category(&env, category)
    }

    /// Sum of the amounts not yet paid out.
    pub fn total_allocated(env: Env) -> Result<i128, Error> {
        let mut total: i128 = 0;
        for category in Category::ALL {
            let allocation = Self::load_category(&env, category);
            if !allocation.disbursed {
                total = total
                    .checked_add(allocation.amount)
                    .ok_or(Error::MathOverflow)?;
            }
        }
        Ok(total)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        Self::load_token(&env)
    }

    /// Default bucket amounts for a total supply.
    pub fn plan(_env: Env, total_supply: i128) -> Result<SupplySplit, Error> {
        split_supply(total_supply).ok_or(Error::InvalidAmount)
    }

    pub fn version(env: Env) -> u32 {
        upgradeability::storage::get_version(&env)
    }

    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        Ok(upgradeability::execute_upgrade(&env, new_wasm_hash)?)
    }
}

impl TokenAllocatorContract {
    fn require_admin(env: &Env) -> Result<(), Error> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&ADMIN)
            .ok_or(Error::NotInitialized)?;
        admin.require_auth();
        Ok(())
    }

    fn load_token(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&TOKEN)
            .ok_or(Error::NotInitialized)
    }

    fn load_category(env: &Env, category: Category) -> CategoryAllocation {
        env.storage()
            .persistent()
            .get(&DataKey::Category(category))
            .unwrap_or(CategoryAllocation {
                wallet: None,
                amount: 0,
                disbursed: false,
            })
    }

    fn execute_token_transfer(
        env: &Env,
        token: &Address,
        from: &Address,
        to: &Address,
        amount: i128,
    ) -> Result<(), Error> {
        match token::Client::new(env, token).try_transfer(from, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(Error::AssetTransferFailed),
        }
    }
}
