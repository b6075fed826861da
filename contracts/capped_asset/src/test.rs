use crate::{CappedAsset, CappedAssetClient, Error};
use soroban_sdk::testutils::{Address as _, Events, Ledger};
use soroban_sdk::{symbol_short, token, Address, Env, String, Symbol, TryFromVal};

const ONE: i128 = 1_000_000_000_000_000_000;

fn create_token(env: &Env, cap: i128) -> (CappedAssetClient<'_>, Address) {
    let contract_id = env.register_contract(None, CappedAsset);
    let client = CappedAssetClient::new(env, &contract_id);
    let admin = Address::generate(env);
    client.initialize(
        &admin,
        &18u32,
        &String::from_str(env, "CanaToken"),
        &String::from_str(env, "CANA"),
        &cap,
    );
    (client, admin)
}

#[test]
fn test_initialize() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, admin) = create_token(&env, 1_000 * ONE);

    assert_eq!(client.name(), String::from_str(&env, "CanaToken"));
    assert_eq!(client.symbol(), String::from_str(&env, "CANA"));
    assert_eq!(client.decimals(), 18);
    assert_eq!(client.cap(), 1_000 * ONE);
    assert_eq!(client.total_minted(), 0);
    assert_eq!(client.admin(), admin);
    assert_eq!(client.version(), 1);

    let again = client.try_initialize(
        &admin,
        &18u32,
        &String::from_str(&env, "X"),
        &String::from_str(&env, "X"),
        &ONE,
    );
    assert_eq!(again, Err(Ok(Error::AlreadyInitialized)));
}

#[test]
fn test_initialize_rejects_zero_cap() {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register_contract(None, CappedAsset);
    let client = CappedAssetClient::new(&env, &contract_id);
    let admin = Address::generate(&env);

    let res = client.try_initialize(
        &admin,
        &18u32,
        &String::from_str(&env, "CanaToken"),
        &String::from_str(&env, "CANA"),
        &0i128,
    );
    assert_eq!(res, Err(Ok(Error::InvalidCap)));
}

#[test]
fn test_mint_up_to_cap() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _admin) = create_token(&env, 10 * ONE);
    let holder = Address::generate(&env);

    client.mint(&holder, &(10 * ONE));
    assert_eq!(client.balance(&holder), 10 * ONE);
    assert_eq!(client.total_minted(), 10 * ONE);

    assert_eq!(client.try_mint(&holder, &1), Err(Ok(Error::CapExceeded)));
    assert_eq!(client.total_minted(), 10 * ONE);
    assert_eq!(client.balance(&holder), 10 * ONE);
}

#[test]
fn test_mint_exceeding_cap_leaves_supply_unchanged() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _admin) = create_token(&env, 1_000 * ONE);
    let allocator = Address::generate(&env);
    let owner = Address::generate(&env);

    client.mint(&allocator, &(300 * ONE));
    client.mint(&owner, &(200 * ONE));

    let res = client.try_mint(&owner, &(1_000 * ONE));
    assert_eq!(res, Err(Ok(Error::CapExceeded)));
    assert_eq!(client.total_minted(), 500 * ONE);
}

#[test]
fn test_mint_rejects_non_positive_amount() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _admin) = create_token(&env, ONE);
    let holder = Address::generate(&env);

    assert_eq!(client.try_mint(&holder, &0), Err(Ok(Error::InvalidAmount)));
    assert_eq!(client.try_mint(&holder, &-5), Err(Ok(Error::InvalidAmount)));
}

#[test]
fn test_mint_requires_admin() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _admin) = create_token(&env, ONE);
    let holder = Address::generate(&env);

    env.set_auths(&[]);
    assert!(client.try_mint(&holder, &1).is_err());
    assert_eq!(client.total_minted(), 0);
}

#[test]
fn test_transfer() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _admin) = create_token(&env, 1_000_000);
    let sender = Address::generate(&env);
    let recipient = Address::generate(&env);
    client.mint(&sender, &1000);

    client.transfer(&sender, &recipient, &200);
    assert_eq!(client.balance(&sender), 800);
    assert_eq!(client.balance(&recipient), 200);

    let res = client.try_transfer(&sender, &recipient, &801);
    assert_eq!(res, Err(Ok(Error::InsufficientBalance)));
    assert_eq!(client.balance(&sender), 800);
}

#[test]
fn test_allowance_and_transfer_from() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _admin) = create_token(&env, 1_000_000);
    let owner = Address::generate(&env);
    let spender = Address::generate(&env);
    let recipient = Address::generate(&env);
    client.mint(&owner, &1000);

    let expiration = env.ledger().sequence() + 100;
    client.approve(&owner, &spender, &300, &expiration);
    assert_eq!(client.allowance(&owner, &spender), 300);

    client.transfer_from(&spender, &owner, &recipient, &250);
    assert_eq!(client.balance(&recipient), 250);
    assert_eq!(client.allowance(&owner, &spender), 50);

    let res = client.try_transfer_from(&spender, &owner, &recipient, &51);
    assert_eq!(res, Err(Ok(Error::InsufficientAllowance)));

    env.ledger().with_mut(|l| l.sequence_number = expiration + 1);
    assert_eq!(client.allowance(&owner, &spender), 0);
}

#[test]
fn test_burn_frees_cap_room() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _admin) = create_token(&env, 1_000);
    let holder = Address::generate(&env);
    client.mint(&holder, &1_000);

    client.burn(&holder, &400);
    assert_eq!(client.total_minted(), 600);
    assert_eq!(client.balance(&holder), 600);

    client.mint(&holder, &400);
    assert_eq!(client.total_minted(), 1_000);
}

#[test]
fn test_works_through_token_client() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _admin) = create_token(&env, 1_000);
    let holder = Address::generate(&env);
    let other = Address::generate(&env);
    client.mint(&holder, &500);

    let generic = token::Client::new(&env, &client.address);
    generic.transfer(&holder, &other, &125);
    assert_eq!(generic.balance(&other), 125);
    assert_eq!(generic.decimals(), 18);
}

#[test]
fn test_mint_emits_event() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _admin) = create_token(&env, 1_000);
    let holder = Address::generate(&env);
    client.mint(&holder, &10);

    let minted = env.events().all().iter().any(|(contract, topics, _data)| {
        contract == client.address
            && topics.len() >= 2
            && Symbol::try_from_val(&env, &topics.get(1).unwrap())
                .map_or(false, |action| action == symbol_short!("mint"))
    });
    assert!(minted);
}

#[test]
fn test_set_admin_moves_mint_rights() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _admin) = create_token(&env, 1_000);
    let new_admin = Address::generate(&env);
    client.set_admin(&new_admin);

    assert_eq!(client.admin(), new_admin);
}
