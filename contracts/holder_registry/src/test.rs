use crate::{Error, HolderRegistry, HolderRegistryClient, IdentityRecord};
use soroban_sdk::{testutils::Address as _, Address, Env};

fn create_registry(env: &Env) -> (HolderRegistryClient<'_>, Address, Address) {
    let contract_id = env.register_contract(None, HolderRegistry);
    let client = HolderRegistryClient::new(env, &contract_id);
    let admin = Address::generate(env);
    let controller = Address::generate(env);
    client.initialize(&admin);
    client.set_controller(&controller);
    (client, admin, controller)
}

#[test]
fn test_initialize_once() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, admin, controller) = create_registry(&env);

    assert_eq!(client.version(), 1);
    assert_eq!(client.identity_count(), 0);
    assert_eq!(client.controller(), Some(controller));
    assert_eq!(
        client.try_initialize(&admin),
        Err(Ok(Error::AlreadyInitialized))
    );
}

#[test]
fn test_set_controller_before_initialize_fails() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register_contract(None, HolderRegistry);
    let client = HolderRegistryClient::new(&env, &contract_id);

    let res = client.try_set_controller(&Address::generate(&env));
    assert_eq!(res, Err(Ok(Error::NotInitialized)));
}

#[test]
fn test_get_or_create_is_stable_per_owner() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _admin, controller) = create_registry(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    assert_eq!(client.identity_of(&alice), 0);

    let alice_id = client.get_or_create(&controller, &alice);
    let bob_id = client.get_or_create(&controller, &bob);
    assert_eq!(alice_id, 1);
    assert_eq!(bob_id, 2);
    assert_eq!(client.get_or_create(&controller, &alice), alice_id);

    assert_eq!(client.identity_of(&alice), alice_id);
    assert_eq!(client.owner_of(&bob_id), Some(bob.clone()));
    assert_eq!(client.identity_count(), 2);
    assert_eq!(
        client.get_identity(&bob_id),
        Some(IdentityRecord {
            id: bob_id,
            owner: bob,
            locked_total: 0,
            claimed_total: 0,
        })
    );
}

#[test]
fn test_only_controller_mutates() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _admin, controller) = create_registry(&env);
    let stranger = Address::generate(&env);
    let alice = Address::generate(&env);

    assert_eq!(
        client.try_get_or_create(&stranger, &alice),
        Err(Ok(Error::NotSaleManager))
    );

    let id = client.get_or_create(&controller, &alice);
    assert_eq!(
        client.try_increase_locked(&stranger, &id, &100),
        Err(Ok(Error::NotSaleManager))
    );
    assert_eq!(
        client.try_record_claim(&stranger, &id, &1),
        Err(Ok(Error::NotSaleManager))
    );
    assert_eq!(client.total_locked(&id), 0);
}

#[test]
fn test_controller_can_be_repointed() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _admin, old_controller) = create_registry(&env);
    let new_controller = Address::generate(&env);
    let alice = Address::generate(&env);

    client.set_controller(&new_controller);

    assert_eq!(
        client.try_get_or_create(&old_controller, &alice),
        Err(Ok(Error::NotSaleManager))
    );
    assert_eq!(client.get_or_create(&new_controller, &alice), 1);
}

#[test]
fn test_increase_locked() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _admin, controller) = create_registry(&env);
    let alice = Address::generate(&env);
    let id = client.get_or_create(&controller, &alice);

    client.increase_locked(&controller, &id, &500);
    client.increase_locked(&controller, &id, &250);
    assert_eq!(client.total_locked(&id), 750);

    assert_eq!(
        client.try_increase_locked(&controller, &id, &0),
        Err(Ok(Error::InvalidAmount))
    );
    assert_eq!(
        client.try_increase_locked(&controller, &99, &10),
        Err(Ok(Error::IdentityNotFound))
    );
}

#[test]
fn test_record_claim_bounded_by_locked() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _admin, controller) = create_registry(&env);
    let alice = Address::generate(&env);
    let id = client.get_or_create(&controller, &alice);
    client.increase_locked(&controller, &id, &1_000);

    client.record_claim(&controller, &id, &300);
    client.record_claim(&controller, &id, &700);
    assert_eq!(client.total_claimed(&id), 1_000);

    assert_eq!(
        client.try_record_claim(&controller, &id, &1),
        Err(Ok(Error::ClaimExceedsLocked))
    );
    assert_eq!(client.total_claimed(&id), 1_000);
}

#[test]
fn test_unknown_identity_reads_empty() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _admin, _controller) = create_registry(&env);

    assert_eq!(client.total_locked(&7), 0);
    assert_eq!(client.total_claimed(&7), 0);
    assert_eq!(client.owner_of(&7), None);
    assert_eq!(client.get_identity(&7), None);
}
