#![allow(clippy::unwrap_used)]

use presale_tests::{find_event, setup_presale, T0, UNIT};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{Address, Env, TryFromVal};
use token_allocator::Category;

#[test]
fn test_purchase_is_logged() {
    let env = Env::default();
    let p = setup_presale(&env);
    p.open_default_sale(&env);
    let buyer = p.funded_buyer(&env, 1_000_000);
    p.sale.buy(&buyer, &1_000_000);

    let data = find_event(&env, &p.sale.address, "sale", "bought").unwrap();
    let (identity_id, payment, tokens) = <(u64, i128, i128)>::try_from_val(&env, &data).unwrap();
    assert_eq!(identity_id, 1);
    assert_eq!(payment, 1_000_000);
    assert_eq!(tokens, UNIT);
}

#[test]
fn test_round_advance_is_logged() {
    let env = Env::default();
    let p = setup_presale(&env);
    p.open_default_sale(&env);
    let buyer = p.funded_buyer(&env, 1_000_000_000);
    p.sale.buy(&buyer, &1_000_000_000);

    let data = find_event(&env, &p.sale.address, "sale", "round_adv").unwrap();
    assert_eq!(<(u32, u32)>::try_from_val(&env, &data).unwrap(), (0, 1));
}

#[test]
fn test_claim_is_logged() {
    let env = Env::default();
    let p = setup_presale(&env);
    p.open_default_sale(&env);
    let buyer = p.funded_buyer(&env, 1_000_000);
    p.sale.buy(&buyer, &1_000_000);
    let id = p.registry.identity_of(&buyer);

    env.ledger().set_timestamp(T0 + 100);
    p.sale.claim(&buyer, &id);

    let data = find_event(&env, &p.sale.address, "sale", "claimed").unwrap();
    let (logged_id, amount, bps) = <(u64, i128, u32)>::try_from_val(&env, &data).unwrap();
    assert_eq!(logged_id, id);
    assert_eq!(amount, UNIT * 3 / 10);
    assert_eq!(bps, 3_000);
}

#[test]
fn test_unlock_is_logged() {
    let env = Env::default();
    let p = setup_presale(&env);
    let wallet = Address::generate(&env);
    p.allocator.set_category(&Category::Team, &wallet, &42);
    p.allocator.unlock(&Category::Team);

    let data = find_event(&env, &p.allocator.address, "alloc", "unlocked").unwrap();
    let (category, paid_to, amount) =
        <(Category, Address, i128)>::try_from_val(&env, &data).unwrap();
    assert_eq!(category, Category::Team);
    assert_eq!(paid_to, wallet);
    assert_eq!(amount, 42);
}
