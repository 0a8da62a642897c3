#![cfg(test)]

use soroban_sdk::{testutils::Address as _, token, Address, Env};

use crate::{storage, PaymentEscrow, PaymentEscrowClient};

fn setup_test() -> (
    Env,
    Address,
    Address,
    Address,
    Address,
    PaymentEscrowClient<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let merchant = Address::generate(&env);
    let platform = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_address = env
        .register_stellar_asset_contract_v2(token_admin)
        .address();

    let contract_id = env.register(PaymentEscrow, ());
    let client = PaymentEscrowClient::new(&env, &contract_id);

    client.init(&merchant, &token_address, &platform, &owner);

    (env, owner, merchant, platform, token_address, client)
}

fn fund_escrow(env: &Env, token_address: &Address, escrow: &Address, amount: i128) {
    token::StellarAssetClient::new(env, token_address).mint(escrow, &amount);
}

#[test]
fn test_init_sets_configuration() {
    let (_env, owner, merchant, platform, token_address, client) = setup_test();

    assert_eq!(client.get_owner(), owner);
    assert_eq!(client.get_merchant_address(), merchant);
    assert_eq!(client.get_platform_address(), platform);
    assert_eq!(client.get_token_address(), token_address);
    assert_eq!(client.get_fee(), 0);
    assert_eq!(client.is_paused(), false);
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")] // AlreadyInitialized
fn test_double_init() {
    let (_env, owner, merchant, platform, token_address, client) = setup_test();

    client.init(&merchant, &token_address, &platform, &owner);
}

#[test]
fn test_set_fee() {
    let (_env, owner, _merchant, _platform, _token_address, client) = setup_test();

    client.set_fee(&owner, &250);
    assert_eq!(client.get_fee(), 250);

    // 50% is the maximum allowed
    client.set_fee(&owner, &5000);
    assert_eq!(client.get_fee(), 5000);
}

#[test]
#[should_panic(expected = "Error(Contract, #7)")] // FeeTooHigh
fn test_set_fee_above_maximum() {
    let (_env, owner, _merchant, _platform, _token_address, client) = setup_test();

    client.set_fee(&owner, &5001);
}

#[test]
#[should_panic(expected = "Error(Contract, #3)")] // Unauthorized
fn test_set_fee_unauthorized() {
    let (env, _owner, _merchant, _platform, _token_address, client) = setup_test();

    let non_owner = Address::generate(&env);
    client.set_fee(&non_owner, &250);
}

#[test]
#[should_panic(expected = "Error(Contract, #4)")] // EscrowPaused
fn test_set_fee_while_paused() {
    let (_env, owner, _merchant, _platform, _token_address, client) = setup_test();

    client.pause(&owner);
    client.set_fee(&owner, &250);
}

#[test]
fn test_set_payout_addresses() {
    let (env, owner, _merchant, _platform, _token_address, client) = setup_test();

    let new_merchant = Address::generate(&env);
    let new_platform = Address::generate(&env);

    client.set_merchant_address(&owner, &new_merchant);
    client.set_platform_address(&owner, &new_platform);

    assert_eq!(client.get_merchant_address(), new_merchant);
    assert_eq!(client.get_platform_address(), new_platform);
}

#[test]
fn test_set_payout_addresses_while_paused() {
    let (env, owner, _merchant, _platform, _token_address, client) = setup_test();

    client.pause(&owner);

    // Address rotation must stay possible during an emergency pause
    let new_merchant = Address::generate(&env);
    let new_platform = Address::generate(&env);

    client.set_merchant_address(&owner, &new_merchant);
    client.set_platform_address(&owner, &new_platform);

    assert_eq!(client.get_merchant_address(), new_merchant);
    assert_eq!(client.get_platform_address(), new_platform);
    assert_eq!(client.is_paused(), true);
}

#[test]
#[should_panic(expected = "Error(Contract, #3)")] // Unauthorized
fn test_set_merchant_address_unauthorized() {
    let (env, _owner, _merchant, _platform, _token_address, client) = setup_test();

    let non_owner = Address::generate(&env);
    client.set_merchant_address(&non_owner, &non_owner);
}

#[test]
fn test_distribute_splits_balance() {
    let (env, owner, merchant, platform, token_address, client) = setup_test();

    // 1001 units at 2.5% => floor(1001 * 250 / 10000) = 25 for the platform
    client.set_fee(&owner, &250);
    fund_escrow(&env, &token_address, &client.address, 1001);

    client.distribute();

    let token_client = token::Client::new(&env, &token_address);
    assert_eq!(token_client.balance(&platform), 25);
    assert_eq!(token_client.balance(&merchant), 976);
    assert_eq!(token_client.balance(&client.address), 0);
}

#[test]
fn test_distribute_zero_fee_skips_platform() {
    let (env, _owner, merchant, platform, token_address, client) = setup_test();

    fund_escrow(&env, &token_address, &client.address, 500);

    client.distribute();

    let token_client = token::Client::new(&env, &token_address);
    assert_eq!(token_client.balance(&platform), 0);
    assert_eq!(token_client.balance(&merchant), 500);
    assert_eq!(token_client.balance(&client.address), 0);
}

#[test]
fn test_distribute_conserves_balance() {
    let (env, owner, merchant, platform, token_address, client) = setup_test();

    // Odd balance and an odd fee, nothing may be lost to rounding
    client.set_fee(&owner, &3333);
    fund_escrow(&env, &token_address, &client.address, 999_999);

    client.distribute();

    let token_client = token::Client::new(&env, &token_address);
    let platform_amount = token_client.balance(&platform);
    let merchant_amount = token_client.balance(&merchant);

    assert_eq!(platform_amount, 333_299);
    assert_eq!(platform_amount + merchant_amount, 999_999);
    assert_eq!(token_client.balance(&client.address), 0);
}

#[test]
fn test_distribute_callable_by_anyone() {
    let (env, owner, merchant, _platform, token_address, client) = setup_test();

    client.set_fee(&owner, &250);
    fund_escrow(&env, &token_address, &client.address, 10_000);

    // No auth is required for distribution
    env.set_auths(&[]);
    client.distribute();

    let token_client = token::Client::new(&env, &token_address);
    assert_eq!(token_client.balance(&merchant), 9_750);
}

#[test]
#[should_panic(expected = "Error(Contract, #8)")] // NothingToDistribute
fn test_distribute_empty_escrow() {
    let (_env, _owner, _merchant, _platform, _token_address, client) = setup_test();

    client.distribute();
}

#[test]
#[should_panic(expected = "Error(Contract, #4)")] // EscrowPaused
fn test_distribute_while_paused() {
    let (env, owner, _merchant, _platform, token_address, client) = setup_test();

    fund_escrow(&env, &token_address, &client.address, 1000);
    client.pause(&owner);

    client.distribute();
}

#[test]
#[should_panic(expected = "Error(Contract, #9)")] // ReentrantDistribution
fn test_distribute_reentry_blocked() {
    let (env, _owner, _merchant, _platform, token_address, client) = setup_test();

    fund_escrow(&env, &token_address, &client.address, 1000);

    // Simulate a distribution already in flight
    env.as_contract(&client.address, || {
        storage::set_distributing(&env, true);
    });

    client.distribute();
}

#[test]
fn test_pause_unpause() {
    let (_env, owner, _merchant, _platform, _token_address, client) = setup_test();

    client.pause(&owner);
    assert_eq!(client.is_paused(), true);

    client.unpause(&owner);
    assert_eq!(client.is_paused(), false);
}

#[test]
#[should_panic(expected = "Error(Contract, #5)")] // AlreadyPaused
fn test_pause_twice() {
    let (_env, owner, _merchant, _platform, _token_address, client) = setup_test();

    client.pause(&owner);
    client.pause(&owner);
}

#[test]
#[should_panic(expected = "Error(Contract, #6)")] // NotPaused
fn test_unpause_active_escrow() {
    let (_env, owner, _merchant, _platform, _token_address, client) = setup_test();

    client.unpause(&owner);
}

#[test]
#[should_panic(expected = "Error(Contract, #3)")] // Unauthorized
fn test_pause_unauthorized() {
    let (env, _owner, _merchant, _platform, _token_address, client) = setup_test();

    let non_owner = Address::generate(&env);
    client.pause(&non_owner);
}

#[test]
fn test_unpause_restores_distribution() {
    let (env, owner, merchant, _platform, token_address, client) = setup_test();

    fund_escrow(&env, &token_address, &client.address, 400);
    client.pause(&owner);
    client.unpause(&owner);

    client.distribute();

    let token_client = token::Client::new(&env, &token_address);
    assert_eq!(token_client.balance(&merchant), 400);
}
