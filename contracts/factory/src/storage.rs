use soroban_sdk::{Address, BytesN, Env, Vec};

use crate::types::StorageKey;

// TTL constants
const DAY_IN_LEDGERS: u32 = 17280;
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

// ========== Initialization ==========

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&StorageKey::Initialized, &true);
}

// ========== Admin ==========

pub fn get_admin(env: &Env) -> Address {
    env.storage().instance().get(&StorageKey::Admin).unwrap()
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&StorageKey::Admin, admin);
}

// ========== Deployment Configuration ==========

pub fn get_platform_address(env: &Env) -> Address {
    env.storage().instance().get(&StorageKey::Platform).unwrap()
}

pub fn set_platform_address(env: &Env, platform: &Address) {
    env.storage().instance().set(&StorageKey::Platform, platform);
}

pub fn get_default_owner(env: &Env) -> Address {
    env.storage().instance().get(&StorageKey::DefaultOwner).unwrap()
}

pub fn set_default_owner(env: &Env, default_owner: &Address) {
    env.storage().instance().set(&StorageKey::DefaultOwner, default_owner);
}

pub fn get_escrow_wasm_hash(env: &Env) -> Option<BytesN<32>> {
    env.storage().instance().get(&StorageKey::EscrowWasmHash)
}

pub fn set_escrow_wasm_hash(env: &Env, wasm_hash: &BytesN<32>) {
    env.storage().instance().set(&StorageKey::EscrowWasmHash, wasm_hash);
}

// ========== Paused State ==========

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&StorageKey::Paused).unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&StorageKey::Paused, &paused);
}

// ========== Merchant Registry ==========

pub fn get_merchant_escrows(env: &Env, merchant_id: &BytesN<32>) -> Vec<Address> {
    let key = StorageKey::MerchantEscrows(merchant_id.clone());
    let escrows = env
        .storage()
        .persistent()
        .get::<_, Vec<Address>>(&key)
        .unwrap_or(Vec::new(env));
    if !escrows.is_empty() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    escrows
}

pub fn get_merchant_counter(env: &Env, merchant_id: &BytesN<32>) -> u32 {
    let key = StorageKey::MerchantCounter(merchant_id.clone());
    let counter = env.storage().persistent().get::<_, u32>(&key);
    if counter.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    counter.unwrap_or(0)
}

pub fn get_escrow_merchant(env: &Env, escrow: &Address) -> Option<BytesN<32>> {
    let key = StorageKey::EscrowMerchant(escrow.clone());
    let merchant_id = env.storage().persistent().get::<_, BytesN<32>>(&key);
    if merchant_id.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    merchant_id
}

/// Record a deployed escrow for a merchant and return the pre-increment
/// counter value.
///
/// Keeps the registry invariant in one place: the counter always equals the
/// length of the merchant's escrow list, and every escrow in the list has a
/// reverse-mapping entry.
pub fn record_deployment(env: &Env, merchant_id: &BytesN<32>, escrow: &Address) -> u32 {
    let counter_key = StorageKey::MerchantCounter(merchant_id.clone());
    let counter: u32 = env.storage().persistent().get(&counter_key).unwrap_or(0);
    env.storage().persistent().set(&counter_key, &(counter + 1));
    env.storage()
        .persistent()
        .extend_ttl(&counter_key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);

    let escrows_key = StorageKey::MerchantEscrows(merchant_id.clone());
    let mut escrows = get_merchant_escrows(env, merchant_id);
    escrows.push_back(escrow.clone());
    env.storage().persistent().set(&escrows_key, &escrows);
    env.storage()
        .persistent()
        .extend_ttl(&escrows_key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);

    let reverse_key = StorageKey::EscrowMerchant(escrow.clone());
    env.storage().persistent().set(&reverse_key, merchant_id);
    env.storage()
        .persistent()
        .extend_ttl(&reverse_key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);

    counter
}
