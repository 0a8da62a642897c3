use soroban_sdk::{Address, Env};

use crate::types::StorageKey;

// ========== Initialization ==========

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&StorageKey::Initialized, &true);
}

// ========== Owner ==========

pub fn get_owner(env: &Env) -> Address {
    env.storage().instance().get(&StorageKey::Owner).unwrap()
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&StorageKey::Owner, owner);
}

// ========== Payout Addresses ==========

pub fn get_merchant_address(env: &Env) -> Address {
    env.storage().instance().get(&StorageKey::Merchant).unwrap()
}

pub fn set_merchant_address(env: &Env, merchant: &Address) {
    env.storage().instance().set(&StorageKey::Merchant, merchant);
}

pub fn get_platform_address(env: &Env) -> Address {
    env.storage().instance().get(&StorageKey::Platform).unwrap()
}

pub fn set_platform_address(env: &Env, platform: &Address) {
    env.storage().instance().set(&StorageKey::Platform, platform);
}

// ========== Token ==========

pub fn get_token_address(env: &Env) -> Address {
    env.storage().instance().get(&StorageKey::Token).unwrap()
}

pub fn set_token_address(env: &Env, token: &Address) {
    env.storage().instance().set(&StorageKey::Token, token);
}

// ========== Fee ==========

pub fn get_fee(env: &Env) -> u32 {
    env.storage().instance().get(&StorageKey::FeeBps).unwrap_or(0)
}

pub fn set_fee(env: &Env, fee_bps: u32) {
    env.storage().instance().set(&StorageKey::FeeBps, &fee_bps);
}

// ========== Paused State ==========

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&StorageKey::Paused).unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&StorageKey::Paused, &paused);
}

// ========== Distribution Latch ==========

pub fn is_distributing(env: &Env) -> bool {
    env.storage().instance().get(&StorageKey::Distributing).unwrap_or(false)
}

pub fn set_distributing(env: &Env, distributing: bool) {
    env.storage().instance().set(&StorageKey::Distributing, &distributing);
}
