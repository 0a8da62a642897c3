use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowInitializedEvent {
    pub merchant: Address,
    pub token: Address,
    pub platform: Address,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeChangedEvent {
    pub old_fee: u32,
    pub new_fee: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MerchantAddressChangedEvent {
    pub old_merchant: Address,
    pub new_merchant: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformAddressChangedEvent {
    pub old_platform: Address,
    pub new_platform: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsDistributedEvent {
    pub platform_amount: i128,
    pub merchant_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowPausedEvent {
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowUnpausedEvent {
    pub owner: Address,
}

pub fn emit_escrow_initialized(env: &Env, merchant: Address, token: Address, platform: Address, owner: Address) {
    let event = EscrowInitializedEvent {
        merchant: merchant.clone(),
        token,
        platform,
        owner,
    };
    env.events().publish(("escrow_initialized", merchant), event);
}

pub fn emit_fee_changed(env: &Env, old_fee: u32, new_fee: u32) {
    let event = FeeChangedEvent { old_fee, new_fee };
    env.events().publish(("fee_changed", new_fee), event);
}

pub fn emit_merchant_address_changed(env: &Env, old_merchant: Address, new_merchant: Address) {
    let event = MerchantAddressChangedEvent {
        old_merchant,
        new_merchant: new_merchant.clone(),
    };
    env.events().publish(("merchant_address_changed", new_merchant), event);
}

pub fn emit_platform_address_changed(env: &Env, old_platform: Address, new_platform: Address) {
    let event = PlatformAddressChangedEvent {
        old_platform,
        new_platform: new_platform.clone(),
    };
    env.events().publish(("platform_address_changed", new_platform), event);
}

pub fn emit_funds_distributed(env: &Env, platform_amount: i128, merchant_amount: i128) {
    let event = FundsDistributedEvent {
        platform_amount,
        merchant_amount,
    };
    env.events().publish(("funds_distributed",), event);
}

pub fn emit_escrow_paused(env: &Env, owner: Address) {
    let event = EscrowPausedEvent { owner: owner.clone() };
    env.events().publish(("escrow_paused", owner), event);
}

pub fn emit_escrow_unpaused(env: &Env, owner: Address) {
    let event = EscrowUnpausedEvent { owner: owner.clone() };
    env.events().publish(("escrow_unpaused", owner), event);
}
