use soroban_sdk::{contracttype, Address, BytesN, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FactoryInitializedEvent {
    pub admin: Address,
    pub platform: Address,
    pub default_owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowWasmUpdatedEvent {
    pub wasm_hash: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MerchantRegisteredEvent {
    pub merchant_id: BytesN<32>,
    pub first_escrow: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowDeployedEvent {
    pub merchant_id: BytesN<32>,
    pub escrow: Address,
    pub counter: u32,
    pub token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformAddressChangedEvent {
    pub old_platform: Address,
    pub new_platform: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DefaultOwnerChangedEvent {
    pub old_owner: Address,
    pub new_owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChangedEvent {
    pub old_admin: Address,
    pub new_admin: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FactoryPausedEvent {
    pub admin: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FactoryUnpausedEvent {
    pub admin: Address,
}

pub fn emit_factory_initialized(env: &Env, admin: Address, platform: Address, default_owner: Address) {
    let event = FactoryInitializedEvent {
        admin: admin.clone(),
        platform,
        default_owner,
    };
    env.events().publish(("factory_initialized", admin), event);
}

pub fn emit_escrow_wasm_updated(env: &Env, wasm_hash: BytesN<32>) {
    let event = EscrowWasmUpdatedEvent {
        wasm_hash: wasm_hash.clone(),
    };
    env.events().publish(("escrow_wasm_updated",), event);
}

pub fn emit_merchant_registered(env: &Env, merchant_id: BytesN<32>, first_escrow: Address) {
    let event = MerchantRegisteredEvent {
        merchant_id: merchant_id.clone(),
        first_escrow,
    };
    env.events().publish(("merchant_registered", merchant_id), event);
}

pub fn emit_escrow_deployed(env: &Env, merchant_id: BytesN<32>, escrow: Address, counter: u32, token: Address) {
    let event = EscrowDeployedEvent {
        merchant_id: merchant_id.clone(),
        escrow: escrow.clone(),
        counter,
        token,
    };
    env.events().publish(("escrow_deployed", merchant_id, escrow), event);
}

pub fn emit_platform_address_changed(env: &Env, old_platform: Address, new_platform: Address) {
    let event = PlatformAddressChangedEvent {
        old_platform,
        new_platform: new_platform.clone(),
    };
    env.events().publish(("platform_address_changed", new_platform), event);
}

pub fn emit_default_owner_changed(env: &Env, old_owner: Address, new_owner: Address) {
    let event = DefaultOwnerChangedEvent {
        old_owner,
        new_owner: new_owner.clone(),
    };
    env.events().publish(("default_owner_changed", new_owner), event);
}

pub fn emit_admin_changed(env: &Env, old_admin: Address, new_admin: Address) {
    let event = AdminChangedEvent {
        old_admin: old_admin.clone(),
        new_admin: new_admin.clone(),
    };
    env.events().publish(("admin_changed", old_admin, new_admin), event);
}

pub fn emit_factory_paused(env: &Env, admin: Address) {
    let event = FactoryPausedEvent { admin: admin.clone() };
    env.events().publish(("factory_paused", admin), event);
}

pub fn emit_factory_unpaused(env: &Env, admin: Address) {
    let event = FactoryUnpausedEvent { admin: admin.clone() };
    env.events().publish(("factory_unpaused", admin), event);
}
