#![no_std]

use soroban_sdk::{contract, contractimpl, vec, Address, BytesN, Env, IntoVal, Symbol, Val, Vec};

mod errors;
mod events;
mod salt;
mod storage;
mod types;


use errors::Error;

#[contract]
pub struct EscrowFactory;

#[contractimpl]
impl EscrowFactory {
    // ========== INITIALIZATION ==========

    /// Initialize the factory with its admin and the platform/default-owner
    /// configuration applied to future deployments.
    ///
    /// The escrow code hash is registered separately via
    /// `set_escrow_wasm_hash` once the escrow WASM has been uploaded.
    pub fn initialize(
        env: Env,
        admin: Address,
        platform: Address,
        default_owner: Address,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        storage::set_initialized(&env);
        storage::set_admin(&env, &admin);
        storage::set_platform_address(&env, &platform);
        storage::set_default_owner(&env, &default_owner);
        storage::set_paused(&env, false);

        events::emit_factory_initialized(&env, admin, platform, default_owner);

        Ok(())
    }

    // ========== ESCROW CODE MANAGEMENT ==========

    /// Register or update the uploaded escrow code hash (admin only).
    ///
    /// Affects future deployments only.
    pub fn set_escrow_wasm_hash(env: Env, caller: Address, wasm_hash: BytesN<32>) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        Self::require_admin(&env, &caller)?;

        storage::set_escrow_wasm_hash(&env, &wasm_hash);

        events::emit_escrow_wasm_updated(&env, wasm_hash);

        Ok(())
    }

    /// Get the registered escrow code hash
    pub fn get_escrow_wasm_hash(env: Env) -> Result<BytesN<32>, Error> {
        storage::get_escrow_wasm_hash(&env).ok_or(Error::EscrowWasmNotSet)
    }

    // ========== DEPLOYMENT ==========

    /// Deploy a new escrow instance for a merchant (admin only).
    ///
    /// The deployment salt is derived from the merchant id, the merchant's
    /// current deployment counter and the configuration baked into the new
    /// escrow, so repeated deployments for one merchant land at distinct,
    /// predictable addresses. The new escrow is initialized with the
    /// factory's current platform address and default owner; later factory
    /// configuration changes never touch it.
    pub fn deploy_escrow(
        env: Env,
        caller: Address,
        merchant_id: BytesN<32>,
        merchant: Address,
        token: Address,
    ) -> Result<Address, Error> {
        Self::require_initialized(&env)?;
        Self::require_admin(&env, &caller)?;
        Self::require_not_paused(&env)?;

        let wasm_hash = storage::get_escrow_wasm_hash(&env).ok_or(Error::EscrowWasmNotSet)?;
        let platform = storage::get_platform_address(&env);
        let default_owner = storage::get_default_owner(&env);

        let counter = storage::get_merchant_counter(&env, &merchant_id);
        let salt = salt::derive_salt(
            &env,
            &merchant_id,
            counter,
            &merchant,
            &token,
            &platform,
            &default_owner,
        );

        let escrow = env
            .deployer()
            .with_current_contract(salt)
            .deploy_v2(wasm_hash, ());

        Self::call_escrow_init(&env, &escrow, &merchant, &token, &platform, &default_owner);

        let recorded_counter = storage::record_deployment(&env, &merchant_id, &escrow);

        if recorded_counter == 0 {
            events::emit_merchant_registered(&env, merchant_id.clone(), escrow.clone());
        }
        events::emit_escrow_deployed(&env, merchant_id, escrow.clone(), recorded_counter, token);

        Ok(escrow)
    }

    /// Compute the address `deploy_escrow` would produce right now.
    ///
    /// Reproduces the deployment salt from the merchant's current counter
    /// and the factory's current platform address and default owner. Any
    /// change to that configuration between prediction and deployment
    /// changes the resulting address.
    pub fn predict_escrow_address(
        env: Env,
        merchant_id: BytesN<32>,
        merchant: Address,
        token: Address,
    ) -> Result<Address, Error> {
        Self::require_initialized(&env)?;

        let platform = storage::get_platform_address(&env);
        let default_owner = storage::get_default_owner(&env);
        let counter = storage::get_merchant_counter(&env, &merchant_id);

        let salt = salt::derive_salt(
            &env,
            &merchant_id,
            counter,
            &merchant,
            &token,
            &platform,
            &default_owner,
        );

        Ok(env
            .deployer()
            .with_current_contract(salt)
            .deployed_address())
    }

    // ========== REGISTRY VIEWS ==========

    /// Get all escrows deployed for a merchant, in deployment order
    pub fn get_escrows_for_merchant(env: Env, merchant_id: BytesN<32>) -> Vec<Address> {
        storage::get_merchant_escrows(&env, &merchant_id)
    }

    /// Look up the merchant an escrow was deployed for
    pub fn get_merchant_for_escrow(env: Env, escrow: Address) -> Result<BytesN<32>, Error> {
        storage::get_escrow_merchant(&env, &escrow).ok_or(Error::EscrowNotFound)
    }

    /// Get the number of escrows deployed for a merchant
    pub fn get_merchant_escrow_count(env: Env, merchant_id: BytesN<32>) -> u32 {
        storage::get_merchant_escrows(&env, &merchant_id).len()
    }

    /// Get a merchant's deployment counter
    pub fn get_merchant_counter(env: Env, merchant_id: BytesN<32>) -> u32 {
        storage::get_merchant_counter(&env, &merchant_id)
    }

    /// Check whether at least one escrow exists for a merchant
    pub fn merchant_exists(env: Env, merchant_id: BytesN<32>) -> bool {
        !storage::get_merchant_escrows(&env, &merchant_id).is_empty()
    }

    // ========== CONFIGURATION ==========

    /// Get the platform address applied to future deployments
    pub fn get_platform_address(env: Env) -> Result<Address, Error> {
        Self::require_initialized(&env)?;
        Ok(storage::get_platform_address(&env))
    }

    /// Set the platform address for future deployments (admin only).
    ///
    /// Already-deployed escrows are unaffected. Available while paused.
    pub fn set_platform_address(env: Env, caller: Address, platform: Address) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        Self::require_admin(&env, &caller)?;

        let old_platform = storage::get_platform_address(&env);
        storage::set_platform_address(&env, &platform);

        events::emit_platform_address_changed(&env, old_platform, platform);

        Ok(())
    }

    /// Get the owner assigned to future escrow deployments
    pub fn get_default_owner(env: Env) -> Result<Address, Error> {
        Self::require_initialized(&env)?;
        Ok(storage::get_default_owner(&env))
    }

    /// Set the owner for future escrow deployments (admin only)
    pub fn set_default_owner(env: Env, caller: Address, default_owner: Address) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        Self::require_admin(&env, &caller)?;

        let old_owner = storage::get_default_owner(&env);
        storage::set_default_owner(&env, &default_owner);

        events::emit_default_owner_changed(&env, old_owner, default_owner);

        Ok(())
    }

    // ========== ACCESS CONTROL ==========

    /// Transfer the admin role
    pub fn set_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        Self::require_admin(&env, &caller)?;

        storage::set_admin(&env, &new_admin);

        events::emit_admin_changed(&env, caller, new_admin);

        Ok(())
    }

    /// Get the admin address
    pub fn get_admin(env: Env) -> Result<Address, Error> {
        Self::require_initialized(&env)?;
        Ok(storage::get_admin(&env))
    }

    /// Pause deployments (admin only); registry views and configuration
    /// setters stay available while paused.
    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        Self::require_admin(&env, &caller)?;

        if storage::is_paused(&env) {
            return Err(Error::AlreadyPaused);
        }
        storage::set_paused(&env, true);

        events::emit_factory_paused(&env, caller);

        Ok(())
    }

    /// Resume deployments (admin only)
    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        Self::require_admin(&env, &caller)?;

        if !storage::is_paused(&env) {
            return Err(Error::NotPaused);
        }
        storage::set_paused(&env, false);

        events::emit_factory_unpaused(&env, caller);

        Ok(())
    }

    /// Check if the factory is paused
    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    // ========== INTERNAL HELPERS ==========

    fn require_initialized(env: &Env) -> Result<(), Error> {
        if !storage::is_initialized(env) {
            return Err(Error::NotInitialized);
        }
        Ok(())
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        if *caller != storage::get_admin(env) {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    fn require_not_paused(env: &Env) -> Result<(), Error> {
        if storage::is_paused(env) {
            return Err(Error::FactoryPaused);
        }
        Ok(())
    }

    /// Call the init function on a freshly deployed escrow
    fn call_escrow_init(
        env: &Env,
        escrow: &Address,
        merchant: &Address,
        token: &Address,
        platform: &Address,
        owner: &Address,
    ) {
        let init_fn = Symbol::new(env, "init");
        let args: Vec<Val> = vec![
            env,
            merchant.into_val(env),
            token.into_val(env),
            platform.into_val(env),
            owner.into_val(env),
        ];
        env.invoke_contract::<()>(escrow, &init_fn, args);
    }
}
