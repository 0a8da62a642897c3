#![no_std]

use soroban_sdk::{contract, contractimpl, token, Address, Env};

mod errors;
mod events;
mod storage;
mod types;

#[cfg(test)]
mod test;

use errors::Error;

/// Maximum fee in basis points (50%).
pub const MAX_FEE_BPS: u32 = 5_000;

/// Basis-point denominator.
pub const BPS_DENOMINATOR: u32 = 10_000;

#[contract]
pub struct PaymentEscrow;

#[contractimpl]
impl PaymentEscrow {
    // ========== INITIALIZATION ==========

    /// Initialize the escrow with its payout addresses, token and owner.
    ///
    /// Invoked by the factory right after deployment. The fee starts at 0
    /// and the escrow starts unpaused.
    pub fn init(
        env: Env,
        merchant: Address,
        token: Address,
        platform: Address,
        owner: Address,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        storage::set_initialized(&env);
        storage::set_owner(&env, &owner);
        storage::set_merchant_address(&env, &merchant);
        storage::set_platform_address(&env, &platform);
        storage::set_token_address(&env, &token);
        storage::set_fee(&env, 0);
        storage::set_paused(&env, false);

        events::emit_escrow_initialized(&env, merchant, token, platform, owner);

        Ok(())
    }

    // ========== FEE MANAGEMENT ==========

    /// Get the current fee in basis points
    pub fn get_fee(env: Env) -> Result<u32, Error> {
        Self::require_initialized(&env)?;
        Ok(storage::get_fee(&env))
    }

    /// Set the platform fee in basis points (owner only, blocked while paused)
    pub fn set_fee(env: Env, caller: Address, fee_bps: u32) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        Self::require_owner(&env, &caller)?;
        Self::require_not_paused(&env)?;

        if fee_bps > MAX_FEE_BPS {
            return Err(Error::FeeTooHigh);
        }

        let old_fee = storage::get_fee(&env);
        storage::set_fee(&env, fee_bps);

        events::emit_fee_changed(&env, old_fee, fee_bps);

        Ok(())
    }

    // ========== PAYOUT ADDRESSES ==========

    /// Get the merchant payout address
    pub fn get_merchant_address(env: Env) -> Result<Address, Error> {
        Self::require_initialized(&env)?;
        Ok(storage::get_merchant_address(&env))
    }

    /// Set the merchant payout address (owner only).
    ///
    /// Deliberately not pause-gated: during an incident the owner must stay
    /// able to redirect funds away from a compromised address.
    pub fn set_merchant_address(env: Env, caller: Address, merchant: Address) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        Self::require_owner(&env, &caller)?;

        let old_merchant = storage::get_merchant_address(&env);
        storage::set_merchant_address(&env, &merchant);

        events::emit_merchant_address_changed(&env, old_merchant, merchant);

        Ok(())
    }

    /// Get the platform payout address
    pub fn get_platform_address(env: Env) -> Result<Address, Error> {
        Self::require_initialized(&env)?;
        Ok(storage::get_platform_address(&env))
    }

    /// Set the platform payout address (owner only, allowed while paused)
    pub fn set_platform_address(env: Env, caller: Address, platform: Address) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        Self::require_owner(&env, &caller)?;

        let old_platform = storage::get_platform_address(&env);
        storage::set_platform_address(&env, &platform);

        events::emit_platform_address_changed(&env, old_platform, platform);

        Ok(())
    }

    // ========== DISTRIBUTION ==========

    /// Split the escrow's full token balance between platform and merchant.
    ///
    /// Callable by anyone, blocked while paused. The platform receives
    /// `floor(balance * fee_bps / 10000)`, the merchant receives the
    /// remainder, so the two amounts always sum exactly to the starting
    /// balance. A trapped transfer reverts the whole invocation.
    pub fn distribute(env: Env) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        Self::require_not_paused(&env)?;

        if storage::is_distributing(&env) {
            return Err(Error::ReentrantDistribution);
        }
        storage::set_distributing(&env, true);

        let token_address = storage::get_token_address(&env);
        let token_client = token::Client::new(&env, &token_address);
        let escrow_address = env.current_contract_address();

        let balance = token_client.balance(&escrow_address);
        if balance == 0 {
            return Err(Error::NothingToDistribute);
        }

        let fee_bps = storage::get_fee(&env);
        let platform_amount = balance
            .checked_mul(fee_bps as i128)
            .ok_or(Error::Overflow)?
            .checked_div(BPS_DENOMINATOR as i128)
            .ok_or(Error::Overflow)?;
        let merchant_amount = balance - platform_amount;

        if platform_amount > 0 {
            token_client.transfer(
                &escrow_address,
                &storage::get_platform_address(&env),
                &platform_amount,
            );
        }
        if merchant_amount > 0 {
            token_client.transfer(
                &escrow_address,
                &storage::get_merchant_address(&env),
                &merchant_amount,
            );
        }

        storage::set_distributing(&env, false);

        events::emit_funds_distributed(&env, platform_amount, merchant_amount);

        Ok(())
    }

    // ========== PAUSE ==========

    /// Pause distributions and fee changes (owner only)
    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        Self::require_owner(&env, &caller)?;

        if storage::is_paused(&env) {
            return Err(Error::AlreadyPaused);
        }
        storage::set_paused(&env, true);

        events::emit_escrow_paused(&env, caller);

        Ok(())
    }

    /// Resume distributions and fee changes (owner only)
    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        Self::require_owner(&env, &caller)?;

        if !storage::is_paused(&env) {
            return Err(Error::NotPaused);
        }
        storage::set_paused(&env, false);

        events::emit_escrow_unpaused(&env, caller);

        Ok(())
    }

    /// Check if the escrow is paused
    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    // ========== VIEWS ==========

    /// Get the token held by this escrow
    pub fn get_token_address(env: Env) -> Result<Address, Error> {
        Self::require_initialized(&env)?;
        Ok(storage::get_token_address(&env))
    }

    /// Get the owner address
    pub fn get_owner(env: Env) -> Result<Address, Error> {
        Self::require_initialized(&env)?;
        Ok(storage::get_owner(&env))
    }

    // ========== INTERNAL HELPERS ==========

    fn require_initialized(env: &Env) -> Result<(), Error> {
        if !storage::is_initialized(env) {
            return Err(Error::NotInitialized);
        }
        Ok(())
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        if *caller != storage::get_owner(env) {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    fn require_not_paused(env: &Env) -> Result<(), Error> {
        if storage::is_paused(env) {
            return Err(Error::EscrowPaused);
        }
        Ok(())
    }
}
