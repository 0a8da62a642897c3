use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env};

/// Derive the deployment salt for a merchant's next escrow.
///
/// The salt hashes everything the new escrow's address must commit to: the
/// merchant id, the per-merchant deployment counter, and the configuration
/// the escrow will be initialized with. Repeated deployments for the same
/// merchant differ in the counter and land at distinct addresses, and any
/// change to the factory's platform address or default owner between
/// prediction and deployment shifts the derived address.
///
/// Used by both `deploy_escrow` and `predict_escrow_address`.
pub fn derive_salt(
    env: &Env,
    merchant_id: &BytesN<32>,
    counter: u32,
    merchant: &Address,
    token: &Address,
    platform: &Address,
    default_owner: &Address,
) -> BytesN<32> {
    let mut preimage = Bytes::new(env);
    preimage.append(&Bytes::from_array(env, &merchant_id.to_array()));
    preimage.append(&Bytes::from_slice(env, &counter.to_be_bytes()));
    preimage.append(&merchant.clone().to_xdr(env));
    preimage.append(&token.clone().to_xdr(env));
    preimage.append(&platform.clone().to_xdr(env));
    preimage.append(&default_owner.clone().to_xdr(env));

    let hash = env.crypto().sha256(&preimage);
    BytesN::from_array(env, &hash.to_array())
}
