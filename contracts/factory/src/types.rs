use soroban_sdk::{contracttype, Address, BytesN};

/// Storage keys for the factory contract
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Initialized,
    Admin,
    Platform,
    DefaultOwner,
    EscrowWasmHash,
    Paused,
    MerchantEscrows(BytesN<32>),
    MerchantCounter(BytesN<32>),
    EscrowMerchant(Address),
}
