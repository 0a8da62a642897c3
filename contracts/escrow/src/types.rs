use soroban_sdk::contracttype;

/// Storage keys for the escrow contract
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Initialized,
    Owner,
    Merchant,
    Platform,
    Token,
    FeeBps,
    Paused,
    Distributing,
}
