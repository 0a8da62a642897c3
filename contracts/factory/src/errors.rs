use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    FactoryPaused = 4,
    AlreadyPaused = 5,
    NotPaused = 6,
    EscrowNotFound = 7,
    EscrowWasmNotSet = 8,
}
