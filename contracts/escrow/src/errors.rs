use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    EscrowPaused = 4,
    AlreadyPaused = 5,
    NotPaused = 6,
    FeeTooHigh = 7,
    NothingToDistribute = 8,
    ReentrantDistribution = 9,
    Overflow = 10,
}
