use soroban_sdk::contracterror;

/// The error codes for the contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ReserveError {
    ReserveNotFound = 100,
    AlreadyInitialized = 101,
    InvalidAmount = 102,
    InvalidConfig = 103,
    TransferFailed = 104,
    RepaymentExceedsOutstanding = 105,
    InsufficientInsuranceCoverage = 106,
    MathOverflow = 107,
}
