use soroban_sdk::{contracttype, Address, Vec};

/// The immutable parameters of a reserve, fixed at initialization
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ReserveConfig {
    /// The borrow rate floor, in bps
    pub base_borrow_rate: u32,
    /// The rate premium at each utilization breakpoint, in bps. Must hold exactly 4
    /// non-decreasing points.
    pub utilization_curve: Vec<u32>,
    /// The utilization width of each curve band, in bps. Breakpoint `i` sits at
    /// `(i + 1) * curve_band_width`.
    pub curve_band_width: u32,
    /// The share of incoming fees earmarked for the protocol, in bps
    pub reserve_factor: u32,
    /// The share of incoming fees earmarked for the insurance fund, in bps
    pub insurance_factor: u32,
    /// The decimals of the underlying asset
    pub decimals: u32,
}

/// The result of a deposit into a reserve
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct DepositReceipt {
    pub depositor: Address,
    /// The amount of underlying deposited
    pub amount: i128,
    /// The depositor's certificate balance after the deposit
    pub certificates: i128,
    /// The reserve's total deposits after the deposit
    pub total_deposits: i128,
}

/// An accounting action the reserve owner can apply against their reserve
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum ReserveAction {
    /// Record a new borrow of the given amount
    Borrow(i128),
    /// Record a repayment of the given amount
    Repay(i128),
    /// Pull a fee from the source address into the pool and earmark its shares
    Fees(Address, i128),
    /// Cover a liquidation loss of the given amount out of the insurance fund
    LiquidationLoss(i128),
}
