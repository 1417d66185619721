use crate::{
    constants::BPS_SCALAR, errors::ReserveError, rate_model, storage, types::ReserveConfig,
};
use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ReserveState {
    /// The address administering the reserve
    pub owner: Address,
    /// The underlying asset of the reserve
    pub asset: Address,
    /// The custody address of the insurance fund
    pub insurance_fund: Address,
    /// The reserve's immutable parameters
    pub config: ReserveConfig,
    /// The total amount supplied by depositors
    pub total_deposits: i128,
    /// The outstanding principal borrowed from the pool
    pub total_borrows: i128,
    /// The utilization of the reserve in bps, derived from borrows and deposits
    pub utilization_rate: u32,
    /// The amount earmarked for covering liquidation losses
    pub insurance_total: i128,
    /// The amount earmarked for the protocol
    pub reserve_total: i128,
    /// The ledger timestamp of the last mutation
    pub last_updated: u64,
}

impl ReserveState {
    /// Create an empty reserve. Does not validate the config.
    pub fn new(
        e: &Env,
        owner: Address,
        asset: Address,
        insurance_fund: Address,
        config: ReserveConfig,
    ) -> Self {
        Self {
            owner,
            asset,
            insurance_fund,
            config,
            total_deposits: 0,
            total_borrows: 0,
            utilization_rate: 0,
            insurance_total: 0,
            reserve_total: 0,
            last_updated: e.ledger().timestamp(),
        }
    }

    /// Load the reserve administered by `owner`
    ///
    /// ### Panics
    /// * `ReserveNotFound` - If the owner has no reserve
    pub fn load(e: &Env, owner: &Address) -> Self {
        storage::get_reserve(e, owner)
            .unwrap_or_else(|| panic_with_error!(e, ReserveError::ReserveNotFound))
    }

    pub fn store(&self, e: &Env) {
        storage::set_reserve(e, self);
    }

    /// The current borrow rate of the reserve, in bps
    pub fn borrow_rate(&self) -> u32 {
        rate_model::borrow_rate(&self.config, self.utilization_rate)
    }

    /// Record deposited liquidity
    pub fn deposit(&mut self, e: &Env, amount: i128) {
        self.total_deposits = checked(e, self.total_deposits.checked_add(amount));
        self.refresh(e);
    }

    /// Record a new borrow against the pool
    pub fn borrow(&mut self, e: &Env, amount: i128) {
        self.total_borrows = checked(e, self.total_borrows.checked_add(amount));
        self.refresh(e);
    }

    /// Record a repayment of outstanding borrows
    ///
    /// ### Panics
    /// * `RepaymentExceedsOutstanding` - If more is repaid than is borrowed
    pub fn repay(&mut self, e: &Env, amount: i128) {
        if amount > self.total_borrows {
            panic_with_error!(e, ReserveError::RepaymentExceedsOutstanding);
        }
        self.total_borrows -= amount;
        self.refresh(e);
    }

    /// Calculate the insurance and reserve shares of an incoming fee, rounding down
    ///
    /// ### Returns
    /// * `(i128, i128)` - (The insurance share, the reserve share)
    pub fn fee_shares(&self, e: &Env, fee_amount: i128) -> (i128, i128) {
        let insurance_share = checked(
            e,
            fee_amount.fixed_mul_floor(self.config.insurance_factor as i128, BPS_SCALAR),
        );
        let reserve_share = checked(
            e,
            fee_amount.fixed_mul_floor(self.config.reserve_factor as i128, BPS_SCALAR),
        );
        (insurance_share, reserve_share)
    }

    /// Earmark the insurance and reserve shares of an incoming fee. The remainder
    /// stays in the pool as liquidity.
    ///
    /// ### Returns
    /// * `(i128, i128)` - (The insurance share, the reserve share)
    pub fn accrue_fees(&mut self, e: &Env, fee_amount: i128) -> (i128, i128) {
        let (insurance_share, reserve_share) = self.fee_shares(e, fee_amount);
        self.insurance_total = checked(e, self.insurance_total.checked_add(insurance_share));
        self.reserve_total = checked(e, self.reserve_total.checked_add(reserve_share));
        self.refresh(e);
        (insurance_share, reserve_share)
    }

    /// Require that the insurance earmark covers a loss
    ///
    /// ### Panics
    /// * `InsufficientInsuranceCoverage` - If the loss exceeds the insurance earmark
    pub fn require_insurance_coverage(&self, e: &Env, loss_amount: i128) {
        if loss_amount > self.insurance_total {
            panic_with_error!(e, ReserveError::InsufficientInsuranceCoverage);
        }
    }

    /// Spend the insurance earmark on a liquidation loss
    ///
    /// ### Panics
    /// * `InsufficientInsuranceCoverage` - If the loss exceeds the insurance earmark
    pub fn absorb_loss(&mut self, e: &Env, loss_amount: i128) {
        self.require_insurance_coverage(e, loss_amount);
        self.insurance_total -= loss_amount;
        self.refresh(e);
    }

    /// Re-derive the utilization and stamp the mutation time
    fn refresh(&mut self, e: &Env) {
        self.utilization_rate =
            rate_model::utilization_rate(e, self.total_borrows, self.total_deposits);
        self.last_updated = e.ledger().timestamp();
    }
}

fn checked<T>(e: &Env, value: Option<T>) -> T {
    value.unwrap_or_else(|| panic_with_error!(e, ReserveError::MathOverflow))
}
