use crate::{
    custody,
    errors::ReserveError,
    events::ReserveEvents,
    reserve::ReserveState,
    storage,
    types::{DepositReceipt, ReserveAction, ReserveConfig},
    validator::{require_positive, require_valid_config},
};
use soroban_sdk::{panic_with_error, Address, Env, Vec};

/// Create a new reserve for `owner`. Does not move any tokens.
///
/// ### Panics
/// * `AlreadyInitialized` - If the owner already administers a reserve
/// * `InvalidConfig` - If the config is invalid
pub fn initialize(
    e: &Env,
    owner: &Address,
    asset: &Address,
    insurance_fund: &Address,
    config: ReserveConfig,
) -> ReserveState {
    if storage::has_reserve(e, owner) {
        panic_with_error!(e, ReserveError::AlreadyInitialized);
    }
    require_valid_config(e, &config);

    let reserve = ReserveState::new(
        e,
        owner.clone(),
        asset.clone(),
        insurance_fund.clone(),
        config,
    );
    reserve.store(e);
    ReserveEvents::reserve_initialized(e, owner, asset, insurance_fund);
    reserve
}

/// Deposit `amount` of the reserve asset from `depositor` into the pool and issue
/// deposit certificates 1:1
///
/// ### Panics
/// * `InvalidAmount` - If the amount is not positive
/// * `ReserveNotFound` - If the owner has no reserve
/// * `TransferFailed` - If the depositor's tokens could not be moved
pub fn deposit(e: &Env, owner: &Address, depositor: &Address, amount: i128) -> DepositReceipt {
    require_positive(e, amount, ReserveError::InvalidAmount);
    let mut reserve = ReserveState::load(e, owner);

    custody::transfer(
        e,
        &reserve.asset,
        depositor,
        &custody::liquidity_pool(e),
        amount,
    );

    reserve.deposit(e, amount);
    let certificates = storage::get_certificates(e, owner, depositor)
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(e, ReserveError::MathOverflow));

    storage::set_certificates(e, owner, depositor, certificates);
    reserve.store(e);
    ReserveEvents::deposit(e, owner, depositor, amount, reserve.total_deposits);
    DepositReceipt {
        depositor: depositor.clone(),
        amount,
        certificates,
        total_deposits: reserve.total_deposits,
    }
}

/// Record a borrow from, or a repayment to, the pool. Does not move any tokens.
pub fn process_loan_activity(
    e: &Env,
    owner: &Address,
    amount: i128,
    is_repayment: bool,
) -> ReserveState {
    let action = if is_repayment {
        ReserveAction::Repay(amount)
    } else {
        ReserveAction::Borrow(amount)
    };
    execute(e, owner, action)
}

/// Pull `fee_amount` from `fee_source` into the pool and earmark the insurance and
/// reserve shares
pub fn process_fees(
    e: &Env,
    owner: &Address,
    fee_source: &Address,
    fee_amount: i128,
) -> ReserveState {
    execute(e, owner, ReserveAction::Fees(fee_source.clone(), fee_amount))
}

/// Cover a liquidation loss out of the insurance fund
pub fn process_liquidation_loss(e: &Env, owner: &Address, loss_amount: i128) -> ReserveState {
    execute(e, owner, ReserveAction::LiquidationLoss(loss_amount))
}

/// Apply a batch of actions, in order, against the owner's reserve. If any action
/// fails the whole batch fails.
pub fn submit(e: &Env, owner: &Address, actions: Vec<ReserveAction>) -> ReserveState {
    let mut reserve = ReserveState::load(e, owner);
    for action in actions.iter() {
        apply_action(e, &mut reserve, action);
    }
    reserve.store(e);
    reserve
}

fn execute(e: &Env, owner: &Address, action: ReserveAction) -> ReserveState {
    let mut reserve = ReserveState::load(e, owner);
    apply_action(e, &mut reserve, action);
    reserve.store(e);
    reserve
}

/// Validate and apply a single action to an in-memory reserve
///
/// ### Panics
/// * `InvalidAmount` - If the action's amount is not positive
/// * `RepaymentExceedsOutstanding` - If a repayment exceeds the outstanding borrows
/// * `InsufficientInsuranceCoverage` - If a loss exceeds the insurance earmark
/// * `TransferFailed` - If a fee or loss transfer could not be made
fn apply_action(e: &Env, reserve: &mut ReserveState, action: ReserveAction) {
    match action {
        ReserveAction::Borrow(amount) => {
            require_positive(e, amount, ReserveError::InvalidAmount);
            reserve.borrow(e, amount);
            ReserveEvents::loan_activity(
                e,
                &reserve.owner,
                amount,
                false,
                reserve.total_borrows,
                reserve.utilization_rate,
            );
        }
        ReserveAction::Repay(amount) => {
            require_positive(e, amount, ReserveError::InvalidAmount);
            reserve.repay(e, amount);
            ReserveEvents::loan_activity(
                e,
                &reserve.owner,
                amount,
                true,
                reserve.total_borrows,
                reserve.utilization_rate,
            );
        }
        ReserveAction::Fees(fee_source, fee_amount) => {
            require_positive(e, fee_amount, ReserveError::InvalidAmount);
            custody::transfer(
                e,
                &reserve.asset,
                &fee_source,
                &custody::liquidity_pool(e),
                fee_amount,
            );
            let (insurance_share, reserve_share) = reserve.accrue_fees(e, fee_amount);
            ReserveEvents::fees_processed(
                e,
                &reserve.owner,
                &fee_source,
                fee_amount,
                insurance_share,
                reserve_share,
            );
        }
        ReserveAction::LiquidationLoss(loss_amount) => {
            require_positive(e, loss_amount, ReserveError::InvalidAmount);
            // coverage is checked before any tokens move
            reserve.require_insurance_coverage(e, loss_amount);
            custody::transfer(
                e,
                &reserve.asset,
                &reserve.insurance_fund,
                &custody::liquidity_pool(e),
                loss_amount,
            );
            reserve.absorb_loss(e, loss_amount);
            ReserveEvents::liquidation_loss(
                e,
                &reserve.owner,
                loss_amount,
                reserve.insurance_total,
            );
        }
    }
}
