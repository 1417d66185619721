use crate::{
    processor,
    reserve::ReserveState,
    storage,
    types::{DepositReceipt, ReserveAction, ReserveConfig},
};

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

#[contract]
pub struct ReserveEngine;

#[contractimpl]
impl ReserveEngine {
    //********** Read-Only ***********//

    /// Get the reserve administered by an owner
    ///
    /// ### Arguments
    /// * `owner` - The address administering the reserve
    ///
    /// ### Panics
    /// * `ReserveNotFound` - If the owner has no reserve
    pub fn get_reserve(e: Env, owner: Address) -> ReserveState {
        ReserveState::load(&e, &owner)
    }

    /// Get the current borrow rate of a reserve, in bps
    ///
    /// ### Arguments
    /// * `owner` - The address administering the reserve
    ///
    /// ### Panics
    /// * `ReserveNotFound` - If the owner has no reserve
    pub fn get_borrow_rate(e: Env, owner: Address) -> u32 {
        ReserveState::load(&e, &owner).borrow_rate()
    }

    /// Get the deposit certificates a depositor holds in a reserve
    ///
    /// ### Arguments
    /// * `owner` - The address administering the reserve
    /// * `depositor` - The address of the depositor
    pub fn get_certificates(e: Env, owner: Address, depositor: Address) -> i128 {
        storage::get_certificates(&e, &owner, &depositor)
    }

    //********** Read-Write ***********//

    // OWNER ONLY
    /// Initialize a reserve administered by `owner`
    ///
    /// ### Arguments
    /// * `owner` - The address administering the reserve
    /// * `asset` - The token contract of the underlying asset
    /// * `insurance_fund` - The custody address of the insurance fund
    /// * `config` - The reserve configuration
    ///
    /// ### Panics
    /// * `AlreadyInitialized` - If the owner already administers a reserve
    /// * `InvalidConfig` - If the fee factors, curve or band width are invalid
    pub fn initialize(
        e: Env,
        owner: Address,
        asset: Address,
        insurance_fund: Address,
        config: ReserveConfig,
    ) -> ReserveState {
        owner.require_auth();
        storage::extend_instance(&e);
        processor::initialize(&e, &owner, &asset, &insurance_fund, config)
    }

    /// Deposit tokens into a reserve
    ///
    /// ### Arguments
    /// * `owner` - The address administering the reserve
    /// * `depositor` - The address supplying the tokens
    /// * `amount` - The amount of tokens to deposit
    ///
    /// ### Returns
    /// * `DepositReceipt` - The deposit and the depositor's resulting certificate balance
    ///
    /// ### Panics
    /// * `InvalidAmount` - If the amount is not positive
    /// * `TransferFailed` - If the tokens could not be moved into the pool
    pub fn deposit(e: Env, owner: Address, depositor: Address, amount: i128) -> DepositReceipt {
        depositor.require_auth();
        storage::extend_instance(&e);
        processor::deposit(&e, &owner, &depositor, amount)
    }

    // OWNER ONLY
    /// Record a borrow from, or a repayment to, a reserve
    ///
    /// ### Arguments
    /// * `owner` - The address administering the reserve
    /// * `amount` - The principal borrowed or repaid
    /// * `is_repayment` - True if the amount is being repaid
    ///
    /// ### Panics
    /// * `InvalidAmount` - If the amount is not positive
    /// * `RepaymentExceedsOutstanding` - If more is repaid than is borrowed
    pub fn process_loan_activity(
        e: Env,
        owner: Address,
        amount: i128,
        is_repayment: bool,
    ) -> ReserveState {
        owner.require_auth();
        storage::extend_instance(&e);
        processor::process_loan_activity(&e, &owner, amount, is_repayment)
    }

    // OWNER ONLY
    /// Pull a fee into a reserve's pool and earmark its insurance and protocol shares
    ///
    /// ### Arguments
    /// * `owner` - The address administering the reserve
    /// * `fee_source` - The address the fee is paid from
    /// * `fee_amount` - The amount of the fee
    ///
    /// ### Panics
    /// * `InvalidAmount` - If the amount is not positive
    /// * `TransferFailed` - If the fee could not be moved into the pool
    pub fn process_fees(
        e: Env,
        owner: Address,
        fee_source: Address,
        fee_amount: i128,
    ) -> ReserveState {
        owner.require_auth();
        storage::extend_instance(&e);
        processor::process_fees(&e, &owner, &fee_source, fee_amount)
    }

    // OWNER ONLY
    /// Cover a liquidation loss out of a reserve's insurance fund
    ///
    /// ### Arguments
    /// * `owner` - The address administering the reserve
    /// * `loss_amount` - The amount of the loss
    ///
    /// ### Panics
    /// * `InvalidAmount` - If the amount is not positive
    /// * `InsufficientInsuranceCoverage` - If the loss exceeds the insurance earmark
    /// * `TransferFailed` - If the insurance fund could not pay into the pool
    pub fn process_liquidation_loss(e: Env, owner: Address, loss_amount: i128) -> ReserveState {
        owner.require_auth();
        storage::extend_instance(&e);
        processor::process_liquidation_loss(&e, &owner, loss_amount)
    }

    // OWNER ONLY
    /// Apply a batch of actions to a reserve, in order. Either every action applies or none do.
    ///
    /// ### Arguments
    /// * `owner` - The address administering the reserve
    /// * `actions` - The actions to apply
    pub fn submit(e: Env, owner: Address, actions: Vec<ReserveAction>) -> ReserveState {
        owner.require_auth();
        storage::extend_instance(&e);
        processor::submit(&e, &owner, actions)
    }
}
