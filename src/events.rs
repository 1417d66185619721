use soroban_sdk::{Address, Env, Symbol};

pub struct ReserveEvents {}

impl ReserveEvents {
    /// Emitted when a new reserve is initialized
    ///
    /// - topics - `["reserve_initialized", owner: Address]`
    /// - data - `[asset: Address, insurance_fund: Address]`
    pub fn reserve_initialized(
        e: &Env,
        owner: &Address,
        asset: &Address,
        insurance_fund: &Address,
    ) {
        let topics = (Symbol::new(&e, "reserve_initialized"), owner.clone());
        e.events()
            .publish(topics, (asset.clone(), insurance_fund.clone()));
    }

    /// Emitted when a deposit is made into a reserve
    ///
    /// - topics - `["deposit", owner: Address, depositor: Address]`
    /// - data - `[amount: i128, total_deposits: i128]`
    pub fn deposit(
        e: &Env,
        owner: &Address,
        depositor: &Address,
        amount: i128,
        total_deposits: i128,
    ) {
        let topics = (
            Symbol::new(&e, "deposit"),
            owner.clone(),
            depositor.clone(),
        );
        e.events().publish(topics, (amount, total_deposits));
    }

    /// Emitted when a borrow or repayment is recorded against a reserve
    ///
    /// - topics - `["loan_activity", owner: Address]`
    /// - data - `[amount: i128, is_repayment: bool, total_borrows: i128, utilization_rate: u32]`
    pub fn loan_activity(
        e: &Env,
        owner: &Address,
        amount: i128,
        is_repayment: bool,
        total_borrows: i128,
        utilization_rate: u32,
    ) {
        let topics = (Symbol::new(&e, "loan_activity"), owner.clone());
        e.events().publish(
            topics,
            (amount, is_repayment, total_borrows, utilization_rate),
        );
    }

    /// Emitted when a fee is processed into a reserve
    ///
    /// - topics - `["fees_processed", owner: Address, fee_source: Address]`
    /// - data - `[fee_amount: i128, insurance_share: i128, reserve_share: i128]`
    pub fn fees_processed(
        e: &Env,
        owner: &Address,
        fee_source: &Address,
        fee_amount: i128,
        insurance_share: i128,
        reserve_share: i128,
    ) {
        let topics = (
            Symbol::new(&e, "fees_processed"),
            owner.clone(),
            fee_source.clone(),
        );
        e.events()
            .publish(topics, (fee_amount, insurance_share, reserve_share));
    }

    /// Emitted when the insurance fund absorbs a liquidation loss
    ///
    /// - topics - `["liquidation_loss", owner: Address]`
    /// - data - `[loss_amount: i128, insurance_total: i128]`
    pub fn liquidation_loss(e: &Env, owner: &Address, loss_amount: i128, insurance_total: i128) {
        let topics = (Symbol::new(&e, "liquidation_loss"), owner.clone());
        e.events().publish(topics, (loss_amount, insurance_total));
    }
}
