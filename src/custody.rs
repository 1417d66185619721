use soroban_sdk::{panic_with_error, token::TokenClient, Address, Env};

use crate::errors::ReserveError;

/// Moves `amount` of `asset` from `from` to `to` through the asset's token contract
///
/// ### Arguments
/// * `asset` - The token contract of the reserve asset
/// * `from` - The address the tokens are taken from. Must authorize the transfer.
/// * `to` - The address receiving the tokens
/// * `amount` - The amount of tokens to move
///
/// ### Panics
/// * `TransferFailed` - If the token contract rejects the transfer
pub fn transfer(e: &Env, asset: &Address, from: &Address, to: &Address, amount: i128) {
    let result = TokenClient::new(e, asset).try_transfer(from, to, &amount);
    if !matches!(result, Ok(Ok(()))) {
        panic_with_error!(e, ReserveError::TransferFailed);
    }
}

/// The custody address of a reserve's liquidity pool
#[inline]
pub fn liquidity_pool(e: &Env) -> Address {
    e.current_contract_address()
}
