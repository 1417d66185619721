use soroban_sdk::{panic_with_error, Env};

use crate::{
    constants::{CURVE_POINTS, DEFAULT_CURVE_BAND_WIDTH, MAX_BPS},
    errors::ReserveError,
    types::ReserveConfig,
};

/// Require that an incoming amount is positive
///
/// ### Arguments
/// * `amount` - The amount to check
/// * `err` - The error to panic with if the amount is non-positive
///
/// ### Panics
/// If the number is negative or zero
pub fn require_positive(e: &Env, amount: i128, err: ReserveError) {
    if amount <= 0 {
        panic_with_error!(e, err);
    }
}

/// Require that a reserve configuration is valid
///
/// ### Panics
/// * `InvalidConfig` - If either fee factor exceeds 100%, the factors sum past 100%,
///   the curve does not hold exactly 4 non-decreasing points, or the band width is
///   outside of (0, 25%]
pub fn require_valid_config(e: &Env, config: &ReserveConfig) {
    if !is_valid_config(config) {
        panic_with_error!(e, ReserveError::InvalidConfig);
    }
}

fn is_valid_config(config: &ReserveConfig) -> bool {
    if config.reserve_factor > MAX_BPS || config.insurance_factor > MAX_BPS {
        return false;
    }
    if config.reserve_factor + config.insurance_factor > MAX_BPS {
        return false;
    }
    // the top breakpoint must sit at or below 100% utilization
    if config.curve_band_width == 0 || config.curve_band_width > DEFAULT_CURVE_BAND_WIDTH {
        return false;
    }
    if config.utilization_curve.len() != CURVE_POINTS {
        return false;
    }
    let mut prev = 0;
    for point in config.utilization_curve.iter() {
        if point < prev {
            return false;
        }
        prev = point;
    }
    true
}
