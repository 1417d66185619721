use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::Env;

use crate::{constants::BPS_SCALAR, types::ReserveConfig};

/// Calculates the utilization of a reserve in bps, rounding down
///
/// ### Arguments
/// * `total_borrows` - The outstanding borrows of the reserve
/// * `total_deposits` - The total deposits of the reserve
///
/// ### Returns
/// * `u32` - The utilization, 0 if nothing is deposited, saturating at `u32::MAX`
pub fn utilization_rate(e: &Env, total_borrows: i128, total_deposits: i128) -> u32 {
    if total_deposits <= 0 {
        return 0;
    }
    if total_borrows / total_deposits > u32::MAX as i128 / BPS_SCALAR {
        return u32::MAX;
    }
    // widens to 256 bits when borrows * 10000 does not fit in an i128
    let utilization =
        SorobanFixedPoint::fixed_mul_floor(&total_borrows, e, &BPS_SCALAR, &total_deposits);
    saturate_bps(utilization)
}

/// Calculates the borrow rate of a reserve in bps at a given utilization
///
/// The rate is the base borrow rate plus a premium interpolated linearly between the
/// curve breakpoints, where the premium at 0% utilization is 0. Past the last breakpoint
/// the slope of the final band is extended.
///
/// ### Arguments
/// * `config` - The reserve configuration. Must have been validated.
/// * `utilization` - The utilization, in bps
///
/// ### Returns
/// * `u32` - The borrow rate, saturating at `u32::MAX`
pub fn borrow_rate(config: &ReserveConfig, utilization: u32) -> u32 {
    let band = config.curve_band_width as i128;
    let utilization = utilization as i128;
    let last = config.utilization_curve.len() - 1;

    let mut prev_point: i128 = 0;
    let mut prev_rate: i128 = 0;
    for (index, rate) in config.utilization_curve.iter().enumerate() {
        let point = band * (index as i128 + 1);
        let rate = rate as i128;
        if utilization <= point || index as u32 == last {
            let premium = prev_rate + (rate - prev_rate) * (utilization - prev_point) / band;
            return saturate_bps(config.base_borrow_rate as i128 + premium);
        }
        prev_point = point;
        prev_rate = rate;
    }
    config.base_borrow_rate
}

fn saturate_bps(value: i128) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
