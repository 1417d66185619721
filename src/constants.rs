/// 100% expressed in basis points, as an i128 scalar for fixed point math
pub const BPS_SCALAR: i128 = 10_000;
/// 100% expressed in basis points
pub const MAX_BPS: u32 = 10_000;
/// Number of breakpoints in a reserve's utilization curve
pub const CURVE_POINTS: u32 = 4;
/// Utilization distance between two curve breakpoints (25%)
pub const DEFAULT_CURVE_BAND_WIDTH: u32 = 2_500;
