#![no_std]

mod pool;
mod position;
mod tick;

pub use pool::*;
pub use position::*;
pub use tick::*;

/// Q96 constant (2^96) for sqrt price fixed-point math
pub const Q96: u128 = 1 << 96;

/// Minimum tick index
/// Limited by u128 representation (originally -887272 for uint160)
pub const MIN_TICK: i32 = -443636;

/// Maximum tick index
/// Limited by u128 representation (originally 887272 for uint160)
pub const MAX_TICK: i32 = 443636;

/// Minimum sqrt price (at MIN_TICK)
/// sqrt(1.0001^-443636) * 2^96, rounded up
pub const MIN_SQRT_RATIO: u128 = 18447090764788882728;

/// Maximum sqrt price (at MAX_TICK)
/// sqrt(1.0001^443636) * 2^96, bounded by u128::MAX
pub const MAX_SQRT_RATIO: u128 = 340275971719517849884101479065584693834;

/// Range widths are expressed in basis points of the current price
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Slippage tolerance is a whole percentage in [0, MAX_SLIPPAGE]
pub const MAX_SLIPPAGE: u32 = 100;

/// Smallest desired deposit accepted for either asset
pub const MIN_DEPOSIT_AMOUNT: i128 = 1;

/// Default narrowest range width (0.01%)
pub const DEFAULT_MIN_WIDTH: u32 = 1;

/// Default widest range width (100%)
pub const DEFAULT_MAX_WIDTH: u32 = BPS_DENOMINATOR;

/// Seconds a custody call stays executable after it is issued
pub const DEFAULT_DEADLINE_WINDOW: u64 = 300;
