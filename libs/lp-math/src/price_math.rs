use lp_types::{MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK};
use soroban_sdk::{Env, U256};

use crate::full_math::isqrt;
use crate::tick_math::{get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio};

// Linear prices are Q128.128 held in a U256: price * 2^128. Over
// [MIN_TICK, MAX_TICK] the price spans about [2^-64, 2^64), so every value
// is below 2^192 and keeps 64 fractional bits even at MIN_TICK.

/// Linear Q128.128 price from a Q64.96 sqrt price: sqrt^2 / 2^64, rounded down
pub fn sqrt_price_to_price(env: &Env, sqrt_price_x96: u128) -> U256 {
    let sqrt_256 = U256::from_u128(env, sqrt_price_x96);
    sqrt_256.mul(&sqrt_256).shr(64)
}

/// Q64.96 sqrt price from a linear Q128.128 price, rounded down.
///
/// The price must be below 2^192 so the root fits in u128.
pub fn price_to_sqrt_price(env: &Env, price_x128: &U256) -> u128 {
    isqrt(env, &price_x128.shl(64))
}

/// Linear Q128.128 price at a tick
pub fn tick_to_price(env: &Env, tick: i32) -> U256 {
    sqrt_price_to_price(env, get_sqrt_ratio_at_tick(env, tick))
}

/// Greatest tick whose price does not exceed `price_x128`
///
/// Prices outside the representable sqrt range saturate to MIN_TICK or
/// MAX_TICK instead of failing. For unsaturated results
/// `tick_to_price(t) <= price_x128 <= tick_to_price(t + 1)`.
pub fn price_to_tick(env: &Env, price_x128: &U256) -> i32 {
    if *price_x128 == U256::from_u32(env, 0) {
        return MIN_TICK;
    }
    if *price_x128 >= U256::from_u32(env, 1).shl(192) {
        return MAX_TICK;
    }

    let sqrt_price_x96 = price_to_sqrt_price(env, price_x128);
    if sqrt_price_x96 >= MAX_SQRT_RATIO {
        return MAX_TICK;
    }
    if sqrt_price_x96 < MIN_SQRT_RATIO {
        return MIN_TICK;
    }

    get_tick_at_sqrt_ratio(env, sqrt_price_x96)
}
