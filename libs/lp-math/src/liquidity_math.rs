use crate::full_math::{mul_div, mul_div_wide, u128_from_u256};
use crate::tick_math::get_sqrt_ratio_at_tick;
use lp_types::{TickRange, Q96};
use soroban_sdk::{Env, U256};

/// Calculate liquidity from token amounts for a price range
pub fn get_liquidity_for_amounts(
    env: &Env,
    sqrt_ratio_x96: u128,
    sqrt_ratio_a_x96: u128,
    sqrt_ratio_b_x96: u128,
    amount0: u128,
    amount1: u128,
) -> u128 {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    if sqrt_ratio_x96 <= sqrt_ratio_lower {
        // Current price below range - all token0
        get_liquidity_for_amount0(env, sqrt_ratio_lower, sqrt_ratio_upper, amount0)
    } else if sqrt_ratio_x96 < sqrt_ratio_upper {
        // Current price in range - both tokens
        let liquidity0 =
            get_liquidity_for_amount0(env, sqrt_ratio_x96, sqrt_ratio_upper, amount0);
        let liquidity1 =
            get_liquidity_for_amount1(env, sqrt_ratio_lower, sqrt_ratio_x96, amount1);
        liquidity0.min(liquidity1)
    } else {
        // Current price above range - all token1
        get_liquidity_for_amount1(env, sqrt_ratio_lower, sqrt_ratio_upper, amount1)
    }
}

/// Liquidity a deposit of `amount0`/`amount1` buys in `range` at the
/// current sqrt price. Pure; callers use it to estimate a deposit.
pub fn liquidity_for_range(
    env: &Env,
    amount0: u128,
    amount1: u128,
    sqrt_price_x96: u128,
    range: &TickRange,
) -> u128 {
    let sqrt_ratio_lower = get_sqrt_ratio_at_tick(env, range.lower);
    let sqrt_ratio_upper = get_sqrt_ratio_at_tick(env, range.upper);

    get_liquidity_for_amounts(
        env,
        sqrt_price_x96,
        sqrt_ratio_lower,
        sqrt_ratio_upper,
        amount0,
        amount1,
    )
}

/// Calculate liquidity from amount0
/// L = amount0 * sqrt_pa * sqrt_pb / (sqrt_pb - sqrt_pa)
fn get_liquidity_for_amount0(
    env: &Env,
    sqrt_ratio_a_x96: u128,
    sqrt_ratio_b_x96: u128,
    amount0: u128,
) -> u128 {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    // sqrt_pa * sqrt_pb / Q96 can exceed 128 bits near the top of the domain
    let intermediate = U256::from_u128(env, sqrt_ratio_lower)
        .mul(&U256::from_u128(env, sqrt_ratio_upper))
        .shr(96);
    let liquidity = mul_div_wide(
        env,
        &intermediate,
        amount0,
        sqrt_ratio_upper - sqrt_ratio_lower,
    );
    u128_from_u256(env, &liquidity)
}

/// Calculate liquidity from amount1
/// L = amount1 / (sqrt_pb - sqrt_pa)
fn get_liquidity_for_amount1(
    env: &Env,
    sqrt_ratio_a_x96: u128,
    sqrt_ratio_b_x96: u128,
    amount1: u128,
) -> u128 {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    mul_div(env, amount1, Q96, sqrt_ratio_upper - sqrt_ratio_lower)
}

/// Get amounts from liquidity for a price range
pub fn get_amounts_for_liquidity(
    env: &Env,
    sqrt_ratio_x96: u128,
    sqrt_ratio_a_x96: u128,
    sqrt_ratio_b_x96: u128,
    liquidity: u128,
) -> (u128, u128) {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    if sqrt_ratio_x96 <= sqrt_ratio_lower {
        // Below range - all token0
        let amount0 = get_amount0_for_liquidity(env, sqrt_ratio_lower, sqrt_ratio_upper, liquidity);
        (amount0, 0)
    } else if sqrt_ratio_x96 < sqrt_ratio_upper {
        // In range - both tokens
        let amount0 = get_amount0_for_liquidity(env, sqrt_ratio_x96, sqrt_ratio_upper, liquidity);
        let amount1 = get_amount1_for_liquidity(env, sqrt_ratio_lower, sqrt_ratio_x96, liquidity);
        (amount0, amount1)
    } else {
        // Above range - all token1
        let amount1 = get_amount1_for_liquidity(env, sqrt_ratio_lower, sqrt_ratio_upper, liquidity);
        (0, amount1)
    }
}

/// Calculate amount0 from liquidity
/// amount0 = (L << 96) * (sqrt_pb - sqrt_pa) / sqrt_pb / sqrt_pa
fn get_amount0_for_liquidity(
    env: &Env,
    sqrt_ratio_a_x96: u128,
    sqrt_ratio_b_x96: u128,
    liquidity: u128,
) -> u128 {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    let numerator = U256::from_u128(env, liquidity).shl(96);
    let scaled = mul_div_wide(
        env,
        &numerator,
        sqrt_ratio_upper - sqrt_ratio_lower,
        sqrt_ratio_upper,
    );
    u128_from_u256(env, &scaled.div(&U256::from_u128(env, sqrt_ratio_lower)))
}

/// Calculate amount1 from liquidity
fn get_amount1_for_liquidity(
    env: &Env,
    sqrt_ratio_a_x96: u128,
    sqrt_ratio_b_x96: u128,
    liquidity: u128,
) -> u128 {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    mul_div(env, liquidity, sqrt_ratio_upper - sqrt_ratio_lower, Q96)
}

fn sort(a: u128, b: u128) -> (u128, u128) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}
