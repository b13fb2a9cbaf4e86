use integer_sqrt::IntegerSquareRoot;
use soroban_sdk::{Env, U256};

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns (a * b) / denominator
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    if denominator == 0 {
        panic!("Division by zero");
    }

    let a_256 = U256::from_u128(env, a);
    let b_256 = U256::from_u128(env, b);
    let denom_256 = U256::from_u128(env, denominator);

    let result = a_256.mul(&b_256).div(&denom_256);
    u128_from_u256(env, &result)
}

/// Full-precision floor(a * b / denominator) for a 256-bit `a`.
///
/// Splits `a = q * denominator + r` so the product never needs more than
/// 256 bits: the result is `q * b + floor(r * b / denominator)`, exact
/// whenever the final value fits in 256 bits.
pub fn mul_div_wide(env: &Env, a: &U256, b: u128, denominator: u128) -> U256 {
    if denominator == 0 {
        panic!("Division by zero");
    }

    let b_256 = U256::from_u128(env, b);
    let denom_256 = U256::from_u128(env, denominator);

    let quotient = a.div(&denom_256);
    let remainder = a.rem_euclid(&denom_256);

    quotient
        .mul(&b_256)
        .add(&remainder.mul(&b_256).div(&denom_256))
}

/// Convert U256 to u128, panics if overflow
pub fn u128_from_u256(env: &Env, value: &U256) -> u128 {
    let max_u128 = U256::from_u128(env, u128::MAX);
    if value.gt(&max_u128) {
        panic!("U256 overflow when converting to u128");
    }
    match value.to_u128() {
        Some(v) => v,
        None => panic!("U256 overflow when converting to u128"),
    }
}

/// Floor square root of a 256-bit value whose root fits in u128
pub fn isqrt(env: &Env, value: &U256) -> u128 {
    let high = value.shr(128);
    let high = u128_from_u256(env, &high);
    if high == 0 {
        return u128_from_u256(env, value).integer_sqrt();
    }

    // (isqrt(high) + 1) * 2^64 is never below the true root
    let mut x = U256::from_u128(env, high.integer_sqrt() + 1).shl(64);
    loop {
        let y = x.add(&value.div(&x)).shr(1);
        if y >= x {
            break;
        }
        x = y;
    }
    u128_from_u256(env, &x)
}
