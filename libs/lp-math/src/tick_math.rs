use lp_types::{MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK};
use soroban_sdk::{Env, U256};

use crate::full_math::u128_from_u256;

// Precomputed sqrt(1.0001^-(2^i)) in Q128
const SQRT_1_0001_1: u128 = 0xfffcb933bd6fad37aa2d162d1a594001;
const SQRT_1_0001_2: u128 = 0xfff97272373d413259a46990580e213a;
const SQRT_1_0001_4: u128 = 0xfff2e50f5f656932ef12357cf3c7fdcc;
const SQRT_1_0001_8: u128 = 0xffe5caca7e10e4e61c3624eaa0941cd0;
const SQRT_1_0001_16: u128 = 0xffcb9843d60f6159c9db58835c926644;
const SQRT_1_0001_32: u128 = 0xff973b41fa98c081472e6896dfb254c0;
const SQRT_1_0001_64: u128 = 0xff2ea16466c96a3843ec78b326b52861;
const SQRT_1_0001_128: u128 = 0xfe5dee046a99a2a811c461f1969c3053;
const SQRT_1_0001_256: u128 = 0xfcbe86c7900a88aedcffc83b479aa3a4;
const SQRT_1_0001_512: u128 = 0xf987a7253ac413176f2b074cf7815e54;
const SQRT_1_0001_1024: u128 = 0xf3392b0822b70005940c7a398e4b70f3;
const SQRT_1_0001_2048: u128 = 0xe7159475a2c29b7443b29c7fa6e889d9;
const SQRT_1_0001_4096: u128 = 0xd097f3bdfd2022b8845ad8f792aa5825;
const SQRT_1_0001_8192: u128 = 0xa9f746462d870fdf8a65dc1f90e061e5;
const SQRT_1_0001_16384: u128 = 0x70d869a156d2a1b890bb3df62baf32f7;
const SQRT_1_0001_32768: u128 = 0x31be135f97d08fd981231505542fcfa6;
const SQRT_1_0001_65536: u128 = 0x9aa508b5b7a84e1c677de54f3e99bc9;
const SQRT_1_0001_131072: u128 = 0x5d6af8dedb81196699c329225ee604;
const SQRT_1_0001_262144: u128 = 0x2216e584f5fa1ea926041bedfe98;

const SQRT_FACTORS: [u128; 19] = [
    SQRT_1_0001_1,
    SQRT_1_0001_2,
    SQRT_1_0001_4,
    SQRT_1_0001_8,
    SQRT_1_0001_16,
    SQRT_1_0001_32,
    SQRT_1_0001_64,
    SQRT_1_0001_128,
    SQRT_1_0001_256,
    SQRT_1_0001_512,
    SQRT_1_0001_1024,
    SQRT_1_0001_2048,
    SQRT_1_0001_4096,
    SQRT_1_0001_8192,
    SQRT_1_0001_16384,
    SQRT_1_0001_32768,
    SQRT_1_0001_65536,
    SQRT_1_0001_131072,
    SQRT_1_0001_262144,
];

/// Calculate sqrt(1.0001^tick) * 2^96
///
/// Bit-exact with the reference Q64.96 algorithm over the u128 tick domain:
/// the ratio is accumulated in Q128 and rounded up into Q96.
pub fn get_sqrt_ratio_at_tick(env: &Env, tick: i32) -> u128 {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        panic!("Tick out of bounds");
    }

    let abs_tick = tick.unsigned_abs();

    // Accumulate sqrt(1.0001^-|tick|) in Q128
    let mut ratio = U256::from_u128(env, 1).shl(128);
    for (bit, factor) in SQRT_FACTORS.iter().enumerate() {
        if abs_tick & (1 << bit) != 0 {
            ratio = mul_shift_128(env, &ratio, *factor);
        }
    }

    // Invert if tick is positive (we computed for negative tick)
    if tick > 0 {
        ratio = u256_max(env).div(&ratio);
    }

    // Q128 -> Q96, rounding up
    let shifted = ratio.shr(32);
    let result = if shifted.shl(32) == ratio {
        shifted
    } else {
        shifted.add(&U256::from_u32(env, 1))
    };

    u128_from_u256(env, &result)
}

/// Get the greatest tick whose sqrt price is at or below `sqrt_price_x96`
/// Binary search over the monotonic tick -> sqrt price mapping
pub fn get_tick_at_sqrt_ratio(env: &Env, sqrt_price_x96: u128) -> i32 {
    if sqrt_price_x96 < MIN_SQRT_RATIO || sqrt_price_x96 >= MAX_SQRT_RATIO {
        panic!("sqrt price out of bounds");
    }

    let mut low = MIN_TICK;
    let mut high = MAX_TICK;

    while low < high {
        let mid = low + (high - low + 1) / 2;
        let sqrt_at_mid = get_sqrt_ratio_at_tick(env, mid);

        if sqrt_at_mid <= sqrt_price_x96 {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    low
}

/// Helper: multiply by u128 and right shift by 128 bits
fn mul_shift_128(env: &Env, x: &U256, y: u128) -> U256 {
    x.mul(&U256::from_u128(env, y)).shr(128)
}

/// Helper: get U256 max value
fn u256_max(env: &Env) -> U256 {
    U256::from_parts(env, u64::MAX, u64::MAX, u64::MAX, u64::MAX)
}
