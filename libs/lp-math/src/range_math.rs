use lp_types::{TickRange, BPS_DENOMINATOR, MAX_TICK, MIN_TICK};
use soroban_sdk::{Env, U256};

use crate::full_math::mul_div_wide;
use crate::price_math::{price_to_tick, tick_to_price};

/// Reasons a range cannot be produced
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RangeError {
    /// Tick spacing must be positive
    InvalidSpacing(i32),
    /// Alignment and clamping left no room between the bounds
    InvalidRange { lower: i32, upper: i32 },
}

/// Round a tick down to a multiple of `tick_spacing`
pub fn floor_to_spacing(tick: i32, tick_spacing: i32) -> i32 {
    tick.div_euclid(tick_spacing) * tick_spacing
}

/// Round a tick up to a multiple of `tick_spacing`
pub fn ceil_to_spacing(tick: i32, tick_spacing: i32) -> i32 {
    -floor_to_spacing(-tick, tick_spacing)
}

/// The extreme spacing multiples inside [MIN_TICK, MAX_TICK]
pub fn usable_tick_bounds(tick_spacing: i32) -> (i32, i32) {
    (
        ceil_to_spacing(MIN_TICK, tick_spacing),
        floor_to_spacing(MAX_TICK, tick_spacing),
    )
}

/// Build a tick-aligned range spanning `width_bps` of the price at
/// `current_tick` on either side.
///
/// The width itself is validated by the caller. Each bound is widened to
/// at least the nearest aligned tick strictly beyond the current tick, then
/// both are clamped to the usable tick bounds.
pub fn calculate_tick_range(
    env: &Env,
    current_tick: i32,
    tick_spacing: i32,
    width_bps: u32,
) -> Result<TickRange, RangeError> {
    if tick_spacing <= 0 {
        return Err(RangeError::InvalidSpacing(tick_spacing));
    }

    let price = tick_to_price(env, current_tick);
    let delta = mul_div_wide(env, &price, width_bps as u128, BPS_DENOMINATOR as u128);

    // The lower price never drops below one unit
    let lower_price = if delta >= price {
        U256::from_u32(env, 1)
    } else {
        price.sub(&delta)
    };
    // price < 2^192 and delta <= price, so the sum stays far below 2^256
    let upper_price = price.add(&delta);

    let lower = floor_to_spacing(price_to_tick(env, &lower_price), tick_spacing)
        .min(floor_to_spacing(current_tick - 1, tick_spacing));
    let upper = ceil_to_spacing(price_to_tick(env, &upper_price), tick_spacing)
        .max(ceil_to_spacing(current_tick + 1, tick_spacing));

    let (min_usable, max_usable) = usable_tick_bounds(tick_spacing);
    let lower = lower.clamp(min_usable, max_usable);
    let upper = upper.clamp(min_usable, max_usable);

    if lower >= upper {
        return Err(RangeError::InvalidRange { lower, upper });
    }

    Ok(TickRange::new(lower, upper))
}
