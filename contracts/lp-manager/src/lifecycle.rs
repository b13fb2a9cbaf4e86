use lp_math::{calculate_tick_range, liquidity_for_range};
use lp_types::{
    CollectParams, DecreaseLiquidityParams, IncreaseLiquidityParams, MintParams, TickRange,
    MAX_SLIPPAGE, MIN_DEPOSIT_AMOUNT,
};
use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{Address, Env, Symbol};

use crate::errors::Failure;
use crate::external::{
    approve_exact, get_pool_state, get_position, get_position_owner, get_tick_spacing,
    invoke_custody_collect, invoke_custody_decrease, invoke_custody_increase, invoke_custody_mint,
    pool_info, pull, refund,
};
use crate::storage::{get_config, get_custody, ManagerConfig};

/// Open a new position around the pool's current price.
/// Returns: (position_id, amount0, amount1)
pub fn provide(
    env: &Env,
    caller: &Address,
    pool: &Address,
    amount0_desired: i128,
    amount1_desired: i128,
    width: u32,
    slippage: u32,
) -> Result<(u32, i128, i128), Failure> {
    check_slippage(slippage)?;
    if amount0_desired < MIN_DEPOSIT_AMOUNT || amount1_desired < MIN_DEPOSIT_AMOUNT {
        return Err(Failure::AmountBelowMinimum {
            amount0: amount0_desired,
            amount1: amount1_desired,
        });
    }
    let config = get_config(env);
    check_width(&config, width)?;

    let info = pool_info(env, pool);
    let range = calculate_tick_range(env, info.state.tick, info.tick_spacing, width)?;

    // Opening floor: the tolerance is the share of the deposit that must land
    let amount0_min = percent_of(amount0_desired, slippage)?;
    let amount1_min = percent_of(amount1_desired, slippage)?;

    let custody = get_custody(env);
    let manager = env.current_contract_address();

    pull(env, &info.token0, caller, amount0_desired)?;
    pull(env, &info.token1, caller, amount1_desired)?;
    approve_exact(env, &info.token0, &custody, amount0_desired)?;
    approve_exact(env, &info.token1, &custody, amount1_desired)?;

    let params = MintParams {
        token0: info.token0.clone(),
        token1: info.token1.clone(),
        fee: info.fee,
        tick_lower: range.lower,
        tick_upper: range.upper,
        amount0_desired,
        amount1_desired,
        amount0_min,
        amount1_min,
        sender: manager,
        recipient: caller.clone(),
        deadline: deadline(env, &config),
    };
    let (position_id, liquidity, amount0, amount1) = invoke_custody_mint(env, &custody, &params);

    refund(env, &info.token0, caller, amount0_desired - amount0);
    refund(env, &info.token1, caller, amount1_desired - amount1);

    env.events().publish(
        (Symbol::new(env, "position_created"),),
        (
            position_id,
            caller.clone(),
            pool.clone(),
            range.lower,
            range.upper,
            liquidity,
            amount0,
            amount1,
        ),
    );

    Ok((position_id, amount0, amount1))
}

/// Add funds to a position the caller owns.
/// Returns: (liquidity, amount0, amount1)
pub fn increase(
    env: &Env,
    caller: &Address,
    position_id: u32,
    amount0_desired: i128,
    amount1_desired: i128,
    slippage: u32,
) -> Result<(u128, i128, i128), Failure> {
    check_slippage(slippage)?;
    if amount0_desired < 0
        || amount1_desired < 0
        || (amount0_desired < MIN_DEPOSIT_AMOUNT && amount1_desired < MIN_DEPOSIT_AMOUNT)
    {
        return Err(Failure::AmountBelowMinimum {
            amount0: amount0_desired,
            amount1: amount1_desired,
        });
    }

    let custody = get_custody(env);
    check_owner(env, &custody, position_id, caller)?;

    // Top-up floor: the tolerance is the share of the deposit that may be lost
    let amount0_min = percent_of(amount0_desired, MAX_SLIPPAGE - slippage)?;
    let amount1_min = percent_of(amount1_desired, MAX_SLIPPAGE - slippage)?;

    let config = get_config(env);
    let position = get_position(env, &custody, position_id);
    let manager = env.current_contract_address();

    pull(env, &position.token0, caller, amount0_desired)?;
    pull(env, &position.token1, caller, amount1_desired)?;
    approve_exact(env, &position.token0, &custody, amount0_desired)?;
    approve_exact(env, &position.token1, &custody, amount1_desired)?;

    let params = IncreaseLiquidityParams {
        position_id,
        amount0_desired,
        amount1_desired,
        amount0_min,
        amount1_min,
        sender: manager,
        deadline: deadline(env, &config),
    };
    let (liquidity, amount0, amount1) = invoke_custody_increase(env, &custody, &params);

    refund(env, &position.token0, caller, amount0_desired - amount0);
    refund(env, &position.token1, caller, amount1_desired - amount1);

    env.events().publish(
        (Symbol::new(env, "liquidity_increased"),),
        (position_id, caller.clone(), liquidity, amount0, amount1),
    );

    Ok((liquidity, amount0, amount1))
}

/// Remove all liquidity from a position and pay everything owed to the
/// caller. Returns: (amount0, amount1) collected
pub fn withdraw(env: &Env, caller: &Address, position_id: u32) -> Result<(u128, u128), Failure> {
    let custody = get_custody(env);
    check_owner(env, &custody, position_id, caller)?;

    let config = get_config(env);
    let position = get_position(env, &custody, position_id);

    if position.liquidity > 0 {
        let params = DecreaseLiquidityParams {
            position_id,
            liquidity: position.liquidity,
            amount0_min: 0,
            amount1_min: 0,
            deadline: deadline(env, &config),
        };
        invoke_custody_decrease(env, &custody, &params);
    }

    let (amount0, amount1) = collect_all(env, &custody, position_id, caller);

    env.events().publish(
        (Symbol::new(env, "liquidity_withdrawn"),),
        (position_id, caller.clone(), position.liquidity, amount0, amount1),
    );

    Ok((amount0, amount1))
}

/// Pay everything the position is owed to the caller, leaving its
/// liquidity in place. Returns: (amount0, amount1)
pub fn collect(env: &Env, caller: &Address, position_id: u32) -> Result<(u128, u128), Failure> {
    let custody = get_custody(env);
    check_owner(env, &custody, position_id, caller)?;

    let (amount0, amount1) = collect_all(env, &custody, position_id, caller);

    env.events().publish(
        (Symbol::new(env, "fees_collected"),),
        (position_id, caller.clone(), amount0, amount1),
    );

    Ok((amount0, amount1))
}

// === Read-only helpers ===

/// Range `provide` would open on `pool` right now
pub fn preview_range(env: &Env, pool: &Address, width: u32) -> Result<TickRange, Failure> {
    check_width(&get_config(env), width)?;

    let tick_spacing = get_tick_spacing(env, pool);
    let state = get_pool_state(env, pool);
    Ok(calculate_tick_range(env, state.tick, tick_spacing, width)?)
}

/// Liquidity a deposit would buy in the range `provide` would open
pub fn preview_liquidity(
    env: &Env,
    pool: &Address,
    amount0: i128,
    amount1: i128,
    width: u32,
) -> Result<u128, Failure> {
    if amount0 < 0 || amount1 < 0 {
        return Err(Failure::AmountBelowMinimum { amount0, amount1 });
    }
    check_width(&get_config(env), width)?;

    let tick_spacing = get_tick_spacing(env, pool);
    let state = get_pool_state(env, pool);
    let range = calculate_tick_range(env, state.tick, tick_spacing, width)?;

    Ok(liquidity_for_range(
        env,
        amount0 as u128,
        amount1 as u128,
        state.sqrt_price_x96,
        &range,
    ))
}

// === Validation ===

fn check_slippage(slippage: u32) -> Result<(), Failure> {
    if slippage > MAX_SLIPPAGE {
        return Err(Failure::SlippageOutOfBounds { slippage });
    }
    Ok(())
}

fn check_width(config: &ManagerConfig, width: u32) -> Result<(), Failure> {
    if width < config.min_width || width > config.max_width {
        return Err(Failure::WidthOutOfBounds {
            width,
            min_width: config.min_width,
            max_width: config.max_width,
        });
    }
    Ok(())
}

/// Ownership is read from custody on every call, never cached
fn check_owner(
    env: &Env,
    custody: &Address,
    position_id: u32,
    caller: &Address,
) -> Result<(), Failure> {
    let owner = get_position_owner(env, custody, position_id);
    if owner != *caller {
        return Err(Failure::NotOwner {
            position_id,
            caller: caller.clone(),
            owner,
        });
    }
    Ok(())
}

fn collect_all(env: &Env, custody: &Address, position_id: u32, recipient: &Address) -> (u128, u128) {
    let params = CollectParams {
        position_id,
        recipient: recipient.clone(),
        amount0_max: u128::MAX,
        amount1_max: u128::MAX,
    };
    invoke_custody_collect(env, custody, &params)
}

/// floor(amount * percent / 100)
fn percent_of(amount: i128, percent: u32) -> Result<i128, Failure> {
    amount
        .fixed_mul_floor(percent as i128, MAX_SLIPPAGE as i128)
        .ok_or(Failure::MathOverflow {
            amount,
            slippage: percent,
        })
}

fn deadline(env: &Env, config: &ManagerConfig) -> u64 {
    env.ledger()
        .timestamp()
        .saturating_add(config.deadline_window)
}
