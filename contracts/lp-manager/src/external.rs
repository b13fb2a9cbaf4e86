use lp_types::{
    CollectParams, DecreaseLiquidityParams, IncreaseLiquidityParams, MintParams, PoolState,
    PositionData,
};
use soroban_sdk::{log, token, Address, Env, IntoVal, Symbol};

use crate::errors::Failure;

/// What the manager needs to know about a pool
pub struct PoolInfo {
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    pub tick_spacing: i32,
    pub state: PoolState,
}

// === Pool reads ===

pub fn pool_info(env: &Env, pool: &Address) -> PoolInfo {
    PoolInfo {
        token0: env.invoke_contract(pool, &Symbol::new(env, "token0"), ().into_val(env)),
        token1: env.invoke_contract(pool, &Symbol::new(env, "token1"), ().into_val(env)),
        fee: env.invoke_contract(pool, &Symbol::new(env, "fee"), ().into_val(env)),
        tick_spacing: env.invoke_contract(pool, &Symbol::new(env, "tick_spacing"), ().into_val(env)),
        state: get_pool_state(env, pool),
    }
}

pub fn get_pool_state(env: &Env, pool: &Address) -> PoolState {
    env.invoke_contract(pool, &Symbol::new(env, "get_state"), ().into_val(env))
}

pub fn get_tick_spacing(env: &Env, pool: &Address) -> i32 {
    env.invoke_contract(pool, &Symbol::new(env, "tick_spacing"), ().into_val(env))
}

// === Custody calls ===

/// Returns: (position_id, liquidity, amount0, amount1)
pub fn invoke_custody_mint(
    env: &Env,
    custody: &Address,
    params: &MintParams,
) -> (u32, u128, i128, i128) {
    env.invoke_contract(
        custody,
        &Symbol::new(env, "mint"),
        (params.clone(),).into_val(env),
    )
}

/// Returns: (liquidity, amount0, amount1)
pub fn invoke_custody_increase(
    env: &Env,
    custody: &Address,
    params: &IncreaseLiquidityParams,
) -> (u128, i128, i128) {
    env.invoke_contract(
        custody,
        &Symbol::new(env, "increase_liquidity"),
        (params.clone(),).into_val(env),
    )
}

pub fn invoke_custody_decrease(
    env: &Env,
    custody: &Address,
    params: &DecreaseLiquidityParams,
) -> (i128, i128) {
    env.invoke_contract(
        custody,
        &Symbol::new(env, "decrease_liquidity"),
        (params.clone(),).into_val(env),
    )
}

pub fn invoke_custody_collect(env: &Env, custody: &Address, params: &CollectParams) -> (u128, u128) {
    env.invoke_contract(
        custody,
        &Symbol::new(env, "collect"),
        (params.clone(),).into_val(env),
    )
}

pub fn get_position(env: &Env, custody: &Address, position_id: u32) -> PositionData {
    env.invoke_contract(
        custody,
        &Symbol::new(env, "positions"),
        (position_id,).into_val(env),
    )
}

pub fn get_position_owner(env: &Env, custody: &Address, position_id: u32) -> Address {
    env.invoke_contract(
        custody,
        &Symbol::new(env, "owner_of"),
        (position_id,).into_val(env),
    )
}

// === Token movements ===

/// Move `amount` of `token` from `from` into the manager
pub fn pull(env: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), Failure> {
    if amount == 0 {
        return Ok(());
    }

    let client = token::Client::new(env, token);
    match client.try_transfer(from, &env.current_contract_address(), &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Failure::TransferFailed {
            token: token.clone(),
            from: from.clone(),
            amount,
        }),
    }
}

/// Reset the spender's allowance to zero, then grant exactly `amount`
/// for the current ledger only.
pub fn approve_exact(
    env: &Env,
    token: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), Failure> {
    let client = token::Client::new(env, token);
    let manager = env.current_contract_address();
    let expiration_ledger = env.ledger().sequence();

    for value in [0, amount] {
        if !matches!(
            client.try_approve(&manager, spender, &value, &expiration_ledger),
            Ok(Ok(()))
        ) {
            return Err(Failure::ApprovalFailed {
                token: token.clone(),
                spender: spender.clone(),
                amount,
            });
        }
    }

    Ok(())
}

/// Return the part of this call's deposit that custody left unused.
///
/// Only `amount` moves, so funds stranded by an earlier failed refund are
/// never paid to a later caller. A failed refund is reported and the funds
/// stay with the manager; it never fails the enclosing operation.
pub fn refund(env: &Env, token: &Address, to: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }

    let client = token::Client::new(env, token);
    let manager = env.current_contract_address();
    if !matches!(client.try_transfer(&manager, to, &amount), Ok(Ok(()))) {
        log!(env, "refund failed", token.clone(), to.clone(), amount);
        env.events().publish(
            (Symbol::new(env, "refund_failed"),),
            (token.clone(), to.clone(), amount),
        );
    }
}
