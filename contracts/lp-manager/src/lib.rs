#![no_std]

mod errors;
mod external;
mod guard;
mod lifecycle;
mod storage;


pub use errors::ManagerError;
pub use storage::ManagerConfig;

use guard::ReentrancyGuard;
use lp_types::TickRange;
use soroban_sdk::{contract, contractimpl, Address, Env};

/// Opens, tops up, withdraws and collects concentrated-liquidity positions
/// on behalf of callers. Positions live in an external custody service;
/// the manager only routes funds and never holds them between calls.
#[contract]
pub struct LpManager;

#[contractimpl]
impl LpManager {
    /// Initialize with the custody service and operator config
    pub fn initialize(env: Env, custody: Address, config: ManagerConfig) {
        if storage::is_initialized(&env) {
            panic!("Already initialized");
        }
        if !config.is_valid() {
            panic!("Invalid config");
        }
        storage::set_custody(&env, &custody);
        storage::set_config(&env, &config);
    }

    /// Open a position `width` basis points either side of the pool price.
    ///
    /// `slippage` is the percentage of each desired amount that must be
    /// deposited. Unused funds go back to the caller.
    /// Returns: (position_id, amount0, amount1)
    pub fn provide_liquidity(
        env: Env,
        caller: Address,
        pool: Address,
        amount0_desired: i128,
        amount1_desired: i128,
        width: u32,
        slippage: u32,
    ) -> Result<(u32, i128, i128), ManagerError> {
        let _guard = ReentrancyGuard::acquire(&env).map_err(|f| f.report(&env))?;
        caller.require_auth();

        lifecycle::provide(
            &env,
            &caller,
            &pool,
            amount0_desired,
            amount1_desired,
            width,
            slippage,
        )
        .map_err(|f| f.report(&env))
    }

    /// Add funds to an owned position.
    ///
    /// `slippage` is the percentage of each desired amount that may go
    /// unused. Either amount may be zero, not both.
    /// Returns: (liquidity, amount0, amount1)
    pub fn increase_liquidity(
        env: Env,
        caller: Address,
        position_id: u32,
        amount0_desired: i128,
        amount1_desired: i128,
        slippage: u32,
    ) -> Result<(u128, i128, i128), ManagerError> {
        let _guard = ReentrancyGuard::acquire(&env).map_err(|f| f.report(&env))?;
        caller.require_auth();

        lifecycle::increase(
            &env,
            &caller,
            position_id,
            amount0_desired,
            amount1_desired,
            slippage,
        )
        .map_err(|f| f.report(&env))
    }

    /// Remove all liquidity and collect everything owed to the caller
    pub fn withdraw_liquidity(
        env: Env,
        caller: Address,
        position_id: u32,
    ) -> Result<(u128, u128), ManagerError> {
        let _guard = ReentrancyGuard::acquire(&env).map_err(|f| f.report(&env))?;
        caller.require_auth();

        lifecycle::withdraw(&env, &caller, position_id).map_err(|f| f.report(&env))
    }

    /// Collect fees and any previously withdrawn tokens
    pub fn collect_fees(
        env: Env,
        caller: Address,
        position_id: u32,
    ) -> Result<(u128, u128), ManagerError> {
        let _guard = ReentrancyGuard::acquire(&env).map_err(|f| f.report(&env))?;
        caller.require_auth();

        lifecycle::collect(&env, &caller, position_id).map_err(|f| f.report(&env))
    }

    // === View Functions ===

    /// Range `provide_liquidity` would open on `pool` at its current price
    pub fn calculate_tick_range(
        env: Env,
        pool: Address,
        width: u32,
    ) -> Result<TickRange, ManagerError> {
        lifecycle::preview_range(&env, &pool, width).map_err(|f| f.report(&env))
    }

    /// Liquidity a deposit would buy in that range
    pub fn calculate_liquidity(
        env: Env,
        pool: Address,
        amount0: i128,
        amount1: i128,
        width: u32,
    ) -> Result<u128, ManagerError> {
        lifecycle::preview_liquidity(&env, &pool, amount0, amount1, width)
            .map_err(|f| f.report(&env))
    }

    pub fn get_config(env: Env) -> ManagerConfig {
        storage::get_config(&env)
    }

    pub fn get_custody(env: Env) -> Address {
        storage::get_custody(&env)
    }
}
