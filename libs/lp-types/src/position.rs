use soroban_sdk::{contracttype, Address};

/// Position record as reported by the custody service's `positions`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionData {
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    /// Lower tick boundary
    pub tick_lower: i32,
    /// Upper tick boundary
    pub tick_upper: i32,
    /// Liquidity amount
    pub liquidity: u128,
    /// Collectable token0 (fees plus withdrawn principal)
    pub tokens_owed_0: u128,
    /// Collectable token1 (fees plus withdrawn principal)
    pub tokens_owed_1: u128,
}

/// Custody `mint` parameters
///
/// `sender` funds the position through a prior token allowance and
/// `recipient` becomes the position owner.
#[contracttype]
#[derive(Clone, Debug)]
pub struct MintParams {
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub amount0_desired: i128,
    pub amount1_desired: i128,
    pub amount0_min: i128,
    pub amount1_min: i128,
    pub sender: Address,
    pub recipient: Address,
    pub deadline: u64,
}

/// Custody `increase_liquidity` parameters
#[contracttype]
#[derive(Clone, Debug)]
pub struct IncreaseLiquidityParams {
    pub position_id: u32,
    pub amount0_desired: i128,
    pub amount1_desired: i128,
    pub amount0_min: i128,
    pub amount1_min: i128,
    pub sender: Address,
    pub deadline: u64,
}

/// Custody `decrease_liquidity` parameters
#[contracttype]
#[derive(Clone, Debug)]
pub struct DecreaseLiquidityParams {
    pub position_id: u32,
    pub liquidity: u128,
    pub amount0_min: i128,
    pub amount1_min: i128,
    pub deadline: u64,
}

/// Custody `collect` parameters
#[contracttype]
#[derive(Clone, Debug)]
pub struct CollectParams {
    pub position_id: u32,
    pub recipient: Address,
    pub amount0_max: u128,
    pub amount1_max: u128,
}
