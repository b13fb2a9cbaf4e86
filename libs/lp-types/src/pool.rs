use soroban_sdk::contracttype;

/// Current pool state as exposed by the pool's `get_state`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    /// Current sqrt(price) as Q64.96
    pub sqrt_price_x96: u128,
    /// Current tick index
    pub tick: i32,
    /// Total liquidity currently in range
    pub liquidity: u128,
}

impl PoolState {
    pub fn new(sqrt_price_x96: u128, tick: i32) -> Self {
        Self {
            sqrt_price_x96,
            tick,
            liquidity: 0,
        }
    }
}
