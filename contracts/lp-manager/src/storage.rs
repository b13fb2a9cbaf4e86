use lp_types::{
    BPS_DENOMINATOR, DEFAULT_DEADLINE_WINDOW, DEFAULT_MAX_WIDTH, DEFAULT_MIN_WIDTH,
};
use soroban_sdk::{contracttype, Address, Env};

/// Storage keys for the manager contract (all instance storage)
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Custody service holding the positions
    Custody,
    /// Width bounds and deadline window
    Config,
    /// Set while a mutating entry point is executing
    Locked,
}

/// Operator-set parameters, fixed at initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ManagerConfig {
    /// Narrowest accepted range width in basis points
    pub min_width: u32,
    /// Widest accepted range width in basis points
    pub max_width: u32,
    /// Seconds a custody call stays valid after it is issued
    pub deadline_window: u64,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
            deadline_window: DEFAULT_DEADLINE_WINDOW,
        }
    }
}

impl ManagerConfig {
    pub fn is_valid(&self) -> bool {
        self.min_width >= 1
            && self.min_width <= self.max_width
            && self.max_width <= BPS_DENOMINATOR
            && self.deadline_window > 0
    }
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Custody)
}

// === Custody ===

pub fn get_custody(env: &Env) -> Address {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Custody)
        .expect("Not initialized")
}

pub fn set_custody(env: &Env, custody: &Address) {
    env.storage().instance().set(&DataKey::Custody, custody);
    extend_instance_ttl(env);
}

// === Config ===

pub fn get_config(env: &Env) -> ManagerConfig {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("Not initialized")
}

pub fn set_config(env: &Env, config: &ManagerConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Lock ===

pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Locked)
        .unwrap_or(false)
}

pub fn set_locked(env: &Env, locked: bool) {
    if locked {
        env.storage().instance().set(&DataKey::Locked, &true);
    } else {
        env.storage().instance().remove(&DataKey::Locked);
    }
}
