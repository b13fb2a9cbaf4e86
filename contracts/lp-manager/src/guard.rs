use soroban_sdk::Env;

use crate::errors::Failure;
use crate::storage::{is_locked, set_locked};

/// Holds the contract-wide lock for the lifetime of one mutating call.
///
/// The lock is released when the guard is dropped, on success and on
/// every early return.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn acquire(env: &'a Env) -> Result<Self, Failure> {
        if is_locked(env) {
            return Err(Failure::Reentrant);
        }
        set_locked(env, true);
        Ok(Self { env })
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        set_locked(self.env, false);
    }
}
