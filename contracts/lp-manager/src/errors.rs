use lp_math::RangeError;
use soroban_sdk::{contracterror, log, Address, Env};

/// Error codes returned by the manager's mutating entry points
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ManagerError {
    /// Slippage tolerance above 100
    SlippageOutOfBounds = 1,
    /// Deposit amount below the accepted minimum
    AmountBelowMinimum = 2,
    /// Range width outside the configured bounds
    WidthOutOfBounds = 3,
    /// No valid tick range around the current price
    InvalidRange = 4,
    /// Caller does not own the position
    NotOwner = 5,
    /// A mutating entry point is already executing
    Reentrant = 6,
    /// Pulling funds from the caller failed
    TransferFailed = 7,
    /// Granting the custody service an allowance failed
    ApprovalFailed = 8,
    /// Slippage floor computation overflowed
    MathOverflow = 9,
}

/// Internal failure carrying the values that caused it.
///
/// Flows build these and the entry points turn them into a `ManagerError`
/// with `report`, which logs the context first.
#[derive(Clone, Debug)]
pub enum Failure {
    SlippageOutOfBounds {
        slippage: u32,
    },
    AmountBelowMinimum {
        amount0: i128,
        amount1: i128,
    },
    WidthOutOfBounds {
        width: u32,
        min_width: u32,
        max_width: u32,
    },
    InvalidRange {
        lower: i32,
        upper: i32,
    },
    InvalidSpacing {
        tick_spacing: i32,
    },
    NotOwner {
        position_id: u32,
        caller: Address,
        owner: Address,
    },
    Reentrant,
    TransferFailed {
        token: Address,
        from: Address,
        amount: i128,
    },
    ApprovalFailed {
        token: Address,
        spender: Address,
        amount: i128,
    },
    MathOverflow {
        amount: i128,
        slippage: u32,
    },
}

impl Failure {
    /// Log the failure context and return its error code
    pub fn report(self, env: &Env) -> ManagerError {
        match self {
            Failure::SlippageOutOfBounds { slippage } => {
                log!(env, "slippage out of bounds", slippage);
                ManagerError::SlippageOutOfBounds
            }
            Failure::AmountBelowMinimum { amount0, amount1 } => {
                log!(env, "amount below minimum", amount0, amount1);
                ManagerError::AmountBelowMinimum
            }
            Failure::WidthOutOfBounds {
                width,
                min_width,
                max_width,
            } => {
                log!(env, "width out of bounds", width, min_width, max_width);
                ManagerError::WidthOutOfBounds
            }
            Failure::InvalidRange { lower, upper } => {
                log!(env, "invalid range", lower, upper);
                ManagerError::InvalidRange
            }
            Failure::InvalidSpacing { tick_spacing } => {
                log!(env, "invalid tick spacing", tick_spacing);
                ManagerError::InvalidRange
            }
            Failure::NotOwner {
                position_id,
                caller,
                owner,
            } => {
                log!(env, "not owner", position_id, caller, owner);
                ManagerError::NotOwner
            }
            Failure::Reentrant => {
                log!(env, "reentrant call");
                ManagerError::Reentrant
            }
            Failure::TransferFailed {
                token,
                from,
                amount,
            } => {
                log!(env, "transfer failed", token, from, amount);
                ManagerError::TransferFailed
            }
            Failure::ApprovalFailed {
                token,
                spender,
                amount,
            } => {
                log!(env, "approval failed", token, spender, amount);
                ManagerError::ApprovalFailed
            }
            Failure::MathOverflow { amount, slippage } => {
                log!(env, "slippage floor overflow", amount, slippage);
                ManagerError::MathOverflow
            }
        }
    }
}

impl From<RangeError> for Failure {
    fn from(err: RangeError) -> Self {
        match err {
            RangeError::InvalidSpacing(tick_spacing) => Failure::InvalidSpacing { tick_spacing },
            RangeError::InvalidRange { lower, upper } => Failure::InvalidRange { lower, upper },
        }
    }
}
