use soroban_sdk::contracttype;

/// A tick-aligned position range `[lower, upper)`
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TickRange {
    pub lower: i32,
    pub upper: i32,
}

impl TickRange {
    pub fn new(lower: i32, upper: i32) -> Self {
        Self { lower, upper }
    }

    pub fn is_aligned(&self, tick_spacing: i32) -> bool {
        tick_spacing > 0 && self.lower % tick_spacing == 0 && self.upper % tick_spacing == 0
    }
}
