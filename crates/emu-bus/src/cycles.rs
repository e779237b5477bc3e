//! The cycle budget threaded through every timed operation.

/// A spendable budget of CPU cycles.
///
/// The execute loop owns one of these and lends it to every primitive
/// that consumes simulated time. The remainder is signed: the budget is
/// checked only between instructions, so the final instruction of a run
/// may push it below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycles {
    budget: i64,
    remaining: i64,
}

impl Cycles {
    #[must_use]
    pub const fn new(budget: i64) -> Self {
        Self {
            budget,
            remaining: budget,
        }
    }

    /// Charge `n` cycles against the budget.
    pub fn spend(&mut self, n: u32) {
        self.remaining -= i64::from(n);
    }

    /// True once the budget has been fully spent (or overspent).
    #[must_use]
    pub const fn exhausted(&self) -> bool {
        self.remaining <= 0
    }

    /// Cycles left before the next instruction-boundary check fails.
    #[must_use]
    pub const fn remaining(&self) -> i64 {
        self.remaining
    }

    /// Cycles consumed so far.
    ///
    /// A committed instruction counts in full even when it overran the
    /// budget; a run that never spent anything reports zero.
    #[must_use]
    pub const fn consumed(&self) -> u64 {
        let spent = self.budget - self.remaining;
        if spent > 0 { spent as u64 } else { 0 }
    }
}
