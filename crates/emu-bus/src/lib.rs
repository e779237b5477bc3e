//! Bus and timing primitives shared by CPU cores.
//!
//! The processor sees memory only through the [`Bus`] trait and charges
//! every timed operation against a [`Cycles`] budget owned by its
//! execute loop.

mod bus;
mod cycles;
mod memory;

pub use bus::Bus;
pub use cycles::Cycles;
pub use memory::{FlatMemory, MAX_MEM};
