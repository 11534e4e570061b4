//! Memory side of the machine.
//!
//! This module contains the transaction protocol and its only target. It provides:
//! 1. **Transaction:** Command, address, data buffer, and response status.
//! 2. **Transport:** The blocking call interface between initiator and target.
//! 3. **Memory:** The bounds-checked byte store.

/// Byte-addressable memory target.
pub mod memory;

/// Transport trait implemented by transaction targets.
pub mod traits;

/// Transaction payload and status types.
pub mod transaction;

pub use memory::Memory;
pub use traits::Transport;
pub use transaction::{Command, ResponseStatus, Transaction};
