//! Transport trait for transaction targets.
//!
//! This module defines the `Transport` trait implemented by every component that can answer a
//! [`Transaction`]. It is the only channel through which the processor reaches memory:
//! 1. **Blocking call:** `b_transport` returns only once the transaction is fully applied.
//! 2. **Status reporting:** The target annotates the transaction with a response status and
//!    never raises an error of its own.

use super::transaction::Transaction;

/// Trait for targets bound to the processor's initiator side.
///
/// Implementors read from or write into the transaction's data buffer and then set its
/// response status. A transaction left `Incomplete` by a target is treated as an error by the
/// initiator.
pub trait Transport {
    /// Services one transaction synchronously.
    fn b_transport(&mut self, trans: &mut Transaction<'_>);
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn b_transport(&mut self, trans: &mut Transaction<'_>) {
        (**self).b_transport(trans);
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn b_transport(&mut self, trans: &mut Transaction<'_>) {
        (**self).b_transport(trans);
    }
}
