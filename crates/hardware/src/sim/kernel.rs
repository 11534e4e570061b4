//! Simulation kernel primitives.
//!
//! The processor needs one thing from its scheduler: a single-shot notification that carries
//! the entry address and that it can block on. The trigger half is consumed by firing and the
//! signal half is consumed by waiting, so the notification cannot fire or be read twice.
//! Both halves may live on different threads.

use std::sync::mpsc::{self, Receiver, SyncSender};

use tracing::{debug, warn};

use crate::common::KernelError;

/// Creates a connected start trigger and start signal.
pub fn start_signal() -> (StartTrigger, StartSignal) {
    let (tx, rx) = mpsc::sync_channel(1);
    (StartTrigger { tx }, StartSignal { rx })
}

/// Sending half of the start notification, held by the harness.
#[derive(Debug)]
pub struct StartTrigger {
    tx: SyncSender<u16>,
}

impl StartTrigger {
    /// Fires the notification with the entry address.
    ///
    /// Never blocks. If the signal side was already dropped the value is discarded.
    pub fn fire(self, pc: u16) {
        debug!("start signal fired with {pc:#04x}");
        if self.tx.send(pc).is_err() {
            warn!(pc, "start signal fired with no listener");
        }
    }
}

/// Receiving half of the start notification, held by the processor.
#[derive(Debug)]
pub struct StartSignal {
    rx: Receiver<u16>,
}

impl StartSignal {
    /// Blocks until the trigger fires and returns the entry address.
    ///
    /// Returns immediately if the trigger already fired.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::StartSignalDropped`] if the trigger was dropped unfired.
    pub fn wait(self) -> Result<u16, KernelError> {
        self.rx.recv().map_err(|_| KernelError::StartSignalDropped)
    }
}
