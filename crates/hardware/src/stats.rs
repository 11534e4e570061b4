//! Execution statistics collection and reporting.
//!
//! This module tracks what a run did. It provides:
//! 1. **Instruction count:** Instructions that completed, including the final `END`.
//! 2. **Transaction mix:** Fetch, load, and store transactions issued (including failed ones).
//! 3. **Faults:** Number of faults that halted the processor (0 or 1 per run).

use std::fmt;

use crate::common::AccessType;

/// Execution counters kept by the processor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecStats {
    /// Instructions that completed without a fault.
    pub instructions_retired: u64,
    /// Instruction-fetch transactions issued.
    pub fetches: u64,
    /// Data-read transactions issued by `LOAD`.
    pub loads: u64,
    /// Data-write transactions issued by `STORE`.
    pub stores: u64,
    /// Faults that halted the processor.
    pub faults: u64,
}

impl ExecStats {
    /// Counts one issued transaction.
    pub const fn record_access(&mut self, access: AccessType) {
        match access {
            AccessType::Fetch => self.fetches += 1,
            AccessType::Read => self.loads += 1,
            AccessType::Write => self.stores += 1,
        }
    }

    /// Total transactions issued.
    pub const fn transactions(&self) -> u64 {
        self.fetches + self.loads + self.stores
    }
}

impl fmt::Display for ExecStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================")?;
        writeln!(f, "EXECUTION STATISTICS")?;
        writeln!(f, "==========================================")?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "transactions             {}", self.transactions())?;
        writeln!(f, "  fetch                  {}", self.fetches)?;
        writeln!(f, "  load                   {}", self.loads)?;
        writeln!(f, "  store                  {}", self.stores)?;
        write!(f, "faults                   {}", self.faults)
    }
}
