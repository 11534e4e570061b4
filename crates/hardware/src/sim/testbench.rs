//! Reference test bench.
//!
//! Loads two data bytes and a six-instruction program, then signals the processor to start at
//! the program address. After the run, `mem[0x05]`, `R3`, and `R0` all hold `10 + 15 = 25`.

use tracing::info;

use super::loader::encode_words;
use super::simulator::Simulator;
use crate::common::{KernelError, LoadError};
use crate::config::Config;
use crate::core::HaltReason;

/// Address the program is placed at and started from.
pub const PROG_ADDR: u16 = 0x21;

/// The program, one 32-bit word per instruction, opcode in the top byte.
pub const PROGRAM: [u32; 6] = [
    0x0102_0300, // LOAD R2, [0x03]
    0x0101_0400, // LOAD R1, [0x04]
    0x0203_0102, // ADD R3, R1, R2
    0x0305_0300, // STORE [0x05], R3
    0x0100_0500, // LOAD R0, [0x05]
    0x0000_0000, // END
];

/// Initial data: `(address, value)` pairs written before the program.
pub const DATA: [(usize, u8); 2] = [(0x03, 10), (0x04, 15)];

/// Harness that prepares memory and starts the processor.
#[derive(Clone, Debug)]
pub struct TestBench {
    /// The simulator under test.
    pub sim: Simulator,
}

impl TestBench {
    /// Builds the reference scenario on the default machine.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::OutOfBounds`] if the configured memory is too small for the
    /// program.
    pub fn seed() -> Result<Self, LoadError> {
        Self::with_config(&Config::default())
    }

    /// Builds the reference scenario on a configured machine.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::OutOfBounds`] if the configured memory is too small for the
    /// program or data.
    pub fn with_config(config: &Config) -> Result<Self, LoadError> {
        let mut sim = Simulator::new(config);
        for (addr, value) in DATA {
            sim.memory.load(&[value], addr)?;
        }
        sim.memory
            .load(&encode_words(&PROGRAM), usize::from(PROG_ADDR))?;
        Ok(Self { sim })
    }

    /// Signals the start address and runs the processor until it halts.
    ///
    /// # Errors
    ///
    /// Propagates kernel errors from the start notification.
    pub fn run(&mut self) -> Result<HaltReason, KernelError> {
        info!("TestBench: signalling to start program");
        self.sim.run_from(PROG_ADDR)
    }
}
