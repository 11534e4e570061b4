use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;
use vnsim_core::Simulator;
use vnsim_core::config::Config;
use vnsim_core::core::HaltReason;
use vnsim_core::isa::Instruction;
use vnsim_core::sim::loader;

/// In-memory log sink for asserting on emitted log lines.
#[derive(Clone, Debug, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Runs `f` with a subscriber that writes into this capture.
    pub fn capture<R>(&self, f: impl FnOnce() -> R) -> R {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[derive(Debug)]
pub struct TestContext {
    pub sim: Simulator,
    pub logs: LogCapture,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            sim: Simulator::new(config),
            logs: LogCapture::default(),
        }
    }

    /// Write a single data byte through the harness back-door.
    pub fn with_data(mut self, addr: usize, value: u8) -> Self {
        self.sim.memory[addr] = value;
        self
    }

    /// Place a program at `addr`.
    pub fn load_program(mut self, addr: u16, program: &[Instruction]) -> Self {
        loader::load_program(&mut self.sim.memory, addr, program).unwrap();
        self
    }

    /// Fire the start signal for `pc` and run until halted, capturing log output.
    pub fn run_from(&mut self, pc: u16) -> HaltReason {
        let logs = self.logs.clone();
        let sim = &mut self.sim;
        logs.capture(|| sim.run_from(pc)).unwrap()
    }

    /// Read a register value.
    pub fn reg(&self, idx: usize) -> u8 {
        self.sim.cpu.regs().read(idx)
    }

    /// Read a memory cell.
    pub fn mem(&self, addr: usize) -> u8 {
        self.sim.memory[addr]
    }

    /// Lines logged at error level.
    pub fn error_lines(&self) -> Vec<String> {
        self.logs
            .contents()
            .lines()
            .filter(|line| line.contains("ERROR"))
            .map(str::to_owned)
            .collect()
    }
}
