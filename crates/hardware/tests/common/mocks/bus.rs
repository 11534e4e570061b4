use vnsim_core::soc::{Command, Memory, ResponseStatus, Transaction, Transport};

/// One observed transaction, captured after the target answered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub command: Command,
    pub addr: u64,
    pub len: usize,
    pub status: ResponseStatus,
}

/// Forwards to a real memory and records every transaction in order.
#[derive(Debug, Default)]
pub struct RecordingBus {
    pub memory: Memory,
    pub log: Vec<Record>,
}

impl RecordingBus {
    pub fn new(memory: Memory) -> Self {
        Self {
            memory,
            log: Vec::new(),
        }
    }

    /// Transactions other than 4-byte instruction fetches.
    pub fn data_transactions(&self) -> Vec<&Record> {
        self.log.iter().filter(|r| r.len != 4).collect()
    }
}

impl Transport for RecordingBus {
    fn b_transport(&mut self, trans: &mut Transaction<'_>) {
        self.memory.b_transport(trans);
        self.log.push(Record {
            command: trans.command(),
            addr: trans.address(),
            len: trans.data_length(),
            status: trans.status(),
        });
    }
}
