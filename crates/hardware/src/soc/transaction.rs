//! Transaction payload exchanged between processor and memory.
//!
//! A transaction carries a command, a target address, a borrowed data buffer whose length is
//! the transfer length, and the response status written back by the target. Exactly one
//! transaction is in flight at a time; the initiator builds it right before the transport call
//! and inspects it right after.

use std::fmt;

/// Transaction command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Copy bytes from the target into the data buffer.
    Read,
    /// Copy bytes from the data buffer into the target.
    Write,
    /// Neither read nor write; targets answer with [`ResponseStatus::CommandError`].
    Ignore,
}

/// Response status annotated by the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ResponseStatus {
    /// Not yet serviced.
    #[default]
    Incomplete,
    /// Applied in full.
    Ok,
    /// The range `[address, address + length)` exceeds the target.
    AddressError,
    /// The command is not supported by the target.
    CommandError,
}

impl ResponseStatus {
    /// Returns `true` for [`ResponseStatus::Ok`].
    #[inline]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Returns `true` for every status other than [`ResponseStatus::Ok`].
    #[inline]
    pub const fn is_error(self) -> bool {
        !self.is_ok()
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Incomplete => "INCOMPLETE",
            Self::Ok => "OK",
            Self::AddressError => "ADDRESS_ERROR",
            Self::CommandError => "COMMAND_ERROR",
        };
        f.write_str(s)
    }
}

/// A single request/response exchange.
#[derive(Debug)]
pub struct Transaction<'a> {
    command: Command,
    address: u64,
    data: &'a mut [u8],
    status: ResponseStatus,
}

impl<'a> Transaction<'a> {
    /// Creates a transaction in the `Incomplete` state.
    ///
    /// # Arguments
    ///
    /// * `command` - Operation to perform.
    /// * `address` - Start address; not validated here, the target checks bounds.
    /// * `data` - Buffer whose length is the transfer length.
    pub const fn new(command: Command, address: u64, data: &'a mut [u8]) -> Self {
        Self {
            command,
            address,
            data,
            status: ResponseStatus::Incomplete,
        }
    }

    /// Creates a read transaction filling `data` from `address`.
    pub const fn read(address: u64, data: &'a mut [u8]) -> Self {
        Self::new(Command::Read, address, data)
    }

    /// Creates a write transaction storing `data` at `address`.
    pub const fn write(address: u64, data: &'a mut [u8]) -> Self {
        Self::new(Command::Write, address, data)
    }

    /// Returns the command.
    pub const fn command(&self) -> Command {
        self.command
    }

    /// Returns the start address.
    pub const fn address(&self) -> u64 {
        self.address
    }

    /// Returns the transfer length in bytes.
    pub const fn data_length(&self) -> usize {
        self.data.len()
    }

    /// Returns the data buffer.
    pub fn data(&self) -> &[u8] {
        self.data
    }

    /// Returns the data buffer for the target to fill.
    pub fn data_mut(&mut self) -> &mut [u8] {
        self.data
    }

    /// Returns the response status.
    pub const fn status(&self) -> ResponseStatus {
        self.status
    }

    /// Sets the response status; called by the target.
    pub const fn set_status(&mut self, status: ResponseStatus) {
        self.status = status;
    }

    /// Returns `true` if the target answered with anything but `Ok`.
    pub const fn is_response_error(&self) -> bool {
        self.status.is_error()
    }
}
