//! Serial passthrough to an external FCU display
//!
//! The serial transport itself is an external collaborator. This module only
//! defines the seam ([`SerialTransport`] / [`SerialConnection`]) and the
//! [`SerialLink`] that keeps track of the open connection, forwards panel
//! lines best-effort, and reports what happened as a status string.
//!
//! Nothing here can fail a refresh: transport errors end up in
//! [`LinkStatus::Failed`] and in the log.
//!
//! # Transports
//!
//! - [`DeviceFileTransport`]: treats device nodes under a directory (e.g.
//!   `/dev/ttyUSB0`) as ports and writes to them as files
//! - [`LoopbackTransport`]: in-memory ports that record every byte written

pub mod device;
pub mod link;
pub mod loopback;

pub use device::DeviceFileTransport;
pub use link::{LinkStatus, SerialLink};
pub use loopback::LoopbackTransport;

use crate::error::Result;
use std::fmt;
use std::io;

/// Identifier of a serial port as reported by the transport
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortId(pub String);

impl PortId {
    /// Create a port identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Port name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An open serial connection
pub trait SerialConnection: io::Write + Send {
    /// Port this connection was opened on
    fn port(&self) -> &PortId;

    /// Close the connection, flushing pending output
    fn close(self: Box<Self>) -> io::Result<()>;
}

/// Port enumeration and opening
pub trait SerialTransport {
    /// List the ports currently available
    fn list_ports(&self) -> Result<Vec<PortId>>;

    /// Open a port, requesting the given line speed
    ///
    /// Transports that cannot configure the line may ignore `baud_rate`.
    fn open(&mut self, port: &PortId, baud_rate: u32) -> Result<Box<dyn SerialConnection>>;
}
