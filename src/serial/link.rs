//! Serial link state and best-effort line forwarding

use super::{PortId, SerialConnection, SerialTransport};
use crate::error::{FcuOverlayError, Result, get_user_friendly_error};
use crate::fcu::DisplayLine;
use std::io::Write;
use tracing::{info, warn};

/// What the link is currently doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    /// No port open
    Disconnected,
    /// Port open and forwarding
    Connected {
        /// Open port
        port: PortId,
        /// Line speed asked of the transport; not every transport applies it
        requested_baud: u32,
    },
    /// Last operation failed; the message is shown on the overlay
    Failed(String),
}

/// Owns the transport and at most one open connection
pub struct SerialLink<T: SerialTransport> {
    transport: T,
    connection: Option<Box<dyn SerialConnection>>,
    status: LinkStatus,
    ports: Vec<PortId>,
    baud_rate: u32,
}

impl<T: SerialTransport> SerialLink<T> {
    /// Create a disconnected link
    pub fn new(transport: T, baud_rate: u32) -> Self {
        Self {
            transport,
            connection: None,
            status: LinkStatus::Disconnected,
            ports: Vec::new(),
            baud_rate,
        }
    }

    /// Underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Current status
    pub fn status(&self) -> &LinkStatus {
        &self.status
    }

    /// Whether a connection is open
    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Ports seen by the last [`refresh_ports`](Self::refresh_ports)
    pub fn ports(&self) -> &[PortId] {
        &self.ports
    }

    /// Re-enumerate available ports
    ///
    /// On failure the previous list is cleared. The status only shows the
    /// error while no connection is open; an open connection keeps working.
    pub fn refresh_ports(&mut self) -> &[PortId] {
        match self.transport.list_ports() {
            Ok(ports) => {
                info!("Serial ports available: {}", ports.len());
                self.ports = ports;
            }
            Err(e) => {
                warn!("Serial port enumeration failed: {}", e);
                self.ports.clear();
                if self.connection.is_none() {
                    self.status = LinkStatus::Failed(get_user_friendly_error(&e));
                }
            }
        }
        &self.ports
    }

    /// Open `port`, closing any connection that is already open
    pub fn connect(&mut self, port: &PortId) -> Result<()> {
        self.disconnect();

        match self.transport.open(port, self.baud_rate) {
            Ok(connection) => {
                info!(
                    "Serial link connected to {} ({} baud requested)",
                    port, self.baud_rate
                );
                self.connection = Some(connection);
                self.status = LinkStatus::Connected {
                    port: port.clone(),
                    requested_baud: self.baud_rate,
                };
                Ok(())
            }
            Err(e) => {
                warn!("Serial link failed to open {}: {}", port, e);
                self.status = LinkStatus::Failed(get_user_friendly_error(&e));
                Err(e)
            }
        }
    }

    /// Close the open connection, if any
    pub fn disconnect(&mut self) {
        self.close_connection();
        self.status = LinkStatus::Disconnected;
    }

    fn close_connection(&mut self) {
        if let Some(connection) = self.connection.take() {
            let port = connection.port().clone();
            if let Err(e) = connection.close() {
                warn!("Error closing serial port {}: {}", port, e);
            }
            info!("Serial link disconnected from {}", port);
        }
    }

    /// Write the panel lines to the open connection
    ///
    /// Each line is terminated by `\n` and the frame is flushed at the end.
    pub fn try_forward(&mut self, lines: &[DisplayLine]) -> Result<()> {
        let connection = self
            .connection
            .as_mut()
            .ok_or(FcuOverlayError::SerialNotConnected)?;

        for line in lines {
            connection
                .write_all(line.text().as_bytes())
                .map_err(FcuOverlayError::SerialWriteFailed)?;
            connection
                .write_all(b"\n")
                .map_err(FcuOverlayError::SerialWriteFailed)?;
        }
        connection
            .flush()
            .map_err(FcuOverlayError::SerialWriteFailed)
    }

    /// Best-effort forwarding; a write error drops the connection
    ///
    /// Does nothing while disconnected.
    pub fn forward(&mut self, lines: &[DisplayLine]) {
        if self.connection.is_none() {
            return;
        }
        if let Err(e) = self.try_forward(lines) {
            warn!("Serial passthrough stopped: {}", e);
            self.close_connection();
            self.status = LinkStatus::Failed(get_user_friendly_error(&e));
        }
    }

    /// One-line status text for the overlay
    pub fn status_text(&self) -> String {
        match &self.status {
            LinkStatus::Disconnected => "Serial: not connected".to_string(),
            LinkStatus::Connected {
                port,
                requested_baud,
            } => format!("Serial: {port} ({requested_baud} baud requested)"),
            LinkStatus::Failed(message) => format!("Serial: {message}"),
        }
    }

    /// Status lines appended below the panel
    ///
    /// While disconnected, the known ports are listed on a second line.
    pub fn status_lines(&self) -> Vec<DisplayLine> {
        let mut lines = vec![DisplayLine::new(self.status_text())];
        if !self.is_connected() && !self.ports.is_empty() {
            let names: Vec<&str> = self.ports.iter().map(PortId::as_str).collect();
            lines.push(DisplayLine::new(format!("Ports: {}", names.join(", "))));
        }
        lines
    }
}

impl<T: SerialTransport> Drop for SerialLink<T> {
    fn drop(&mut self) {
        self.disconnect();
    }
}
