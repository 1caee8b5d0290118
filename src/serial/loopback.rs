//! In-memory serial transport
//!
//! Every port records what was written to it. Write failures can be injected
//! to simulate an unplugged cable, and enumeration failures to simulate a
//! driver that stops answering.

use super::{PortId, SerialConnection, SerialTransport};
use crate::error::{FcuOverlayError, Result, StringError};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

type Sink = Arc<Mutex<HashMap<PortId, Vec<u8>>>>;

/// Transport whose ports are byte buffers
#[derive(Debug, Clone, Default)]
pub struct LoopbackTransport {
    ports: Vec<PortId>,
    sink: Sink,
    fail_writes: Arc<AtomicBool>,
    fail_listing: Arc<AtomicBool>,
}

impl LoopbackTransport {
    /// Create a transport exposing the given port names
    pub fn new<I, S>(ports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ports: ports.into_iter().map(PortId::new).collect(),
            ..Self::default()
        }
    }

    /// Bytes written to `port` so far
    pub fn sent(&self, port: &PortId) -> Vec<u8> {
        self.sink.lock().get(port).cloned().unwrap_or_default()
    }

    /// Text written to `port` so far
    pub fn sent_text(&self, port: &PortId) -> String {
        String::from_utf8_lossy(&self.sent(port)).into_owned()
    }

    /// Make every subsequent write fail (or succeed again)
    pub fn set_write_failure(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent port listing fail (or succeed again)
    pub fn set_enumeration_failure(&self, fail: bool) {
        self.fail_listing.store(fail, Ordering::SeqCst);
    }
}

impl SerialTransport for LoopbackTransport {
    fn list_ports(&self) -> Result<Vec<PortId>> {
        if self.fail_listing.load(Ordering::SeqCst) {
            return Err(FcuOverlayError::SerialEnumerationError(StringError::new(
                "loopback enumeration disabled",
            )));
        }
        Ok(self.ports.clone())
    }

    fn open(&mut self, port: &PortId, _baud_rate: u32) -> Result<Box<dyn SerialConnection>> {
        if !self.ports.contains(port) {
            return Err(FcuOverlayError::SerialOpenFailed {
                port: port.to_string(),
                source: StringError::new("no such port"),
            });
        }
        self.sink.lock().entry(port.clone()).or_default();
        Ok(Box::new(LoopbackConnection {
            port: port.clone(),
            sink: Arc::clone(&self.sink),
            fail_writes: Arc::clone(&self.fail_writes),
        }))
    }
}

struct LoopbackConnection {
    port: PortId,
    sink: Sink,
    fail_writes: Arc<AtomicBool>,
}

impl LoopbackConnection {
    fn check_plugged(&self) -> io::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "loopback port unplugged"));
        }
        Ok(())
    }
}

impl io::Write for LoopbackConnection {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.check_plugged()?;
        self.sink
            .lock()
            .entry(self.port.clone())
            .or_default()
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.check_plugged()
    }
}

impl SerialConnection for LoopbackConnection {
    fn port(&self) -> &PortId {
        &self.port
    }

    fn close(self: Box<Self>) -> io::Result<()> {
        self.check_plugged()
    }
}
