//! Device-node serial transport
//!
//! Lists entries of a device directory whose names start with one of the
//! configured prefixes and opens them for writing as plain files. Line
//! settings are left as the operating system has them; the baud rate is only
//! logged.

use super::{PortId, SerialConnection, SerialTransport};
use crate::error::{FcuOverlayError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Device name prefixes scanned by default
pub const DEFAULT_PREFIXES: &[&str] = &["ttyUSB", "ttyACM", "cu.usbserial", "cu.usbmodem"];

/// Transport over device files
#[derive(Debug, Clone)]
pub struct DeviceFileTransport {
    dir: PathBuf,
    prefixes: Vec<String>,
}

impl Default for DeviceFileTransport {
    fn default() -> Self {
        Self::new("/dev", DEFAULT_PREFIXES.iter().copied())
    }
}

impl DeviceFileTransport {
    /// Scan `dir` for entries starting with any of `prefixes`
    pub fn new<I, S>(dir: impl Into<PathBuf>, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dir: dir.into(),
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    fn path_for(&self, port: &PortId) -> PathBuf {
        let as_path = Path::new(port.as_str());
        if as_path.is_absolute() {
            as_path.to_path_buf()
        } else {
            self.dir.join(as_path)
        }
    }
}

impl SerialTransport for DeviceFileTransport {
    fn list_ports(&self) -> Result<Vec<PortId>> {
        let entries = std::fs::read_dir(&self.dir)
            .map_err(|e| FcuOverlayError::SerialEnumerationError(Box::new(e)))?;

        let mut ports: Vec<PortId> = entries
            .filter_map(std::result::Result::ok)
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| self.prefixes.iter().any(|p| name.starts_with(p.as_str())))
            .map(PortId)
            .collect();
        ports.sort();

        debug!("Found {} serial device(s) in {}", ports.len(), self.dir.display());
        Ok(ports)
    }

    fn open(&mut self, port: &PortId, baud_rate: u32) -> Result<Box<dyn SerialConnection>> {
        let path = self.path_for(port);
        let file = OpenOptions::new()
            .write(true)
            .open(&path)
            .map_err(|e| FcuOverlayError::SerialOpenFailed {
                port: port.to_string(),
                source: Box::new(e),
            })?;

        info!("Opened {} ({} baud requested)", path.display(), baud_rate);
        Ok(Box::new(DeviceConnection {
            port: port.clone(),
            file,
        }))
    }
}

struct DeviceConnection {
    port: PortId,
    file: File,
}

impl Write for DeviceConnection {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl SerialConnection for DeviceConnection {
    fn port(&self) -> &PortId {
        &self.port
    }

    fn close(mut self: Box<Self>) -> io::Result<()> {
        self.file.flush()
    }
}
