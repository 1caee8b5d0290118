//! Lazily resolved host signal

use super::{SignalHandle, SignalHost};
use tracing::debug;

/// A host key and its handle, resolved on first successful lookup
#[derive(Debug, Clone)]
pub struct LazySignal {
    key: String,
    handle: Option<SignalHandle>,
}

impl LazySignal {
    /// Create an unresolved signal for `key`
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            handle: None,
        }
    }

    /// Host key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether a handle has been obtained
    pub fn is_resolved(&self) -> bool {
        self.handle.is_some()
    }

    /// Return the memoized handle, asking the host once if it is still missing
    pub fn try_resolve<H: SignalHost + ?Sized>(&mut self, host: &H) -> Option<SignalHandle> {
        if self.handle.is_none() {
            self.handle = host.find(&self.key);
            if self.handle.is_some() {
                debug!("Resolved host signal {}", self.key);
            }
        }
        self.handle
    }

    /// Drop the memoized handle, e.g. after the aircraft changed
    pub fn invalidate(&mut self) {
        self.handle = None;
    }

    /// Read as float; `0.0` while unresolved
    pub fn read_float<H: SignalHost + ?Sized>(&mut self, host: &H) -> f32 {
        self.try_resolve(host).map_or(0.0, |h| host.read_float(h))
    }

    /// Read as integer; `0` while unresolved
    pub fn read_int<H: SignalHost + ?Sized>(&mut self, host: &H) -> i32 {
        self.try_resolve(host).map_or(0, |h| host.read_int(h))
    }

    /// Read as flag (non-zero integer); `false` while unresolved
    pub fn read_bool<H: SignalHost + ?Sized>(&mut self, host: &H) -> bool {
        self.read_int(host) != 0
    }

    /// Read as text; empty while unresolved
    pub fn read_text<H: SignalHost + ?Sized>(&mut self, host: &H) -> String {
        self.try_resolve(host)
            .map(|h| host.read_text(h))
            .unwrap_or_default()
    }
}
