//! Error types for the FCU overlay
//!
//! The knob tracker and the display formatter are infallible. Everything that
//! can fail lives at the edges: configuration, logging setup and the serial
//! passthrough. Those failures are collected here.
//!
//! Error variants use `#[source]` to preserve error chains for better
//! observability and debugging.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for the FCU overlay
#[derive(Debug, Error)]
pub enum FcuOverlayError {
    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Logging could not be initialised
    #[error("Logging initialisation failed: {0}")]
    LoggingError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Serial port enumeration failed
    #[error("Failed to enumerate serial ports: {0}")]
    SerialEnumerationError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A serial port could not be opened
    #[error("Failed to open serial port {port}: {source}")]
    SerialOpenFailed {
        /// Port identifier that was requested
        port: String,
        /// Underlying transport error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Writing to an open serial connection failed
    #[error("Serial write failed: {0}")]
    SerialWriteFailed(#[source] std::io::Error),

    /// No serial connection is open
    #[error("Serial port not connected")]
    SerialNotConnected,

    /// Replay input could not be interpreted
    #[error("Invalid replay data: {0}")]
    ReplayError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for FCU overlay operations
pub type Result<T> = std::result::Result<T, FcuOverlayError>;

/// Convert an error to a short message suitable for the overlay status lines
///
/// The overlay only has room for a few characters per line, so these messages
/// are kept to a single short sentence.
pub fn get_user_friendly_error(error: &FcuOverlayError) -> String {
    match error {
        FcuOverlayError::ConfigError(_) | FcuOverlayError::JsonError(_) => {
            "Config unreadable, using defaults".to_string()
        }
        FcuOverlayError::LoggingError(_) => "Logging unavailable".to_string(),
        FcuOverlayError::SerialEnumerationError(_) => "Cannot list serial ports".to_string(),
        FcuOverlayError::SerialOpenFailed { port, .. } => format!("Cannot open {port}"),
        FcuOverlayError::SerialWriteFailed(_) => "Serial write failed".to_string(),
        FcuOverlayError::SerialNotConnected => "Serial: not connected".to_string(),
        FcuOverlayError::ReplayError(detail) => format!("Bad replay: {detail}"),
        FcuOverlayError::IoError(e) => format!("File error: {}", e.kind()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = FcuOverlayError::SerialNotConnected;
        assert_eq!(error.to_string(), "Serial port not connected");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: FcuOverlayError = io_error.into();
        assert!(matches!(error, FcuOverlayError::IoError(_)));
    }

    #[test]
    fn test_serial_open_failed_display() {
        let error = FcuOverlayError::SerialOpenFailed {
            port: "COM3".to_string(),
            source: StringError::new("access denied"),
        };
        assert_eq!(
            error.to_string(),
            "Failed to open serial port COM3: access denied"
        );
    }

    #[test]
    fn test_serial_open_failed_user_friendly() {
        let error = FcuOverlayError::SerialOpenFailed {
            port: "COM3".to_string(),
            source: StringError::new("access denied"),
        };
        assert_eq!(get_user_friendly_error(&error), "Cannot open COM3");
    }

    #[test]
    fn test_source_chain_preserved() {
        use std::error::Error as _;

        let error = FcuOverlayError::ConfigError(StringError::new("bad path"));
        let source = error.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("bad path"));
    }

    #[test]
    fn test_json_error_user_friendly() {
        let json_error = serde_json::from_str::<u32>("not json").unwrap_err();
        let error: FcuOverlayError = json_error.into();
        assert_eq!(
            get_user_friendly_error(&error),
            "Config unreadable, using defaults"
        );
    }
}
