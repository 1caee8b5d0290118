//! FCU snapshot and display formatting
//!
//! # Overview
//!
//! - [`FcuSnapshot`]: immutable per-refresh view of the FCU targets, modes and
//!   knob push flags
//! - [`format`]: pure mapping from a snapshot to the ordered panel lines
//! - [`DisplayLine`]: text plus [`Emphasis`], the latter derived from content
//!
//! # Panel Layout
//!
//! ```text
//! ========== ToLiss FCU ==========
//!  SPD:  250 kts
//!  HDG:  090 deg
//!  ALT:   5000 ft
//!  V/S:  -0500 fpm
//! --------------------------------
//! Mode: HDG/VS  | SPD
//! AP1: ON   |  AP2: OFF
//! ================================
//! ```
//!
//! The first column of each target line is the push glyph column.

pub mod display;
pub mod formatter;
pub mod snapshot;

pub use display::{DisplayLine, DisplayLines, Emphasis, PANEL_LINE_COUNT};
pub use formatter::{PUSH_GLYPH, format, format_vertical_speed, round_vertical_speed};
pub use snapshot::{FcuSnapshot, VerticalMode};
