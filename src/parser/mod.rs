//! Replay log parser
//!
//! - [`event`]: the [`event::Event`] record and its [`event::Mode`]
//! - [`parse`]: text → events
//!
//! # Log Format
//!
//! One event per line, no header or footer:
//! ```text
//! + 4096 64      allocate 64 units at offset 4096
//! - 4096 64      free them again
//! ```
//! Anything that does not match is ignored.

pub mod event;
pub mod parse;
