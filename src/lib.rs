//! # Introduction
//!
//! allocreplay reconstructs a visual timeline of a memory allocator from a
//! textual log of allocation and free events. Every event becomes one frame
//! showing which units of the address range are free, in use, or in an
//! invalid state (double free, overlapping allocation, free without
//! allocation).
//!
//! ## Pipeline
//!
//! ```text
//! Log text → Events → Bounds → Grid layout → (apply event → render)* → GIF
//! ```
//!
//! 1. [`parser`] — turns `+ offset size` / `- offset size` lines into events.
//! 2. [`memory`] — computes the address bounds, the grid layout and owns the
//!    per-unit occupancy counters.
//! 3. [`render`] — draws a colour-coded, annotated, palette-indexed frame for
//!    one occupancy snapshot.
//! 4. [`timeline`] — drives the replay as a lazy iterator of frames and
//!    reports progress.
//! 5. [`encode`] — streams the frames into a looping animated GIF.
//!
//! ## Example
//!
//! ```
//! use allocreplay::timeline::{progress::NullProgress, Replay};
//!
//! let replay = Replay::from_log("+ 0 16\n+ 8 16\n- 0 16\n");
//! let frames: Vec<_> = replay.frames(NullProgress).unwrap().collect();
//! assert_eq!(frames.len(), 3);
//! assert_eq!(frames[2].annotation()[2], "free  0x00000000 : 16");
//! ```

pub mod config;
pub mod encode;
pub mod errors;
pub mod memory;
pub mod parser;
pub mod render;
pub mod timeline;

pub use config::RenderConfig;
pub use errors::ReplayError;
pub use timeline::Replay;
