//! Frame rendering
//!
//! Turns an occupancy snapshot into a colour-coded bitmap:
//! - [`frame`]: grid drawing, magnification and canvas composition
//! - [`theme`]: fixed colours per cell state
//! - [`text`]: annotation text with an 8×8 bitmap font
//! - [`palette`]: conversion to an indexed image for encoding
//!
//! Rendering never mutates the occupancy buffer.

pub mod frame;
pub mod palette;
pub mod text;
pub mod theme;

pub use frame::{Frame, FrameRenderer};
pub use palette::PalettedImage;
pub use theme::{Theme, DEFAULT_THEME};
