//! PixelFX Core - in-place bitmap transformation library
//!
//! This crate provides per-pixel transformations over packed 24-bit BGR
//! buffers with row padding, quarter-turn and mirror transforms, and a
//! bounded history for keeping recently produced images.
//!
//! # Module Structure
//!
//! - `buffer` - Owned and borrowed stride-aware pixel buffers
//! - `engine` - The nine per-pixel operations and whole-buffer traversal
//! - `operation` - Operation selectors and typed, validated parameters
//! - `gamma` - Per-channel gamma lookup tables
//! - `clamp` - Shared conversion of wide arithmetic to channel bytes
//! - `luminance` - BT.709 luma
//! - `transform` - Rotations and flips
//! - `history` - Fixed-capacity FIFO of recent results
//!
//! # Usage
//!
//! ```ignore
//! use pixelfx_core::{BoundedHistory, Operation, PixelBuffer};
//!
//! let mut image = PixelBuffer::with_stride(640, 480, 1920)?;
//! let mut history = BoundedHistory::default();
//!
//! history.push(image.clone());
//! image.apply(&Operation::brightness(40)?)?
//!      .apply(&Operation::Grayscale)?;
//! ```

pub mod buffer;
pub mod clamp;
pub mod color;
pub mod engine;
pub mod error;
pub mod gamma;
pub mod history;
pub mod luminance;
pub mod operation;
pub mod transform;

pub use buffer::{BufferLayout, PixelBuffer, PixelBufferMut, BYTES_PER_PIXEL};
pub use color::Color;
pub use engine::{apply, apply_to_copy, transform_pixel};
pub use error::{HistoryError, ProcessError, Result};
pub use gamma::{GammaTable, GammaTables};
pub use history::{BoundedHistory, DEFAULT_HISTORY_CAPACITY};
pub use operation::{Operation, OperationKind, ToleranceParams, MAX_BRIGHTNESS_DELTA};
pub use transform::{
    flip_horizontal, flip_vertical, rotate_clockwise, rotate_counter_clockwise, rotate_half_turn,
};
