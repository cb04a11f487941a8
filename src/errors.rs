//! Error types for the replay pipeline
//!
//! Malformed log lines, empty logs and zero-size address spaces are not
//! errors: they are filtered or produce an empty frame sequence. What remains
//! is a too-large address range and failures of the output side.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReplayError {
    /// The events span more address units than the occupancy buffer may hold
    #[error("address range of {units} units exceeds the limit of {limit} units")]
    AddressSpaceTooLarge { units: u128, limit: u64 },

    #[error("failed to configure the GIF encoder: {0}")]
    EncoderSetup(#[source] image::ImageError),

    /// The frame encoder rejected a frame
    #[error("failed to encode frame {index}: {source}")]
    Encode {
        index: usize,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
