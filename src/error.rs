use std::io;
use std::path::PathBuf;

/// An error that aborted packing an ICNS file.
///
/// `index` fields give the zero-based position of the offending asset in the
/// list passed to the packer.
#[derive(Debug, thiserror::Error)]
pub enum PackError {
    /// The asset's size is not one of the supported icon sizes.
    #[error("asset {index}: size {size} not supported")]
    UnsupportedSize {
        /// Position of the asset.
        index: usize,
        /// The requested size, in pixels.
        size: u32,
    },

    /// The asset has neither a path nor a buffer.
    #[error("asset {index}: asset path or buffer must be set")]
    MissingPayloadSource {
        /// Position of the asset.
        index: usize,
    },

    /// The asset's data is zero bytes long.
    #[error("asset {index}: {} is empty", display_source(.path))]
    EmptyPayload {
        /// Position of the asset.
        index: usize,
        /// The file the data was read from, if it did not come from a buffer.
        path: Option<PathBuf>,
    },

    /// The asset's file could not be read.
    #[error("asset {index}: failed to read {}", .path.display())]
    ReadPayload {
        /// Position of the asset.
        index: usize,
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// An element or the whole file would not fit in a 32-bit length field.
    #[error("asset {index}: {length} bytes does not fit in an icns length field")]
    TooLarge {
        /// Position of the asset.
        index: usize,
        /// The length that overflowed, in bytes.
        length: u64,
    },

    /// Writing to the destination failed.
    #[error("failed to write icns file: {0}")]
    Io(#[from] io::Error),
}

/// The broad category of a [`PackError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PackErrorKind {
    /// See [`PackError::UnsupportedSize`].
    UnsupportedSize,
    /// See [`PackError::MissingPayloadSource`].
    MissingPayloadSource,
    /// See [`PackError::EmptyPayload`].
    EmptyPayload,
    /// See [`PackError::TooLarge`].
    TooLarge,
    /// Reading an asset file or writing the destination failed.
    Io,
}

impl PackError {
    /// Returns the category of this error.
    pub fn kind(&self) -> PackErrorKind {
        match self {
            PackError::UnsupportedSize { .. } => PackErrorKind::UnsupportedSize,
            PackError::MissingPayloadSource { .. } => {
                PackErrorKind::MissingPayloadSource
            }
            PackError::EmptyPayload { .. } => PackErrorKind::EmptyPayload,
            PackError::TooLarge { .. } => PackErrorKind::TooLarge,
            PackError::ReadPayload { .. } | PackError::Io(_) => PackErrorKind::Io,
        }
    }

    /// Returns the position of the asset that caused this error, or `None`
    /// for errors writing the destination.
    pub fn index(&self) -> Option<usize> {
        match *self {
            PackError::UnsupportedSize { index, .. }
            | PackError::MissingPayloadSource { index }
            | PackError::EmptyPayload { index, .. }
            | PackError::ReadPayload { index, .. }
            | PackError::TooLarge { index, .. } => Some(index),
            PackError::Io(_) => None,
        }
    }
}

fn display_source(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!("file {}", path.display()),
        None => "buffer".to_string(),
    }
}
