use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::PackError;
use super::icontype::IconSize;

/// One icon to pack: a logical size plus the encoded image data for it,
/// given either as an in-memory buffer or as the path of a file to read.
///
/// The data is copied into the ICNS file as-is; it is expected to be a PNG
/// (or JPEG 2000) image with the matching dimensions, but this is not
/// checked.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Asset {
    /// The icon size in pixels.  Must be one of the [`IconSize`] values.
    pub size: u32,
    /// A file to read the image data from, used only if `buffer` is `None`.
    pub path: Option<PathBuf>,
    /// The image data itself.
    pub buffer: Option<Vec<u8>>,
}

/// Where an asset's image data comes from.  Inline data takes precedence
/// over a file path when an asset has both.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PayloadSource<'a> {
    /// Data held in memory.
    Inline(&'a [u8]),
    /// Data to be read from a file.
    Reference(&'a Path),
}

impl Asset {
    /// Creates an asset with the given size and no image data yet.
    pub fn new(size: u32) -> Asset {
        Asset { size, path: None, buffer: None }
    }

    /// Creates an asset whose image data will be read from `path`.
    pub fn from_path<P: Into<PathBuf>>(size: u32, path: P) -> Asset {
        Asset::new(size).with_path(path)
    }

    /// Creates an asset from in-memory image data.
    pub fn from_buffer<B: Into<Vec<u8>>>(size: u32, buffer: B) -> Asset {
        Asset::new(size).with_buffer(buffer)
    }

    /// Sets the file to read image data from.
    pub fn with_path<P: Into<PathBuf>>(mut self, path: P) -> Asset {
        self.path = Some(path.into());
        self
    }

    /// Sets the in-memory image data.
    pub fn with_buffer<B: Into<Vec<u8>>>(mut self, buffer: B) -> Asset {
        self.buffer = Some(buffer.into());
        self
    }

    /// Returns the icon size of this asset, or an error if the size is not
    /// supported.  `index` is the asset's position, for error reporting.
    pub fn icon_size(&self, index: usize) -> Result<IconSize, PackError> {
        IconSize::from_pixels(self.size)
            .ok_or(PackError::UnsupportedSize { index, size: self.size })
    }

    /// Returns where this asset's image data comes from, or `None` if it has
    /// neither a buffer nor a path.  An empty path counts as no path.
    pub fn source(&self) -> Option<PayloadSource> {
        if let Some(ref buffer) = self.buffer {
            Some(PayloadSource::Inline(buffer.as_slice()))
        } else {
            self.path
                .as_deref()
                .filter(|path| !path.as_os_str().is_empty())
                .map(PayloadSource::Reference)
        }
    }

    /// Loads the asset's image data, reading it from disk if it is not held
    /// in memory.  Returns an error if the asset has no data source, the file
    /// can't be read, or the data is empty.
    pub fn resolve(&self, index: usize) -> Result<Cow<[u8]>, PackError> {
        let source = self
            .source()
            .ok_or(PackError::MissingPayloadSource { index })?;
        let (data, path) = match source {
            PayloadSource::Inline(data) => (Cow::Borrowed(data), None),
            PayloadSource::Reference(path) => {
                let data = fs::read(path).map_err(|source| {
                    PackError::ReadPayload {
                        index,
                        path: path.to_path_buf(),
                        source,
                    }
                })?;
                tracing::debug!("Read {} bytes from {}",
                                data.len(),
                                path.display());
                (Cow::Owned(data), Some(path))
            }
        };
        if data.is_empty() {
            return Err(PackError::EmptyPayload {
                index,
                path: path.map(Path::to_path_buf),
            });
        }
        Ok(data)
    }
}
