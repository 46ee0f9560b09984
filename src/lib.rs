//! Library for packing prebuilt icon images into Apple Icon Image (.icns)
//! files.
//!
//! Each [`Asset`] pairs a logical icon size (32, 64, 128, 256, 512 or 1024
//! pixels) with encoded image data, held in memory or read from a file.  The
//! packer writes every asset, in order, as one or more icon elements: sizes
//! that double as a 2x "retina" variant of a smaller size are written twice,
//! under both OSTypes, with the same data.
//!
//! ```no_run
//! use icnspack::{pack_to_path, Asset};
//!
//! let assets = vec![Asset::from_path(32, "icon-32.png"),
//!                   Asset::from_path(64, "icon-64.png"),
//!                   Asset::from_path(1024, "icon-1024.png")];
//! pack_to_path(&assets, "icon.icns").expect("failed to pack icns file");
//! ```
//!
//! See https://en.wikipedia.org/wiki/Apple_Icon_Image_format for more
//! information about the file format.

#![warn(missing_docs)]

mod asset;
mod element;
mod error;
mod icontype;
mod pack;

pub use self::asset::{Asset, PayloadSource};
pub use self::element::IconElement;
pub use self::error::{PackError, PackErrorKind};
pub use self::icontype::{IconSize, OSType};
pub use self::pack::{container_length, pack, pack_to_path, pack_to_writer};
