use std::fmt;
use std::str::FromStr;

/// Logical icon sizes that can be packed into an ICNS file.
///
/// Each size is written as one or more icon elements: the standard
/// resolution element first, followed by the 2x "retina" element that
/// reuses the same PNG data where the format defines one.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum IconSize {
    /// 32x32 icon.
    S32,
    /// 64x64 icon (also used as the 32x32 @2x icon).
    S64,
    /// 128x128 icon (also used as the 64x64 @2x icon).
    S128,
    /// 256x256 icon.
    S256,
    /// 512x512 icon (also used as the 256x256 @2x icon).
    S512,
    /// 1024x1024 icon (also used as the 512x512 @2x icon).
    S1024,
}

impl IconSize {
    /// Every supported size, smallest first.
    pub const ALL: [IconSize; 6] = [
        IconSize::S32,
        IconSize::S64,
        IconSize::S128,
        IconSize::S256,
        IconSize::S512,
        IconSize::S1024,
    ];

    /// Get the icon size with the given pixel dimension, if it is supported.
    ///
    /// # Examples
    /// ```
    /// use icnspack::IconSize;
    /// assert_eq!(IconSize::from_pixels(64), Some(IconSize::S64));
    /// assert_eq!(IconSize::from_pixels(1000), None);
    /// ```
    pub fn from_pixels(pixels: u32) -> Option<IconSize> {
        match pixels {
            32 => Some(IconSize::S32),
            64 => Some(IconSize::S64),
            128 => Some(IconSize::S128),
            256 => Some(IconSize::S256),
            512 => Some(IconSize::S512),
            1024 => Some(IconSize::S1024),
            _ => None,
        }
    }

    /// Returns the width (and height) of this icon size, in pixels.
    pub fn pixels(self) -> u32 {
        match self {
            IconSize::S32 => 32,
            IconSize::S64 => 64,
            IconSize::S128 => 128,
            IconSize::S256 => 256,
            IconSize::S512 => 512,
            IconSize::S1024 => 1024,
        }
    }

    /// Returns the OSTypes of the elements written for this size, in the
    /// order they appear in the file.
    ///
    /// # Examples
    /// ```
    /// use icnspack::{IconSize, OSType};
    /// assert_eq!(IconSize::S32.ostypes(), &[OSType(*b"icp5")]);
    /// assert_eq!(IconSize::S64.ostypes(),
    ///            &[OSType(*b"icp6"), OSType(*b"ic11")]);
    /// ```
    pub fn ostypes(self) -> &'static [OSType] {
        match self {
            IconSize::S32 => S32_OSTYPES,
            IconSize::S64 => S64_OSTYPES,
            IconSize::S128 => S128_OSTYPES,
            IconSize::S256 => S256_OSTYPES,
            IconSize::S512 => S512_OSTYPES,
            IconSize::S1024 => S1024_OSTYPES,
        }
    }
}

// Element OSTypes per icon size, standard resolution first:
const S32_OSTYPES: &[OSType] = &[OSType(*b"icp5")];
const S64_OSTYPES: &[OSType] = &[OSType(*b"icp6"), OSType(*b"ic11")];
const S128_OSTYPES: &[OSType] = &[OSType(*b"ic07"), OSType(*b"ic12")];
const S256_OSTYPES: &[OSType] = &[OSType(*b"ic08")];
const S512_OSTYPES: &[OSType] = &[OSType(*b"ic09"), OSType(*b"ic13")];
const S1024_OSTYPES: &[OSType] = &[OSType(*b"ic10"), OSType(*b"ic14")];

impl TryFrom<u32> for IconSize {
    type Error = u32;

    fn try_from(pixels: u32) -> Result<IconSize, u32> {
        IconSize::from_pixels(pixels).ok_or(pixels)
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        write!(out, "{0}x{0}", self.pixels())
    }
}

/// A Macintosh OSType (also known as a ResType), used in ICNS files to
/// identify the type of each icon element.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct OSType(pub [u8; 4]);

impl fmt::Display for OSType {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        let &OSType(raw) = self;
        for &byte in &raw {
            write!(out, "{}", char::from(byte))?;
        }
        Ok(())
    }
}

impl FromStr for OSType {
    type Err = String;

    fn from_str(input: &str) -> Result<OSType, String> {
        let bytes = input.as_bytes();
        if bytes.len() != 4 {
            Err(format!("OSType string must be 4 bytes (was {})", bytes.len()))
        } else {
            let mut raw = [0u8; 4];
            raw.clone_from_slice(bytes);
            Ok(OSType(raw))
        }
    }
}
