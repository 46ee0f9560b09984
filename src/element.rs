use byteorder::{BigEndian, WriteBytesExt};
use std::io::{self, Write};

use super::icontype::OSType;

/// The length of an icon element header, in bytes:
pub(crate) const ICON_ELEMENT_HEADER_LENGTH: u32 = 8;

/// One entry in an ICNS file: an OSType followed by a data payload.  The
/// payload is borrowed, so that the standard and 2x elements for one icon
/// size can share the same image data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IconElement<'a> {
    ostype: OSType,
    data: &'a [u8],
}

impl<'a> IconElement<'a> {
    /// Creates an icon element with the given OSType and data payload.
    /// Returns `None` if the payload is too large for the element's length
    /// field.
    pub fn new(ostype: OSType, data: &'a [u8]) -> Option<IconElement<'a>> {
        u32::try_from(data.len())
            .ok()?
            .checked_add(ICON_ELEMENT_HEADER_LENGTH)?;
        Some(IconElement { ostype, data })
    }

    /// Returns the OSType for this element (e.g. `icp5` or `ic11`).
    pub fn ostype(&self) -> OSType {
        self.ostype
    }

    /// Returns the encoded data for this element.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the encoded length of the element, in bytes, including the
    /// length of the header.
    pub fn total_length(&self) -> u32 {
        ICON_ELEMENT_HEADER_LENGTH + (self.data.len() as u32)
    }

    /// Writes the icon element to within an ICNS file.
    pub fn write<W: Write>(&self, mut writer: W) -> io::Result<()> {
        let OSType(ref raw_ostype) = self.ostype;
        writer.write_all(raw_ostype)?;
        writer.write_u32::<BigEndian>(self.total_length())?;
        writer.write_all(self.data)?;
        Ok(())
    }
}
