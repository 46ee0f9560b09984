use byteorder::{BigEndian, WriteBytesExt};
use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::Path;

use super::asset::Asset;
use super::element::{IconElement, ICON_ELEMENT_HEADER_LENGTH};
use super::error::PackError;
use super::icontype::{IconSize, OSType};

/// The first four bytes of an ICNS file:
const ICNS_MAGIC_LITERAL: &[u8; 4] = b"icns";

/// The length of an icon family header, in bytes:
const ICON_FAMILY_HEADER_LENGTH: u32 = 8;

/// Offset of the file length field from the start of the file:
const FILE_LENGTH_OFFSET: u64 = 4;

/// Packs the assets into an ICNS file, in order, starting at the writer's
/// current position.  Each asset is written as one element per OSType of
/// its size (see [`IconSize::ostypes`]); assets with the same size are all
/// written.
///
/// The file length in the header is written as zero at first and filled in
/// once every element has been written, so if an asset is rejected partway
/// through, the writer is left holding an invalid file rather than a
/// truncated but valid-looking one.
pub fn pack<W: Write + Seek>(assets: &[Asset],
                             writer: W)
                             -> Result<(), PackError> {
    write_container(assets, writer)?;
    Ok(())
}

/// Packs the assets into an ICNS file written to a writer that can't seek.
/// All asset data is loaded into memory first, so that the file length is
/// known before the header is written.
pub fn pack_to_writer<W: Write>(assets: &[Asset],
                                mut writer: W)
                                -> Result<(), PackError> {
    let (file_length, payloads) = layout(assets)?;
    writer.write_all(ICNS_MAGIC_LITERAL)?;
    writer.write_u32::<BigEndian>(file_length)?;
    for (index, &(icon_size, ref data)) in payloads.iter().enumerate() {
        for &ostype in icon_size.ostypes() {
            element(index, ostype, data)?.write(&mut writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Packs the assets into a new ICNS file at `path`, replacing any existing
/// file.  If packing fails, the file is closed and removed before the error
/// is returned.
pub fn pack_to_path<P: AsRef<Path>>(assets: &[Asset],
                                    path: P)
                                    -> Result<(), PackError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    match write_file(assets, file) {
        Ok(file_length) => {
            tracing::info!("Wrote {} ({} bytes, {} assets)",
                           path.display(),
                           file_length,
                           assets.len());
            Ok(())
        }
        Err(err) => {
            tracing::debug!("Packing {} failed: {}", path.display(), err);
            if let Err(remove_err) = fs::remove_file(path) {
                tracing::warn!("Failed to remove partial icns file {}: {}",
                               path.display(),
                               remove_err);
            }
            Err(err)
        }
    }
}

/// Returns the length in bytes of the ICNS file that packing the assets
/// would produce.  This loads every asset's data, and fails for the same
/// reasons packing would.
pub fn container_length(assets: &[Asset]) -> Result<u32, PackError> {
    let (file_length, _) = layout(assets)?;
    Ok(file_length)
}

/// Writes to the file and closes it, returning the file length.
fn write_file(assets: &[Asset], file: File) -> Result<u32, PackError> {
    let mut writer = BufWriter::new(file);
    let file_length = write_container(assets, &mut writer)?;
    let file = writer.into_inner().map_err(|err| err.into_error())?;
    file.sync_all()?;
    Ok(file_length)
}

fn write_container<W: Write + Seek>(assets: &[Asset],
                                    mut writer: W)
                                    -> Result<u32, PackError> {
    let start = writer.stream_position()?;
    writer.write_all(ICNS_MAGIC_LITERAL)?;
    writer.write_u32::<BigEndian>(0)?;
    let mut file_length = ICON_FAMILY_HEADER_LENGTH;
    for (index, asset) in assets.iter().enumerate() {
        let icon_size = asset.icon_size(index)?;
        let data = asset.resolve(index)?;
        for &ostype in icon_size.ostypes() {
            let element = element(index, ostype, &data)?;
            file_length = grow(index, file_length, &element)?;
            element.write(&mut writer)?;
            tracing::debug!("Wrote {} element for {} icon ({} bytes)",
                            ostype,
                            icon_size,
                            element.total_length());
        }
    }
    writer.seek(SeekFrom::Start(start + FILE_LENGTH_OFFSET))?;
    writer.write_u32::<BigEndian>(file_length)?;
    writer.seek(SeekFrom::Start(start + u64::from(file_length)))?;
    writer.flush()?;
    Ok(file_length)
}

/// Validates and loads every asset, returning the total file length along
/// with each asset's size and data.
fn layout(assets: &[Asset])
          -> Result<(u32, Vec<(IconSize, Cow<[u8]>)>), PackError> {
    let mut file_length = ICON_FAMILY_HEADER_LENGTH;
    let mut payloads = Vec::with_capacity(assets.len());
    for (index, asset) in assets.iter().enumerate() {
        let icon_size = asset.icon_size(index)?;
        let data = asset.resolve(index)?;
        for &ostype in icon_size.ostypes() {
            file_length = grow(index, file_length, &element(index, ostype, &data)?)?;
        }
        payloads.push((icon_size, data));
    }
    Ok((file_length, payloads))
}

fn element<'a>(index: usize,
               ostype: OSType,
               data: &'a [u8])
               -> Result<IconElement<'a>, PackError> {
    IconElement::new(ostype, data).ok_or(PackError::TooLarge {
        index,
        length: data.len() as u64 + u64::from(ICON_ELEMENT_HEADER_LENGTH),
    })
}

fn grow(index: usize,
        file_length: u32,
        element: &IconElement)
        -> Result<u32, PackError> {
    file_length.checked_add(element.total_length()).ok_or(PackError::TooLarge {
        index,
        length: u64::from(file_length) + u64::from(element.total_length()),
    })
}
