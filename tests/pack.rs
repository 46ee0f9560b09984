use byteorder::{BigEndian, ByteOrder};
use icnspack::{pack_to_path, Asset, PackError, PackErrorKind};
use std::fs;
use std::path::{Path, PathBuf};

#[test]
fn header_matches_file_length() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("icon.icns");
    pack_to_path(&all_sizes_from_buffers(), &output).unwrap();
    let data = fs::read(&output).unwrap();
    assert_eq!(b"icns", &data[0..4]);
    assert_eq!(data.len() as u32, BigEndian::read_u32(&data[4..8]));
}

#[test]
fn element_lengths_chain_to_end_of_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("icon.icns");
    pack_to_path(&all_sizes_from_buffers(), &output).unwrap();
    let elements = read_elements(&fs::read(&output).unwrap());
    assert_eq!(10, elements.len());
    for (ostype, payload) in &elements {
        assert!(payload.starts_with(b"\x89PNG"), "{} is not a PNG", ostype);
    }
}

#[test]
fn retina_size_fans_out() {
    let png = png_bytes(64);
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("icon.icns");
    pack_to_path(&[Asset::from_buffer(64, png.clone())], &output).unwrap();
    let elements = read_elements(&fs::read(&output).unwrap());
    assert_eq!(vec![("icp6".to_string(), png.clone()),
                    ("ic11".to_string(), png)],
               elements);
}

#[test]
fn assets_keep_caller_order() {
    let assets = vec![Asset::from_buffer(256, png_bytes(256)),
                      Asset::from_buffer(32, png_bytes(32)),
                      Asset::from_buffer(64, png_bytes(64))];
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("icon.icns");
    pack_to_path(&assets, &output).unwrap();
    let ostypes: Vec<String> = read_elements(&fs::read(&output).unwrap())
        .into_iter()
        .map(|(ostype, _)| ostype)
        .collect();
    assert_eq!(vec!["ic08", "icp5", "icp6", "ic11"], ostypes);
}

#[test]
fn pack_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let assets = write_png_files(dir.path());
    let output = dir.path().join("icon.icns");
    pack_to_path(&assets, &output).unwrap();
    let buffered = dir.path().join("buffered.icns");
    pack_to_path(&all_sizes_from_buffers(), &buffered).unwrap();
    assert_eq!(fs::read(&buffered).unwrap(), fs::read(&output).unwrap());
}

#[test]
fn repacking_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let assets = write_png_files(dir.path());
    let first = dir.path().join("first.icns");
    let second = dir.path().join("second.icns");
    pack_to_path(&assets, &first).unwrap();
    pack_to_path(&assets, &second).unwrap();
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn existing_file_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("icon.icns");
    fs::write(&output, vec![0xffu8; 100_000]).unwrap();
    pack_to_path(&[Asset::from_buffer(32, png_bytes(32))], &output).unwrap();
    let data = fs::read(&output).unwrap();
    assert_eq!(data.len() as u32, BigEndian::read_u32(&data[4..8]));
}

#[test]
fn missing_source_is_reported_first() {
    let err = pack_err(vec![Asset::new(32)]);
    assert_eq!(PackErrorKind::MissingPayloadSource, err.kind());
}

#[test]
fn empty_path_is_missing_source() {
    let err = pack_err(vec![Asset::from_path(32, "")]);
    assert_eq!(PackErrorKind::MissingPayloadSource, err.kind());
}

#[test]
fn empty_buffer_is_rejected() {
    let err = pack_err(vec![Asset::from_buffer(32, Vec::<u8>::new())]);
    assert_eq!(PackErrorKind::EmptyPayload, err.kind());
}

#[test]
fn unsupported_size_is_rejected() {
    let err = pack_err(vec![Asset::from_buffer(1000, png_bytes(32))]);
    assert!(matches!(err, PackError::UnsupportedSize { index: 0, size: 1000 }));
}

#[test]
fn unreadable_path_is_io_error() {
    let err = pack_err(vec![Asset::from_path(32, "/nonexistent/icon-32.png")]);
    assert_eq!(PackErrorKind::Io, err.kind());
}

#[test]
fn failed_pack_removes_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("icon.icns");
    let assets = vec![Asset::from_buffer(512, png_bytes(512)),
                      Asset::from_buffer(48, png_bytes(48))];
    let err = pack_to_path(&assets, &output).unwrap_err();
    assert_eq!(Some(1), err.index());
    assert!(!output.exists());
}

#[test]
fn missing_output_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("no/such/dir/icon.icns");
    let err = pack_to_path(&[Asset::from_buffer(32, png_bytes(32))], &output)
        .unwrap_err();
    assert_eq!(PackErrorKind::Io, err.kind());
    assert_eq!(None, err.index());
}

fn pack_err(assets: Vec<Asset>) -> PackError {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("icon.icns");
    let err = pack_to_path(&assets, &output).unwrap_err();
    assert!(!output.exists());
    err
}

fn all_sizes_from_buffers() -> Vec<Asset> {
    [32, 64, 128, 256, 512, 1024]
        .iter()
        .map(|&size| Asset::from_buffer(size, png_bytes(size)))
        .collect()
}

fn write_png_files(dir: &Path) -> Vec<Asset> {
    [32, 64, 128, 256, 512, 1024]
        .iter()
        .map(|&size| {
            let path: PathBuf = dir.join(format!("icon-{}.png", size));
            fs::write(&path, png_bytes(size)).unwrap();
            Asset::from_path(size, path)
        })
        .collect()
}

/// Encodes a square RGBA PNG whose pixels depend on the size, so that
/// elements for different sizes have different payloads.
fn png_bytes(size: u32) -> Vec<u8> {
    let mut output = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut output, size, size);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        let pixels: Vec<u8> = (0..size * size * 4)
            .map(|i| (i / 4 % size) as u8 ^ (size / 32) as u8)
            .collect();
        writer.write_image_data(&pixels).unwrap();
        writer.finish().unwrap();
    }
    output
}

/// Splits an ICNS file into (OSType, payload) pairs, checking that each
/// element's length field leads exactly to the start of the next element.
fn read_elements(data: &[u8]) -> Vec<(String, Vec<u8>)> {
    let file_length = BigEndian::read_u32(&data[4..8]) as usize;
    assert_eq!(data.len(), file_length);
    let mut elements = Vec::new();
    let mut position = 8;
    while position < file_length {
        let ostype = String::from_utf8(data[position..position + 4].to_vec())
            .unwrap();
        let length_field = &data[position + 4..position + 8];
        let length = BigEndian::read_u32(length_field) as usize;
        assert!(length >= 8);
        assert!(position + length <= file_length);
        elements.push((ostype, data[position + 8..position + length].to_vec()));
        position += length;
    }
    assert_eq!(file_length, position);
    elements
}
