//! Builders for minimal, well-formed image headers.
#![allow(dead_code)]

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

pub fn make_gif(width: u16, height: u16, body_len: usize) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(b"GIF89a");
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    data.extend_from_slice(&[0xF7, 0x00, 0x00]);
    data.extend(std::iter::repeat_n(0xAB, body_len));
    data.push(0x3B);
    data
}

fn make_png_chunk(chunk_type: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut chunk = Vec::new();
    chunk.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    chunk.extend_from_slice(chunk_type);
    chunk.extend_from_slice(payload);
    // CRC is never checked by the decoder
    chunk.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
    chunk
}

pub fn make_png(width: i32, height: i32, idat_len: usize) -> Vec<u8> {
    let mut ihdr = Vec::new();
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.extend_from_slice(&[8, 2, 0, 0, 0]);

    let mut data = Vec::new();
    data.extend_from_slice(&PNG_SIGNATURE);
    data.extend_from_slice(&make_png_chunk(b"IHDR", &ihdr));
    data.extend_from_slice(&make_png_chunk(b"IDAT", &vec![0x55; idat_len]));
    data.extend_from_slice(&make_png_chunk(b"IEND", &[]));
    data
}

fn bmp_file_header(magic: [u8; 2], total_len: u32, pixel_offset: u32) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&magic);
    data.extend_from_slice(&total_len.to_le_bytes());
    data.extend_from_slice(&[0, 0, 0, 0]);
    data.extend_from_slice(&pixel_offset.to_le_bytes());
    data
}

/// A BMP whose DIB header has 32-bit dimensions and is `header_size` bytes long.
pub fn make_bmp(
    magic: [u8; 2],
    header_size: i32,
    width: i32,
    height: i32,
    pixels: usize,
) -> Vec<u8> {
    let mut dib = Vec::new();
    dib.extend_from_slice(&header_size.to_le_bytes());
    dib.extend_from_slice(&width.to_le_bytes());
    dib.extend_from_slice(&height.to_le_bytes());
    dib.extend_from_slice(&1u16.to_le_bytes());
    dib.extend_from_slice(&24u16.to_le_bytes());
    dib.resize(header_size.max(16) as usize, 0);
    finish_bmp(magic, dib, pixels)
}

pub fn make_bmp_core(width: i16, height: i16, pixels: usize) -> Vec<u8> {
    let mut dib = Vec::new();
    dib.extend_from_slice(&12i32.to_le_bytes());
    dib.extend_from_slice(&width.to_le_bytes());
    dib.extend_from_slice(&height.to_le_bytes());
    dib.extend_from_slice(&1u16.to_le_bytes());
    dib.extend_from_slice(&24u16.to_le_bytes());
    finish_bmp(*b"BM", dib, pixels)
}

fn finish_bmp(magic: [u8; 2], dib: Vec<u8>, pixels: usize) -> Vec<u8> {
    let pixel_offset = 14 + dib.len();
    let total = pixel_offset + pixels;
    let mut data = bmp_file_header(magic, total as u32, pixel_offset as u32);
    data.extend_from_slice(&dib);
    data.extend(std::iter::repeat_n(0x7F, pixels));
    data
}
