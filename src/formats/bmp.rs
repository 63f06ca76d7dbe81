use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Cursor, SeekFrom};
use tracing::debug;

use crate::error::{DecodeError, Result};
use crate::io::{read_error, read_exact_here, ByteSource};
use crate::types::{BmpHeader, BmpVersion};

pub const BMP_MAGIC: [u8; 2] = *b"BM";
pub const BMP_MAGIC_SWAPPED: [u8; 2] = *b"MB";

/// The DIB header starts right after the 14-byte file header
pub const DIB_HEADER_OFFSET: u64 = 14;
const HEADER_SIZE_LEN: usize = 4;

pub fn read_bmp_header<S: ByteSource + ?Sized>(source: &mut S) -> Result<BmpHeader> {
    source.seek(SeekFrom::Start(DIB_HEADER_OFFSET))?;
    let header_size = source
        .read_i32::<LittleEndian>()
        .map_err(|e| read_error(e, DIB_HEADER_OFFSET, HEADER_SIZE_LEN))?;

    let version = BmpVersion::from_header_size(header_size)
        .ok_or(DecodeError::InvalidBmpHeader { header_size })?;
    debug!(%version, header_size, "BMP DIB header");

    let mut rest = vec![0u8; version.header_size() as usize - HEADER_SIZE_LEN];
    read_exact_here(source, &mut rest)?;

    parse_dib_fields(version, &rest)
}

/// Dimensions from the DIB header bytes that follow its size field.
///
/// `BITMAPCOREHEADER` stores 16-bit width and height; every later revision
/// stores 32-bit values. Height is signed, negative for top-down bitmaps.
pub fn parse_dib_fields(version: BmpVersion, rest: &[u8]) -> Result<BmpHeader> {
    let base = DIB_HEADER_OFFSET + HEADER_SIZE_LEN as u64;
    let mut cursor = Cursor::new(rest);

    let (width, height) = match version {
        BmpVersion::Core => {
            let mut field = || {
                let offset = base + cursor.position();
                cursor
                    .read_i16::<LittleEndian>()
                    .map_err(|e| read_error(e, offset, 2))
            };
            let width = field()?;
            let height = field()?;
            (i32::from(width), i32::from(height))
        }
        BmpVersion::V3 | BmpVersion::V4 | BmpVersion::V5 => {
            let mut field = || {
                let offset = base + cursor.position();
                cursor
                    .read_i32::<LittleEndian>()
                    .map_err(|e| read_error(e, offset, 4))
            };
            (field()?, field()?)
        }
    };

    Ok(BmpHeader {
        version,
        width,
        height,
    })
}
