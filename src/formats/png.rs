use byteorder::{BigEndian, ReadBytesExt};
use std::io::Cursor;

use crate::error::Result;
use crate::io::{read_error, read_exact_at, ByteSource};
use crate::types::PngHeader;

/// First four bytes of the 8-byte PNG signature, enough to identify the format
pub const PNG_MAGIC: [u8; 4] = [0x89, 0x50, 0x4E, 0x47];
pub const PNG_SIGNATURE_LEN: u64 = 8;

/// IHDR is always the first chunk: length(4) + type(4) + data(13) + crc(4)
pub const IHDR_OFFSET: u64 = PNG_SIGNATURE_LEN;
pub const IHDR_CHUNK_LEN: usize = 25;

/// Width sits right after the length and type fields; height follows it
const WIDTH_POS: u64 = 8;

pub fn read_png_header<S: ByteSource + ?Sized>(source: &mut S) -> Result<PngHeader> {
    let mut ihdr = [0u8; IHDR_CHUNK_LEN];
    read_exact_at(source, IHDR_OFFSET, &mut ihdr)?;
    parse_ihdr(&ihdr)
}

/// Dimensions from a raw IHDR chunk, length and type fields included.
/// The chunk type and CRC are not checked.
pub fn parse_ihdr(ihdr: &[u8]) -> Result<PngHeader> {
    let mut cursor = Cursor::new(ihdr);
    cursor.set_position(WIDTH_POS);
    let mut field = || {
        let offset = IHDR_OFFSET + cursor.position();
        cursor
            .read_i32::<BigEndian>()
            .map_err(|e| read_error(e, offset, 4))
    };

    let width = field()?;
    let height = field()?;
    Ok(PngHeader { width, height })
}
