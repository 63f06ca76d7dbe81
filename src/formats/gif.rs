use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

use crate::error::Result;
use crate::io::{read_error, read_exact_at, ByteSource};
use crate::types::GifHeader;

pub const GIF_MAGIC: [u8; 3] = *b"GIF";

/// The logical screen descriptor follows the 6-byte "GIF87a"/"GIF89a" tag
pub const SCREEN_DESCRIPTOR_OFFSET: u64 = 6;
pub const SCREEN_DESCRIPTOR_LEN: usize = 7;

pub fn read_gif_header<S: ByteSource + ?Sized>(source: &mut S) -> Result<GifHeader> {
    let mut descriptor = [0u8; SCREEN_DESCRIPTOR_LEN];
    read_exact_at(source, SCREEN_DESCRIPTOR_OFFSET, &mut descriptor)?;
    parse_screen_descriptor(&descriptor)
}

/// Width and height from a logical screen descriptor. Packed fields,
/// background colour index and aspect ratio are ignored.
pub fn parse_screen_descriptor(descriptor: &[u8]) -> Result<GifHeader> {
    let mut cursor = Cursor::new(descriptor);
    let mut field = || {
        let offset = SCREEN_DESCRIPTOR_OFFSET + cursor.position();
        cursor
            .read_u16::<LittleEndian>()
            .map_err(|e| read_error(e, offset, 2))
    };

    let width = field()?;
    let height = field()?;
    Ok(GifHeader { width, height })
}
