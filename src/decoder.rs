//! Format sniffing and dispatch to the per-format header readers.

use std::path::Path;

use tracing::trace;

use crate::error::Result;
use crate::formats::{self, bmp, gif, png, PROBE_LEN};
use crate::io::{open_source, read_exact_here, source_len, ByteSource};
use crate::types::{ImageFormat, ImageHeader, ImageMetadata};

/// Reads the format-specific header fields of `source`.
///
/// The 4-byte probe is taken from the current cursor position; the readers
/// then seek to absolute offsets. The cursor is left wherever the last read
/// stopped, so rewind before reusing the source.
pub fn decode_header<S: ByteSource + ?Sized>(source: &mut S) -> Result<ImageHeader> {
    let mut probe = [0u8; PROBE_LEN];
    read_exact_here(source, &mut probe)?;
    let format = formats::sniff(&probe)?;
    trace!(%format, "matched signature");

    let header = match format {
        ImageFormat::Gif => ImageHeader::Gif(gif::read_gif_header(source)?),
        ImageFormat::Bmp => ImageHeader::Bmp(bmp::read_bmp_header(source)?),
        ImageFormat::Png => ImageHeader::Png(png::read_png_header(source)?),
    };
    Ok(header)
}

/// Identifies the format of `source` and extracts its dimensions and size.
pub fn decode<S: ByteSource + ?Sized>(source: &mut S) -> Result<ImageMetadata> {
    let size = source_len(source)?;
    let header = decode_header(source)?;
    let metadata = ImageMetadata::from_header(header, size);
    trace!(
        format = %metadata.format,
        width = metadata.width,
        height = metadata.height,
        size,
        "decoded header"
    );
    Ok(metadata)
}

/// Opens `path` read-only and decodes it.
pub fn probe_path(path: impl AsRef<Path>) -> Result<ImageMetadata> {
    let mut file = open_source(path)?;
    decode(&mut file)
}
