//! Magic-byte signatures and the per-format header readers.

pub mod bmp;
pub mod gif;
pub mod png;

use crate::error::DecodeError;
use crate::types::ImageFormat;

/// Number of leading bytes read to identify a format
pub const PROBE_LEN: usize = 4;

/// A leading byte sequence identifying one format
#[derive(Debug, Clone, Copy)]
pub struct Signature {
    pub format: ImageFormat,
    pub magic: &'static [u8],
}

impl Signature {
    pub const fn new(format: ImageFormat, magic: &'static [u8]) -> Self {
        Self { format, magic }
    }

    #[inline]
    pub fn matches(&self, probe: &[u8]) -> bool {
        probe.starts_with(self.magic)
    }
}

/// Checked in order. BMP is accepted with either byte order of "BM".
pub const SIGNATURES: [Signature; 4] = [
    Signature::new(ImageFormat::Gif, &gif::GIF_MAGIC),
    Signature::new(ImageFormat::Bmp, &bmp::BMP_MAGIC),
    Signature::new(ImageFormat::Bmp, &bmp::BMP_MAGIC_SWAPPED),
    Signature::new(ImageFormat::Png, &png::PNG_MAGIC),
];

pub fn detect_format(probe: &[u8; PROBE_LEN]) -> Option<ImageFormat> {
    SIGNATURES
        .iter()
        .find(|sig| sig.matches(probe))
        .map(|sig| sig.format)
}

pub fn sniff(probe: &[u8; PROBE_LEN]) -> Result<ImageFormat, DecodeError> {
    detect_format(probe).ok_or(DecodeError::UnsupportedFormat { magic: *probe })
}
