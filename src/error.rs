use std::io;
use thiserror::Error;

/// Errors that can occur while decoding an image header
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Unsupported format: magic bytes {magic:02X?} match no known signature")]
    UnsupportedFormat { magic: [u8; 4] },

    #[error("Invalid BMP header: unknown DIB header size {header_size}")]
    InvalidBmpHeader { header_size: i32 },

    #[error("Truncated source: needed {needed} bytes at offset {offset}")]
    TruncatedSource { offset: u64, needed: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl DecodeError {
    pub fn is_truncated(&self) -> bool {
        matches!(self, DecodeError::TruncatedSource { .. })
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
