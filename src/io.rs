use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::{DecodeError, Result};

/// A readable, seekable byte source such as a `File` or an in-memory `Cursor`.
///
/// Decoding moves the cursor, so a source must not be shared between
/// concurrent decode calls. Taking it by `&mut` enforces that.
pub trait ByteSource: Read + Seek {}

impl<T: Read + Seek + ?Sized> ByteSource for T {}

/// Total length of the source in bytes. The cursor is restored afterwards.
pub fn source_len<S: ByteSource + ?Sized>(source: &mut S) -> Result<u64> {
    let pos = source.stream_position()?;
    let end = source.seek(SeekFrom::End(0))?;
    if pos != end {
        source.seek(SeekFrom::Start(pos))?;
    }
    Ok(end)
}

/// Maps a failed read of `needed` bytes at `offset` into a decode error.
/// Running out of input is truncation; anything else stays an I/O error.
pub fn read_error(err: io::Error, offset: u64, needed: usize) -> DecodeError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        DecodeError::TruncatedSource { offset, needed }
    } else {
        DecodeError::Io(err)
    }
}

/// Fills `buf` from the current cursor position.
pub fn read_exact_here<S: ByteSource + ?Sized>(source: &mut S, buf: &mut [u8]) -> Result<()> {
    let offset = source.stream_position()?;
    source
        .read_exact(buf)
        .map_err(|e| read_error(e, offset, buf.len()))
}

/// Seeks to the absolute `offset` and fills `buf`.
pub fn read_exact_at<S: ByteSource + ?Sized>(
    source: &mut S,
    offset: u64,
    buf: &mut [u8],
) -> Result<()> {
    source.seek(SeekFrom::Start(offset))?;
    read_exact_here(source, buf)
}

pub fn open_source(path: impl AsRef<Path>) -> Result<File> {
    Ok(File::open(path.as_ref())?)
}
