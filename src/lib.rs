pub mod cli;
pub mod decoder;
pub mod error;
pub mod formats;
pub mod io;
pub mod options;
pub mod types;

pub use decoder::{decode, decode_header, probe_path};
pub use error::{DecodeError, Result};
pub use io::ByteSource;
pub use options::ProbeOptions;
pub use types::{
    BmpHeader, BmpVersion, GifHeader, ImageFormat, ImageHeader, ImageMetadata, PngHeader,
};
