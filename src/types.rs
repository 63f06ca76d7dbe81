//! Metadata types produced by the header decoder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Image encodings recognized by their magic bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageFormat {
    Gif,
    Bmp,
    Png,
}

impl ImageFormat {
    /// Tag used in serialized output
    pub fn name(&self) -> &'static str {
        match self {
            ImageFormat::Gif => "Gif",
            ImageFormat::Bmp => "Bmp",
            ImageFormat::Png => "Png",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// DIB header revision, selected by the header size field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmpVersion {
    Core,
    V3,
    V4,
    V5,
}

impl BmpVersion {
    pub fn from_header_size(header_size: i32) -> Option<Self> {
        match header_size {
            12 => Some(BmpVersion::Core),
            40 => Some(BmpVersion::V3),
            108 => Some(BmpVersion::V4),
            124 => Some(BmpVersion::V5),
            _ => None,
        }
    }

    pub fn header_size(&self) -> i32 {
        match self {
            BmpVersion::Core => 12,
            BmpVersion::V3 => 40,
            BmpVersion::V4 => 108,
            BmpVersion::V5 => 124,
        }
    }
}

impl fmt::Display for BmpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BmpVersion::Core => write!(f, "CORE"),
            BmpVersion::V3 => write!(f, "3"),
            BmpVersion::V4 => write!(f, "4"),
            BmpVersion::V5 => write!(f, "5"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GifHeader {
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpHeader {
    pub version: BmpVersion,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngHeader {
    pub width: i32,
    pub height: i32,
}

/// Fields extracted by one of the format-specific readers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageHeader {
    Gif(GifHeader),
    Bmp(BmpHeader),
    Png(PngHeader),
}

impl ImageHeader {
    pub fn format(&self) -> ImageFormat {
        match self {
            ImageHeader::Gif(_) => ImageFormat::Gif,
            ImageHeader::Bmp(_) => ImageFormat::Bmp,
            ImageHeader::Png(_) => ImageFormat::Png,
        }
    }

    pub fn dimensions(&self) -> (i32, i32) {
        match *self {
            ImageHeader::Gif(h) => (i32::from(h.width), i32::from(h.height)),
            ImageHeader::Bmp(h) => (h.width, h.height),
            ImageHeader::Png(h) => (h.width, h.height),
        }
    }
}

/// Basic image metadata. Serializes as `{"Height", "Width", "Format", "Size"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageMetadata {
    pub height: i32,
    pub width: i32,
    pub format: ImageFormat,
    pub size: u64,
}

impl ImageMetadata {
    pub fn from_header(header: ImageHeader, size: u64) -> Self {
        let (width, height) = header.dimensions();
        Self {
            height,
            width,
            format: header.format(),
            size,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
