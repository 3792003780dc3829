pub mod bmp;
pub mod gif;
pub mod jpeg;
pub mod png;

use crate::cursor::ByteCursor;
use crate::error::{ParseError, Result};
use crate::types::{ImageFormat, MetadataValue, Probe};

/// The closed set of header parsers, in dispatch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatParser {
    Png,
    Jpeg,
    Gif,
    Bmp,
}

impl FormatParser {
    pub const ALL: [FormatParser; 4] = [
        FormatParser::Png,
        FormatParser::Jpeg,
        FormatParser::Gif,
        FormatParser::Bmp,
    ];

    pub fn format(&self) -> ImageFormat {
        match self {
            FormatParser::Png => ImageFormat::Png,
            FormatParser::Jpeg => ImageFormat::Jpeg,
            FormatParser::Gif => ImageFormat::Gif,
            FormatParser::Bmp => ImageFormat::Bmp,
        }
    }

    /// Runs this parser from offset 0 on a cursor of its own.
    pub fn try_parse(&self, data: &[u8]) -> Result<Probe> {
        let mut cursor = ByteCursor::new(data);
        match self {
            FormatParser::Png => png::parse(&mut cursor),
            FormatParser::Jpeg => jpeg::parse(&mut cursor),
            FormatParser::Gif => gif::parse(&mut cursor),
            FormatParser::Bmp => bmp::parse(&mut cursor),
        }
    }
}

pub(crate) fn measured(format: ImageFormat, width: u32, height: u32) -> Result<Probe> {
    if width == 0 || height == 0 {
        return Err(ParseError::ZeroDimension {
            format,
            width,
            height,
        });
    }
    Ok(Probe::Match(MetadataValue::new(width, height, format)))
}
