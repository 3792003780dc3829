use super::measured;
use crate::cursor::ByteCursor;
use crate::error::{ParseError, Result};
use crate::types::{ImageFormat, Probe};

pub const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];

const MARKER_PREFIX: u8 = 0xFF;
const STUFFED: u8 = 0x00;
const EOI: u8 = 0xD9;
const SEGMENT_LENGTH_FIELD: u16 = 2;

#[inline]
pub fn is_restart_marker(marker: u8) -> bool {
    matches!(marker, 0xD0..=0xD7)
}

/// Baseline, extended sequential and progressive frame headers.
#[inline]
pub fn is_frame_header(marker: u8) -> bool {
    matches!(marker, 0xC0..=0xC2)
}

/// Walks the segment chain until the first SOF0..SOF2 header.
///
/// An EOI before any frame header is a non-match. Running out of bytes after
/// the SOI is a structural error.
pub fn parse(cursor: &mut ByteCursor<'_>) -> Result<Probe> {
    if !cursor.match_signature(&JPEG_SOI) {
        return Ok(Probe::NonMatch);
    }

    loop {
        while cursor.read_u8()? != MARKER_PREFIX {}

        let mut marker = cursor.read_u8()?;
        while marker == MARKER_PREFIX {
            marker = cursor.read_u8()?;
        }

        if marker == STUFFED || is_restart_marker(marker) {
            continue;
        }
        if marker == EOI {
            tracing::trace!("EOI at offset {} before any frame header", cursor.position());
            return Ok(Probe::NonMatch);
        }

        let length = cursor.read_be_u16()?;
        if length < SEGMENT_LENGTH_FIELD {
            return Err(ParseError::ShortSegment { marker, length });
        }

        if is_frame_header(marker) {
            // sample precision
            cursor.seek_relative(1)?;
            let height = cursor.read_be_u16()?;
            let width = cursor.read_be_u16()?;
            return measured(ImageFormat::Jpeg, width.into(), height.into());
        }

        tracing::trace!(
            "skipping segment 0xFF{:02X} ({} bytes) at offset {}",
            marker,
            length,
            cursor.position()
        );
        cursor.skip(u64::from(length - SEGMENT_LENGTH_FIELD))?;
    }
}
