use super::measured;
use crate::cursor::ByteCursor;
use crate::error::Result;
use crate::types::{ImageFormat, Probe};

pub const BMP_SIGNATURE: &[u8; 2] = b"BM";

/// File size, two reserved fields, pixel data offset and DIB header size.
const HEADER_FIELDS_BEFORE_WIDTH: u64 = 16;

/// Negative heights mark top-down row order; the absolute value is reported.
pub fn parse(cursor: &mut ByteCursor<'_>) -> Result<Probe> {
    if !cursor.match_signature(BMP_SIGNATURE) {
        return Ok(Probe::NonMatch);
    }

    cursor.skip(HEADER_FIELDS_BEFORE_WIDTH)?;
    let width = cursor.read_le_u32()?;
    let height = cursor.read_le_i32()?.unsigned_abs();
    measured(ImageFormat::Bmp, width, height)
}
