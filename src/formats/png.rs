use super::measured;
use crate::cursor::ByteCursor;
use crate::error::{ParseError, Result};
use crate::types::{ImageFormat, Probe};

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

pub const IHDR_CHUNK_TYPE: &[u8; 4] = b"IHDR";
pub const IEND_CHUNK_TYPE: &[u8; 4] = b"IEND";

const IHDR_LENGTH: u32 = 13;
const CRC_LENGTH: u64 = 4;

/// Reads width and height from the IHDR chunk. CRCs are skipped, not checked.
pub fn parse(cursor: &mut ByteCursor<'_>) -> Result<Probe> {
    if !cursor.match_signature(&PNG_SIGNATURE) {
        return Ok(Probe::NonMatch);
    }

    loop {
        let length = cursor.read_be_u32()?;
        let chunk_type = cursor.read_array::<4>()?;

        match &chunk_type {
            IHDR_CHUNK_TYPE => {
                if length != IHDR_LENGTH {
                    return Err(ParseError::BadIhdrLength(length));
                }
                let width = cursor.read_be_u32()?;
                let height = cursor.read_be_u32()?;
                return measured(ImageFormat::Png, width, height);
            }
            IEND_CHUNK_TYPE => {
                tracing::trace!("IEND at offset {} without IHDR", cursor.position());
                return Ok(Probe::NonMatch);
            }
            _ => {
                tracing::trace!(
                    "skipping chunk {} ({} bytes)",
                    String::from_utf8_lossy(&chunk_type),
                    length
                );
                cursor.skip(u64::from(length))?;
                cursor.skip(CRC_LENGTH)?;
            }
        }
    }
}
