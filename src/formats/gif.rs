use super::measured;
use crate::cursor::ByteCursor;
use crate::error::Result;
use crate::types::{ImageFormat, Probe};

pub const GIF87A_SIGNATURE: &[u8; 6] = b"GIF87a";
pub const GIF89A_SIGNATURE: &[u8; 6] = b"GIF89a";

/// Logical screen width and height follow the signature directly.
pub fn parse(cursor: &mut ByteCursor<'_>) -> Result<Probe> {
    let signature = match cursor.read_array::<6>() {
        Ok(sig) => sig,
        Err(_) => return Ok(Probe::NonMatch),
    };
    if &signature != GIF87A_SIGNATURE && &signature != GIF89A_SIGNATURE {
        return Ok(Probe::NonMatch);
    }

    let width = cursor.read_le_u16()?;
    let height = cursor.read_le_u16()?;
    measured(ImageFormat::Gif, width.into(), height.into())
}
