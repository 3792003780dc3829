//! Integer assembly from fixed-size byte windows.
//!
//! Each helper takes an array rather than a slice so the integer width and
//! signedness are fixed at the call site.

#[inline]
pub fn be_u16(b: [u8; 2]) -> u16 {
    u16::from_be_bytes(b)
}

#[inline]
pub fn be_u32(b: [u8; 4]) -> u32 {
    u32::from_be_bytes(b)
}

#[inline]
pub fn le_u16(b: [u8; 2]) -> u16 {
    u16::from_le_bytes(b)
}

#[inline]
pub fn le_u32(b: [u8; 4]) -> u32 {
    u32::from_le_bytes(b)
}

/// BMP stores height as a signed value; negative means top-down rows.
#[inline]
pub fn le_i32(b: [u8; 4]) -> i32 {
    i32::from_le_bytes(b)
}
