#![allow(dead_code)]

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

pub fn make_png_chunk(chunk_type: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut chunk = Vec::new();
    chunk.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    chunk.extend_from_slice(chunk_type);
    chunk.extend_from_slice(payload);
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(payload);
    chunk.extend_from_slice(&hasher.finalize().to_be_bytes());
    chunk
}

pub fn make_ihdr(width: u32, height: u32) -> Vec<u8> {
    let mut payload = Vec::new();
    payload.extend_from_slice(&width.to_be_bytes());
    payload.extend_from_slice(&height.to_be_bytes());
    payload.push(8);
    payload.push(2);
    payload.extend_from_slice(&[0, 0, 0]);
    make_png_chunk(b"IHDR", &payload)
}

pub fn make_png(width: u32, height: u32) -> Vec<u8> {
    let mut png = PNG_SIGNATURE.to_vec();
    png.extend(make_ihdr(width, height));
    png.extend(make_png_chunk(b"IDAT", &[0x78, 0x9C, 0x63, 0x00, 0x00]));
    png.extend(make_png_chunk(b"IEND", &[]));
    png
}

fn sof0(width: u16, height: u16) -> Vec<u8> {
    let mut seg = vec![0xFF, 0xC0, 0x00, 0x11, 0x08];
    seg.extend_from_slice(&height.to_be_bytes());
    seg.extend_from_slice(&width.to_be_bytes());
    seg.extend_from_slice(&[0x03, 0x01, 0x22, 0x00, 0x02, 0x11, 0x01, 0x03, 0x11, 0x01]);
    seg
}

fn jpeg_tail(jpeg: &mut Vec<u8>) {
    jpeg.extend_from_slice(&[0xFF, 0xC4, 0x00, 0x1F, 0x00]);
    for i in 0u8..28 {
        jpeg.push(i.wrapping_mul(37));
    }
    jpeg.extend_from_slice(&[0xFF, 0xDA, 0x00, 0x08, 0x01, 0x01, 0x00, 0x00, 0x3F, 0x00]);
    for i in 0..200usize {
        let b = ((i.wrapping_mul(131).wrapping_add(17)) % 251) as u8;
        jpeg.push(b);
        if b == 0xFF {
            jpeg.push(0x00);
        }
    }
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
}

pub fn make_jpeg(width: u16, height: u16) -> Vec<u8> {
    let mut jpeg = vec![0xFF, 0xD8];
    jpeg.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x10]);
    jpeg.extend_from_slice(b"JFIF\x00\x01\x01\x00\x00\x48\x00\x48\x00\x00");
    jpeg.extend_from_slice(&[0xFF, 0xDB, 0x00, 0x43, 0x00]);
    jpeg.extend(std::iter::repeat_n(10u8, 64));
    jpeg.extend(sof0(width, height));
    jpeg_tail(&mut jpeg);
    jpeg
}

/// JPEG with an APP1 segment of `exif_payload_len` bytes before the frame.
pub fn make_jpeg_with_exif(width: u16, height: u16, exif_payload_len: usize) -> Vec<u8> {
    let mut jpeg = vec![0xFF, 0xD8];
    let seg_len = (exif_payload_len + 2) as u16;
    jpeg.extend_from_slice(&[0xFF, 0xE1]);
    jpeg.extend_from_slice(&seg_len.to_be_bytes());
    let mut payload = b"Exif\x00\x00".to_vec();
    // 0xFF bytes inside the payload must not be mistaken for markers
    payload.extend((0..exif_payload_len).map(|i| if i % 7 == 0 { 0xFF } else { 0xC0 }));
    payload.truncate(exif_payload_len);
    jpeg.extend_from_slice(&payload);
    jpeg.extend(sof0(width, height));
    jpeg_tail(&mut jpeg);
    jpeg
}

pub fn make_gif(width: u16, height: u16) -> Vec<u8> {
    let mut gif = b"GIF89a".to_vec();
    gif.extend_from_slice(&width.to_le_bytes());
    gif.extend_from_slice(&height.to_le_bytes());
    gif.extend_from_slice(&[0x80, 0x00, 0x00]);
    gif.extend_from_slice(&[0, 0, 0, 0xFF, 0xFF, 0xFF]);
    gif.extend_from_slice(&[0x2C, 0, 0, 0, 0]);
    gif.extend_from_slice(&width.to_le_bytes());
    gif.extend_from_slice(&height.to_le_bytes());
    gif.extend_from_slice(&[0x00, 0x02, 0x02, 0x44, 0x01, 0x00, 0x3B]);
    gif
}

pub fn make_bmp(width: u32, height: i32) -> Vec<u8> {
    let row = (width as usize * 3).div_ceil(4) * 4;
    let pixels = row * height.unsigned_abs() as usize;
    let mut bmp = b"BM".to_vec();
    bmp.extend_from_slice(&((54 + pixels) as u32).to_le_bytes());
    bmp.extend_from_slice(&[0, 0, 0, 0]);
    bmp.extend_from_slice(&54u32.to_le_bytes());
    bmp.extend_from_slice(&40u32.to_le_bytes());
    bmp.extend_from_slice(&width.to_le_bytes());
    bmp.extend_from_slice(&height.to_le_bytes());
    bmp.extend_from_slice(&1u16.to_le_bytes());
    bmp.extend_from_slice(&24u16.to_le_bytes());
    bmp.extend_from_slice(&[0u8; 24]);
    bmp.extend(std::iter::repeat_n(0x7Fu8, pixels));
    bmp
}
