use serde::Serialize;
use std::fmt;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    Bmp,
}

impl ImageFormat {
    /// Tag used by downstream page-layout consumers ("JPEG", "PNG", ...).
    pub fn name(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Png => "PNG",
            ImageFormat::Gif => "GIF",
            ImageFormat::Bmp => "BMP",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Gif => "gif",
            ImageFormat::Bmp => "bmp",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Dimensions and format read from an image header.
///
/// Only the format parsers construct this, and they reject zero dimensions,
/// so `width` and `height` are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MetadataValue {
    width: u32,
    height: u32,
    format: ImageFormat,
}

impl MetadataValue {
    pub(crate) fn new(width: u32, height: u32, format: ImageFormat) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            format,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Largest `(width, height)` with this image's aspect ratio that fits
    /// inside `max_width` x `max_height`.
    pub fn fit_within(&self, max_width: f64, max_height: f64) -> (f64, f64) {
        let scale_x = max_width / self.width as f64;
        let scale_y = max_height / self.height as f64;
        let scale = scale_x.min(scale_y);
        (self.width as f64 * scale, self.height as f64 * scale)
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}x{}", self.format, self.width, self.height)
    }
}

/// Outcome of one parser attempt whose bytes were structurally readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    Match(MetadataValue),
    /// The signature belongs to another format.
    NonMatch,
}

impl Probe {
    pub fn is_match(&self) -> bool {
        matches!(self, Probe::Match(_))
    }

    pub fn into_value(self) -> Option<MetadataValue> {
        match self {
            Probe::Match(m) => Some(m),
            Probe::NonMatch => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names() {
        assert_eq!(ImageFormat::Jpeg.name(), "JPEG");
        assert_eq!(ImageFormat::Bmp.to_string(), "BMP");
        assert_eq!(ImageFormat::Jpeg.extension(), "jpg");
    }

    #[test]
    fn test_fit_within_portrait() {
        let m = MetadataValue::new(20, 40, ImageFormat::Png);
        let (w, h) = m.fit_within(210.0, 297.0);
        assert!((h - 297.0).abs() < 1e-9);
        assert!((w - 148.5).abs() < 1e-9);
    }

    #[test]
    fn test_fit_within_landscape() {
        let m = MetadataValue::new(400, 100, ImageFormat::Gif);
        let (w, h) = m.fit_within(210.0, 297.0);
        assert!((w - 210.0).abs() < 1e-9);
        assert!((h - 52.5).abs() < 1e-9);
        assert!((m.aspect_ratio() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_serialize_uppercase_tag() {
        let m = MetadataValue::new(20, 40, ImageFormat::Jpeg);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"width":20,"height":40,"format":"JPEG"}"#);
    }

    #[test]
    fn test_probe_into_value() {
        let m = MetadataValue::new(1, 1, ImageFormat::Bmp);
        assert_eq!(Probe::Match(m).into_value(), Some(m));
        assert!(!Probe::NonMatch.is_match());
    }
}
