pub mod batch;
pub mod classify;
pub mod cursor;
pub mod endian;
pub mod error;
pub mod formats;
pub mod types;

pub use classify::classify;
pub use cursor::ByteCursor;
pub use error::{ClassificationError, ParseError, ProbeError};
pub use formats::FormatParser;
pub use types::{ImageFormat, MetadataValue, Probe};
