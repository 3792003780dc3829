use crate::error::ClassificationError;
use crate::formats::FormatParser;
use crate::types::{MetadataValue, Probe};

/// Identifies the image format of `data` and reads its dimensions.
///
/// Parsers run in [`FormatParser::ALL`] order, each from offset 0. A parser
/// whose signature matched but whose header is broken stops the search; the
/// remaining parsers are not tried. `source_label` only appears in errors.
pub fn classify(data: &[u8], source_label: &str) -> Result<MetadataValue, ClassificationError> {
    for parser in FormatParser::ALL {
        match parser.try_parse(data) {
            Ok(Probe::Match(metadata)) => {
                tracing::debug!("{}: {}", source_label, metadata);
                return Ok(metadata);
            }
            Ok(Probe::NonMatch) => continue,
            Err(reason) => {
                tracing::debug!(
                    "{}: {} signature matched but header is corrupt: {}",
                    source_label,
                    parser.format(),
                    reason
                );
                return Err(ClassificationError::Corrupt {
                    label: source_label.to_string(),
                    format: parser.format(),
                    reason,
                });
            }
        }
    }

    tracing::debug!("{}: no known image signature", source_label);
    Err(ClassificationError::Unrecognized {
        label: source_label.to_string(),
    })
}
