//! Content metadata codec.
//!
//! The remote post store only understands flat post records, so placement
//! metadata rides inside the free-text content field as
//! `"<message>|||<JSON metadata>"`. Decoding is tolerant: content without
//! the separator is a plain post; content with the separator but broken or
//! incomplete JSON is a decode error the caller drops record-by-record.

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::ornament::OrnamentDesign;

/// Delimiter between the free-text message and the JSON metadata.
pub const METADATA_SEPARATOR: &str = "|||";

/// Structured placement data embedded in a post's content field.
/// Serialized with the store's camelCase key convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrnamentMetadata {
    pub design: OrnamentDesign,
    #[serde(rename = "panelIndex")]
    pub panel_index: u8,
    #[serde(rename = "slotIndex", skip_serializing_if = "Option::is_none")]
    pub slot_index: Option<u8>,
    pub x: f64,
    pub y: f64,
}

/// Result of decoding a post's content field.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// No separator: a plain card for the ranking/comment views.
    Plain { text: String },
    /// Separator plus valid metadata: an ornament record.
    Ornament {
        message: String,
        metadata: OrnamentMetadata,
    },
}

/// Encode a message and its placement metadata into one content string.
///
/// # Errors
///
/// Returns [`CoreError::Metadata`] if the metadata fails to serialize.
pub fn encode(message: &str, metadata: &OrnamentMetadata) -> Result<String, CoreError> {
    let json = serde_json::to_string(metadata)?;
    Ok(format!("{message}{METADATA_SEPARATOR}{json}"))
}

/// Decode a content string into a plain post or an ornament record.
///
/// # Errors
///
/// Returns [`CoreError::Metadata`] when the separator is present but the
/// trailing JSON is unparsable or missing required coordinate fields.
pub fn decode(content: &str) -> Result<Decoded, CoreError> {
    match content.split_once(METADATA_SEPARATOR) {
        None => Ok(Decoded::Plain {
            text: content.to_string(),
        }),
        Some((message, raw)) => {
            let metadata: OrnamentMetadata = serde_json::from_str(raw)?;
            Ok(Decoded::Ornament {
                message: message.to_string(),
                metadata,
            })
        }
    }
}

/// The free-text part of a content string, with any metadata stripped.
#[must_use]
pub fn strip_metadata(content: &str) -> &str {
    content
        .split_once(METADATA_SEPARATOR)
        .map_or(content, |(message, _)| message)
}
