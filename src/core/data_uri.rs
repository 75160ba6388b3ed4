//! Data URI codec for the embedded source payloads.

use crate::domain::model::AssetKind;
use crate::utils::error::{EmbedError, Result};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// The set `encodeURIComponent` escapes: every non-alphanumeric byte except
/// `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds a `data:` URI carrying `source` as UTF-8, percent-encoded, with the
/// media type matching the asset kind.
pub fn encode(kind: AssetKind, source: &str) -> String {
    format!(
        "data:{};charset=UTF-8,{}",
        kind.mime(),
        utf8_percent_encode(source, COMPONENT)
    )
}

/// Recovers the source text from a data URI produced by [`encode`].
pub fn decode(uri: &str) -> Result<String> {
    let comma = uri.find(',').ok_or_else(|| EmbedError::MalformedPayload {
        reason: "data URI has no payload separator".to_string(),
    })?;
    let decoded = percent_decode_str(&uri[comma + 1..])
        .decode_utf8()
        .map_err(|e| EmbedError::MalformedPayload {
            reason: format!("data URI payload is not UTF-8: {e}"),
        })?;
    Ok(decoded.into_owned())
}
