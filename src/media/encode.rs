use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// MIME prefix of the canonical persisted photo form.
const DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Encode picked-image bytes as the transferable data-URI form.
pub fn to_jpeg_data_uri(bytes: &[u8]) -> String {
    format!("{}{}", DATA_URI_PREFIX, STANDARD.encode(bytes))
}
