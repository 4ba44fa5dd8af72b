use tracing::debug;

/// Decode uploaded log bytes as UTF-8, dropping invalid sequences.
///
/// Invalid bytes are removed rather than replaced, so downstream line and
/// character arithmetic only ever sees text that was actually in the upload.
pub fn decode_log_bytes(data: &[u8]) -> String {
    let (decoded, _, had_errors) = encoding_rs::UTF_8.decode(data);
    if !had_errors {
        return decoded.into_owned();
    }
    debug!("Dropping invalid UTF-8 sequences from {} byte upload", data.len());
    decoded.replace('\u{FFFD}', "")
}
