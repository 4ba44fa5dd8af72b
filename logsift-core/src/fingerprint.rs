use sha2::{Digest, Sha256};

const FINGERPRINT_LEN: usize = 12;

/// Deterministic short digest of the input text, used as the analysis id.
/// Depends on the text alone, not on mode or type hint.
pub fn fingerprint(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    let mut hex = String::with_capacity(FINGERPRINT_LEN);
    for byte in digest.iter().take(FINGERPRINT_LEN / 2) {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}
