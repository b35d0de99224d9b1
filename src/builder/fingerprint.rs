use sha2::{Digest, Sha256};

use crate::types::SourceFingerprint;

/// sha256(source_text)
pub fn fingerprint(text: &str) -> SourceFingerprint {
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&Sha256::digest(text.as_bytes()));
    SourceFingerprint(hash)
}

/// Return the first `n` hex characters of a fingerprint, for log lines.
pub fn short_hex(fp: &SourceFingerprint, n: usize) -> String {
    let mut s = hex::encode(fp.0);
    s.truncate(n.min(64));
    s
}
