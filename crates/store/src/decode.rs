// ABOUTME: Best-effort UTF-8 decoding of uploaded bytes.
// ABOUTME: Invalid byte sequences are dropped rather than replaced.

/// Decodes bytes as UTF-8, skipping any sequence that is not valid UTF-8.
pub fn decode_text(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}
