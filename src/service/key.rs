//! # Secret Ids
//!
//! Content-addressed ids: the id of a secret is the MD5 digest of its plaintext,
//! rendered as 32 lowercase hex characters. Identical plaintexts always map to
//! the same id, across runs and across implementations.

/// Derive the id for a plaintext
pub fn derive_key(plaintext: &str) -> String {
    format!("{:x}", md5::compute(plaintext.as_bytes()))
}

/// Strip control characters from an id taken from a request path
///
/// No other decoding is applied; anything that is not a stored id simply
/// fails the lookup.
pub fn sanitize_key(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_control()).collect()
}
