//! Per-request signature generation.

use sha1::{Digest, Sha1};

/// Compute the authentication signature for a signed parameter set.
///
/// Parameters whose value is `None` or the empty string are discarded.
/// The remaining pairs are sorted lexicographically by key, joined as
/// `key=value` pairs with `&`, suffixed with the API secret, and the
/// SHA-1 digest of that byte string is returned as lowercase hex.
///
/// The function is pure: identical parameter sets (after filtering)
/// always produce identical signatures, and the secret never appears
/// in the output.
///
/// Values are joined without escaping, matching what the remote store
/// computes on its side. A value containing `&` or `=` therefore makes
/// the joined string ambiguous; the digest stays deterministic, but
/// distinct parameter sets can collide. Callers control every signed
/// value here (folder, preset, id, timestamp, context), so the
/// ambiguity is accepted rather than hardened away.
///
/// # Examples
///
/// ```
/// use caravel_client::generate_signature;
///
/// let first = generate_signature(
///     &[("folder", Some("pets")), ("public_id", Some("42"))],
///     "shh",
/// );
/// let second = generate_signature(
///     &[("public_id", Some("42")), ("folder", Some("pets"))],
///     "shh",
/// );
///
/// // Key order does not matter; the joined form is sorted.
/// assert_eq!(first, second);
/// assert_eq!(first.len(), 40);
/// ```
pub fn generate_signature(params: &[(&str, Option<&str>)], secret: &str) -> String {
    let mut pairs: Vec<(&str, &str)> = params
        .iter()
        .filter_map(|(key, value)| match value {
            Some(value) if !value.is_empty() => Some((*key, *value)),
            _ => None,
        })
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));

    let joined = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha1::new();
    hasher.update(joined.as_bytes());
    hasher.update(secret.as_bytes());
    format!("{:x}", hasher.finalize())
}
