//! SHA-1 hashing and fingerprint formatting
//!
//! All hashing input is encoded as UTF-8 on every platform so a fingerprint
//! never depends on the host's locale.

use std::fmt;

use serde::Serialize;
use sha1::{Digest, Sha1};

use crate::constants::format::{DELIMITER, GROUP_SIZE, PAIR_SEPARATOR};

/// A 20-byte SHA-1 digest
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FingerprintHash([u8; 20]);

impl FingerprintHash {
    /// Hash the UTF-8 bytes of `input`
    pub fn of(input: &str) -> Self {
        let digest = Sha1::digest(input.as_bytes());
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// 40 uppercase hex characters, no separators
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Uppercase hex pairs joined by `-`, e.g. `DA-39-A3-...`
    pub fn to_delimited_hex(&self) -> String {
        let separator = PAIR_SEPARATOR.to_string();
        self.0
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(separator.as_str())
    }
}

impl fmt::Display for FingerprintHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for FingerprintHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FingerprintHash({})", self.to_hex())
    }
}

/// SHA-1 of `input` as 40 uppercase hex characters
pub fn sha1_hex(input: &str) -> String {
    FingerprintHash::of(input).to_hex()
}

/// Regroup `hex` with `delimiter` every `group_size` characters.
///
/// Existing delimiter characters (and the `-` pair separator) are stripped
/// first, so beautifying an already beautified string is a no-op.
/// A `group_size` of zero only strips.
pub fn beautify(hex: &str, group_size: usize, delimiter: &str) -> String {
    let stripped: Vec<char> = hex
        .chars()
        .filter(|c| *c != PAIR_SEPARATOR && !delimiter.contains(*c))
        .collect();

    if group_size == 0 {
        return stripped.into_iter().collect();
    }

    let groups = stripped.len() / group_size;
    let mut out = String::with_capacity(stripped.len() + groups * delimiter.len());
    for (idx, chr) in stripped.into_iter().enumerate() {
        if idx != 0 && idx % group_size == 0 {
            out.push_str(delimiter);
        }
        out.push(chr);
    }
    out
}

/// Mix `salt` into a prior hash or fingerprint string.
///
/// `saltify(compute(all), salt)` equals `compute_with_salt(salt)`.
pub fn saltify(prior: &str, salt: &str) -> FormattedFingerprint {
    let mut input = String::with_capacity(prior.len() + salt.len());
    input.push_str(prior);
    input.push_str(salt);
    FormattedFingerprint::from_hash(&FingerprintHash::of(&input))
}

/// A digest rendered in the canonical grouped form, e.g. `DA39A-3EE5E-...`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FormattedFingerprint(String);

impl FormattedFingerprint {
    pub fn from_hash(hash: &FingerprintHash) -> Self {
        Self(beautify(&hash.to_hex(), GROUP_SIZE, DELIMITER))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Display form with a different grouping. Does not change the value
    /// used for salting.
    pub fn regroup(&self, group_size: usize, delimiter: &str) -> String {
        beautify(&self.0, group_size, delimiter)
    }
}

impl fmt::Display for FormattedFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FormattedFingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for FormattedFingerprint {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FormattedFingerprint {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_SHA1: &str = "DA39A3EE5E6B4B0D3255BFEF95601890AFD80709";

    #[test]
    fn test_sha1_of_empty_string() {
        assert_eq!(sha1_hex(""), EMPTY_SHA1);
    }

    #[test]
    fn test_sha1_known_vector() {
        assert_eq!(sha1_hex("abc"), "A9993E364706816ABA3E25717850C26C9CD0D89D");
    }

    #[test]
    fn test_hashing_uses_utf8() {
        // Latin-1 would give 1599E9FA...
        assert_eq!(sha1_hex("é"), "BF15BE717AC1B080B4F1C456692825891FF5073D");
    }

    #[test]
    fn test_delimited_hex() {
        let hash = FingerprintHash::of("");
        assert_eq!(
            hash.to_delimited_hex(),
            "DA-39-A3-EE-5E-6B-4B-0D-32-55-BF-EF-95-60-18-90-AF-D8-07-09"
        );
        assert_eq!(hash.as_bytes()[0], 0xDA);
        assert_eq!(hash.to_string(), EMPTY_SHA1);
    }

    #[test]
    fn test_beautify_examples() {
        assert_eq!(beautify("ABCDEFGHIJ", 5, "-"), "ABCDE-FGHIJ");

        let grouped = beautify("ABCDEFGHIJKLMNO", 5, "-");
        assert_eq!(grouped, "ABCDE-FGHIJ-KLMNO");
        assert_eq!(grouped.len(), 17);

        assert_eq!(beautify("ABCDEFG", 5, "-"), "ABCDE-FG");
        assert_eq!(beautify("", 5, "-"), "");
    }

    #[test]
    fn test_beautify_digest_length() {
        let out = beautify(EMPTY_SHA1, 5, "-");
        assert_eq!(out, "DA39A-3EE5E-6B4B0-D3255-BFEF9-56018-90AFD-80709");
        assert_eq!(out.len(), 47);
        assert_eq!(out.matches('-').count(), 7);
    }

    #[test]
    fn test_beautify_is_idempotent() {
        for input in ["ABCDEFGHIJKLMNO", EMPTY_SHA1, "A", ""] {
            let once = beautify(input, 5, "-");
            assert_eq!(beautify(&once, 5, "-"), once);
        }
    }

    #[test]
    fn test_beautify_strips_pair_separators() {
        let hash = FingerprintHash::of("");
        assert_eq!(
            beautify(&hash.to_delimited_hex(), 5, "-"),
            beautify(&hash.to_hex(), 5, "-")
        );
    }

    #[test]
    fn test_beautify_custom_grouping() {
        assert_eq!(beautify("ABCDE-FGHIJ", 4, ":"), "ABCD:EFGH:IJ");
        assert_eq!(beautify("ABCD:EFGH:IJ", 4, ":"), "ABCD:EFGH:IJ");
        assert_eq!(beautify("ABCDE-FGHIJ", 0, "-"), "ABCDEFGHIJ");
    }

    #[test]
    fn test_saltify() {
        let base = FormattedFingerprint::from_hash(&FingerprintHash::of("abc"));
        let salted = saltify(base.as_str(), "pepper");
        assert_eq!(salted, "56CAB-FCF85-79751-CB807-1FBC0-9FC96-7D1A5-1A0E5");
        assert_ne!(salted, base);
    }

    #[test]
    fn test_saltify_is_salt_sensitive() {
        let base = "DA39A-3EE5E-6B4B0-D3255-BFEF9-56018-90AFD-80709";
        assert_eq!(saltify(base, "3t67gh#$z56A"), saltify(base, "3t67gh#$z56A"));
        assert_ne!(saltify(base, "3t67gh#$z56A"), saltify(base, "1t67gh#$z56A"));
    }

    #[test]
    fn test_formatted_fingerprint_regroup() {
        let fp = FormattedFingerprint::from_hash(&FingerprintHash::of(""));
        assert_eq!(fp.regroup(0, ""), EMPTY_SHA1);
        assert_eq!(fp.regroup(5, "-"), fp.as_str());
        assert_eq!(fp.clone().into_string().len(), 47);
    }
}
