//! Decoding and parsing of nameID 5 version strings.
//!
//! The Macintosh and Windows records in the naming table are independently
//! encoded: Macintosh entries are single-byte text, Windows entries are
//! big-endian UTF-16. A decoder that assumes one encoding for both silently
//! corrupts the other, so dispatch happens on the record's platform ID.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Version strings must carry this literal, case-sensitive prefix.
pub const VERSION_PREFIX: &str = "Version ";

/// One digit, a literal dot, exactly three digits, then nothing more
/// numeric. Exactly three: leading zeros are significant, so "3.1" is not
/// an acceptable spelling of "3.001".
static VERSION_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]\.[0-9]{3})(?:[^0-9]|$)").unwrap());

/// Platform convention of a naming-table record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Macintosh,
    Windows,
    Unknown(u16),
}

impl Platform {
    /// Map an OpenType platform ID to its decoding convention.
    pub fn from_id(id: u16) -> Self {
        match id {
            1 => Platform::Macintosh,
            3 => Platform::Windows,
            other => Platform::Unknown(other),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Macintosh => write!(f, "Macintosh"),
            Platform::Windows => write!(f, "Windows"),
            Platform::Unknown(id) => write!(f, "platform {id}"),
        }
    }
}

/// Ways a version record can fail before any value comparison happens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    /// The decoded string does not start with `"Version "`.
    #[error("version string does not start with '{VERSION_PREFIX}': got '{found}'")]
    MalformedPrefix { found: String },

    /// The prefix is present but no `D.DDD` token follows it.
    #[error("no D.DDD version token found in '{decoded}'")]
    TokenNotFound { decoded: String },

    /// The naming table has no nameID 5 record for this platform.
    #[error("no version record for the {platform} platform")]
    RecordMissing { platform: Platform },
}

/// Decode a raw naming-table entry according to its platform convention.
pub fn decode_name_string(raw: &[u8], platform: Platform) -> String {
    match platform {
        Platform::Macintosh => match std::str::from_utf8(raw) {
            Ok(s) => s.to_string(),
            // MacRoman agrees with ASCII in the range version strings use;
            // map the remaining bytes one-to-one rather than dropping them.
            Err(_) => raw.iter().map(|&b| b as char).collect(),
        },
        Platform::Windows => {
            let units: Vec<u16> = raw
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16_lossy(&units)
        }
        Platform::Unknown(_) => String::from_utf8_lossy(raw).into_owned(),
    }
}

/// Decode a raw version record and extract its `D.DDD` token.
pub fn extract_version_token(raw: &[u8], platform: Platform) -> Result<String, VersionError> {
    let decoded = decode_name_string(raw, platform);
    let Some(rest) = decoded.strip_prefix(VERSION_PREFIX) else {
        return Err(VersionError::MalformedPrefix { found: decoded });
    };
    match VERSION_TOKEN.captures(rest) {
        Some(caps) => Ok(caps[1].to_string()),
        None => Err(VersionError::TokenNotFound { decoded }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16_be(s: &str) -> Vec<u8> {
        s.encode_utf16().flat_map(|u| u.to_be_bytes()).collect()
    }

    #[test]
    fn test_platform_from_id() {
        assert_eq!(Platform::from_id(1), Platform::Macintosh);
        assert_eq!(Platform::from_id(3), Platform::Windows);
        assert_eq!(Platform::from_id(0), Platform::Unknown(0));
    }

    #[test]
    fn test_decode_macintosh() {
        assert_eq!(
            decode_name_string(b"Version 3.001", Platform::Macintosh),
            "Version 3.001"
        );
    }

    #[test]
    fn test_decode_macintosh_high_bytes() {
        // 0xA9 is copyright in MacRoman's Latin-1-compatible range.
        assert_eq!(decode_name_string(&[0xA9, b'X'], Platform::Macintosh), "\u{A9}X");
    }

    #[test]
    fn test_decode_windows() {
        assert_eq!(
            decode_name_string(&utf16_be("Version 3.001"), Platform::Windows),
            "Version 3.001"
        );
    }

    #[test]
    fn test_extract_token_macintosh() {
        let token = extract_version_token(b"Version 3.001", Platform::Macintosh).unwrap();
        assert_eq!(token, "3.001");
    }

    #[test]
    fn test_extract_token_windows() {
        let raw = utf16_be("Version 3.001");
        let token = extract_version_token(&raw, Platform::Windows).unwrap();
        assert_eq!(token, "3.001");
    }

    #[test]
    fn test_extract_token_with_suffix() {
        let token =
            extract_version_token(b"Version 3.001;hotfix build", Platform::Macintosh).unwrap();
        assert_eq!(token, "3.001");
    }

    #[test]
    fn test_missing_prefix() {
        let err = extract_version_token(b"3.001", Platform::Macintosh).unwrap_err();
        assert_eq!(err, VersionError::MalformedPrefix { found: "3.001".into() });
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        let err = extract_version_token(b"version 3.001", Platform::Macintosh).unwrap_err();
        assert!(matches!(err, VersionError::MalformedPrefix { .. }));
    }

    #[test]
    fn test_short_token_rejected() {
        let err = extract_version_token(b"Version 3.1", Platform::Macintosh).unwrap_err();
        assert_eq!(
            err,
            VersionError::TokenNotFound { decoded: "Version 3.1".into() }
        );
    }

    #[test]
    fn test_long_token_rejected() {
        // Four digits after the dot is not a D.DDD token.
        let err = extract_version_token(b"Version 3.0011", Platform::Macintosh).unwrap_err();
        assert!(matches!(err, VersionError::TokenNotFound { .. }));
    }

    #[test]
    fn test_windows_bytes_read_as_macintosh_fail() {
        // The encoding split is mandatory: UTF-16 bytes decoded as
        // single-byte text interleave NULs and lose the prefix.
        let raw = utf16_be("Version 3.001");
        assert!(extract_version_token(&raw, Platform::Macintosh).is_err());
    }
}
