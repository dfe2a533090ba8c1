//! BLAKE3 content fingerprinting with streaming reads.
//!
//! A [`Fingerprint`] stands in for a file's full byte content: two files
//! with equal fingerprints are treated as identical. Hash collisions are an
//! accepted limitation of that model.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::HashError;

/// Read buffer size for streaming file content through the digest.
const READ_BUF_SIZE: usize = 64 * 1024;

/// Fixed-length content digest of a file's full byte stream.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; Self::LEN]);

impl Fingerprint {
    /// Digest length in bytes (BLAKE3).
    pub const LEN: usize = 32;

    /// Build a fingerprint from raw digest bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Lowercase hex representation, used as the persisted catalogue key
    /// and in the duplicate report.
    #[must_use]
    pub fn to_hex(&self) -> String {
        use std::fmt::Write as _;
        let mut hex = String::with_capacity(2 * Self::LEN);
        for byte in self.0 {
            let _ = write!(hex, "{byte:02x}");
        }
        hex
    }

    /// Parse a fingerprint back from its hex form.
    ///
    /// Returns `None` if the input has the wrong length or contains
    /// non-hex characters.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != 2 * Self::LEN {
            return None;
        }
        let mut bytes = [0u8; Self::LEN];
        for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
            let pair = std::str::from_utf8(chunk).ok()?;
            bytes[i] = u8::from_str_radix(pair, 16).ok()?;
        }
        Some(Self(bytes))
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self.to_hex())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Streaming file hasher.
///
/// Reads the entire file through a fixed-size buffer before returning;
/// there is no partial-read shortcut, so equal fingerprints always mean
/// the full content was digested.
#[derive(Debug, Default)]
pub struct Hasher;

impl Hasher {
    /// Create a new hasher.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Compute the fingerprint of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] if the file cannot be opened or read. The
    /// error is surfaced to the caller without retry.
    pub fn fingerprint_file(&self, path: &Path) -> Result<Fingerprint, HashError> {
        let mut file = File::open(path).map_err(|e| HashError::from_io(path, e))?;
        let mut digest = blake3::Hasher::new();
        let mut buf = [0u8; READ_BUF_SIZE];
        loop {
            let n = file
                .read(&mut buf)
                .map_err(|e| HashError::from_io(path, e))?;
            if n == 0 {
                break;
            }
            digest.update(&buf[..n]);
        }
        Ok(Fingerprint(*digest.finalize().as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_fingerprint_determinism() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.bin");
        fs::write(&path, b"some file content").unwrap();

        let hasher = Hasher::new();
        let a = hasher.fingerprint_file(&path).unwrap();
        let b = hasher.fingerprint_file(&path).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_content_distinct_fingerprint() {
        let dir = TempDir::new().unwrap();
        let one = dir.path().join("one");
        let two = dir.path().join("two");
        fs::write(&one, b"alpha").unwrap();
        fs::write(&two, b"beta").unwrap();

        let hasher = Hasher::new();
        assert_ne!(
            hasher.fingerprint_file(&one).unwrap(),
            hasher.fingerprint_file(&two).unwrap()
        );
    }

    #[test]
    fn test_empty_file_known_digest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty");
        fs::write(&path, b"").unwrap();

        let fp = Hasher::new().fingerprint_file(&path).unwrap();
        // BLAKE3 of the empty input.
        assert_eq!(
            fp.to_hex(),
            "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"
        );
    }

    #[test]
    fn test_hex_round_trip() {
        let fp = Fingerprint::from_bytes([0xab; 32]);
        let hex = fp.to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(Fingerprint::from_hex(&hex), Some(fp));
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(Fingerprint::from_hex("abc").is_none());
        assert!(Fingerprint::from_hex(&"g".repeat(64)).is_none());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = Hasher::new()
            .fingerprint_file(&dir.path().join("missing"))
            .unwrap_err();
        assert!(matches!(err, HashError::NotFound(_)));
    }
}
