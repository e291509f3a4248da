use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of a byte slice, returning a lowercase hex string.
pub fn sha256_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Compute the SHA-1 hash of a byte slice, returning a lowercase hex string.
pub fn sha1_bytes(data: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Compute the MD5 hash of a byte slice, returning a lowercase hex string.
pub fn md5_bytes(data: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// The checksum sidecars Maven repositories carry next to each file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checksums {
    pub md5: String,
    pub sha1: String,
    pub sha256: String,
}

impl Checksums {
    pub fn of(data: &[u8]) -> Self {
        Self {
            md5: md5_bytes(data),
            sha1: sha1_bytes(data),
            sha256: sha256_bytes(data),
        }
    }

    /// `(extension, hex digest)` pairs in the order sidecars are written.
    pub fn sidecars(&self) -> [(&'static str, &str); 3] {
        [
            ("md5", self.md5.as_str()),
            ("sha1", self.sha1.as_str()),
            ("sha256", self.sha256.as_str()),
        ]
    }
}
