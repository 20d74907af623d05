use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};
use thiserror::Error;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

#[derive(Debug, Error)]
#[error("failed to hash dependency key: {0}")]
pub struct HashError(#[from] fmt::Error);

/// Streaming 64-bit FNV-1a hasher.
///
/// Implements [`fmt::Write`] so keys can be formatted straight into the hash
/// state without an intermediate `String`.
#[derive(Debug, Clone, Copy)]
pub struct Fnv1a64 {
    state: u64,
}

impl Fnv1a64 {
    pub fn new() -> Self {
        Self {
            state: FNV_OFFSET_BASIS,
        }
    }

    pub fn update(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= u64::from(b);
            self.state = self.state.wrapping_mul(FNV_PRIME);
        }
    }

    pub fn finish(&self) -> u64 {
        self.state
    }
}

impl Default for Fnv1a64 {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for Fnv1a64 {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.update(s.as_bytes());
        Ok(())
    }
}

/// Identity of a dependency inside the dependency index: FNV-1a-64 of
/// `"{group_id}:{artifact_id}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyKey(u64);

impl DependencyKey {
    pub fn new(group_id: &str, artifact_id: &str) -> Result<Self, HashError> {
        let mut hasher = Fnv1a64::new();
        write!(hasher, "{group_id}:{artifact_id}")?;
        Ok(Self(hasher.finish()))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for DependencyKey {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for DependencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
