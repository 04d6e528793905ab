//! `major.minor.patch` schema versions

use crate::error::{DetectError, Result};
use std::fmt;
use std::str::FromStr;

/// A devfile schema version; missing minor or patch parts read as 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SchemaVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl SchemaVersion {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl FromStr for SchemaVersion {
    type Err = DetectError;

    fn from_str(raw: &str) -> Result<Self> {
        let invalid = || DetectError::Validation(format!("invalid schema version '{}'", raw));

        let trimmed = raw.trim();
        let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
        if trimmed.is_empty() {
            return Err(invalid());
        }

        let mut parts = [0u64; 3];
        let mut count = 0;
        for piece in trimmed.split('.') {
            if count == 3 || piece.is_empty() {
                return Err(invalid());
            }
            parts[count] = piece.parse().map_err(|_| invalid())?;
            count += 1;
        }

        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
