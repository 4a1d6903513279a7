//! The fixed key space: one two-digit lowercase hex key per byte value.

use std::fmt;
use std::str::FromStr;

/// Number of keys in the key space (one per byte value).
pub const KEY_COUNT: usize = 256;

/// Identifies one test-vector resource. Displays as two lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(u8);

impl Key {
    pub const fn new(value: u8) -> Self {
        Key(value)
    }

    /// The byte value this key stands for.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Local artifact name, e.g. `0a.json`.
    pub fn file_name(self) -> String {
        format!("{}.json", self)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid key {0:?}: expected two lowercase hex digits")]
pub struct ParseKeyError(String);

impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let well_formed = s.len() == 2
            && s.bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if !well_formed {
            return Err(ParseKeyError(s.to_string()));
        }
        u8::from_str_radix(s, 16)
            .map(Key)
            .map_err(|_| ParseKeyError(s.to_string()))
    }
}

/// All keys `00..=ff` in ascending order. Each call starts a fresh iterator.
pub fn key_space() -> impl Iterator<Item = Key> + Clone {
    (0..=u8::MAX).map(Key)
}
