use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::MAX_BLOCKS;

/// Hash function used by the visited set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashKind {
    /// `h = h * 33 + byte`, seeded with 5831
    Djb,
    Fnv,
}

impl Default for HashKind {
    fn default() -> Self {
        HashKind::Djb
    }
}

impl Display for HashKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            HashKind::Djb => write!(f, "djb"),
            HashKind::Fnv => write!(f, "fnv"),
        }
    }
}

impl FromStr for HashKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "djb" => Ok(HashKind::Djb),
            "fnv" => Ok(HashKind::Fnv),
            _ => Err(format!("Unknown hash: {} (expected djb or fnv)", s)),
        }
    }
}

/// Limits on the input level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub max_rows: u8,
    pub max_cols: u8,
    pub max_blocks: usize,
    /// Declared row width, taken from the first row when `None`.
    pub width: Option<u8>,
}

impl Default for Bounds {
    fn default() -> Self {
        // puzzle files were designed for coordinates that fit in 4 bits
        Bounds {
            max_rows: 16,
            max_cols: 16,
            max_blocks: MAX_BLOCKS,
            width: None,
        }
    }
}

/// Initial bucket count of the visited set, must be a power of two.
pub const VISITED_BUCKETS: usize = 1 << 16;

/// The search looks at the clock once per this many expanded states.
pub const PROGRESS_BATCH: usize = 10_000;
