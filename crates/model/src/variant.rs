use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ReportError;

/// One of the parallel workout plans ("days") of a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub struct Variant(u8);

impl Variant {
    pub const COUNT: usize = 6;

    pub fn new(index: i64) -> Result<Variant, ReportError> {
        if (1..=Self::COUNT as i64).contains(&index) {
            Ok(Variant(index as u8))
        } else {
            Err(ReportError::InvalidVariant(index))
        }
    }

    pub fn all() -> impl Iterator<Item = Variant> {
        (1..=Self::COUNT as u8).map(Variant)
    }

    /// 1-based index as shown to the user.
    pub fn index(&self) -> u8 {
        self.0
    }

    /// 0-based column of the variant in a report row.
    pub fn slot(&self) -> usize {
        self.0 as usize - 1
    }
}

impl TryFrom<i64> for Variant {
    type Error = ReportError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Variant::new(value)
    }
}

impl From<Variant> for i64 {
    fn from(variant: Variant) -> Self {
        variant.0 as i64
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
