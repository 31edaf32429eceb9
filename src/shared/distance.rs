use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a raw length of zero reaches a [`Distance`] constructor.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Distance must be positive, got {0}")]
pub struct InvalidDistance(pub u32);

/// Length of a piece of track between two stations.
///
/// A `Distance` is always strictly positive, so a segment built from one can
/// never have zero length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Distance(u32);

impl TryFrom<u32> for Distance {
    type Error = InvalidDistance;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidDistance(value))
    }
}

impl From<Distance> for u32 {
    fn from(value: Distance) -> Self {
        value.0
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Distance {
    pub const fn new(value: u32) -> Option<Self> {
        if value == 0 { None } else { Some(Self(value)) }
    }

    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// Joins two lengths, or `None` if the sum does not fit.
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Returns the remaining length after carving `rhs` off `self`,
    /// or `None` if nothing positive would be left.
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        if rhs.0 >= self.0 {
            None
        } else {
            Some(Self(self.0 - rhs.0))
        }
    }
}

#[test]
fn distance_rejects_zero() {
    assert!(Distance::new(0).is_none());
    assert_eq!(Distance::try_from(0), Err(InvalidDistance(0)));
}

#[test]
fn distance_checked_sub() {
    let long = Distance::new(5).unwrap();
    let short = Distance::new(2).unwrap();
    assert_eq!(long.checked_sub(short), Distance::new(3));
    assert_eq!(long.checked_sub(long), None);
    assert_eq!(short.checked_sub(long), None);
}

#[test]
fn distance_checked_add() {
    let a = Distance::new(2).unwrap();
    let b = Distance::new(3).unwrap();
    assert_eq!(a.checked_add(b), Distance::new(5));

    let half = Distance::new(1 << 31).unwrap();
    assert_eq!(half.checked_add(half), None);
    assert_eq!(Distance::new(u32::MAX).unwrap().checked_add(a), None);
}
