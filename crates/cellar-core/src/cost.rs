//! Insertion cost of a candidate bottle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How disruptive it would be to put a bottle into a cellar.
///
/// The cost is advisory: [`Cellar::add`](crate::Cellar::add) never looks at
/// it. Callers that want to refuse incompatible bottles check
/// [`InsertCost::is_rejection`] themselves, or use
/// [`Cellar::add_checked`](crate::Cellar::add_checked).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsertCost {
    /// The cellar is empty, so there is nothing to compare against.
    Empty,
    /// The same beer is already cellared in a different size.
    Incompatible,
    /// Days between the candidate and its nearest neighbour.
    Cost(u64),
}

impl InsertCost {
    /// Legacy encoding of [`InsertCost::Empty`].
    pub const EMPTY_SENTINEL: i32 = i16::MAX as i32;

    /// Legacy encoding of [`InsertCost::Incompatible`].
    pub const INCOMPATIBLE_SENTINEL: i32 = -1;

    /// Whether the bottle should be refused.
    #[must_use]
    pub const fn is_rejection(self) -> bool {
        matches!(self, Self::Incompatible)
    }

    /// The nominal cost in days, if there is one.
    #[must_use]
    pub const fn days(self) -> Option<u64> {
        match self {
            Self::Cost(days) => Some(days),
            Self::Empty | Self::Incompatible => None,
        }
    }

    /// Encode as a single integer: `32767` for an empty cellar, a negative
    /// value for an incompatible size, otherwise the day count (saturating).
    #[must_use]
    pub fn as_sentinel(self) -> i32 {
        match self {
            Self::Empty => Self::EMPTY_SENTINEL,
            Self::Incompatible => Self::INCOMPATIBLE_SENTINEL,
            Self::Cost(days) => i32::try_from(days).unwrap_or(i32::MAX),
        }
    }
}

impl fmt::Display for InsertCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty cellar"),
            Self::Incompatible => write!(f, "incompatible size"),
            Self::Cost(1) => write!(f, "1 day"),
            Self::Cost(days) => write!(f, "{days} days"),
        }
    }
}
