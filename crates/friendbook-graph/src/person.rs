//! Person identifiers.

use serde::{Deserialize, Serialize};

/// Stable handle for a person in a [`FriendBook`](crate::FriendBook).
///
/// Ids are assigned in insertion order starting at 0 and are never
/// reused. A person's id doubles as their index into the name list and
/// the adjacency matrix, so it stays valid for the life of the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub(crate) usize);

impl PersonId {
    /// The raw 0-based index behind this id.
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
