//! Core graph data structure.
//!
//! The FriendBook stores people in insertion order and friendships in
//! a growable dense adjacency matrix, with a name index for lookups.
//! It's the central data structure everything else works with.

use crate::error::GraphError;
use crate::matrix::AdjacencyMatrix;
use crate::person::PersonId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Matrix dimension for a freshly created book.
const DEFAULT_CAPACITY: usize = 1;

/// A name-indexed undirected graph of people and friendships.
///
/// People are only ever added, never removed, so ids are dense and
/// stable. The matrix dimension (capacity) doubles whenever the person
/// count reaches it, preserving all existing edges.
#[derive(Debug, Serialize, Deserialize)]
pub struct FriendBook {
    /// Names in insertion order; a person's id is their index here.
    names: Vec<String>,

    /// Maps names to ids.
    name_index: HashMap<String, PersonId>,

    /// Symmetric friendship matrix, sized to the current capacity.
    matrix: AdjacencyMatrix,
}

impl Default for FriendBook {
    fn default() -> Self {
        Self::new()
    }
}

impl FriendBook {
    /// Creates a new empty book with capacity 1.
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            name_index: HashMap::new(),
            matrix: AdjacencyMatrix::new(DEFAULT_CAPACITY),
        }
    }

    /// Adds a person under the next sequential id.
    ///
    /// Returns false without mutating anything if the name is already
    /// present. Growing the matrix keeps every existing friendship.
    pub fn add_person(&mut self, name: &str) -> bool {
        if self.name_index.contains_key(name) {
            return false;
        }
        if self.names.len() == self.matrix.dim() {
            let new_capacity = self.matrix.dim() * 2;
            tracing::debug!(capacity = new_capacity, "growing adjacency matrix");
            self.matrix.grow(new_capacity);
        }
        let id = PersonId(self.names.len());
        self.names.push(name.to_owned());
        self.name_index.insert(name.to_owned(), id);
        true
    }

    /// Whether the named person is in the book.
    pub fn has_person(&self, name: &str) -> bool {
        self.name_index.contains_key(name)
    }

    /// Snapshot of all names in id (insertion) order.
    pub fn people(&self) -> Vec<String> {
        self.names.clone()
    }

    /// Resolves a name to its id, if present.
    pub fn id_of(&self, name: &str) -> Option<PersonId> {
        self.name_index.get(name).copied()
    }

    /// Looks up the name behind an id.
    pub fn name_of(&self, id: PersonId) -> Option<&str> {
        self.names.get(id.0).map(String::as_str)
    }

    /// Number of people in the book.
    pub fn person_count(&self) -> usize {
        self.names.len()
    }

    /// Current matrix dimension. Always at least `person_count()`.
    pub fn capacity(&self) -> usize {
        self.matrix.dim()
    }

    fn resolve(&self, name: &str) -> Result<PersonId, GraphError> {
        self.id_of(name)
            .ok_or_else(|| GraphError::UnknownPerson(name.to_owned()))
    }

    /// Records a friendship between two existing, distinct people.
    ///
    /// Returns `Ok(true)` if the edge was newly set in both directions,
    /// `Ok(false)` if they were already friends.
    pub fn set_friend(&mut self, name1: &str, name2: &str) -> Result<bool, GraphError> {
        if name1 == name2 {
            return Err(GraphError::SelfFriendship(name1.to_owned()));
        }
        let id1 = self.resolve(name1)?;
        let id2 = self.resolve(name2)?;
        Ok(self.matrix.connect(id1.0, id2.0))
    }

    /// Removes a friendship between two existing, distinct people.
    ///
    /// Returns `Ok(true)` if the edge existed and was cleared in both
    /// directions, `Ok(false)` if they weren't friends.
    pub fn remove_friend(&mut self, name1: &str, name2: &str) -> Result<bool, GraphError> {
        if name1 == name2 {
            return Err(GraphError::SelfFriendship(name1.to_owned()));
        }
        let id1 = self.resolve(name1)?;
        let id2 = self.resolve(name2)?;
        Ok(self.matrix.disconnect(id1.0, id2.0))
    }

    /// Whether two people are friends.
    ///
    /// Asking about someone and themselves is `Ok(false)`, not an
    /// error; the diagonal is never set.
    pub fn is_friend(&self, name1: &str, name2: &str) -> Result<bool, GraphError> {
        let id1 = self.resolve(name1)?;
        let id2 = self.resolve(name2)?;
        Ok(self.matrix.get(id1.0, id2.0))
    }

    /// Number of friends the named person has.
    pub fn friend_count(&self, name: &str) -> Result<usize, GraphError> {
        let id = self.resolve(name)?;
        Ok((0..self.names.len())
            .filter(|&other| self.matrix.get(id.0, other))
            .count())
    }

    /// People who are friends with both names, in id order.
    ///
    /// Returns an empty list when either name is unknown. That matches
    /// the original contract, which reported nothing rather than an
    /// error here.
    pub fn mutual_friends(&self, name1: &str, name2: &str) -> Vec<String> {
        let (Some(id1), Some(id2)) = (self.id_of(name1), self.id_of(name2)) else {
            return Vec::new();
        };
        (0..self.names.len())
            .filter(|&other| self.matrix.get(id1.0, other) && self.matrix.get(id2.0, other))
            .map(|other| self.names[other].clone())
            .collect()
    }

    /// Number of friendship edges in the book.
    pub fn friendship_count(&self) -> usize {
        let n = self.names.len();
        let mut count = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                if self.matrix.get(i, j) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Adjacency check on raw ids, for the recommendation pass.
    pub(crate) fn adjacent(&self, a: PersonId, b: PersonId) -> bool {
        self.matrix.get(a.0, b.0)
    }
}

/// Book statistics for the status view.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookStats {
    pub people: usize,
    pub friendships: usize,
    pub capacity: usize,
}

impl FriendBook {
    /// Returns book statistics.
    pub fn stats(&self) -> BookStats {
        BookStats {
            people: self.person_count(),
            friendships: self.friendship_count(),
            capacity: self.capacity(),
        }
    }
}
