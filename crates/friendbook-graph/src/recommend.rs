//! Friend recommendations.
//!
//! Scores every non-friend of the target by how many friends they
//! share, then reports them bucketed by that count, highest bucket
//! first. The pass is deliberately cubic; books are small and the
//! emitted order is part of the contract.

use crate::graph::FriendBook;
use crate::person::PersonId;
use serde::{Deserialize, Serialize};

/// One recommendation row: someone the target is not yet friends with,
/// plus the number of friends they share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub mutual_count: usize,
}

impl FriendBook {
    /// Counts the people who are friends with both ids.
    fn mutual_count(&self, a: PersonId, b: PersonId) -> usize {
        (0..self.person_count())
            .map(PersonId)
            .filter(|&other| self.adjacent(a, other) && self.adjacent(b, other))
            .count()
    }

    /// Recommends new friends for the named person.
    ///
    /// Candidates are everyone who is not the target and not already a
    /// friend, grouped by descending mutual-friend count from `n - 2`
    /// (the most anyone can share) down to 1. Candidates with no
    /// mutual friends are not reported, and within a bucket candidates
    /// appear in id order. Unknown names produce an empty list.
    pub fn friend_recommendations(&self, name: &str) -> Vec<Recommendation> {
        let Some(target) = self.id_of(name) else {
            return Vec::new();
        };
        let n = self.person_count();
        let mut recs = Vec::new();
        // With fewer than 3 people nobody can have a mutual friend.
        if n < 3 {
            return recs;
        }
        for bucket in (1..=n - 2).rev() {
            for candidate in (0..n).map(PersonId) {
                if candidate == target || self.adjacent(target, candidate) {
                    continue;
                }
                if self.mutual_count(target, candidate) == bucket {
                    recs.push(Recommendation {
                        name: self
                            .name_of(candidate)
                            .unwrap_or_default()
                            .to_owned(),
                        mutual_count: bucket,
                    });
                }
            }
        }
        recs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_with(names: &[&str]) -> FriendBook {
        let mut book = FriendBook::new();
        for name in names {
            assert!(book.add_person(name));
        }
        book
    }

    #[test]
    fn test_unknown_name_is_empty() {
        let book = book_with(&["Alice", "Bob", "Carol"]);
        assert!(book.friend_recommendations("Dave").is_empty());
    }

    #[test]
    fn test_tiny_books_have_no_recommendations() {
        let mut book = book_with(&["Alice", "Bob"]);
        book.set_friend("Alice", "Bob").unwrap();
        assert!(book.friend_recommendations("Alice").is_empty());
        assert!(book.friend_recommendations("Bob").is_empty());
    }

    #[test]
    fn test_friend_of_friend() {
        // A–B, A–C, B–D. D shares one friend with A (namely B).
        let mut book = book_with(&["A", "B", "C", "D"]);
        book.set_friend("A", "B").unwrap();
        book.set_friend("A", "C").unwrap();
        book.set_friend("B", "D").unwrap();

        let recs = book.friend_recommendations("A");
        assert_eq!(
            recs,
            vec![Recommendation {
                name: "D".to_owned(),
                mutual_count: 1,
            }]
        );
    }

    #[test]
    fn test_existing_friends_are_not_candidates() {
        let mut book = book_with(&["A", "B", "C"]);
        book.set_friend("A", "B").unwrap();
        book.set_friend("A", "C").unwrap();
        book.set_friend("B", "C").unwrap();
        // Everyone already knows everyone.
        assert!(book.friend_recommendations("A").is_empty());
    }

    #[test]
    fn test_zero_mutual_candidates_are_skipped() {
        // E is a stranger with no shared friends; they never appear.
        let mut book = book_with(&["A", "B", "C", "D", "E"]);
        book.set_friend("A", "B").unwrap();
        book.set_friend("B", "C").unwrap();

        let recs = book.friend_recommendations("A");
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].name, "C");
        assert_eq!(recs[0].mutual_count, 1);
    }

    #[test]
    fn test_buckets_descend_and_ids_order_within() {
        // Target T is friends with F1, F2, F3.
        // X (added after Y) shares all three, Y shares one.
        // W shares two but has the lowest id among candidates.
        let mut book = book_with(&["T", "W", "Y", "X", "F1", "F2", "F3"]);
        for f in ["F1", "F2", "F3"] {
            book.set_friend("T", f).unwrap();
        }
        for f in ["F1", "F2", "F3"] {
            book.set_friend("X", f).unwrap();
        }
        book.set_friend("W", "F1").unwrap();
        book.set_friend("W", "F2").unwrap();
        book.set_friend("Y", "F3").unwrap();

        let recs = book.friend_recommendations("T");
        let rows: Vec<(&str, usize)> = recs
            .iter()
            .map(|r| (r.name.as_str(), r.mutual_count))
            .collect();
        // Highest bucket first, regardless of insertion order.
        assert_eq!(rows, vec![("X", 3), ("W", 2), ("Y", 1)]);
    }

    #[test]
    fn test_id_order_within_a_bucket() {
        // Two candidates with the same count report in insertion order.
        let mut book = book_with(&["T", "Zoe", "Amy", "F"]);
        book.set_friend("T", "F").unwrap();
        book.set_friend("Zoe", "F").unwrap();
        book.set_friend("Amy", "F").unwrap();

        let recs = book.friend_recommendations("T");
        let names: Vec<&str> = recs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Zoe", "Amy"]);
    }
}
