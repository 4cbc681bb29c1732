//! FriendBook Graph - friendship tracking
//!
//! This crate manages an undirected graph of people and symmetric
//! friendship edges. Names resolve to stable insertion-ordered ids,
//! and edges live in a dense adjacency matrix that doubles its
//! dimension whenever the book fills up.
//!
//! # Architecture
//!
//! The book keeps three structures in lockstep:
//! - A name list in insertion order (a person's id is their index)
//! - A name → id index for lookups
//! - A flat boolean matrix holding the edges
//!
//! # Example
//!
//! ```
//! use friendbook_graph::FriendBook;
//!
//! let mut book = FriendBook::new();
//! book.add_person("Alice");
//! book.add_person("Bob");
//! book.add_person("Carol");
//!
//! book.set_friend("Alice", "Bob")?;
//! book.set_friend("Alice", "Carol")?;
//!
//! assert_eq!(book.mutual_friends("Bob", "Carol"), vec!["Alice"]);
//! # Ok::<(), friendbook_graph::GraphError>(())
//! ```

mod error;
mod graph;
mod matrix;
mod person;
mod recommend;

pub use error::GraphError;
pub use graph::{BookStats, FriendBook};
pub use person::PersonId;
pub use recommend::Recommendation;
