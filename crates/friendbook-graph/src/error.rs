use thiserror::Error;

/// Errors produced by [`FriendBook`](crate::FriendBook) operations.
///
/// Every variant is a caller-input error; the graph holds no fallible
/// runtime resources, so nothing here is transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The named person was never added to the book.
    #[error("no person named \"{0}\"")]
    UnknownPerson(String),

    /// An edge operation named the same person on both ends.
    #[error("\"{0}\" cannot be their own friend")]
    SelfFriendship(String),
}
