use std::fmt::{Display, Formatter};

pub type Result<T> = std::result::Result<T, CollectionError>;

#[derive(Debug)]
pub enum CollectionError {
    /// An absent element was offered for insertion.
    InvalidArgument,
    /// Removal or sampling on a container with no elements.
    EmptyContainer,
    /// An iterator was advanced past its last element.
    EndOfSequence,
    /// The permutation client was asked for more tokens than it read.
    InvalidCount { k: usize, n: usize },
    IOError(std::io::Error),
}

from_error!(std::io::Error, IOError);

impl Display for CollectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "cannot insert an absent element"),
            Self::EmptyContainer => write!(f, "container is empty"),
            Self::EndOfSequence => write!(f, "iterator has no more elements"),
            Self::InvalidCount { k, n } => {
                write!(f, "cannot select {k} items out of {n} input tokens")
            }
            Self::IOError(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for CollectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IOError(err) => Some(err),
            _ => None,
        }
    }
}

impl PartialEq for CollectionError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidArgument, Self::InvalidArgument)
            | (Self::EmptyContainer, Self::EmptyContainer)
            | (Self::EndOfSequence, Self::EndOfSequence) => true,
            (Self::InvalidCount { k: k1, n: n1 }, Self::InvalidCount { k: k2, n: n2 }) => {
                k1 == k2 && n1 == n2
            }
            (Self::IOError(a), Self::IOError(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}
