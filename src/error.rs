use thiserror::Error;

use crate::primitives::TokenId;

pub type Result<T, E = crate::Error> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Packed input of {len} bytes is not a multiple of the {width}-byte token width")]
    InvalidEncoding { len: usize, width: usize },
    #[error("Token {0:#x} does not correspond to a known value")]
    InvalidToken(TokenId),
    #[error("Value {0} does not fit into a token")]
    TokenOverflow(u64),
    #[error("Segment {0:?} is listed more than once")]
    DuplicateSegment(Box<str>),
}

impl Error {
    pub fn is_invalid_encoding(&self) -> bool {
        matches!(self, Self::InvalidEncoding { .. })
    }
}
