//! Defines fundamental types used throughout the crate.
//!
//! A token is a fixed-width identifier. Depending on the granularity the
//! differencing engine works at, it stands either for a single codepoint
//! ([`Codepoint`]) or for a whole line or word ([`SegmentId`]). The two
//! meanings are separate types so a sequence of segment ids can never be
//! rendered as text by accident.

use std::fmt::Debug;
use std::hash::Hash;

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Raw token identifier.
pub type TokenId = u32;

/// Width of a packed token in bytes.
pub const TOKEN_WIDTH: usize = std::mem::size_of::<TokenId>();

/// Common interface of the token kinds.
pub trait Token: Copy + Eq + Hash + Debug {
    /// Returns the raw identifier of the token.
    fn id(self) -> TokenId;

    /// Builds a token back from its raw identifier.
    fn try_from_id(id: TokenId) -> Result<Self>;
}

/// Token standing for a single Unicode scalar value.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Encode, Decode,
)]
pub struct Codepoint(char);

impl Codepoint {
    pub fn new(c: char) -> Self {
        Self(c)
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl From<char> for Codepoint {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl From<Codepoint> for char {
    fn from(codepoint: Codepoint) -> Self {
        codepoint.0
    }
}

impl TryFrom<TokenId> for Codepoint {
    type Error = Error;

    fn try_from(id: TokenId) -> Result<Self, Self::Error> {
        char::from_u32(id)
            .map(Self)
            .ok_or(Error::InvalidToken(id))
    }
}

impl Token for Codepoint {
    fn id(self) -> TokenId {
        self.0 as TokenId
    }

    fn try_from_id(id: TokenId) -> Result<Self> {
        Self::try_from(id)
    }
}

/// Token assigned to a whole line or word.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Encode, Decode,
)]
pub struct SegmentId(TokenId);

impl SegmentId {
    pub const fn new(id: TokenId) -> Self {
        Self(id)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<TokenId> for SegmentId {
    fn from(id: TokenId) -> Self {
        Self(id)
    }
}

impl TryFrom<u64> for SegmentId {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        TokenId::try_from(value)
            .map(Self)
            .map_err(|_| Error::TokenOverflow(value))
    }
}

impl TryFrom<usize> for SegmentId {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        let value = u64::try_from(value).map_err(|_| Error::TokenOverflow(u64::MAX))?;
        Self::try_from(value)
    }
}

impl Token for SegmentId {
    fn id(self) -> TokenId {
        self.0
    }

    fn try_from_id(id: TokenId) -> Result<Self> {
        Ok(Self(id))
    }
}

impl std::fmt::Display for SegmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
