//! Library's interface essentials.

pub use super::primitives::{Codepoint, SegmentId, Token, TokenId, TOKEN_WIDTH};
pub use super::vocabulary::Vocabulary;
pub use super::{codec, search, sequence, unescape};
