//! # Diff_primitives
//!
//! `diff_primitives` crate provides the text and token building blocks a
//! text-differencing engine works with:
//!
//! - search raw text forward and backward without ever splitting a codepoint
//!
//! - search sequences of tokens, when the engine diffs lines or words rather than characters
//!
//! - pack token sequences into byte strings and back, so string oriented routines can run on them
//!
//! - decode the percent escapes of diff text serialized in the `encodeURI` style
//!
//! ## Tokens
//!
//! A token is a fixed-width ([`primitives::TOKEN_WIDTH`] bytes) identifier of one of two kinds:
//! - [`primitives::Codepoint`] stands for a single character
//! - [`primitives::SegmentId`] stands for a line or word, assigned by a [`vocabulary::Vocabulary`]
//!
//! Only codepoint sequences convert back to text directly, segment sequences are
//! rendered through the vocabulary that assigned them.
//!
//! ## Errors
//!
//! Searches never fail, `None` means the needle was not found or the start
//! position was out of range. Conversions that can meet malformed input return
//! [`Result`] with an [`Error`] describing the problem.
//!
//! ## Example
//!
//! ```rust
//! # use diff_primitives::Error;
//! use diff_primitives::prelude::*;
//!
//! # fn main() -> Result<(), Error> {
//! // Text search.
//! assert_eq!(search::forward_index("hello world", "world", 0), Some(6));
//! assert_eq!(search::backward_index("hello world", "hello", 11), Some(0));
//!
//! // Line granularity: tokenize, search, pack and render back.
//! let mut vocabulary = Vocabulary::new();
//! let old = vocabulary.tokenize_lines("a\nb\nc\n")?;
//! let new = vocabulary.tokenize_lines("b\nc\n")?;
//! assert_eq!(sequence::index_of(&old, &new, 0), Some(1));
//!
//! let packed = codec::encode(&new);
//! let unpacked: Vec<SegmentId> = codec::decode(&packed)?;
//! assert_eq!(vocabulary.render(&unpacked)?, "b\nc\n");
//!
//! // Character granularity.
//! let chars = codec::tokens_from_text("héllo");
//! assert_eq!(codec::tokens_to_text(&chars), "héllo");
//!
//! // Escapes.
//! assert_eq!(unescape::unescape("%2B%24"), "+$");
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod error;
pub mod prelude;
pub mod primitives;
pub mod search;
pub mod sequence;
pub mod unescape;
pub mod vocabulary;

pub use error::{Error, Result};
