//! Reversible conversions of token sequences.
//!
//! A token sequence packs into a byte string of [`TOKEN_WIDTH`] big-endian bytes
//! per token, so string oriented routines can process it unmodified, and
//! unpacks back into the same sequence. Codepoint sequences additionally
//! convert to and from text.

use tracing::debug;

use crate::prelude::*;
use crate::{Error, Result};

/// Packs `tokens` into big-endian bytes, [`TOKEN_WIDTH`] bytes per token.
///
/// ```rust
/// use diff_primitives::codec;
/// use diff_primitives::prelude::*;
///
/// let packed = codec::encode(&[SegmentId::new(0x01020304)]);
/// assert_eq!(packed, vec![0x01, 0x02, 0x03, 0x04]);
/// ```
pub fn encode<T: Token>(tokens: &[T]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(tokens.len() * TOKEN_WIDTH);
    for token in tokens {
        bytes.extend_from_slice(&token.id().to_be_bytes());
    }
    bytes
}

/// Unpacks bytes produced by [`encode`] back into tokens.
///
/// Fails with [`Error::InvalidEncoding`] if the length is not a multiple of
/// [`TOKEN_WIDTH`], and with [`Error::InvalidToken`] if a reassembled identifier
/// is not a valid `T`.
pub fn decode<T: Token>(bytes: &[u8]) -> Result<Vec<T>> {
    if bytes.len() % TOKEN_WIDTH != 0 {
        debug!(
            len = bytes.len(),
            width = TOKEN_WIDTH,
            "Rejecting packed tokens with a partial trailing group"
        );
        return Err(Error::InvalidEncoding {
            len: bytes.len(),
            width: TOKEN_WIDTH,
        });
    }
    bytes
        .chunks_exact(TOKEN_WIDTH)
        .map(|group| {
            let mut id = [0; TOKEN_WIDTH];
            id.copy_from_slice(group);
            T::try_from_id(TokenId::from_be_bytes(id))
        })
        .collect::<Result<Vec<_>>>()
        .map_err(|e| {
            debug!(error = %e, "Packed tokens hold an invalid identifier");
            e
        })
}

/// Splits `text` into one token per codepoint.
pub fn tokens_from_text(text: &str) -> Vec<Codepoint> {
    text.chars().map(Codepoint::from).collect()
}

/// Reassembles text from codepoint tokens.
pub fn tokens_to_text(tokens: &[Codepoint]) -> String {
    tokens.iter().map(|&token| char::from(token)).collect()
}

/// Reassembles text from raw identifiers, each of which must be a Unicode
/// scalar value.
pub fn text_from_ids(ids: &[TokenId]) -> Result<String> {
    ids.iter()
        .map(|&id| Codepoint::try_from(id).map(char::from))
        .collect::<Result<String>>()
        .map_err(|e| {
            debug!(error = %e, "Identifiers do not form text");
            e
        })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn encode_is_big_endian() {
        assert_eq!(
            encode(&[SegmentId::new(0x01020304)]),
            vec![0x01, 0x02, 0x03, 0x04]
        );
        assert_eq!(
            encode(&[Codepoint::new('A'), Codepoint::new('😀')]),
            vec![0, 0, 0, 0x41, 0, 0x01, 0xF6, 0x00]
        );
        assert!(encode::<SegmentId>(&[]).is_empty());
    }

    #[test]
    fn decode_reassembles_tokens() {
        assert_eq!(
            decode::<SegmentId>(&[0x01, 0x02, 0x03, 0x04]),
            Ok(vec![SegmentId::new(0x01020304)])
        );
        assert_eq!(decode::<SegmentId>(&[]), Ok(vec![]));
        assert_eq!(
            decode::<Codepoint>(&[0, 0, 0, 0x68, 0, 0, 0, 0xE9]),
            Ok(vec![Codepoint::new('h'), Codepoint::new('é')])
        );
    }

    #[test]
    fn decode_rejects_partial_groups() {
        for len in [1, 2, 3, 5, 7] {
            let bytes = vec![0xAB; len];
            assert_eq!(
                decode::<SegmentId>(&bytes),
                Err(Error::InvalidEncoding { len, width: 4 })
            );
        }
    }

    #[test]
    fn decode_rejects_non_codepoints() {
        assert_eq!(
            decode::<Codepoint>(&[0, 0, 0, 0x41, 0, 0, 0xD8, 0]),
            Err(Error::InvalidToken(0xD800))
        );
        // The same bytes are fine as segment ids.
        assert!(decode::<SegmentId>(&[0, 0, 0, 0x41, 0, 0, 0xD8, 0]).is_ok());
    }

    #[test]
    fn text_conversions() {
        let text = "héllo, 世界 😀";
        let tokens = tokens_from_text(text);
        assert_eq!(tokens.len(), text.chars().count());
        assert_eq!(tokens[1], Codepoint::new('é'));
        assert_eq!(tokens_to_text(&tokens), text);
        assert_eq!(tokens_to_text(&[]), "");
    }

    #[test]
    fn text_from_raw_ids() {
        assert_eq!(text_from_ids(&[0x68, 0x69]), Ok("hi".to_string()));
        assert_eq!(
            text_from_ids(&[0x68, 0x110000, 0xD800]),
            Err(Error::InvalidToken(0x110000))
        );
    }

    #[test]
    fn packed_text_survives_string_round_trip() {
        let tokens = tokens_from_text("a€");
        let packed = encode(&tokens);
        assert_eq!(packed.len(), 2 * TOKEN_WIDTH);
        let unpacked: Vec<Codepoint> = decode(&packed).expect("Decode failed");
        assert_eq!(tokens_to_text(&unpacked), "a€");
    }

    proptest! {
        #[test]
        fn decode_inverts_encode(ids in prop::collection::vec(any::<u32>(), 0..64)) {
            let tokens: Vec<SegmentId> = ids.into_iter().map(SegmentId::new).collect();
            let packed = encode(&tokens);
            prop_assert_eq!(packed.len(), TOKEN_WIDTH * tokens.len());
            prop_assert_eq!(decode::<SegmentId>(&packed), Ok(tokens));
        }

        #[test]
        fn codepoints_survive_packing(text in "\\PC{0,32}") {
            let tokens = tokens_from_text(&text);
            prop_assert_eq!(decode::<Codepoint>(&encode(&tokens)), Ok(tokens));
        }

        #[test]
        fn unaligned_input_is_rejected(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            prop_assume!(bytes.len() % TOKEN_WIDTH != 0);
            let result = decode::<SegmentId>(&bytes);
            prop_assert!(result.is_err_and(|e| e.is_invalid_encoding()));
        }
    }
}
