//! Websafe base64 for arbitrary bytes, and handle-suffix decoding.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

use crate::error::{IdError, Result};

/// Encode bytes as websafe base64 with the `=` padding dropped.
pub fn websafe_encode(data: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

/// Decode websafe base64; trailing `=` padding is tolerated.
pub fn websafe_decode(encoded: &str) -> Result<Vec<u8>> {
    Ok(URL_SAFE_NO_PAD.decode(encoded.trim_end_matches('='))?)
}

/// Decode the numeric suffix of a handle-system id.
///
/// Handles use a case-insensitive base-32 subset: `0-9` map to 0-9 and
/// `a-v` to 10-31, most significant character first.
pub fn decode_handle_id(handle: &str) -> Result<u64> {
    let mut result: u64 = 0;
    for c in handle.chars() {
        let c = c.to_ascii_lowercase();
        let digit = match c {
            '0'..='9' => c as u64 - '0' as u64,
            'a'..='v' => c as u64 - 'a' as u64 + 10,
            _ => return Err(IdError::InvalidHandle(c)),
        };
        result = result
            .checked_mul(32)
            .and_then(|r| r.checked_add(digit))
            .ok_or_else(|| IdError::HandleOverflow(handle.to_owned()))?;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_drops_padding() {
        let encoded = websafe_encode(b"any carnal pleasure");
        assert!(!encoded.ends_with('='));
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
    }

    #[test]
    fn decode_round_trips() {
        let data = b"\x00\xff binary \xfb\xef payload";
        let decoded = websafe_decode(&websafe_encode(data)).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn decode_tolerates_padding() {
        assert_eq!(websafe_decode("aGk=").unwrap(), b"hi");
        assert_eq!(websafe_decode("aGk").unwrap(), b"hi");
    }

    #[test]
    fn decode_rejects_invalid_input() {
        let err = websafe_decode("not base64!").unwrap_err();
        assert!(matches!(err, IdError::Decode(_)));
    }

    #[test]
    fn handle_decodes_base32_subset() {
        assert_eq!(decode_handle_id("0").unwrap(), 0);
        assert_eq!(decode_handle_id("abc").unwrap(), 10_604);
        assert_eq!(decode_handle_id("av9").unwrap(), 11_241);
    }

    #[test]
    fn handle_is_case_insensitive() {
        assert_eq!(
            decode_handle_id("ABC").unwrap(),
            decode_handle_id("abc").unwrap()
        );
    }

    #[test]
    fn handle_rejects_characters_past_v() {
        let err = decode_handle_id("awx").unwrap_err();
        assert!(matches!(err, IdError::InvalidHandle('w')));
    }

    #[test]
    fn handle_rejects_overflow() {
        let long = "v".repeat(14);
        let err = decode_handle_id(&long).unwrap_err();
        assert!(matches!(err, IdError::HandleOverflow(_)));
    }
}
