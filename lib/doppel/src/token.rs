use crate::{TOKEN_RAW_LEN, Token};
use hex_simd::AsciiCase;
use rand::RngCore;

/// Generate a fresh token from the thread-local CSPRNG
///
/// Aborts the process if the operating system cannot provide entropy;
/// a predictable token must never be issued in its place.
#[must_use]
pub fn generate() -> Token {
    let mut buf = [0_u8; TOKEN_RAW_LEN];
    rand::thread_rng().fill_bytes(&mut buf);

    hex_simd::encode_to_string(buf, AsciiCase::Lower).into()
}

#[cfg(test)]
mod test {
    #[test]
    fn hex_encoded_and_unique() {
        let token = super::generate();

        assert_eq!(token.as_str().len(), super::TOKEN_RAW_LEN * 2);
        assert!(
            token
                .as_str()
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        );

        assert_ne!(token, super::generate());
    }
}
