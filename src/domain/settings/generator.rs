use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use rand::RngCore;
use rand::rngs::OsRng;

/// Random default generators for secret fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    /// `n` random bytes, URL-safe base64 with padding.
    UrlSafeToken(usize),
    /// `n` random bytes, lowercase hex (`2n` characters).
    HexToken(usize),
}

impl Generator {
    pub fn generate(self) -> String {
        match self {
            Generator::UrlSafeToken(len) => URL_SAFE.encode(random_bytes(len)),
            Generator::HexToken(len) => hex::encode(random_bytes(len)),
        }
    }
}

fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}
