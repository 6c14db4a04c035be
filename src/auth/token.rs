// ============================
// auth-server/src/auth/token.rs
// ============================
//! Access-token generation.
//!
//! Tokens are opaque bearer strings: OS entropy, base64 URL-safe encoded
//! without padding. Nothing else in the crate looks inside them.
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::{rngs::OsRng, RngCore};

/// Token size in bytes (32 bytes = 256 bits of entropy)
const TOKEN_BYTES: usize = 32;

/// Generate a cryptographically secure access token
pub fn generate_access_token() -> String {
    let mut buffer = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut buffer);
    URL_SAFE_NO_PAD.encode(buffer)
}
