// ============================
// auth-server/src/auth/mod.rs
// ============================
//! Password hashing and access-token generation.

pub mod password;
pub mod token;

pub use password::{hash_password, verify_password};
pub use token::generate_access_token;
