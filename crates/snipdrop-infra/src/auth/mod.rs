//! Bearer-token validation backed by a cached remote key set.

pub mod jwks;
pub mod verifier;

pub use jwks::JwksCache;
pub use verifier::JwtVerifier;
