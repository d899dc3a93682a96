//! Bearer-token verification for back-office routes.
//!
//! Tokens are issued elsewhere; this feature only verifies them against the
//! issuer's JWKS and exposes the caller as an [`model::AuthenticatedUser`].

mod jwks;
mod validator;

pub mod guards;
pub mod model;

pub use jwks::JwksClient;
pub use validator::JwtValidator;
