//! Domain types for the StoRe backend.
//!
//! Has no web or runtime dependencies so the models and token generation can
//! be reused by the API crate and by any future CLI or sync tooling.

pub mod error;
pub mod lenient;
pub mod models;
pub mod token;
pub mod types;
