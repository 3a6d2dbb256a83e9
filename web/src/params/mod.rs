//! Typed query parameters for endpoint inputs.
//!
//! Every field here defaults to the empty string. Missing or malformed input is
//! never rejected; handlers extract these through `Option<Query<_>>` and fall back
//! to `Default` when the query string can't be decoded at all.

pub(crate) mod chat;
pub(crate) mod echo;
