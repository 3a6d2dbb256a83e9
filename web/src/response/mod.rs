//! Response DTOs for the JSON endpoints.

pub(crate) mod echo;
pub(crate) mod greeting;
