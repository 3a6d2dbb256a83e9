//! The `/echo` transformation.
//!
//! Lengths and reversal work on Unicode scalar values (`char`), so a multi-byte
//! character counts once and stays intact when the string is reversed.

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Echo {
    /// The input, unchanged
    pub normal: String,
    /// The input in upper case
    pub shouty: String,
    /// Number of characters in the input
    pub char_count: usize,
    /// The input reversed
    pub backwards: String,
}

impl Echo {
    pub fn new(input: &str) -> Self {
        Self {
            normal: input.to_string(),
            shouty: input.to_uppercase(),
            char_count: input.chars().count(),
            backwards: input.chars().rev().collect(),
        }
    }
}
