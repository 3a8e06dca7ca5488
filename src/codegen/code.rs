use std::fmt;

use serde::Serialize;
use sha1::{Digest, Sha1};

use super::runs::longest_ascending_runs;

/// A generated product code in structured form.
///
/// The string rendering is `{hash}-{first}{concat}{last}` with no separators
/// between the numeric and textual parts. `concat` joins every run tied for
/// the longest length, while `first` and `last` bound only the first of
/// those runs. Stored codes use exactly this shape, so the mismatch between
/// the indices and the concatenation is part of the format and is not
/// corrected here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCode {
    /// First 8 hex characters of the SHA-1 digest of the original name.
    pub hash: String,
    /// Start index of the first longest run, in chars of the lowercased name.
    pub first: usize,
    /// All tied longest runs, concatenated in scan order.
    pub concat: String,
    /// End index of the first longest run, `first + max_len - 1`.
    pub last: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum CodeError {
    #[error("product name is empty")]
    EmptyName,
}

impl ProductCode {
    /// Derive the code for a product name. The run scan is case-insensitive,
    /// the hash is not.
    pub fn derive(name: &str) -> Result<ProductCode, CodeError> {
        let lowered = name.to_lowercase();
        let runs = longest_ascending_runs(&lowered);
        let head = runs.first().ok_or(CodeError::EmptyName)?;

        let first = head.start;
        let max_len = head.text.chars().count();
        let concat: String = runs.iter().map(|r| r.text.as_str()).collect();

        Ok(ProductCode {
            hash: hash_prefix(name),
            first,
            concat,
            last: first + max_len - 1,
        })
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}{}{}", self.hash, self.first, self.concat, self.last)
    }
}

/// Generate the product code string for a product name.
pub fn generate_product_code(name: &str) -> Result<String, CodeError> {
    Ok(ProductCode::derive(name)?.to_string())
}

// First 4 digest bytes hex-encoded, i.e. the first 8 hex characters.
fn hash_prefix(name: &str) -> String {
    let digest = Sha1::digest(name.as_bytes());
    hex::encode(&digest[..4])
}
