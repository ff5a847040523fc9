// Rust guideline compliant 2026-02-06

//! Hash-based identifiers and partial ID resolution.

use crate::error::{EntityKind, Error, Result};
use sha2::{Digest, Sha256};

/// Prefix for user IDs.
pub const USER_PREFIX: &str = "usr";
/// Prefix for ticket IDs.
pub const TICKET_PREFIX: &str = "tkt";
/// Prefix for comment IDs.
pub const COMMENT_PREFIX: &str = "cmt";

/// Number of hex characters after the prefix.
pub const HASH_LEN: usize = 6;

/// Minimum length accepted for partial ID lookups.
pub const MIN_PARTIAL_LEN: usize = 3;

/// Generates a `<prefix>-XXXXXX` identifier.
///
/// # Arguments
///
/// * `prefix` - Entity prefix (`usr`, `tkt`, `cmt`)
/// * `seed` - Content that distinguishes the entity
/// * `timestamp` - Creation time in microseconds
/// * `nonce` - Bumped by callers to resolve collisions
pub fn generate_id(prefix: &str, seed: &[&str], timestamp: i64, nonce: u32) -> String {
    let mut hasher = Sha256::new();
    for part in seed {
        hasher.update(part.as_bytes());
        hasher.update([0u8]);
    }
    hasher.update(timestamp.to_le_bytes());
    hasher.update(nonce.to_le_bytes());

    let hash = hasher.finalize();
    let hex = format!("{:x}", hash);
    format!("{}-{}", prefix, &hex[..HASH_LEN])
}

/// Validates that `id` has the form `<prefix>-XXXXXX` with lowercase hex.
///
/// # Errors
///
/// Returns `InvalidRecord` if the format does not match.
pub fn validate_id_format(prefix: &str, id: &str) -> Result<()> {
    let valid = id
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .map(|hash| {
            hash.len() == HASH_LEN
                && hash
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        })
        .unwrap_or(false);

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidRecord(format!(
            "Invalid ID format: {} (expected {}-XXXXXX)",
            id, prefix
        )))
    }
}

/// Resolves a full or partial ID against a set of known IDs.
///
/// The partial may include the prefix (`tkt-ab1`) or only the hash part
/// (`ab1`). An exact match always wins.
///
/// # Errors
///
/// Returns an error if:
/// - The partial is shorter than three characters
/// - No ID matches
/// - More than one ID matches
pub fn resolve_partial_id<'a, I>(kind: EntityKind, partial: &str, ids: I) -> Result<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let partial = partial.trim();
    if partial.len() < MIN_PARTIAL_LEN {
        return Err(Error::not_found(kind, partial));
    }

    let mut matches: Vec<&str> = Vec::new();
    for id in ids {
        if id == partial {
            return Ok(id.to_string());
        }
        let hash = id.split_once('-').map(|(_, hash)| hash).unwrap_or(id);
        if id.starts_with(partial) || hash.starts_with(partial) {
            matches.push(id);
        }
    }

    match matches.len() {
        0 => Err(Error::not_found(kind, partial)),
        1 => Ok(matches[0].to_string()),
        _ => Err(Error::AmbiguousId(
            partial.to_string(),
            matches.into_iter().map(str::to_string).collect(),
        )),
    }
}
