use crate::types::ArtifactKey;
use crate::{AppError, Result};

/// Parses `pairId, venueId, start, end`.
///
/// The first field is the pair and the second the venue. Both are trimmed and
/// lower-cased; the timestamps are only trimmed and otherwise passed through.
pub fn parse(comment: &str) -> Result<ArtifactKey> {
    let parts: Vec<&str> = comment.split(',').collect();
    if parts.len() < 4 {
        return Err(AppError::MalformedInput(format!(
            "expected 4 comma-separated fields, got {}",
            parts.len()
        )));
    }

    Ok(ArtifactKey {
        venue_id: parts[1].trim().to_lowercase(),
        pair_id: parts[0].trim().to_lowercase(),
        start: parts[2].trim().to_string(),
        end: parts[3].trim().to_string(),
    })
}
