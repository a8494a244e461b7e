use regex::Regex;

use crate::{AppError, Result};

/// Returns the text between the first `<tag>` and the next `</tag>`.
pub fn extract_between(tag: &str, text: &str) -> Result<String> {
    let escaped = regex::escape(tag);
    let pattern = Regex::new(&format!(r"(?s)<{escaped}>(.*?)</{escaped}>"))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid tag pattern: {}", e)))?;

    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| AppError::TagNotFound(tag.to_string()))
}
