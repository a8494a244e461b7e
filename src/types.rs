use serde::{Deserialize, Serialize};

use crate::artifacts;

// Trigger Types

/// Identifies one market/venue/time-window request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactKey {
    pub venue_id: String,
    pub pair_id: String,
    pub start: String,
    pub end: String,
}

impl ArtifactKey {
    pub fn base_name(&self) -> String {
        artifacts::base_name(&self.venue_id, &self.pair_id, &self.start, &self.end)
    }
}

// Prompt Types

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptMessages {
    pub system: String,
    pub user: String,
}

// Issue Types

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRef {
    pub owner: String,
    pub name: String,
    pub number: u64,
}

impl IssueRef {
    /// Accepts `owner/name`.
    pub fn parse(repo_name: &str, number: u64) -> crate::Result<Self> {
        let trimmed = repo_name.trim();
        match trimmed.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                    number,
                })
            }
            _ => Err(crate::AppError::Validation(format!(
                "Repository must be in owner/name form, got '{}'",
                repo_name
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_ref_parses_owner_and_name() {
        let issue = IssueRef::parse("1712n/dn-institute", 42).unwrap();
        assert_eq!(issue.owner, "1712n");
        assert_eq!(issue.name, "dn-institute");
        assert_eq!(issue.number, 42);
    }

    #[test]
    fn issue_ref_rejects_bad_names() {
        for bad in ["", "no-slash", "/repo", "owner/", "a/b/c"] {
            assert!(IssueRef::parse(bad, 1).is_err(), "accepted {bad:?}");
        }
    }
}
