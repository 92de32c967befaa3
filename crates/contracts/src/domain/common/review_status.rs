use serde::{Deserialize, Serialize};

/// Review status of a supplier submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    /// Wire code of the status
    pub fn code(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Approved => "approved",
            ReviewStatus::Rejected => "rejected",
        }
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "Pending review",
            ReviewStatus::Approved => "Approved",
            ReviewStatus::Rejected => "Rejected",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "pending" => Ok(ReviewStatus::Pending),
            "approved" => Ok(ReviewStatus::Approved),
            "rejected" => Ok(ReviewStatus::Rejected),
            other => Err(format!("Unknown review status: {}", other)),
        }
    }

    pub fn all() -> Vec<ReviewStatus> {
        vec![
            ReviewStatus::Pending,
            ReviewStatus::Approved,
            ReviewStatus::Rejected,
        ]
    }
}

impl Default for ReviewStatus {
    fn default() -> Self {
        ReviewStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_matches_code() {
        for status in ReviewStatus::all() {
            assert_eq!(ReviewStatus::parse(status.code()).unwrap(), status);
        }
        assert!(ReviewStatus::parse("archived").is_err());
    }

    #[test]
    fn serializes_as_lowercase_code() {
        let json = serde_json::to_string(&ReviewStatus::Rejected).unwrap();
        assert_eq!(json, r#""rejected""#);
    }
}
