//! Read model of the supplier dashboard (`GET /dashboard`)

use crate::domain::common::ReviewStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryScore {
    pub category: String,
    pub points: f64,
    pub rated_sections: u32,
    pub total_sections: u32,
}

impl CategoryScore {
    /// Rating progress of the category as a 0..=1 fraction.
    pub fn progress(&self) -> f64 {
        if self.total_sections == 0 {
            0.0
        } else {
            f64::from(self.rated_sections) / f64::from(self.total_sections)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardData {
    pub status: ReviewStatus,
    pub overall_score: f64,
    pub categories: Vec<CategoryScore>,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_handles_empty_category() {
        let score = CategoryScore::default();
        assert_eq!(score.progress(), 0.0);
    }

    #[test]
    fn progress_is_a_fraction() {
        let score = CategoryScore {
            category: "environment".to_string(),
            points: 1.9,
            rated_sections: 2,
            total_sections: 3,
        };
        assert!((score.progress() - 2.0 / 3.0).abs() < 1e-9);
    }
}
