use contracts::domain::a006_submission::aggregate::SubmissionSummary;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct SubmissionListState {
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for SubmissionListState {
    fn default() -> Self {
        Self {
            sort_field: "updatedAt".to_string(),
            sort_ascending: false,
        }
    }
}

impl SubmissionListState {
    /// Clicking the active column flips the direction; a new column sorts
    /// ascending.
    pub fn toggle(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }

    pub fn indicator(&self, field: &str) -> &'static str {
        if self.sort_field != field {
            ""
        } else if self.sort_ascending {
            "▲"
        } else {
            "▼"
        }
    }
}

pub fn create_state() -> RwSignal<SubmissionListState> {
    RwSignal::new(SubmissionListState::default())
}

fn compare(a: &SubmissionSummary, b: &SubmissionSummary, field: &str) -> Ordering {
    match field {
        "companyName" => a
            .company_name
            .to_lowercase()
            .cmp(&b.company_name.to_lowercase()),
        "status" => a.status.code().cmp(b.status.code()),
        "overallScore" => a
            .overall_score
            .partial_cmp(&b.overall_score)
            .unwrap_or(Ordering::Equal),
        "updatedAt" => a.updated_at.cmp(&b.updated_at),
        _ => Ordering::Equal,
    }
}

pub fn sort_submissions(rows: &mut [SubmissionSummary], state: &SubmissionListState) {
    rows.sort_by(|a, b| {
        let ordering = compare(a, b, &state.sort_field);
        if state.sort_ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::ReviewStatus;
    use uuid::Uuid;

    fn row(name: &str, score: f64) -> SubmissionSummary {
        SubmissionSummary {
            id: Uuid::new_v4(),
            company_name: name.to_string(),
            status: ReviewStatus::Pending,
            overall_score: score,
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn sorts_by_company_name_case_insensitively() {
        let mut rows = vec![row("beta", 0.2), row("Alpha", 0.9), row("gamma", 0.5)];
        let state = SubmissionListState {
            sort_field: "companyName".to_string(),
            sort_ascending: true,
        };
        sort_submissions(&mut rows, &state);
        let names: Vec<_> = rows.iter().map(|r| r.company_name.as_str()).collect();
        assert_eq!(names, ["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn toggle_flips_direction_on_the_same_column() {
        let mut state = SubmissionListState::default();
        state.toggle("companyName");
        assert!(state.sort_ascending);
        state.toggle("companyName");
        assert!(!state.sort_ascending);
        state.toggle("overallScore");
        assert!(state.sort_ascending);
        assert_eq!(state.sort_field, "overallScore");
    }

    #[test]
    fn score_sort_is_numeric() {
        let mut rows = vec![row("a", 0.9), row("b", 0.15), row("c", 0.5)];
        let state = SubmissionListState {
            sort_field: "overallScore".to_string(),
            sort_ascending: true,
        };
        sort_submissions(&mut rows, &state);
        let scores: Vec<_> = rows.iter().map(|r| r.overall_score).collect();
        assert_eq!(scores, [0.15, 0.5, 0.9]);
    }
}
