//! Review console state machine.
//!
//! Listing -> Viewing -> Rating and back, with a separate editing buffer
//! for the rating dialog so cancelling discards cleanly. Kept free of
//! signals and HTTP so every transition rule is a plain unit test; the
//! ViewModel calls the adapters and only reports confirmed outcomes back
//! in here, which is what keeps state from advancing on failures.

use contracts::domain::a006_submission::aggregate::{SubmissionDetail, UpdatePointsRequest};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStage {
    /// Submission list, nothing selected
    Listing,
    /// One submission opened
    Viewing,
    /// Drilled into one section's rating
    Rating,
}

/// Editing buffer of the rating dialog, seeded from server values.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingBuffer {
    pub category: String,
    pub section: String,
    pub title: &'static str,
    pub points: f64,
    pub remarks: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewFlow {
    stage: ReviewStage,
    selected: Option<SubmissionDetail>,
    buffer: Option<RatingBuffer>,
}

impl ReviewFlow {
    pub fn new() -> Self {
        Self {
            stage: ReviewStage::Listing,
            selected: None,
            buffer: None,
        }
    }

    pub fn stage(&self) -> ReviewStage {
        self.stage
    }

    pub fn selected(&self) -> Option<&SubmissionDetail> {
        self.selected.as_ref()
    }

    pub fn selected_id(&self) -> Option<Uuid> {
        self.selected.as_ref().map(|d| d.id)
    }

    pub fn buffer(&self) -> Option<&RatingBuffer> {
        self.buffer.as_ref()
    }

    /// A submission row was opened.
    pub fn open_submission(&mut self, detail: SubmissionDetail) {
        self.selected = Some(detail);
        self.buffer = None;
        self.stage = ReviewStage::Viewing;
    }

    /// Drill into one section's rating; the buffer starts from the
    /// submission's current server values.
    pub fn open_rating(&mut self, category: &str, section: &str) -> Result<(), String> {
        let detail = self
            .selected
            .as_ref()
            .ok_or_else(|| "No submission selected".to_string())?;
        let target = detail
            .esg
            .section(category, section)
            .ok_or_else(|| format!("Unknown section {}/{}", category, section))?;

        self.buffer = Some(RatingBuffer {
            category: category.to_string(),
            section: section.to_string(),
            title: target.title(),
            points: target.meta().points,
            remarks: target.meta().remarks.clone().unwrap_or_default(),
        });
        self.stage = ReviewStage::Rating;
        Ok(())
    }

    pub fn set_points(&mut self, points: f64) {
        if let Some(buffer) = &mut self.buffer {
            buffer.points = points.clamp(0.0, 1.0);
        }
    }

    pub fn set_remarks(&mut self, remarks: String) {
        if let Some(buffer) = &mut self.buffer {
            buffer.remarks = remarks;
        }
    }

    /// Discard the buffer, nothing persisted.
    pub fn cancel_rating(&mut self) {
        self.buffer = None;
        if self.stage == ReviewStage::Rating {
            self.stage = ReviewStage::Viewing;
        }
    }

    /// The persistence request for the current buffer, if a rating is open.
    pub fn save_request(&self) -> Option<UpdatePointsRequest> {
        let detail = self.selected.as_ref()?;
        let buffer = self.buffer.as_ref()?;
        Some(UpdatePointsRequest {
            esg_data_id: detail.id,
            category: buffer.category.clone(),
            section: buffer.section.clone(),
            points: buffer.points,
            remarks: if buffer.remarks.trim().is_empty() {
                None
            } else {
                Some(buffer.remarks.clone())
            },
        })
    }

    /// Adopt the re-fetched submission after a confirmed rating save; the
    /// dialog closes and the detail view shows server truth.
    pub fn reconcile(&mut self, fresh: SubmissionDetail) {
        self.selected = Some(fresh);
        self.buffer = None;
        self.stage = ReviewStage::Viewing;
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
        self.buffer = None;
        self.stage = ReviewStage::Listing;
    }

    /// A status change was confirmed by the server. If it hit the
    /// submission currently open, the detail view closes.
    pub fn status_changed(&mut self, id: Uuid) {
        if self.selected_id() == Some(id) {
            self.close_detail();
        }
    }
}

impl Default for ReviewFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::ReviewStatus;

    fn detail() -> SubmissionDetail {
        let mut detail = SubmissionDetail {
            id: Uuid::new_v4(),
            company: Default::default(),
            esg: Default::default(),
            status: ReviewStatus::Pending,
            review_comments: None,
            overall_score: 0.0,
        };
        let meta = detail
            .esg
            .section_mut("environment", "renewableEnergy")
            .unwrap()
            .meta_mut();
        meta.points = 0.6;
        meta.remarks = Some("Good".to_string());
        detail
    }

    #[test]
    fn rating_buffer_is_seeded_from_server_values() {
        let mut flow = ReviewFlow::new();
        flow.open_submission(detail());
        flow.open_rating("environment", "renewableEnergy").unwrap();

        let buffer = flow.buffer().unwrap();
        assert_eq!(buffer.points, 0.6);
        assert_eq!(buffer.remarks, "Good");
        assert_eq!(flow.stage(), ReviewStage::Rating);
    }

    #[test]
    fn saved_rating_reconciles_the_viewed_submission() {
        let mut flow = ReviewFlow::new();
        let original = detail();
        let id = original.id;
        flow.open_submission(original.clone());
        flow.open_rating("environment", "renewableEnergy").unwrap();
        flow.set_points(0.8);

        let request = flow.save_request().unwrap();
        assert_eq!(request.esg_data_id, id);
        assert_eq!(request.points, 0.8);
        assert_eq!(request.category, "environment");
        assert_eq!(request.section, "renewableEnergy");

        // Server confirmed; the re-fetched submission carries the new points.
        let mut fresh = original;
        fresh
            .esg
            .section_mut("environment", "renewableEnergy")
            .unwrap()
            .meta_mut()
            .points = 0.8;
        flow.reconcile(fresh);

        assert_eq!(flow.stage(), ReviewStage::Viewing);
        let shown = flow
            .selected()
            .unwrap()
            .esg
            .section("environment", "renewableEnergy")
            .unwrap()
            .meta()
            .points;
        assert_eq!(shown, 0.8);
    }

    #[test]
    fn cancel_discards_the_buffer_without_persistence() {
        let mut flow = ReviewFlow::new();
        flow.open_submission(detail());
        flow.open_rating("environment", "renewableEnergy").unwrap();
        flow.set_points(0.9);
        flow.cancel_rating();

        assert_eq!(flow.stage(), ReviewStage::Viewing);
        assert!(flow.buffer().is_none());
        assert!(flow.save_request().is_none());
        // Server values untouched
        let shown = flow
            .selected()
            .unwrap()
            .esg
            .section("environment", "renewableEnergy")
            .unwrap()
            .meta()
            .points;
        assert_eq!(shown, 0.6);
    }

    #[test]
    fn confirmed_status_change_closes_the_open_detail() {
        let mut flow = ReviewFlow::new();
        let opened = detail();
        let id = opened.id;
        flow.open_submission(opened);

        // Another submission changed: view stays open
        flow.status_changed(Uuid::new_v4());
        assert_eq!(flow.stage(), ReviewStage::Viewing);

        // The open one changed: back to the list
        flow.status_changed(id);
        assert_eq!(flow.stage(), ReviewStage::Listing);
        assert!(flow.selected().is_none());
    }

    #[test]
    fn unknown_section_is_rejected() {
        let mut flow = ReviewFlow::new();
        flow.open_submission(detail());
        assert!(flow.open_rating("environment", "biodiversity").is_err());
        assert_eq!(flow.stage(), ReviewStage::Viewing);
    }

    #[test]
    fn points_are_clamped_to_the_rating_scale() {
        let mut flow = ReviewFlow::new();
        flow.open_submission(detail());
        flow.open_rating("environment", "renewableEnergy").unwrap();
        flow.set_points(1.7);
        assert_eq!(flow.buffer().unwrap().points, 1.0);
        flow.set_points(-0.2);
        assert_eq!(flow.buffer().unwrap().points, 0.0);
    }

    #[test]
    fn blank_remarks_are_not_sent() {
        let mut flow = ReviewFlow::new();
        flow.open_submission(detail());
        flow.open_rating("environment", "renewableEnergy").unwrap();
        flow.set_remarks("   ".to_string());
        assert_eq!(flow.save_request().unwrap().remarks, None);
    }
}
