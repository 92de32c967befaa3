//! ViewModel of the review console.
//!
//! Drives the pure [`ReviewFlow`] machine against the admin adapters.
//! Confirmed outcomes are reported into the flow; on any adapter failure
//! the flow stays in its pre-action stage so the operator can retry.

use super::model;
use crate::domain::a006_submission::flow::ReviewFlow;
use crate::shared::notify::{use_toasts, ToastService};
use contracts::domain::a006_submission::aggregate::{ReviewRequest, SubmissionSummary};
use contracts::domain::common::ReviewStatus;
use leptos::prelude::*;
use uuid::Uuid;

#[derive(Clone, Copy)]
pub struct ReviewVm {
    pub flow: RwSignal<ReviewFlow>,
    pub submissions: RwSignal<Vec<SubmissionSummary>>,
    pub loading: RwSignal<bool>,
    pub busy: RwSignal<bool>,
    toasts: ToastService,
}

impl ReviewVm {
    pub fn new() -> Self {
        Self {
            flow: RwSignal::new(ReviewFlow::new()),
            submissions: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            busy: RwSignal::new(false),
            toasts: use_toasts(),
        }
    }

    pub fn load_list(&self) {
        let vm = *self;
        vm.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_all().await {
                Ok(rows) => vm.submissions.set(rows),
                Err(e) => vm.toasts.error(format!("Failed to load submissions: {}", e)),
            }
            vm.loading.set(false);
        });
    }

    /// Open a submission from the list.
    pub fn open(&self, id: Uuid) {
        let vm = *self;
        vm.busy.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_submission(id).await {
                Ok(detail) => vm.flow.update(|f| f.open_submission(detail)),
                Err(e) => vm.toasts.error(format!("Failed to open submission: {}", e)),
            }
            vm.busy.set(false);
        });
    }

    pub fn open_rating(&self, category: String, section: String) {
        let mut failure = None;
        self.flow.update(|f| {
            if let Err(e) = f.open_rating(&category, &section) {
                failure = Some(e);
            }
        });
        if let Some(e) = failure {
            self.toasts.error(e);
        }
    }

    pub fn set_points(&self, points: f64) {
        self.flow.update(|f| f.set_points(points));
    }

    pub fn set_remarks(&self, remarks: String) {
        self.flow.update(|f| f.set_remarks(remarks));
    }

    pub fn cancel_rating(&self) {
        self.flow.update(|f| f.cancel_rating());
    }

    /// Persist the open rating, then re-fetch the list (the server owns
    /// aggregate score derivation) and re-select the same submission so
    /// the detail view shows server truth.
    pub fn save_rating(&self) {
        let vm = *self;
        let Some(request) = vm.flow.with_untracked(|f| f.save_request()) else {
            return;
        };
        vm.busy.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::update_points(&request).await {
                Ok(()) => {
                    match model::fetch_all().await {
                        Ok(rows) => vm.submissions.set(rows),
                        Err(e) => vm.toasts.error(format!("List refresh failed: {}", e)),
                    }
                    match model::fetch_submission(request.esg_data_id).await {
                        Ok(fresh) => {
                            vm.flow.update(|f| f.reconcile(fresh));
                            vm.toasts.success("Rating saved");
                        }
                        Err(e) => vm
                            .toasts
                            .error(format!("Failed to reload submission: {}", e)),
                    }
                }
                Err(e) => vm.toasts.error(format!("Failed to save rating: {}", e)),
            }
            vm.busy.set(false);
        });
    }

    /// Approve or reject a submission, from the list or the detail view.
    /// The detail view closes only after the server confirms.
    pub fn set_status(&self, id: Uuid, status: ReviewStatus, comments: Option<String>) {
        let vm = *self;
        vm.busy.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let request = ReviewRequest {
                status,
                review_comments: comments,
            };
            match model::review(id, &request).await {
                Ok(()) => {
                    vm.toasts
                        .success(format!("Submission {}", status.display_name().to_lowercase()));
                    vm.flow.update(|f| f.status_changed(id));
                    match model::fetch_all().await {
                        Ok(rows) => vm.submissions.set(rows),
                        Err(e) => vm.toasts.error(format!("List refresh failed: {}", e)),
                    }
                }
                Err(e) => vm.toasts.error(format!("Status change failed: {}", e)),
            }
            vm.busy.set(false);
        });
    }

    pub fn close_detail(&self) {
        self.flow.update(|f| f.close_detail());
    }
}
