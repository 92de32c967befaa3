use super::details::SubmissionDetailView;
use super::list::SubmissionList;
use super::view_model::ReviewVm;
use crate::domain::a006_submission::flow::ReviewStage;
use leptos::prelude::*;

/// Review console: list of submissions, detail view, rating dialog.
#[component]
pub fn AdminPortal() -> impl IntoView {
    let vm = ReviewVm::new();
    vm.load_list();

    view! {
        <div class="admin-portal">
            {move || match vm.flow.with(|f| f.stage()) {
                ReviewStage::Listing => view! { <SubmissionList vm=vm /> }.into_any(),
                ReviewStage::Viewing | ReviewStage::Rating => {
                    view! { <SubmissionDetailView vm=vm /> }.into_any()
                }
            }}
        </div>
    }
}
