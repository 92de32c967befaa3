pub mod state;

use self::state::{create_state, sort_submissions};
use super::view_model::ReviewVm;
use crate::shared::icons::icon;
use contracts::domain::common::ReviewStatus;
use leptos::prelude::*;

fn status_badge(status: ReviewStatus) -> AnyView {
    let class = match status {
        ReviewStatus::Pending => "badge badge--pending",
        ReviewStatus::Approved => "badge badge--approved",
        ReviewStatus::Rejected => "badge badge--rejected",
    };
    view! { <span class=class>{status.display_name()}</span> }.into_any()
}

fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

#[component]
pub fn SubmissionList(vm: ReviewVm) -> impl IntoView {
    let state = create_state();

    let sorted_rows = move || {
        let mut rows = vm.submissions.get();
        state.with(|s| sort_submissions(&mut rows, s));
        rows
    };

    let header = move |field: &'static str, label: &'static str| {
        view! {
            <th on:click=move |_| state.update(|s| s.toggle(field))>
                {label}
                <span class="sort-indicator">{move || state.with(|s| s.indicator(field))}</span>
            </th>
        }
    };

    view! {
        <div class="submission-list">
            <div class="submission-list__toolbar">
                <h2>"Supplier submissions"</h2>
                <button class="btn btn-secondary" on:click=move |_| vm.load_list()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </div>

            {move || {
                vm.loading
                    .get()
                    .then(|| view! { <div class="submission-list__loading">"Loading..."</div> })
            }}

            <table class="data-table">
                <thead>
                    <tr>
                        {header("companyName", "Company")}
                        {header("status", "Status")}
                        {header("overallScore", "Score")}
                        {header("updatedAt", "Updated")}
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        sorted_rows()
                            .into_iter()
                            .map(|row| {
                                let id = row.id;
                                view! {
                                    <tr>
                                        <td class="submission-list__company" on:click=move |_| vm.open(id)>
                                            {row.company_name.clone()}
                                        </td>
                                        <td>{status_badge(row.status)}</td>
                                        <td>{format!("{:.0}%", row.overall_score.clamp(0.0, 1.0) * 100.0)}</td>
                                        <td>{format_timestamp(row.updated_at)}</td>
                                        <td class="submission-list__actions">
                                            <button
                                                class="btn btn-icon"
                                                title="Open"
                                                on:click=move |_| vm.open(id)
                                            >
                                                {icon("eye")}
                                            </button>
                                            <button
                                                class="btn btn-icon"
                                                title="Approve"
                                                disabled=move || vm.busy.get()
                                                on:click=move |_| vm.set_status(id, ReviewStatus::Approved, None)
                                            >
                                                {icon("check")}
                                            </button>
                                            <button
                                                class="btn btn-icon"
                                                title="Reject"
                                                disabled=move || vm.busy.get()
                                                on:click=move |_| vm.set_status(id, ReviewStatus::Rejected, None)
                                            >
                                                {icon("x")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            {move || {
                (!vm.loading.get() && vm.submissions.with(|s| s.is_empty()))
                    .then(|| view! { <div class="submission-list__empty">"No submissions yet"</div> })
            }}
        </div>
    }
}
