//! Detail view of one submission plus the per-section rating dialog.

use super::view_model::ReviewVm;
use crate::domain::a006_submission::flow::ReviewStage;
use crate::shared::components::RatingBar;
use crate::shared::download::download_media_file;
use crate::shared::icons::icon;
use crate::shared::notify::use_toasts;
use contracts::domain::a006_submission::aggregate::EsgData;
use contracts::domain::common::{filename_from_path, ReviewStatus};
use leptos::prelude::*;

/// One row of the section table, snapshotted from the selected submission.
#[derive(Clone, PartialEq)]
struct SectionRow {
    category: &'static str,
    key: &'static str,
    title: &'static str,
    points: f64,
    remarks: Option<String>,
    certificate: Option<String>,
}

fn section_rows(esg: &EsgData) -> Vec<SectionRow> {
    let mut rows = Vec::new();
    for (category, keys) in EsgData::CATEGORIES {
        for key in keys {
            if let Some(section) = esg.section(category, key) {
                let meta = section.meta();
                rows.push(SectionRow {
                    category,
                    key,
                    title: section.title(),
                    points: meta.points,
                    remarks: meta.remarks.clone(),
                    certificate: meta.certificate.clone(),
                });
            }
        }
    }
    rows
}

#[component]
pub fn SubmissionDetailView(vm: ReviewVm) -> impl IntoView {
    let toasts = use_toasts();
    let comments = RwSignal::new(String::new());

    let company_name = move || {
        vm.flow.with(|f| {
            f.selected()
                .map(|d| d.company.profile.company_name.clone())
                .unwrap_or_default()
        })
    };
    let status = move || {
        vm.flow
            .with(|f| f.selected().map(|d| d.status).unwrap_or_default())
    };
    let overall = move || {
        vm.flow
            .with(|f| f.selected().map(|d| d.overall_score).unwrap_or_default())
    };
    let selected_id = move || vm.flow.with(|f| f.selected_id());

    view! {
        <div class="submission-detail">
            <div class="submission-detail__header">
                <button class="btn btn-secondary" on:click=move |_| vm.close_detail()>
                    {icon("arrow-left")}
                    "Back to list"
                </button>
                <h2>{company_name}</h2>
                <span class="submission-detail__status">{move || status().display_name()}</span>
            </div>

            <div class="submission-detail__score">
                <label>"Overall score"</label>
                <RatingBar points=Signal::derive(overall) />
            </div>

            <table class="data-table submission-detail__sections">
                <thead>
                    <tr>
                        <th>"Category"</th>
                        <th>"Section"</th>
                        <th>"Rating"</th>
                        <th>"Remarks"</th>
                        <th>"Certificate"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = vm
                            .flow
                            .with(|f| f.selected().map(|d| section_rows(&d.esg)))
                            .unwrap_or_default();
                        rows.into_iter()
                            .map(|row| {
                                let certificate = row.certificate.clone();
                                view! {
                                    <tr>
                                        <td class="submission-detail__category">{row.category}</td>
                                        <td>{row.title}</td>
                                        <td>
                                            {if row.points > 0.0 {
                                                view! {
                                                    <RatingBar points=Signal::derive(move || row.points) />
                                                }
                                                    .into_any()
                                            } else {
                                                view! { <span class="muted">"Not rated"</span> }.into_any()
                                            }}
                                        </td>
                                        <td class="submission-detail__remarks">
                                            {row.remarks.clone().unwrap_or_else(|| "-".to_string())}
                                        </td>
                                        <td>
                                            {certificate
                                                .map(|path| {
                                                    let label = filename_from_path(&path);
                                                    view! {
                                                        <button
                                                            class="btn btn-link"
                                                            on:click=move |_| {
                                                                let path = path.clone();
                                                                wasm_bindgen_futures::spawn_local(async move {
                                                                    if let Err(e) = download_media_file(&path).await {
                                                                        toasts.error(format!("Download failed: {}", e));
                                                                    }
                                                                });
                                                            }
                                                        >
                                                            {icon("download")}
                                                            {label}
                                                        </button>
                                                    }
                                                        .into_any()
                                                })
                                                .unwrap_or_else(|| {
                                                    view! { <span class="muted">"-"</span> }.into_any()
                                                })}
                                        </td>
                                        <td>
                                            <button
                                                class="btn btn-secondary"
                                                on:click=move |_| {
                                                    vm.open_rating(row.category.to_string(), row.key.to_string())
                                                }
                                            >
                                                "Rate"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            <div class="submission-detail__review">
                <div class="form-group">
                    <label for="review_comments">"Review comments"</label>
                    <textarea
                        id="review_comments"
                        prop:value=move || comments.get()
                        on:input=move |ev| comments.set(event_target_value(&ev))
                        rows="3"
                        placeholder="Shared with the supplier on approval or rejection"
                    />
                </div>
                <div class="submission-detail__actions">
                    <button
                        class="btn btn-primary"
                        disabled=move || vm.busy.get()
                        on:click=move |_| {
                            if let Some(id) = selected_id() {
                                let text = comments.get_untracked();
                                vm.set_status(
                                    id,
                                    ReviewStatus::Approved,
                                    (!text.trim().is_empty()).then_some(text),
                                );
                            }
                        }
                    >
                        {icon("check")}
                        "Approve"
                    </button>
                    <button
                        class="btn btn-danger"
                        disabled=move || vm.busy.get()
                        on:click=move |_| {
                            if let Some(id) = selected_id() {
                                let text = comments.get_untracked();
                                vm.set_status(
                                    id,
                                    ReviewStatus::Rejected,
                                    (!text.trim().is_empty()).then_some(text),
                                );
                            }
                        }
                    >
                        {icon("x")}
                        "Reject"
                    </button>
                </div>
            </div>

            {move || {
                (vm.flow.with(|f| f.stage()) == ReviewStage::Rating)
                    .then(|| view! { <RatingDialog vm=vm /> })
            }}
        </div>
    }
}

/// Modal dialog for rating one section's evidence.
#[component]
fn RatingDialog(vm: ReviewVm) -> impl IntoView {
    let title = move || {
        vm.flow
            .with(|f| f.buffer().map(|b| b.title).unwrap_or_default())
    };
    let points = move || {
        vm.flow
            .with(|f| f.buffer().map(|b| b.points).unwrap_or_default())
    };
    let remarks = move || {
        vm.flow
            .with(|f| f.buffer().map(|b| b.remarks.clone()).unwrap_or_default())
    };

    view! {
        <div class="modal-overlay" on:click=move |_| vm.cancel_rating()>
            <div class="modal rating-dialog" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>{move || format!("Rate: {}", title())}</h3>
                    <button class="btn btn-icon" on:click=move |_| vm.cancel_rating()>
                        {icon("x")}
                    </button>
                </div>

                <div class="modal-body">
                    <div class="form-group">
                        <label for="rating_points">
                            {move || format!("Rating: {:.0}%", points() * 100.0)}
                        </label>
                        <input
                            type="range"
                            id="rating_points"
                            min="0"
                            max="1"
                            step="0.05"
                            prop:value=move || format!("{}", points())
                            on:input=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                                    vm.set_points(value);
                                }
                            }
                        />
                        <RatingBar points=Signal::derive(points) />
                    </div>

                    <div class="form-group">
                        <label for="rating_remarks">"Remarks"</label>
                        <textarea
                            id="rating_remarks"
                            prop:value=remarks
                            on:input=move |ev| vm.set_remarks(event_target_value(&ev))
                            rows="3"
                            placeholder="What the evidence does or does not show"
                        />
                    </div>
                </div>

                <div class="modal-footer">
                    <button
                        class="btn btn-primary"
                        disabled=move || vm.busy.get()
                        on:click=move |_| vm.save_rating()
                    >
                        {icon("save")}
                        "Save rating"
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| vm.cancel_rating()>
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}
