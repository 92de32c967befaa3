use super::model;
use crate::shared::components::RatingBar;
use crate::shared::notify::use_toasts;
use contracts::dashboards::d100_supplier_overview::DashboardData;
use leptos::prelude::*;

fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

#[component]
pub fn SupplierDashboard() -> impl IntoView {
    let toasts = use_toasts();
    let data = RwSignal::new(None::<DashboardData>);
    let loading = RwSignal::new(true);

    wasm_bindgen_futures::spawn_local(async move {
        match model::fetch().await {
            Ok(fetched) => data.set(fetched),
            Err(e) => toasts.error(format!("Failed to load dashboard: {}", e)),
        }
        loading.set(false);
    });

    view! {
        <div class="dashboard">
            <h2>"Your submission"</h2>

            {move || {
                if loading.get() {
                    return view! { <div class="dashboard__loading">"Loading..."</div> }.into_any();
                }
                match data.get() {
                    None => view! {
                        <div class="dashboard__empty">
                            "Nothing submitted yet. Fill in the questionnaires and submit for review."
                        </div>
                    }
                        .into_any(),
                    Some(dashboard) => {
                        view! {
                            <div class="dashboard__summary">
                                <div class="stat-card">
                                    <label>"Status"</label>
                                    <span class="stat-card__value">
                                        {dashboard.status.display_name()}
                                    </span>
                                </div>
                                <div class="stat-card">
                                    <label>"Overall score"</label>
                                    <RatingBar points=Signal::derive(move || dashboard.overall_score) />
                                </div>
                                <div class="stat-card">
                                    <label>"Submitted"</label>
                                    <span class="stat-card__value">
                                        {dashboard
                                            .submitted_at
                                            .map(format_timestamp)
                                            .unwrap_or_else(|| "-".to_string())}
                                    </span>
                                </div>
                            </div>

                            <table class="data-table dashboard__categories">
                                <thead>
                                    <tr>
                                        <th>"Category"</th>
                                        <th>"Score"</th>
                                        <th>"Sections rated"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {dashboard
                                        .categories
                                        .iter()
                                        .map(|category| {
                                            let points = category.points;
                                            view! {
                                                <tr>
                                                    <td>{category.category.clone()}</td>
                                                    <td>
                                                        <RatingBar points=Signal::derive(move || points) />
                                                    </td>
                                                    <td>
                                                        {format!(
                                                            "{} / {}",
                                                            category.rated_sections,
                                                            category.total_sections,
                                                        )}
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
