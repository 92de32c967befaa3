use leptos::prelude::*;

/// Proportional bar for a server-assigned section rating (0..=1 mapped
/// to 0..=100%). Purely presentational.
#[component]
pub fn RatingBar(#[prop(into)] points: Signal<f64>) -> impl IntoView {
    let percent = move || (points.get().clamp(0.0, 1.0) * 100.0).round() as u32;

    view! {
        <div class="rating">
            <div class="rating__track">
                <div
                    class="rating__fill"
                    style=move || format!("width: {}%", percent())
                ></div>
            </div>
            <span class="rating__value">{move || format!("{}%", percent())}</span>
        </div>
    }
}
