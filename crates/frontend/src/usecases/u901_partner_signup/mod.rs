//! Partner signup: a standalone lead-capture form with no connection to
//! the questionnaire state.

use crate::shared::http;
use crate::shared::icons::icon;
use crate::shared::notify::use_toasts;
use contracts::usecases::u901_partner_signup::PartnerSignupRequest;
use leptos::prelude::*;

async fn submit(request: &PartnerSignupRequest) -> Result<(), String> {
    http::post_ack("/submit-partner", request).await
}

#[component]
pub fn PartnerSignupForm() -> impl IntoView {
    let toasts = use_toasts();
    let form = RwSignal::new(PartnerSignupRequest::default());
    let busy = RwSignal::new(false);

    let handle_submit = move |_| {
        let current = form.get_untracked();
        if let Err(reason) = current.validate() {
            toasts.error(reason);
            return;
        }
        busy.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match submit(&current).await {
                Ok(()) => {
                    toasts.success("Thanks, we will be in touch");
                    form.set(PartnerSignupRequest::default());
                }
                Err(e) => toasts.error(format!("Could not send the request: {}", e)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="partner-signup">
            <h2>"Become a partner"</h2>

            <div class="form-group">
                <label for="partner_name">"Name"</label>
                <input
                    type="text"
                    id="partner_name"
                    prop:value=move || form.get().name
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.name = value);
                    }
                />
            </div>

            <div class="form-group">
                <label for="partner_email">"Email"</label>
                <input
                    type="email"
                    id="partner_email"
                    prop:value=move || form.get().email
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.email = value);
                    }
                />
            </div>

            <div class="form-group">
                <label for="partner_company">"Company"</label>
                <input
                    type="text"
                    id="partner_company"
                    prop:value=move || form.get().company
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.company = value);
                    }
                />
            </div>

            <div class="form-group">
                <label for="partner_message">"Message"</label>
                <textarea
                    id="partner_message"
                    prop:value=move || form.get().message
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.message = value);
                    }
                    rows="4"
                    placeholder="Tell us about your company (optional)"
                />
            </div>

            <button
                class="btn btn-primary"
                disabled=move || busy.get()
                on:click=handle_submit
            >
                {icon("send")}
                "Send"
            </button>
        </div>
    }
}
