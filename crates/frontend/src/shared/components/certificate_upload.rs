//! Attachment slot of one form section.
//!
//! One governing certificate per section: a local selection replaces any
//! stored document until the next save uploads it. Stored documents can
//! be downloaded back; the review rating appears underneath once the
//! section has been rated.

use super::rating_bar::RatingBar;
use crate::shared::download::download_media_file;
use crate::shared::icons::icon;
use crate::shared::notify::use_toasts;
use crate::shared::wizard::WizardVm;
use contracts::domain::common::CertificateSlot;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

#[component]
pub fn CertificateUpload<F>(vm: WizardVm<F>, step: usize, disabled: bool) -> impl IntoView
where
    F: Clone + Default + Send + Sync + 'static,
{
    let toasts = use_toasts();
    let slot = Memo::new(move |_| vm.engine.with(|e| e.certificate_slot(step)));
    let meta = Memo::new(move |_| vm.engine.with(|e| e.section_meta(step)));

    let handle_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = match ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        {
            Some(input) => input,
            None => return,
        };
        let files = match input.files() {
            Some(files) => files,
            None => return,
        };
        // The input solicits one file; a multi-selection has no server
        // contract and is rejected instead of silently picking one.
        if files.length() > 1 {
            toasts.error("Attach a single certificate file");
            input.set_value("");
            return;
        }
        if let Some(file) = files.item(0) {
            vm.select_certificate(step, file);
        }
    };

    let handle_download = move |_| {
        if let CertificateSlot::Remote { path } = slot.get() {
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = download_media_file(&path).await {
                    toasts.error(format!("Download failed: {}", e));
                }
            });
        }
    };

    view! {
        <div class="certificate">
            <label class="certificate__label">"Supporting certificate"</label>
            <div class="certificate__slot">
                <input
                    type="file"
                    class="certificate__input"
                    disabled=disabled
                    on:change=handle_change
                />
                {move || {
                    slot.get().display_name().map(|name| {
                        view! {
                            <span class="certificate__filename">
                                {icon("file")}
                                {name}
                            </span>
                        }
                    })
                }}
                {move || {
                    matches!(slot.get(), CertificateSlot::Remote { .. }).then(|| {
                        view! {
                            <button class="btn btn-secondary" on:click=handle_download>
                                {icon("download")}
                                "Download"
                            </button>
                        }
                    })
                }}
            </div>
            {move || {
                let meta = meta.get();
                meta.is_rated().then(|| {
                    view! {
                        <div class="certificate__review">
                            <RatingBar points=Signal::derive(move || {
                                vm.engine.with(|e| e.section_meta(step).points)
                            }) />
                            {meta.remarks.clone().filter(|r| !r.is_empty()).map(|remarks| {
                                view! {
                                    <p class="certificate__remarks">{remarks}</p>
                                }
                            })}
                        </div>
                    }
                })
            }}
        </div>
    }
}
