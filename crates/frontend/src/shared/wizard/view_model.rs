//! ViewModel shared by every questionnaire page.
//!
//! Owns the engine behind a signal, the raw file handles for pending
//! certificate uploads, and the async commands that interpret the
//! engine's save plans against the HTTP adapters. On any adapter failure
//! the engine state is left untouched, so the user can retry without
//! losing input.

use super::engine::{SaveOutcome, SavePlan, WizardEngine, WizardSchema};
use crate::shared::http;
use crate::shared::notify::{use_toasts, ToastService};
use contracts::domain::a006_submission::aggregate::{SectionSaveRequest, UploadedCertificate};
use contracts::domain::common::SectionMeta;
use leptos::prelude::*;
use std::future::Future;

pub struct WizardVm<F: Clone + Default + Send + Sync + 'static> {
    schema: &'static WizardSchema<F>,
    pub engine: RwSignal<WizardEngine<F>>,
    /// Raw browser file handles per step, selected but not yet uploaded.
    /// Kept out of the engine so the gating logic stays platform-free.
    files: StoredValue<Vec<Option<web_sys::File>>, LocalStorage>,
    pub loading: RwSignal<bool>,
    pub busy: RwSignal<bool>,
    toasts: ToastService,
}

impl<F: Clone + Default + Send + Sync + 'static> Clone for WizardVm<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Clone + Default + Send + Sync + 'static> Copy for WizardVm<F> {}

impl<F: Clone + Default + Send + Sync + 'static> WizardVm<F> {
    pub fn new(schema: &'static WizardSchema<F>) -> Self {
        let step_count = schema.steps.len();
        Self {
            schema,
            engine: RwSignal::new(WizardEngine::new(schema, F::default())),
            files: StoredValue::new_local(vec![None; step_count]),
            loading: RwSignal::new(false),
            busy: RwSignal::new(false),
            toasts: use_toasts(),
        }
    }

    /// Hydrate the form from the area's fetch call. A missing record is a
    /// fresh start, not an error.
    pub fn hydrate_with<Fut>(&self, fetch: Fut)
    where
        Fut: Future<Output = Result<Option<F>, String>> + 'static,
    {
        let vm = *self;
        vm.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch.await {
                Ok(Some(form)) => vm.engine.update(|e| e.hydrate(form)),
                Ok(None) => {}
                Err(e) => vm.toasts.error(format!("Failed to load saved data: {}", e)),
            }
            vm.loading.set(false);
        });
    }

    /// Record a local certificate selection for the given step.
    pub fn select_certificate(&self, step: usize, file: web_sys::File) {
        let filename = file.name();
        self.files.update_value(|files| files[step] = Some(file));
        self.engine
            .update(|e| e.certificate_selected(step, filename));
    }

    pub fn save(&self) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            Self::perform_save(vm).await;
        });
    }

    /// Save the current step, then move forward.
    pub fn next(&self) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            if Self::perform_save(vm).await {
                vm.engine.update(|e| {
                    e.try_advance();
                });
            }
        });
    }

    pub fn back(&self) {
        self.engine.update(|e| e.retreat());
    }

    /// Jump from the step bar. Forward jumps are only allowed when the
    /// caller browses read-only; editing flows move forward through
    /// `next` so the gating stays intact.
    pub fn jump_to(&self, step: usize, allow_forward: bool) {
        self.engine.update(|e| {
            if allow_forward || step <= e.current_step() {
                e.go_to(step);
            }
        });
    }

    /// Validate everything, persist the current step, then finalize the
    /// submission. The form stays editable if any call fails.
    pub fn submit(&self) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            if let Err((step, reason)) = vm.engine.with_untracked(|e| e.submit_check()) {
                let title = vm.engine.with_untracked(|e| e.step(step).title);
                vm.toasts.error(format!("{}: {}", title, reason));
                return;
            }
            if !Self::perform_save(vm).await {
                return;
            }
            vm.busy.set(true);
            match http::post_empty_ack("/esg/submit").await {
                Ok(()) => vm.toasts.success("Submitted for review"),
                Err(e) => vm.toasts.error(format!("Submission failed: {}", e)),
            }
            vm.busy.set(false);
        });
    }

    async fn perform_save(vm: Self) -> bool {
        let step = vm.engine.with_untracked(|e| e.current_step());
        match vm.engine.with_untracked(|e| e.plan_save(step)) {
            SaveOutcome::Invalid { reason } => {
                vm.toasts.error(reason);
                false
            }
            SaveOutcome::Persist(plan) => {
                vm.busy.set(true);
                let saved = Self::execute_plan(vm, plan).await;
                vm.busy.set(false);
                saved
            }
        }
    }

    async fn execute_plan(vm: Self, plan: SavePlan) -> bool {
        // A pending local certificate is uploaded first; its remote path
        // replaces the local reference before the section payload is sent.
        if plan.upload.is_some() {
            let file = vm.files.with_value(|files| files[plan.step].clone());
            let Some(file) = file else {
                vm.toasts
                    .error("Selected file is no longer available, please reselect");
                return false;
            };
            let form = match web_sys::FormData::new() {
                Ok(form) => form,
                Err(e) => {
                    vm.toasts.error(format!("{:?}", e));
                    return false;
                }
            };
            if let Err(e) = form.append_with_blob("file", &file) {
                vm.toasts.error(format!("{:?}", e));
                return false;
            }
            _ = form.append_with_str("category", vm.schema.upload_category);
            _ = form.append_with_str("section", plan.section);

            match http::post_multipart::<UploadedCertificate>("/esg/upload-certificate", form)
                .await
            {
                Ok(uploaded) => {
                    vm.engine
                        .update(|e| e.certificate_uploaded(plan.step, uploaded.file_path));
                    vm.files.update_value(|files| files[plan.step] = None);
                }
                Err(e) => {
                    vm.toasts
                        .error(format!("Certificate upload failed: {}", e));
                    return false;
                }
            }
        }

        let body = SectionSaveRequest {
            category: plan.category.map(str::to_string),
            section: plan.section.to_string(),
            data: vm.engine.with_untracked(|e| e.section_payload(plan.step)),
        };
        match http::post_json_optional::<_, SectionMeta>(vm.schema.save_path, &body).await {
            Ok(echo) => {
                vm.engine.update(|e| {
                    if let Some(meta) = echo {
                        e.apply_server_meta(plan.step, meta);
                    }
                    e.mark_saved(plan.step);
                });
                vm.toasts.success("Section saved");
                true
            }
            Err(e) => {
                vm.toasts.error(format!("Save failed: {}", e));
                false
            }
        }
    }
}
