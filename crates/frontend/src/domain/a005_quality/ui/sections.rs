use crate::shared::components::CertificateUpload;
use crate::shared::icons::icon;
use crate::shared::wizard::WizardVm;
use contracts::domain::a005_quality::aggregate::{QualityCertification, QualityForm};
use leptos::prelude::*;

const STEP_CERTIFICATIONS: usize = 0;
const STEP_MANAGEMENT: usize = 1;

#[component]
pub fn CertificationsEditor(vm: WizardVm<QualityForm>, disabled: bool) -> impl IntoView {
    view! {
        <div class="section-editor certifications">
            <h3>"Quality certifications"</h3>

            <For
                each=move || 0..vm.engine.with(|e| e.form().certifications.certifications.len())
                key=|i| *i
                children=move |i| {
                    let certification = move || {
                        vm.engine.with(|e| {
                            e.form().certifications.certifications.get(i).cloned().unwrap_or_default()
                        })
                    };
                    view! {
                        <div class="list-card">
                            <div class="list-card__header">
                                <span>{format!("Certification {}", i + 1)}</span>
                                <button
                                    class="btn btn-icon"
                                    disabled=disabled
                                    on:click=move |_| {
                                        vm.engine.update(|e| e.edit_section(STEP_CERTIFICATIONS, |f| {
                                            f.certifications.certifications.remove(i);
                                        }));
                                    }
                                >
                                    {icon("trash")}
                                </button>
                            </div>

                            <div class="form-group">
                                <label>"Name"</label>
                                <input
                                    type="text"
                                    prop:value=move || certification().name
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        vm.engine.update(|e| e.edit_section(STEP_CERTIFICATIONS, |f| {
                                            if let Some(c) = f.certifications.certifications.get_mut(i) {
                                                c.name = value;
                                            }
                                        }));
                                    }
                                    placeholder="e.g. ISO 9001"
                                    disabled=disabled
                                />
                            </div>

                            <div class="form-group">
                                <label>"Issuer"</label>
                                <input
                                    type="text"
                                    prop:value=move || certification().issuer
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        vm.engine.update(|e| e.edit_section(STEP_CERTIFICATIONS, |f| {
                                            if let Some(c) = f.certifications.certifications.get_mut(i) {
                                                c.issuer = value;
                                            }
                                        }));
                                    }
                                    disabled=disabled
                                />
                            </div>

                            <div class="form-group">
                                <label>"Valid until"</label>
                                <input
                                    type="date"
                                    prop:value=move || certification().valid_until
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        vm.engine.update(|e| e.edit_section(STEP_CERTIFICATIONS, |f| {
                                            if let Some(c) = f.certifications.certifications.get_mut(i) {
                                                c.valid_until = value;
                                            }
                                        }));
                                    }
                                    disabled=disabled
                                />
                            </div>
                        </div>
                    }
                }
            />

            <button
                class="btn btn-secondary"
                disabled=disabled
                on:click=move |_| {
                    vm.engine.update(|e| e.edit_section(STEP_CERTIFICATIONS, |f| {
                        f.certifications.certifications.push(QualityCertification::default());
                    }));
                }
            >
                {icon("plus")}
                "Add certification"
            </button>

            <CertificateUpload vm=vm step=STEP_CERTIFICATIONS disabled=disabled />
        </div>
    }
}

#[component]
pub fn QualityManagementEditor(vm: WizardVm<QualityForm>, disabled: bool) -> impl IntoView {
    view! {
        <div class="section-editor quality-management">
            <h3>"Quality management"</h3>

            <div class="form-group">
                <label for="qms_description">"Quality management system"</label>
                <textarea
                    id="qms_description"
                    prop:value=move || vm.engine.with(|e| e.form().quality_management.qms_description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.engine.update(|e| e.edit_section(STEP_MANAGEMENT, |f| f.quality_management.qms_description = value));
                    }
                    rows="4"
                    placeholder="How quality is managed across production"
                    disabled=disabled
                />
            </div>

            <div class="form-group form-group--inline">
                <input
                    type="checkbox"
                    id="tracks_defect_rate"
                    prop:checked=move || vm.engine.with(|e| e.form().quality_management.tracks_defect_rate)
                    on:change=move |ev| {
                        let value = event_target_checked(&ev);
                        vm.engine.update(|e| e.edit_section(STEP_MANAGEMENT, |f| f.quality_management.tracks_defect_rate = value));
                    }
                    disabled=disabled
                />
                <label for="tracks_defect_rate">"Defect rate is tracked"</label>
            </div>

            <div class="form-group">
                <label for="last_audit_date">"Last quality audit"</label>
                <input
                    type="date"
                    id="last_audit_date"
                    prop:value=move || vm.engine.with(|e| e.form().quality_management.last_audit_date.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.engine.update(|e| e.edit_section(STEP_MANAGEMENT, |f| f.quality_management.last_audit_date = value));
                    }
                    disabled=disabled
                />
            </div>

            <CertificateUpload vm=vm step=STEP_MANAGEMENT disabled=disabled />
        </div>
    }
}
