use crate::shared::components::CertificateUpload;
use crate::shared::form_utils::{number_value, parse_number};
use crate::shared::icons::icon;
use crate::shared::wizard::WizardVm;
use contracts::domain::a003_social::aggregate::{CsrProject, SocialForm};
use leptos::prelude::*;

const STEP_CSR: usize = 0;
const STEP_SAFETY: usize = 1;
const STEP_WELFARE: usize = 2;

#[component]
pub fn CsrProjectsEditor(vm: WizardVm<SocialForm>, disabled: bool) -> impl IntoView {
    view! {
        <div class="section-editor csr-projects">
            <h3>"CSR projects"</h3>

            <For
                each=move || 0..vm.engine.with(|e| e.form().csr_projects.projects.len())
                key=|i| *i
                children=move |i| {
                    let project = move || {
                        vm.engine.with(|e| {
                            e.form().csr_projects.projects.get(i).cloned().unwrap_or_default()
                        })
                    };
                    view! {
                        <div class="list-card">
                            <div class="list-card__header">
                                <span>{format!("Project {}", i + 1)}</span>
                                <button
                                    class="btn btn-icon"
                                    disabled=disabled
                                    on:click=move |_| {
                                        vm.engine.update(|e| e.edit_section(STEP_CSR, |f| {
                                            f.csr_projects.projects.remove(i);
                                        }));
                                    }
                                >
                                    {icon("trash")}
                                </button>
                            </div>

                            <div class="form-group">
                                <label>"Project name"</label>
                                <input
                                    type="text"
                                    prop:value=move || project().name
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        vm.engine.update(|e| e.edit_section(STEP_CSR, |f| {
                                            if let Some(p) = f.csr_projects.projects.get_mut(i) {
                                                p.name = value;
                                            }
                                        }));
                                    }
                                    disabled=disabled
                                />
                            </div>

                            <div class="form-group">
                                <label>"Description"</label>
                                <textarea
                                    prop:value=move || project().description
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        vm.engine.update(|e| e.edit_section(STEP_CSR, |f| {
                                            if let Some(p) = f.csr_projects.projects.get_mut(i) {
                                                p.description = value;
                                            }
                                        }));
                                    }
                                    rows="2"
                                    disabled=disabled
                                />
                            </div>

                            <div class="form-group">
                                <label>"Impact"</label>
                                <input
                                    type="text"
                                    prop:value=move || project().impact
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        vm.engine.update(|e| e.edit_section(STEP_CSR, |f| {
                                            if let Some(p) = f.csr_projects.projects.get_mut(i) {
                                                p.impact = value;
                                            }
                                        }));
                                    }
                                    placeholder="e.g. 4 tonnes of river waste removed"
                                    disabled=disabled
                                />
                            </div>

                            <div class="form-group">
                                <label>"Year"</label>
                                <input
                                    type="number"
                                    prop:value=move || number_value(project().year)
                                    on:input=move |ev| {
                                        let value = parse_number(&event_target_value(&ev));
                                        vm.engine.update(|e| e.edit_section(STEP_CSR, |f| {
                                            if let Some(p) = f.csr_projects.projects.get_mut(i) {
                                                p.year = value;
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
                    vm.engine.update(|e| e.edit_section(STEP_CSR, |f| {
                        f.csr_projects.projects.push(CsrProject::default());
                    }));
                }
            >
                {icon("plus")}
                "Add project"
            </button>

            <CertificateUpload vm=vm step=STEP_CSR disabled=disabled />
        </div>
    }
}

#[component]
pub fn SafetyTrainingEditor(vm: WizardVm<SocialForm>, disabled: bool) -> impl IntoView {
    view! {
        <div class="section-editor safety-training">
            <h3>"Safety & training"</h3>

            <div class="form-group">
                <label>"Training topics"</label>
                <For
                    each=move || 0..vm.engine.with(|e| e.form().safety_training.training.topics.len())
                    key=|i| *i
                    children=move |i| {
                        view! {
                            <div class="list-row">
                                <input
                                    type="text"
                                    prop:value=move || vm.engine.with(|e| {
                                        e.form().safety_training.training.topics.get(i).cloned().unwrap_or_default()
                                    })
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        vm.engine.update(|e| e.edit_section(STEP_SAFETY, |f| {
                                            if let Some(entry) = f.safety_training.training.topics.get_mut(i) {
                                                *entry = value;
                                            }
                                        }));
                                    }
                                    placeholder="e.g. Machine lockout procedure"
                                    disabled=disabled
                                />
                                <button
                                    class="btn btn-icon"
                                    disabled=disabled
                                    on:click=move |_| {
                                        vm.engine.update(|e| e.edit_section(STEP_SAFETY, |f| {
                                            f.safety_training.training.topics.remove(i);
                                        }));
                                    }
                                >
                                    {icon("trash")}
                                </button>
                            </div>
                        }
                    }
                />
                <button
                    class="btn btn-secondary"
                    disabled=disabled
                    on:click=move |_| {
                        vm.engine.update(|e| e.edit_section(STEP_SAFETY, |f| {
                            f.safety_training.training.topics.push(String::new());
                        }));
                    }
                >
                    {icon("plus")}
                    "Add topic"
                </button>
            </div>

            <div class="form-group">
                <label for="annual_hours">"Annual training hours per employee"</label>
                <input
                    type="number"
                    id="annual_hours"
                    prop:value=move || vm.engine.with(|e| number_value(e.form().safety_training.training.annual_hours))
                    on:input=move |ev| {
                        let value = parse_number(&event_target_value(&ev));
                        vm.engine.update(|e| e.edit_section(STEP_SAFETY, |f| f.safety_training.training.annual_hours = value));
                    }
                    min="0"
                    disabled=disabled
                />
            </div>

            <div class="form-group">
                <label for="covered_percent">"Employees covered, %"</label>
                <input
                    type="number"
                    id="covered_percent"
                    prop:value=move || vm.engine.with(|e| number_value(e.form().safety_training.training.employees_covered_percent))
                    on:input=move |ev| {
                        let value = parse_number(&event_target_value(&ev));
                        vm.engine.update(|e| e.edit_section(STEP_SAFETY, |f| f.safety_training.training.employees_covered_percent = value));
                    }
                    min="0"
                    max="100"
                    disabled=disabled
                />
            </div>

            <div class="form-group">
                <label for="incident_policy">"Incident policy"</label>
                <textarea
                    id="incident_policy"
                    prop:value=move || vm.engine.with(|e| e.form().safety_training.incident_policy.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.engine.update(|e| e.edit_section(STEP_SAFETY, |f| f.safety_training.incident_policy = value));
                    }
                    rows="3"
                    disabled=disabled
                />
            </div>

            <CertificateUpload vm=vm step=STEP_SAFETY disabled=disabled />
        </div>
    }
}

#[component]
pub fn EmployeeWelfareEditor(vm: WizardVm<SocialForm>, disabled: bool) -> impl IntoView {
    view! {
        <div class="section-editor employee-welfare">
            <h3>"Employee welfare"</h3>

            <div class="form-group">
                <label for="benefits_summary">"Benefits summary"</label>
                <textarea
                    id="benefits_summary"
                    prop:value=move || vm.engine.with(|e| e.form().employee_welfare.benefits_summary.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.engine.update(|e| e.edit_section(STEP_WELFARE, |f| f.employee_welfare.benefits_summary = value));
                    }
                    rows="4"
                    disabled=disabled
                />
            </div>

            <div class="form-group form-group--inline">
                <input
                    type="checkbox"
                    id="grievance_channel"
                    prop:checked=move || vm.engine.with(|e| e.form().employee_welfare.grievance_channel)
                    on:change=move |ev| {
                        let value = event_target_checked(&ev);
                        vm.engine.update(|e| e.edit_section(STEP_WELFARE, |f| f.employee_welfare.grievance_channel = value));
                    }
                    disabled=disabled
                />
                <label for="grievance_channel">"Anonymous grievance channel available"</label>
            </div>

            <div class="form-group">
                <label for="parental_leave">"Parental leave, weeks"</label>
                <input
                    type="number"
                    id="parental_leave"
                    prop:value=move || vm.engine.with(|e| number_value(e.form().employee_welfare.parental_leave_weeks))
                    on:input=move |ev| {
                        let value = parse_number(&event_target_value(&ev));
                        vm.engine.update(|e| e.edit_section(STEP_WELFARE, |f| f.employee_welfare.parental_leave_weeks = value));
                    }
                    min="0"
                    disabled=disabled
                />
            </div>

            <CertificateUpload vm=vm step=STEP_WELFARE disabled=disabled />
        </div>
    }
}
