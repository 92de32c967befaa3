use crate::shared::components::CertificateUpload;
use crate::shared::form_utils::{number_value, parse_number};
use crate::shared::icons::icon;
use crate::shared::wizard::WizardVm;
use contracts::domain::a002_environment::aggregate::EnvironmentForm;
use leptos::prelude::*;

const STEP_RENEWABLE: usize = 0;
const STEP_EMISSIONS: usize = 1;
const STEP_WASTE: usize = 2;

#[component]
pub fn RenewableEnergyEditor(vm: WizardVm<EnvironmentForm>, disabled: bool) -> impl IntoView {
    view! {
        <div class="section-editor renewable-energy">
            <h3>"Renewable energy"</h3>

            <div class="form-group">
                <label for="renewable_share">"Share of renewables in consumption, %"</label>
                <input
                    type="number"
                    id="renewable_share"
                    prop:value=move || vm.engine.with(|e| number_value(e.form().renewable_energy.renewable_share_percent))
                    on:input=move |ev| {
                        let value = parse_number(&event_target_value(&ev));
                        vm.engine.update(|e| e.edit_section(STEP_RENEWABLE, |f| f.renewable_energy.renewable_share_percent = value));
                    }
                    min="0"
                    max="100"
                    disabled=disabled
                />
            </div>

            <div class="form-group">
                <label>"Energy sources"</label>
                // Rows are keyed by index so typing does not rebuild them
                <For
                    each=move || 0..vm.engine.with(|e| e.form().renewable_energy.energy_sources.len())
                    key=|i| *i
                    children=move |i| {
                        view! {
                            <div class="list-row">
                                <input
                                    type="text"
                                    prop:value=move || vm.engine.with(|e| {
                                        e.form().renewable_energy.energy_sources.get(i).cloned().unwrap_or_default()
                                    })
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        vm.engine.update(|e| e.edit_section(STEP_RENEWABLE, |f| {
                                            if let Some(entry) = f.renewable_energy.energy_sources.get_mut(i) {
                                                *entry = value;
                                            }
                                        }));
                                    }
                                    placeholder="e.g. Wind PPA, rooftop solar"
                                    disabled=disabled
                                />
                                <button
                                    class="btn btn-icon"
                                    disabled=disabled
                                    on:click=move |_| {
                                        vm.engine.update(|e| e.edit_section(STEP_RENEWABLE, |f| {
                                            f.renewable_energy.energy_sources.remove(i);
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
                        vm.engine.update(|e| e.edit_section(STEP_RENEWABLE, |f| {
                            f.renewable_energy.energy_sources.push(String::new());
                        }));
                    }
                >
                    {icon("plus")}
                    "Add source"
                </button>
            </div>

            <div class="form-group">
                <label for="annual_consumption">"Annual consumption, MWh"</label>
                <input
                    type="number"
                    id="annual_consumption"
                    prop:value=move || vm.engine.with(|e| number_value(e.form().renewable_energy.annual_consumption_mwh))
                    on:input=move |ev| {
                        let value = parse_number(&event_target_value(&ev));
                        vm.engine.update(|e| e.edit_section(STEP_RENEWABLE, |f| f.renewable_energy.annual_consumption_mwh = value));
                    }
                    min="0"
                    disabled=disabled
                />
            </div>

            <CertificateUpload vm=vm step=STEP_RENEWABLE disabled=disabled />
        </div>
    }
}

#[component]
pub fn EmissionsEditor(vm: WizardVm<EnvironmentForm>, disabled: bool) -> impl IntoView {
    view! {
        <div class="section-editor emissions">
            <h3>"Greenhouse gas emissions"</h3>

            <div class="form-grid">
                <div class="form-group">
                    <label for="scope1">"Scope 1, t CO2e"</label>
                    <input
                        type="number"
                        id="scope1"
                        prop:value=move || vm.engine.with(|e| number_value(e.form().emissions.scopes.scope1))
                        on:input=move |ev| {
                            let value = parse_number(&event_target_value(&ev));
                            vm.engine.update(|e| e.edit_section(STEP_EMISSIONS, |f| f.emissions.scopes.scope1 = value));
                        }
                        min="0"
                        disabled=disabled
                    />
                </div>

                <div class="form-group">
                    <label for="scope2">"Scope 2, t CO2e"</label>
                    <input
                        type="number"
                        id="scope2"
                        prop:value=move || vm.engine.with(|e| number_value(e.form().emissions.scopes.scope2))
                        on:input=move |ev| {
                            let value = parse_number(&event_target_value(&ev));
                            vm.engine.update(|e| e.edit_section(STEP_EMISSIONS, |f| f.emissions.scopes.scope2 = value));
                        }
                        min="0"
                        disabled=disabled
                    />
                </div>

                <div class="form-group">
                    <label for="scope3">"Scope 3, t CO2e"</label>
                    <input
                        type="number"
                        id="scope3"
                        prop:value=move || vm.engine.with(|e| number_value(e.form().emissions.scopes.scope3))
                        on:input=move |ev| {
                            let value = parse_number(&event_target_value(&ev));
                            vm.engine.update(|e| e.edit_section(STEP_EMISSIONS, |f| f.emissions.scopes.scope3 = value));
                        }
                        min="0"
                        disabled=disabled
                    />
                </div>
            </div>

            <div class="form-group">
                <label for="reduction_target">"Reduction target"</label>
                <input
                    type="text"
                    id="reduction_target"
                    prop:value=move || vm.engine.with(|e| e.form().emissions.reduction_target.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.engine.update(|e| e.edit_section(STEP_EMISSIONS, |f| f.emissions.reduction_target = value));
                    }
                    placeholder="e.g. -30% by 2030 against a 2020 baseline"
                    disabled=disabled
                />
            </div>

            <div class="form-group">
                <label for="target_year">"Target year"</label>
                <input
                    type="number"
                    id="target_year"
                    prop:value=move || vm.engine.with(|e| number_value(e.form().emissions.target_year))
                    on:input=move |ev| {
                        let value = parse_number(&event_target_value(&ev));
                        vm.engine.update(|e| e.edit_section(STEP_EMISSIONS, |f| f.emissions.target_year = value));
                    }
                    disabled=disabled
                />
            </div>

            <CertificateUpload vm=vm step=STEP_EMISSIONS disabled=disabled />
        </div>
    }
}

#[component]
pub fn WasteManagementEditor(vm: WizardVm<EnvironmentForm>, disabled: bool) -> impl IntoView {
    view! {
        <div class="section-editor waste-management">
            <h3>"Waste management"</h3>

            <div class="form-group">
                <label for="recycling_rate">"Recycling rate, %"</label>
                <input
                    type="number"
                    id="recycling_rate"
                    prop:value=move || vm.engine.with(|e| number_value(e.form().waste_management.recycling_rate_percent))
                    on:input=move |ev| {
                        let value = parse_number(&event_target_value(&ev));
                        vm.engine.update(|e| e.edit_section(STEP_WASTE, |f| f.waste_management.recycling_rate_percent = value));
                    }
                    min="0"
                    max="100"
                    disabled=disabled
                />
            </div>

            <div class="form-group">
                <label for="hazardous_policy">"Hazardous waste policy"</label>
                <textarea
                    id="hazardous_policy"
                    prop:value=move || vm.engine.with(|e| e.form().waste_management.hazardous_waste_policy.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.engine.update(|e| e.edit_section(STEP_WASTE, |f| f.waste_management.hazardous_waste_policy = value));
                    }
                    rows="4"
                    placeholder="How hazardous waste is handled and by whom"
                    disabled=disabled
                />
            </div>

            <div class="form-group form-group--inline">
                <input
                    type="checkbox"
                    id="landfill_diversion"
                    prop:checked=move || vm.engine.with(|e| e.form().waste_management.landfill_diversion_program)
                    on:change=move |ev| {
                        let value = event_target_checked(&ev);
                        vm.engine.update(|e| e.edit_section(STEP_WASTE, |f| f.waste_management.landfill_diversion_program = value));
                    }
                    disabled=disabled
                />
                <label for="landfill_diversion">"Landfill diversion program in place"</label>
            </div>

            <CertificateUpload vm=vm step=STEP_WASTE disabled=disabled />
        </div>
    }
}
