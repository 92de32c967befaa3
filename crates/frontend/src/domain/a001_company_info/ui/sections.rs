use crate::shared::components::CertificateUpload;
use crate::shared::form_utils::{number_value, parse_number};
use crate::shared::wizard::WizardVm;
use contracts::domain::a001_company_info::aggregate::CompanyForm;
use leptos::prelude::*;

const STEP_PROFILE: usize = 0;

const INDUSTRIES: [&str; 8] = [
    "Metal fabrication",
    "Electronics",
    "Textiles",
    "Chemicals",
    "Food processing",
    "Construction",
    "Logistics",
    "Other",
];

#[component]
pub fn ProfileEditor(vm: WizardVm<CompanyForm>, disabled: bool) -> impl IntoView {
    view! {
        <div class="section-editor company-profile">
            <h3>"Company profile"</h3>

            <div class="form-group">
                <label for="company_name">"Company name"</label>
                <input
                    type="text"
                    id="company_name"
                    prop:value=move || vm.engine.with(|e| e.form().profile.company_name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.engine.update(|e| e.edit_section(STEP_PROFILE, |f| f.profile.company_name = value));
                    }
                    placeholder="Registered company name"
                    disabled=disabled
                />
            </div>

            <div class="form-group">
                <label for="registration_number">"Registration number"</label>
                <input
                    type="text"
                    id="registration_number"
                    prop:value=move || vm.engine.with(|e| e.form().profile.registration_number.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.engine.update(|e| e.edit_section(STEP_PROFILE, |f| f.profile.registration_number = value));
                    }
                    placeholder="Commercial register number"
                    disabled=disabled
                />
            </div>

            <div class="form-group">
                <label for="address">"Address"</label>
                <input
                    type="text"
                    id="address"
                    prop:value=move || vm.engine.with(|e| e.form().profile.address.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.engine.update(|e| e.edit_section(STEP_PROFILE, |f| f.profile.address = value));
                    }
                    placeholder="Street, city"
                    disabled=disabled
                />
            </div>

            <div class="form-group">
                <label for="country">"Country"</label>
                <input
                    type="text"
                    id="country"
                    prop:value=move || vm.engine.with(|e| e.form().profile.country.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.engine.update(|e| e.edit_section(STEP_PROFILE, |f| f.profile.country = value));
                    }
                    disabled=disabled
                />
            </div>

            <div class="form-group">
                <label for="contact_person">"Contact person"</label>
                <input
                    type="text"
                    id="contact_person"
                    prop:value=move || vm.engine.with(|e| e.form().profile.contact_person.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.engine.update(|e| e.edit_section(STEP_PROFILE, |f| f.profile.contact_person = value));
                    }
                    disabled=disabled
                />
            </div>

            <div class="form-group">
                <label for="contact_email">"Contact email"</label>
                <input
                    type="email"
                    id="contact_email"
                    prop:value=move || vm.engine.with(|e| e.form().profile.contact_email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.engine.update(|e| e.edit_section(STEP_PROFILE, |f| f.profile.contact_email = value));
                    }
                    placeholder="esg-contact@example.com"
                    disabled=disabled
                />
            </div>

            <div class="form-group">
                <label for="phone">"Phone"</label>
                <input
                    type="tel"
                    id="phone"
                    prop:value=move || vm.engine.with(|e| e.form().profile.phone.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.engine.update(|e| e.edit_section(STEP_PROFILE, |f| f.profile.phone = value));
                    }
                    disabled=disabled
                />
            </div>

            <div class="form-group">
                <label for="industry">"Industry"</label>
                <select
                    id="industry"
                    prop:value=move || vm.engine.with(|e| e.form().profile.industry.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        vm.engine.update(|e| e.edit_section(STEP_PROFILE, |f| f.profile.industry = value));
                    }
                    disabled=disabled
                >
                    <option value="">"Select industry"</option>
                    {INDUSTRIES
                        .iter()
                        .map(|industry| view! { <option value=*industry>{*industry}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="employee_count">"Employee count"</label>
                <input
                    type="number"
                    id="employee_count"
                    prop:value=move || vm.engine.with(|e| number_value(e.form().profile.employee_count))
                    on:input=move |ev| {
                        let value = parse_number(&event_target_value(&ev));
                        vm.engine.update(|e| e.edit_section(STEP_PROFILE, |f| f.profile.employee_count = value));
                    }
                    min="1"
                    disabled=disabled
                />
            </div>

            <div class="form-group">
                <label for="year_founded">"Year founded"</label>
                <input
                    type="number"
                    id="year_founded"
                    prop:value=move || vm.engine.with(|e| number_value(e.form().profile.year_founded))
                    on:input=move |ev| {
                        let value = parse_number(&event_target_value(&ev));
                        vm.engine.update(|e| e.edit_section(STEP_PROFILE, |f| f.profile.year_founded = value));
                    }
                    disabled=disabled
                />
            </div>

            <CertificateUpload vm=vm step=STEP_PROFILE disabled=disabled />
        </div>
    }
}
