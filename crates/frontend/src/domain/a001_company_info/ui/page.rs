use super::model;
use super::sections::ProfileEditor;
use crate::layout::portal_context::use_portal_config;
use crate::shared::wizard::{StepDescriptor, Wizard, WizardSchema, WizardVm};
use contracts::domain::a001_company_info::aggregate::CompanyForm;
use contracts::domain::common::Section;
use leptos::prelude::*;

fn profile(f: &CompanyForm) -> &dyn Section {
    &f.profile
}
fn profile_mut(f: &mut CompanyForm) -> &mut dyn Section {
    &mut f.profile
}

pub static SCHEMA: WizardSchema<CompanyForm> = WizardSchema {
    category: None,
    upload_category: CompanyForm::CATEGORY,
    save_path: "/company-info",
    steps: &[StepDescriptor {
        key: "profile",
        title: "Company profile",
        section: profile,
        section_mut: profile_mut,
    }],
};

#[component]
pub fn CompanyWizard() -> impl IntoView {
    let vm = WizardVm::new(&SCHEMA);
    vm.hydrate_with(model::fetch());

    let disabled = use_portal_config().read_only;
    let editor = Callback::new(move |_step: usize| {
        view! { <ProfileEditor vm=vm disabled=disabled /> }.into_any()
    });

    view! { <Wizard vm=vm editor=editor /> }
}
