use super::model;
use super::sections::{CsrProjectsEditor, EmployeeWelfareEditor, SafetyTrainingEditor};
use crate::layout::portal_context::use_portal_config;
use crate::shared::wizard::{StepDescriptor, Wizard, WizardSchema, WizardVm};
use contracts::domain::a003_social::aggregate::SocialForm;
use contracts::domain::common::Section;
use leptos::prelude::*;

fn csr(f: &SocialForm) -> &dyn Section {
    &f.csr_projects
}
fn csr_mut(f: &mut SocialForm) -> &mut dyn Section {
    &mut f.csr_projects
}
fn safety(f: &SocialForm) -> &dyn Section {
    &f.safety_training
}
fn safety_mut(f: &mut SocialForm) -> &mut dyn Section {
    &mut f.safety_training
}
fn welfare(f: &SocialForm) -> &dyn Section {
    &f.employee_welfare
}
fn welfare_mut(f: &mut SocialForm) -> &mut dyn Section {
    &mut f.employee_welfare
}

pub static SCHEMA: WizardSchema<SocialForm> = WizardSchema {
    category: Some(SocialForm::CATEGORY),
    upload_category: SocialForm::CATEGORY,
    save_path: "/esg/update",
    steps: &[
        StepDescriptor {
            key: "csrProjects",
            title: "CSR projects",
            section: csr,
            section_mut: csr_mut,
        },
        StepDescriptor {
            key: "safetyTraining",
            title: "Safety & training",
            section: safety,
            section_mut: safety_mut,
        },
        StepDescriptor {
            key: "employeeWelfare",
            title: "Employee welfare",
            section: welfare,
            section_mut: welfare_mut,
        },
    ],
};

#[component]
pub fn SocialWizard() -> impl IntoView {
    let vm = WizardVm::new(&SCHEMA);
    vm.hydrate_with(model::fetch());

    let disabled = use_portal_config().read_only;
    let editor = Callback::new(move |step: usize| match step {
        0 => view! { <CsrProjectsEditor vm=vm disabled=disabled /> }.into_any(),
        1 => view! { <SafetyTrainingEditor vm=vm disabled=disabled /> }.into_any(),
        _ => view! { <EmployeeWelfareEditor vm=vm disabled=disabled /> }.into_any(),
    });

    view! { <Wizard vm=vm editor=editor /> }
}
