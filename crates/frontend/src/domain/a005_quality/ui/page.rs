use super::model;
use super::sections::{CertificationsEditor, QualityManagementEditor};
use crate::layout::portal_context::use_portal_config;
use crate::shared::wizard::{StepDescriptor, Wizard, WizardSchema, WizardVm};
use contracts::domain::a005_quality::aggregate::QualityForm;
use contracts::domain::common::Section;
use leptos::prelude::*;

fn certifications(f: &QualityForm) -> &dyn Section {
    &f.certifications
}
fn certifications_mut(f: &mut QualityForm) -> &mut dyn Section {
    &mut f.certifications
}
fn management(f: &QualityForm) -> &dyn Section {
    &f.quality_management
}
fn management_mut(f: &mut QualityForm) -> &mut dyn Section {
    &mut f.quality_management
}

pub static SCHEMA: WizardSchema<QualityForm> = WizardSchema {
    category: Some(QualityForm::CATEGORY),
    upload_category: QualityForm::CATEGORY,
    save_path: "/esg/update",
    steps: &[
        StepDescriptor {
            key: "certifications",
            title: "Certifications",
            section: certifications,
            section_mut: certifications_mut,
        },
        StepDescriptor {
            key: "qualityManagement",
            title: "Quality management",
            section: management,
            section_mut: management_mut,
        },
    ],
};

#[component]
pub fn QualityWizard() -> impl IntoView {
    let vm = WizardVm::new(&SCHEMA);
    vm.hydrate_with(model::fetch());

    let disabled = use_portal_config().read_only;
    let editor = Callback::new(move |step: usize| match step {
        0 => view! { <CertificationsEditor vm=vm disabled=disabled /> }.into_any(),
        _ => view! { <QualityManagementEditor vm=vm disabled=disabled /> }.into_any(),
    });

    view! { <Wizard vm=vm editor=editor /> }
}
