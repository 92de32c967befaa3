use super::model;
use super::sections::{EmissionsEditor, RenewableEnergyEditor, WasteManagementEditor};
use crate::layout::portal_context::use_portal_config;
use crate::shared::wizard::{StepDescriptor, Wizard, WizardSchema, WizardVm};
use contracts::domain::a002_environment::aggregate::EnvironmentForm;
use contracts::domain::common::Section;
use leptos::prelude::*;

fn renewable(f: &EnvironmentForm) -> &dyn Section {
    &f.renewable_energy
}
fn renewable_mut(f: &mut EnvironmentForm) -> &mut dyn Section {
    &mut f.renewable_energy
}
fn emissions(f: &EnvironmentForm) -> &dyn Section {
    &f.emissions
}
fn emissions_mut(f: &mut EnvironmentForm) -> &mut dyn Section {
    &mut f.emissions
}
fn waste(f: &EnvironmentForm) -> &dyn Section {
    &f.waste_management
}
fn waste_mut(f: &mut EnvironmentForm) -> &mut dyn Section {
    &mut f.waste_management
}

pub static SCHEMA: WizardSchema<EnvironmentForm> = WizardSchema {
    category: Some(EnvironmentForm::CATEGORY),
    upload_category: EnvironmentForm::CATEGORY,
    save_path: "/esg/update",
    steps: &[
        StepDescriptor {
            key: "renewableEnergy",
            title: "Renewable energy",
            section: renewable,
            section_mut: renewable_mut,
        },
        StepDescriptor {
            key: "emissions",
            title: "Emissions",
            section: emissions,
            section_mut: emissions_mut,
        },
        StepDescriptor {
            key: "wasteManagement",
            title: "Waste management",
            section: waste,
            section_mut: waste_mut,
        },
    ],
};

#[component]
pub fn EnvironmentWizard() -> impl IntoView {
    let vm = WizardVm::new(&SCHEMA);
    vm.hydrate_with(model::fetch());

    let disabled = use_portal_config().read_only;
    let editor = Callback::new(move |step: usize| match step {
        0 => view! { <RenewableEnergyEditor vm=vm disabled=disabled /> }.into_any(),
        1 => view! { <EmissionsEditor vm=vm disabled=disabled /> }.into_any(),
        _ => view! { <WasteManagementEditor vm=vm disabled=disabled /> }.into_any(),
    });

    view! { <Wizard vm=vm editor=editor /> }
}
