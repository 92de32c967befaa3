use super::model;
use super::sections::{BoardCompositionEditor, EthicsPolicyEditor};
use crate::layout::portal_context::use_portal_config;
use crate::shared::wizard::{StepDescriptor, Wizard, WizardSchema, WizardVm};
use contracts::domain::a004_governance::aggregate::GovernanceForm;
use contracts::domain::common::Section;
use leptos::prelude::*;

fn board(f: &GovernanceForm) -> &dyn Section {
    &f.board_composition
}
fn board_mut(f: &mut GovernanceForm) -> &mut dyn Section {
    &mut f.board_composition
}
fn ethics(f: &GovernanceForm) -> &dyn Section {
    &f.ethics_policy
}
fn ethics_mut(f: &mut GovernanceForm) -> &mut dyn Section {
    &mut f.ethics_policy
}

pub static SCHEMA: WizardSchema<GovernanceForm> = WizardSchema {
    category: Some(GovernanceForm::CATEGORY),
    upload_category: GovernanceForm::CATEGORY,
    save_path: "/esg/update",
    steps: &[
        StepDescriptor {
            key: "boardComposition",
            title: "Board composition",
            section: board,
            section_mut: board_mut,
        },
        StepDescriptor {
            key: "ethicsPolicy",
            title: "Ethics & compliance",
            section: ethics,
            section_mut: ethics_mut,
        },
    ],
};

#[component]
pub fn GovernanceWizard() -> impl IntoView {
    let vm = WizardVm::new(&SCHEMA);
    vm.hydrate_with(model::fetch());

    let disabled = use_portal_config().read_only;
    let editor = Callback::new(move |step: usize| match step {
        0 => view! { <BoardCompositionEditor vm=vm disabled=disabled /> }.into_any(),
        _ => view! { <EthicsPolicyEditor vm=vm disabled=disabled /> }.into_any(),
    });

    view! { <Wizard vm=vm editor=editor /> }
}
