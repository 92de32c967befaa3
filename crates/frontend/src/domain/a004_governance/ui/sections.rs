use crate::shared::components::CertificateUpload;
use crate::shared::form_utils::{number_value, parse_number};
use crate::shared::wizard::WizardVm;
use contracts::domain::a004_governance::aggregate::GovernanceForm;
use leptos::prelude::*;

const STEP_BOARD: usize = 0;
const STEP_ETHICS: usize = 1;

#[component]
pub fn BoardCompositionEditor(vm: WizardVm<GovernanceForm>, disabled: bool) -> impl IntoView {
    view! {
        <div class="section-editor board-composition">
            <h3>"Board composition"</h3>

            <div class="form-group">
                <label for="board_size">"Board size"</label>
                <input
                    type="number"
                    id="board_size"
                    prop:value=move || vm.engine.with(|e| number_value(e.form().board_composition.board_size))
                    on:input=move |ev| {
                        let value = parse_number(&event_target_value(&ev));
                        vm.engine.update(|e| e.edit_section(STEP_BOARD, |f| f.board_composition.board_size = value));
                    }
                    min="1"
                    disabled=disabled
                />
            </div>

            <div class="form-group">
                <label for="independent_members">"Independent members"</label>
                <input
                    type="number"
                    id="independent_members"
                    prop:value=move || vm.engine.with(|e| number_value(e.form().board_composition.independent_members))
                    on:input=move |ev| {
                        let value = parse_number(&event_target_value(&ev));
                        vm.engine.update(|e| e.edit_section(STEP_BOARD, |f| f.board_composition.independent_members = value));
                    }
                    min="0"
                    disabled=disabled
                />
            </div>

            <div class="form-group">
                <label for="diversity_percent">"Board diversity, %"</label>
                <input
                    type="number"
                    id="diversity_percent"
                    prop:value=move || vm.engine.with(|e| number_value(e.form().board_composition.diversity_percent))
                    on:input=move |ev| {
                        let value = parse_number(&event_target_value(&ev));
                        vm.engine.update(|e| e.edit_section(STEP_BOARD, |f| f.board_composition.diversity_percent = value));
                    }
                    min="0"
                    max="100"
                    disabled=disabled
                />
            </div>

            <CertificateUpload vm=vm step=STEP_BOARD disabled=disabled />
        </div>
    }
}

#[component]
pub fn EthicsPolicyEditor(vm: WizardVm<GovernanceForm>, disabled: bool) -> impl IntoView {
    view! {
        <div class="section-editor ethics-policy">
            <h3>"Ethics & compliance"</h3>

            <div class="form-group">
                <label for="policy_statement">"Policy statement"</label>
                <textarea
                    id="policy_statement"
                    prop:value=move || vm.engine.with(|e| e.form().ethics_policy.policy_statement.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.engine.update(|e| e.edit_section(STEP_ETHICS, |f| f.ethics_policy.policy_statement = value));
                    }
                    rows="4"
                    placeholder="Anti-corruption and business ethics commitments"
                    disabled=disabled
                />
            </div>

            <div class="form-group form-group--inline">
                <input
                    type="checkbox"
                    id="whistleblower_channel"
                    prop:checked=move || vm.engine.with(|e| e.form().ethics_policy.whistleblower_channel)
                    on:change=move |ev| {
                        let value = event_target_checked(&ev);
                        vm.engine.update(|e| e.edit_section(STEP_ETHICS, |f| f.ethics_policy.whistleblower_channel = value));
                    }
                    disabled=disabled
                />
                <label for="whistleblower_channel">"Whistleblower channel available"</label>
            </div>

            <div class="form-group">
                <label for="last_review_date">"Last policy review"</label>
                <input
                    type="date"
                    id="last_review_date"
                    prop:value=move || vm.engine.with(|e| e.form().ethics_policy.last_review_date.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.engine.update(|e| e.edit_section(STEP_ETHICS, |f| f.ethics_policy.last_review_date = value));
                    }
                    disabled=disabled
                />
            </div>

            <CertificateUpload vm=vm step=STEP_ETHICS disabled=disabled />
        </div>
    }
}
