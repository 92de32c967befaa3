use super::view_model::WizardVm;
use crate::layout::portal_context::use_portal_config;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Generic questionnaire page: step bar, current section editor,
/// navigation controls. The `editor` callback renders the editor of the
/// step it is given; everything else is shared across areas.
#[component]
pub fn Wizard<F>(
    vm: WizardVm<F>,
    #[prop(into)] editor: Callback<usize, AnyView>,
) -> impl IntoView
where
    F: Clone + Default + Send + Sync + 'static,
{
    let read_only = use_portal_config().read_only;

    // Re-create the editor only when the step changes; field edits update
    // the existing controls through their own bindings.
    let current = Memo::new(move |_| vm.engine.with(|e| e.current_step()));

    view! {
        <div class="wizard">
            <StepBar vm=vm read_only=read_only />
            {move || {
                if vm.loading.get() {
                    view! { <div class="wizard__loading">"Loading saved data..."</div> }
                        .into_any()
                } else {
                    editor.run(current.get())
                }
            }}
            <Controls vm=vm read_only=read_only />
        </div>
    }
}

#[component]
fn StepBar<F>(vm: WizardVm<F>, read_only: bool) -> impl IntoView
where
    F: Clone + Default + Send + Sync + 'static,
{
    view! {
        <div class="wizard__steps">
            {move || {
                vm.engine.with(|e| {
                    let current = e.current_step();
                    (0..e.step_count())
                        .map(|i| {
                            let title = e.step(i).title;
                            let saved = e.is_saved(i);
                            let class = if i == current {
                                "wizard-step wizard-step--current"
                            } else if saved {
                                "wizard-step wizard-step--saved"
                            } else {
                                "wizard-step"
                            };
                            view! {
                                <button
                                    class=class
                                    on:click=move |_| vm.jump_to(i, read_only)
                                >
                                    <span class="wizard-step__index">{i + 1}</span>
                                    <span class="wizard-step__title">{title}</span>
                                    {saved.then(|| icon("check"))}
                                </button>
                            }
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}

#[component]
fn Controls<F>(vm: WizardVm<F>, read_only: bool) -> impl IntoView
where
    F: Clone + Default + Send + Sync + 'static,
{
    let busy = vm.busy;
    let at_first = move || vm.engine.with(|e| e.current_step() == 0);
    let at_last = move || vm.engine.with(|e| e.is_last_step());

    view! {
        <div class="wizard__controls">
            <button
                class="btn btn-secondary"
                disabled=move || at_first() || busy.get()
                on:click=move |_| vm.back()
            >
                {icon("arrow-left")}
                "Back"
            </button>

            {move || {
                if read_only {
                    // Browsing only: plain forward navigation, no saves
                    (!at_last())
                        .then(|| {
                            view! {
                                <button
                                    class="btn btn-secondary"
                                    on:click=move |_| {
                                        let next = vm.engine.with(|e| e.current_step() + 1);
                                        vm.jump_to(next, true);
                                    }
                                >
                                    "Next"
                                    {icon("arrow-right")}
                                </button>
                            }
                        })
                        .into_any()
                } else if at_last() {
                    view! {
                        <button
                            class="btn btn-secondary"
                            disabled=move || busy.get()
                            on:click=move |_| vm.save()
                        >
                            {icon("save")}
                            "Save"
                        </button>
                        <button
                            class="btn btn-primary"
                            disabled=move || busy.get()
                            on:click=move |_| vm.submit()
                        >
                            {icon("send")}
                            "Submit for review"
                        </button>
                    }
                    .into_any()
                } else {
                    view! {
                        <button
                            class="btn btn-secondary"
                            disabled=move || busy.get()
                            on:click=move |_| vm.save()
                        >
                            {icon("save")}
                            "Save"
                        </button>
                        <button
                            class="btn btn-primary"
                            disabled=move || busy.get()
                            on:click=move |_| vm.next()
                        >
                            "Save & next"
                            {icon("arrow-right")}
                        </button>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
