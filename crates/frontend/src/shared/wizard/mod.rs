//! Generic step-gated form engine.
//!
//! One engine runs every questionnaire in the portal; each area plugs in
//! through a static [`WizardSchema`] describing its steps. The engine
//! itself is effect-free: it hands save plans to the ViewModel, which
//! performs the HTTP calls and reports confirmed results back, so all
//! gating rules are ordinary unit-testable code.

pub mod engine;
pub mod view;
pub mod view_model;

pub use engine::{SaveOutcome, SavePlan, StepDescriptor, WizardEngine, WizardSchema};
pub use view::Wizard;
pub use view_model::WizardVm;
