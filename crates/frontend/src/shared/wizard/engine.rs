use contracts::domain::common::{CertificateSlot, Section, SectionMeta};

/// One step of a questionnaire: a wire key, a display title and accessors
/// into the area's typed form aggregate.
pub struct StepDescriptor<F: 'static> {
    pub key: &'static str,
    pub title: &'static str,
    pub section: fn(&F) -> &dyn Section,
    pub section_mut: fn(&mut F) -> &mut dyn Section,
}

/// Static description of one questionnaire area.
pub struct WizardSchema<F: 'static> {
    /// Category dimension of the save body; company info has none
    pub category: Option<&'static str>,
    /// Category sent with certificate uploads (always present)
    pub upload_category: &'static str,
    /// Section save endpoint (`POST`)
    pub save_path: &'static str,
    pub steps: &'static [StepDescriptor<F>],
}

/// What the engine decided about a save request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Validation failed; no persistence may happen
    Invalid { reason: String },
    Persist(SavePlan),
}

/// Instructions for one persistence round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavePlan {
    pub step: usize,
    pub category: Option<&'static str>,
    pub section: &'static str,
    /// Filename of a locally selected certificate that must be uploaded
    /// before the section payload is sent
    pub upload: Option<String>,
}

/// Step-gated form state: current step, per-step saved flags, pending
/// certificate selections and the typed form aggregate itself.
#[derive(Clone)]
pub struct WizardEngine<F: Clone + 'static> {
    schema: &'static WizardSchema<F>,
    form: F,
    current: usize,
    saved: Vec<bool>,
    /// Filename of a selected, not yet uploaded file, per step
    pending: Vec<Option<String>>,
}

impl<F: Clone + 'static> WizardEngine<F> {
    pub fn new(schema: &'static WizardSchema<F>, form: F) -> Self {
        Self {
            schema,
            form,
            current: 0,
            saved: vec![false; schema.steps.len()],
            pending: vec![None; schema.steps.len()],
        }
    }

    pub fn schema(&self) -> &'static WizardSchema<F> {
        self.schema
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn step_count(&self) -> usize {
        self.schema.steps.len()
    }

    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn is_last_step(&self) -> bool {
        self.current + 1 == self.step_count()
    }

    pub fn step(&self, index: usize) -> &StepDescriptor<F> {
        &self.schema.steps[index]
    }

    pub fn is_saved(&self, index: usize) -> bool {
        self.saved.get(index).copied().unwrap_or(false)
    }

    /// Adopt the server record wholesale. Field-level fail-open is already
    /// guaranteed by the form types' serde defaults, and replacement
    /// semantics keep a repeated hydration from duplicating list entries.
    pub fn hydrate(&mut self, server: F) {
        self.form = server;
        for flag in &mut self.saved {
            *flag = false;
        }
        for slot in &mut self.pending {
            *slot = None;
        }
    }

    /// Apply a typed mutation to one step's section. Only that step loses
    /// its saved flag; callers address sibling sections through their own
    /// steps.
    pub fn edit_section(&mut self, index: usize, mutate: impl FnOnce(&mut F)) {
        mutate(&mut self.form);
        if let Some(flag) = self.saved.get_mut(index) {
            *flag = false;
        }
    }

    pub fn validate_step(&self, index: usize) -> Result<(), String> {
        (self.schema.steps[index].section)(&self.form).validate()
    }

    /// Record the selection of a local certificate file.
    pub fn certificate_selected(&mut self, index: usize, filename: String) {
        self.pending[index] = Some(filename);
        self.saved[index] = false;
    }

    /// Record a completed upload: the remote path replaces the local
    /// reference, so a retried save will not upload again.
    pub fn certificate_uploaded(&mut self, index: usize, path: String) {
        (self.schema.steps[index].section_mut)(&mut self.form)
            .meta_mut()
            .certificate = Some(path);
        self.pending[index] = None;
    }

    pub fn certificate_slot(&self, index: usize) -> CertificateSlot {
        let stored = (self.schema.steps[index].section)(&self.form)
            .meta()
            .certificate
            .clone();
        CertificateSlot::resolve(self.pending[index].as_deref(), stored.as_deref())
    }

    pub fn section_meta(&self, index: usize) -> SectionMeta {
        (self.schema.steps[index].section)(&self.form).meta().clone()
    }

    /// Decide what a save of the given step requires. An invalid step
    /// yields no plan, so no adapter call can happen on invalid input.
    pub fn plan_save(&self, index: usize) -> SaveOutcome {
        match self.validate_step(index) {
            Err(reason) => SaveOutcome::Invalid { reason },
            Ok(()) => SaveOutcome::Persist(SavePlan {
                step: index,
                category: self.schema.category,
                section: self.schema.steps[index].key,
                upload: self.pending[index].clone(),
            }),
        }
    }

    pub fn section_payload(&self, index: usize) -> serde_json::Value {
        (self.schema.steps[index].section)(&self.form).payload()
    }

    /// Confirm a persistence round-trip.
    pub fn mark_saved(&mut self, index: usize) {
        self.saved[index] = true;
    }

    /// Adopt fields the server echoed back with the save confirmation.
    pub fn apply_server_meta(&mut self, index: usize, meta: SectionMeta) {
        *(self.schema.steps[index].section_mut)(&mut self.form).meta_mut() = meta;
    }

    /// Move forward one step. Requires the current step to have been
    /// saved; returns whether the index changed.
    pub fn try_advance(&mut self) -> bool {
        if self.current + 1 < self.step_count() && self.saved[self.current] {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Move back one step; no precondition.
    pub fn retreat(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Jump to an arbitrary step, clamped to the step range. Used for
    /// backward jumps from the step bar and for read-only browsing; the
    /// forward gating of `try_advance` still governs editing flows.
    pub fn go_to(&mut self, index: usize) {
        self.current = index.min(self.step_count() - 1);
    }

    /// Check every step before the final submission.
    pub fn submit_check(&self) -> Result<(), (usize, String)> {
        for (index, step) in self.schema.steps.iter().enumerate() {
            if let Err(reason) = (step.section)(&self.form).validate() {
                return Err((index, reason));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_environment::aggregate::{EmissionScopes, EnvironmentForm};

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

    static TEST_SCHEMA: WizardSchema<EnvironmentForm> = WizardSchema {
        category: Some("environment"),
        upload_category: "environment",
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
        ],
    };

    fn engine() -> WizardEngine<EnvironmentForm> {
        WizardEngine::new(&TEST_SCHEMA, EnvironmentForm::default())
    }

    fn fill_renewable(e: &mut WizardEngine<EnvironmentForm>) {
        e.edit_section(0, |f| {
            f.renewable_energy.renewable_share_percent = Some(42.0);
            f.renewable_energy.energy_sources.push("Wind PPA".to_string());
        });
    }

    #[test]
    fn invalid_step_yields_no_plan() {
        let e = engine();
        match e.plan_save(0) {
            SaveOutcome::Invalid { reason } => {
                assert_eq!(reason, "Renewable share is required")
            }
            SaveOutcome::Persist(_) => panic!("invalid step must not produce a plan"),
        }
        assert!(!e.is_saved(0));
    }

    #[test]
    fn valid_step_plans_and_confirms() {
        let mut e = engine();
        fill_renewable(&mut e);
        let plan = match e.plan_save(0) {
            SaveOutcome::Persist(plan) => plan,
            SaveOutcome::Invalid { reason } => panic!("unexpected: {reason}"),
        };
        assert_eq!(plan.section, "renewableEnergy");
        assert_eq!(plan.category, Some("environment"));
        assert_eq!(plan.upload, None);

        e.mark_saved(plan.step);
        assert!(e.is_saved(0));
    }

    #[test]
    fn advance_is_a_noop_until_current_step_is_saved() {
        let mut e = engine();
        fill_renewable(&mut e);
        assert!(!e.try_advance());
        assert_eq!(e.current_step(), 0);

        e.mark_saved(0);
        assert!(e.try_advance());
        assert_eq!(e.current_step(), 1);
    }

    #[test]
    fn editing_drops_only_that_steps_saved_flag() {
        let mut e = engine();
        fill_renewable(&mut e);
        e.mark_saved(0);
        e.mark_saved(1);

        let emissions_before = e.section_payload(1);
        e.edit_section(0, |f| {
            f.renewable_energy.annual_consumption_mwh = Some(1200.0)
        });

        assert!(!e.is_saved(0));
        assert!(e.is_saved(1));
        assert_eq!(e.section_payload(1), emissions_before);
    }

    #[test]
    fn hydrated_untouched_section_saves_the_server_values() {
        let server: EnvironmentForm = serde_json::from_str(
            r#"{
                "renewableEnergy": {
                    "renewableSharePercent": 35.0,
                    "energySources": ["Hydro"],
                    "certificate": "media/esg/green.pdf",
                    "points": 0.6,
                    "remarks": "Good"
                }
            }"#,
        )
        .unwrap();

        let mut e = engine();
        e.hydrate(server.clone());

        let payload = e.section_payload(0);
        assert_eq!(payload, serde_json::to_value(&server.renewable_energy).unwrap());
    }

    #[test]
    fn hydrate_resets_flags_and_pending_uploads() {
        let mut e = engine();
        fill_renewable(&mut e);
        e.mark_saved(0);
        e.certificate_selected(0, "audit.pdf".to_string());

        e.hydrate(EnvironmentForm::default());
        assert!(!e.is_saved(0));
        assert_eq!(e.certificate_slot(0), CertificateSlot::Empty);
    }

    #[test]
    fn upload_happens_exactly_once_per_selection() {
        let mut e = engine();
        fill_renewable(&mut e);
        e.certificate_selected(0, "audit.pdf".to_string());

        match e.plan_save(0) {
            SaveOutcome::Persist(plan) => assert_eq!(plan.upload.as_deref(), Some("audit.pdf")),
            SaveOutcome::Invalid { reason } => panic!("unexpected: {reason}"),
        }

        // Upload confirmed, section save then failed; the retry must not
        // plan another upload.
        e.certificate_uploaded(0, "media/esg/audit.pdf".to_string());
        match e.plan_save(0) {
            SaveOutcome::Persist(plan) => assert_eq!(plan.upload, None),
            SaveOutcome::Invalid { reason } => panic!("unexpected: {reason}"),
        }
        assert_eq!(
            e.certificate_slot(0),
            CertificateSlot::Remote {
                path: "media/esg/audit.pdf".to_string()
            }
        );

        // Reselecting brings the upload back.
        e.certificate_selected(0, "audit-v2.pdf".to_string());
        match e.plan_save(0) {
            SaveOutcome::Persist(plan) => {
                assert_eq!(plan.upload.as_deref(), Some("audit-v2.pdf"))
            }
            SaveOutcome::Invalid { reason } => panic!("unexpected: {reason}"),
        }
    }

    #[test]
    fn local_selection_shadows_the_stored_path() {
        let mut e = engine();
        e.edit_section(0, |f| {
            f.renewable_energy.meta.certificate = Some("media/esg/old.pdf".to_string())
        });
        e.certificate_selected(0, "new.pdf".to_string());
        assert_eq!(
            e.certificate_slot(0),
            CertificateSlot::Local {
                filename: "new.pdf".to_string()
            }
        );
    }

    #[test]
    fn retreat_clamps_at_the_first_step() {
        let mut e = engine();
        e.retreat();
        assert_eq!(e.current_step(), 0);
    }

    #[test]
    fn go_to_clamps_at_the_last_step() {
        let mut e = engine();
        e.go_to(99);
        assert_eq!(e.current_step(), 1);
    }

    #[test]
    fn submit_check_reports_the_first_failing_step() {
        let mut e = engine();
        fill_renewable(&mut e);
        let (step, reason) = e.submit_check().unwrap_err();
        assert_eq!(step, 1);
        assert_eq!(reason, "Scope 1 emissions is required");

        e.edit_section(1, |f| {
            f.emissions.scopes = EmissionScopes {
                scope1: Some(120.0),
                scope2: Some(48.5),
                scope3: Some(900.0),
            };
            f.emissions.reduction_target = "-30% by 2030".to_string();
        });
        assert!(e.submit_check().is_ok());
    }
}
