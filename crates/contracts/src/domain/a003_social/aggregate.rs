//! Social questionnaire: CSR projects, workplace safety, employee welfare.

use crate::domain::common::validate::{require_list, require_number, require_text};
use crate::domain::common::{Section, SectionMeta};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CsrProject {
    pub name: String,
    pub description: String,
    pub impact: String,
    pub year: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CsrProjectsSection {
    pub projects: Vec<CsrProject>,
    #[serde(flatten)]
    pub meta: SectionMeta,
}

impl Section for CsrProjectsSection {
    fn key(&self) -> &'static str {
        "csrProjects"
    }

    fn title(&self) -> &'static str {
        "CSR projects"
    }

    fn validate(&self) -> Result<(), String> {
        require_list("CSR projects", &self.projects)?;
        for project in &self.projects {
            require_text("Project name", &project.name)?;
        }
        Ok(())
    }

    fn meta(&self) -> &SectionMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut SectionMeta {
        &mut self.meta
    }

    fn payload(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Training program details nested inside the safety section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SafetyTrainingProgram {
    pub topics: Vec<String>,
    pub annual_hours: Option<f64>,
    pub employees_covered_percent: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SafetyTrainingSection {
    pub training: SafetyTrainingProgram,
    pub incident_policy: String,
    #[serde(flatten)]
    pub meta: SectionMeta,
}

impl Section for SafetyTrainingSection {
    fn key(&self) -> &'static str {
        "safetyTraining"
    }

    fn title(&self) -> &'static str {
        "Safety & training"
    }

    fn validate(&self) -> Result<(), String> {
        require_list("Training topics", &self.training.topics)?;
        require_number("Annual training hours", self.training.annual_hours)?;
        require_text("Incident policy", &self.incident_policy)
    }

    fn meta(&self) -> &SectionMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut SectionMeta {
        &mut self.meta
    }

    fn payload(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmployeeWelfareSection {
    pub benefits_summary: String,
    pub grievance_channel: bool,
    pub parental_leave_weeks: Option<f64>,
    #[serde(flatten)]
    pub meta: SectionMeta,
}

impl Section for EmployeeWelfareSection {
    fn key(&self) -> &'static str {
        "employeeWelfare"
    }

    fn title(&self) -> &'static str {
        "Employee welfare"
    }

    fn validate(&self) -> Result<(), String> {
        require_text("Benefits summary", &self.benefits_summary)
    }

    fn meta(&self) -> &SectionMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut SectionMeta {
        &mut self.meta
    }

    fn payload(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialForm {
    pub csr_projects: CsrProjectsSection,
    pub safety_training: SafetyTrainingSection,
    pub employee_welfare: EmployeeWelfareSection,
}

impl SocialForm {
    pub const CATEGORY: &'static str = "social";

    pub fn section_by_key(&self, key: &str) -> Option<&dyn Section> {
        match key {
            "csrProjects" => Some(&self.csr_projects),
            "safetyTraining" => Some(&self.safety_training),
            "employeeWelfare" => Some(&self.employee_welfare),
            _ => None,
        }
    }

    pub fn section_by_key_mut(&mut self, key: &str) -> Option<&mut dyn Section> {
        match key {
            "csrProjects" => Some(&mut self.csr_projects),
            "safetyTraining" => Some(&mut self.safety_training),
            "employeeWelfare" => Some(&mut self.employee_welfare),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csr_section_requires_a_named_project() {
        let mut section = CsrProjectsSection::default();
        assert!(section.validate().is_err());

        section.projects.push(CsrProject::default());
        assert_eq!(section.validate().unwrap_err(), "Project name is required");

        section.projects[0].name = "River cleanup".to_string();
        assert!(section.validate().is_ok());
    }

    #[test]
    fn nested_training_program_is_validated() {
        let mut section = SafetyTrainingSection {
            incident_policy: "Report within 24h".to_string(),
            ..Default::default()
        };
        section.training.topics.push("Fire drill".to_string());
        assert_eq!(
            section.validate().unwrap_err(),
            "Annual training hours is required"
        );
        section.training.annual_hours = Some(16.0);
        assert!(section.validate().is_ok());
    }

    #[test]
    fn nested_arrays_hydrate_without_duplication() {
        let json = r#"{"csrProjects": {"projects": [{"name": "River cleanup"}]}}"#;
        let form: SocialForm = serde_json::from_str(json).unwrap();
        assert_eq!(form.csr_projects.projects.len(), 1);

        // Hydrating again from the same payload replaces, never appends
        let again: SocialForm = serde_json::from_str(json).unwrap();
        assert_eq!(again.csr_projects.projects.len(), 1);
        assert_eq!(form, again);
    }
}
