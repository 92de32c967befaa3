use crate::domain::common::validate::{require_number, require_text};
use crate::domain::common::{Section, SectionMeta};
use serde::{Deserialize, Serialize};

/// General company profile collected before the ESG questionnaires.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanyProfileSection {
    pub company_name: String,
    pub registration_number: String,
    pub address: String,
    pub country: String,
    pub contact_person: String,
    pub contact_email: String,
    pub phone: String,
    pub industry: String,
    pub employee_count: Option<f64>,
    pub year_founded: Option<f64>,
    #[serde(flatten)]
    pub meta: SectionMeta,
}

impl Section for CompanyProfileSection {
    fn key(&self) -> &'static str {
        "profile"
    }

    fn title(&self) -> &'static str {
        "Company profile"
    }

    fn validate(&self) -> Result<(), String> {
        require_text("Company name", &self.company_name)?;
        require_text("Registration number", &self.registration_number)?;
        require_text("Address", &self.address)?;
        require_text("Contact person", &self.contact_person)?;
        require_text("Contact email", &self.contact_email)?;
        require_text("Industry", &self.industry)?;
        require_number("Employee count", self.employee_count)
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
pub struct CompanyForm {
    pub profile: CompanyProfileSection,
}

impl CompanyForm {
    pub const CATEGORY: &'static str = "company";

    pub fn section_by_key(&self, key: &str) -> Option<&dyn Section> {
        match key {
            "profile" => Some(&self.profile),
            _ => None,
        }
    }

    pub fn section_by_key_mut(&mut self, key: &str) -> Option<&mut dyn Section> {
        match key {
            "profile" => Some(&mut self.profile),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CompanyProfileSection {
        CompanyProfileSection {
            company_name: "Acme Metalworks".to_string(),
            registration_number: "HRB-55812".to_string(),
            address: "12 Foundry Lane, Hannover".to_string(),
            country: "Germany".to_string(),
            contact_person: "J. Weber".to_string(),
            contact_email: "esg@acme-metal.example".to_string(),
            phone: "+49 511 000000".to_string(),
            industry: "Metal fabrication".to_string(),
            employee_count: Some(240.0),
            year_founded: Some(1987.0),
            ..Default::default()
        }
    }

    #[test]
    fn filled_profile_validates() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn missing_required_field_names_the_field() {
        let mut section = filled();
        section.contact_email = "  ".to_string();
        assert_eq!(section.validate().unwrap_err(), "Contact email is required");
    }

    #[test]
    fn employee_count_is_mandatory() {
        let mut section = filled();
        section.employee_count = None;
        assert!(section.validate().is_err());
    }

    #[test]
    fn partial_server_payload_hydrates_with_defaults() {
        let form: CompanyForm =
            serde_json::from_str(r#"{"profile": {"companyName": "Acme"}}"#).unwrap();
        assert_eq!(form.profile.company_name, "Acme");
        assert_eq!(form.profile.phone, "");
        assert_eq!(form.profile.meta, SectionMeta::default());
    }

    #[test]
    fn section_lookup_by_key() {
        let form = CompanyForm::default();
        assert!(form.section_by_key("profile").is_some());
        assert!(form.section_by_key("emissions").is_none());
    }
}
