use crate::domain::common::validate::{require_list, require_text};
use crate::domain::common::{Section, SectionMeta};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QualityCertification {
    pub name: String,
    pub issuer: String,
    pub valid_until: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CertificationsSection {
    pub certifications: Vec<QualityCertification>,
    #[serde(flatten)]
    pub meta: SectionMeta,
}

impl Section for CertificationsSection {
    fn key(&self) -> &'static str {
        "certifications"
    }

    fn title(&self) -> &'static str {
        "Certifications"
    }

    fn validate(&self) -> Result<(), String> {
        require_list("Certifications", &self.certifications)?;
        for certification in &self.certifications {
            require_text("Certification name", &certification.name)?;
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

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QualityManagementSection {
    pub qms_description: String,
    pub tracks_defect_rate: bool,
    pub last_audit_date: String,
    #[serde(flatten)]
    pub meta: SectionMeta,
}

impl Section for QualityManagementSection {
    fn key(&self) -> &'static str {
        "qualityManagement"
    }

    fn title(&self) -> &'static str {
        "Quality management"
    }

    fn validate(&self) -> Result<(), String> {
        require_text("QMS description", &self.qms_description)?;
        require_text("Last audit date", &self.last_audit_date)
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
pub struct QualityForm {
    pub certifications: CertificationsSection,
    pub quality_management: QualityManagementSection,
}

impl QualityForm {
    pub const CATEGORY: &'static str = "quality";

    pub fn section_by_key(&self, key: &str) -> Option<&dyn Section> {
        match key {
            "certifications" => Some(&self.certifications),
            "qualityManagement" => Some(&self.quality_management),
            _ => None,
        }
    }

    pub fn section_by_key_mut(&mut self, key: &str) -> Option<&mut dyn Section> {
        match key {
            "certifications" => Some(&mut self.certifications),
            "qualityManagement" => Some(&mut self.quality_management),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_least_one_named_certification() {
        let mut section = CertificationsSection::default();
        assert!(section.validate().is_err());
        section.certifications.push(QualityCertification {
            name: "ISO 9001".to_string(),
            issuer: "TUV".to_string(),
            valid_until: "2027-01-31".to_string(),
        });
        assert!(section.validate().is_ok());
    }

    #[test]
    fn qms_description_is_required() {
        let mut section = QualityManagementSection {
            last_audit_date: "2025-06-15".to_string(),
            ..Default::default()
        };
        assert_eq!(section.validate().unwrap_err(), "QMS description is required");
        section.qms_description = "ISO 9001 certified QMS".to_string();
        assert!(section.validate().is_ok());
    }
}
