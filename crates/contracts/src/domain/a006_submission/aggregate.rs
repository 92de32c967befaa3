//! Supplier submission: the aggregate record an administrator reviews.

use crate::domain::a001_company_info::aggregate::CompanyForm;
use crate::domain::a002_environment::aggregate::EnvironmentForm;
use crate::domain::a003_social::aggregate::SocialForm;
use crate::domain::a004_governance::aggregate::GovernanceForm;
use crate::domain::a005_quality::aggregate::QualityForm;
use crate::domain::common::{ReviewStatus, Section};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four ESG questionnaires of one supplier, as returned by
/// `GET /esg/data` and embedded in a submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EsgData {
    pub environment: EnvironmentForm,
    pub social: SocialForm,
    pub governance: GovernanceForm,
    pub quality: QualityForm,
}

impl EsgData {
    /// Category and section keys in questionnaire order.
    pub const CATEGORIES: [(&'static str, &'static [&'static str]); 4] = [
        (
            EnvironmentForm::CATEGORY,
            &["renewableEnergy", "emissions", "wasteManagement"],
        ),
        (
            SocialForm::CATEGORY,
            &["csrProjects", "safetyTraining", "employeeWelfare"],
        ),
        (
            GovernanceForm::CATEGORY,
            &["boardComposition", "ethicsPolicy"],
        ),
        (
            QualityForm::CATEGORY,
            &["certifications", "qualityManagement"],
        ),
    ];

    /// Look up one section by its category and wire key.
    pub fn section(&self, category: &str, key: &str) -> Option<&dyn Section> {
        match category {
            EnvironmentForm::CATEGORY => self.environment.section_by_key(key),
            SocialForm::CATEGORY => self.social.section_by_key(key),
            GovernanceForm::CATEGORY => self.governance.section_by_key(key),
            QualityForm::CATEGORY => self.quality.section_by_key(key),
            _ => None,
        }
    }

    pub fn section_mut(&mut self, category: &str, key: &str) -> Option<&mut dyn Section> {
        match category {
            EnvironmentForm::CATEGORY => self.environment.section_by_key_mut(key),
            SocialForm::CATEGORY => self.social.section_by_key_mut(key),
            GovernanceForm::CATEGORY => self.governance.section_by_key_mut(key),
            QualityForm::CATEGORY => self.quality.section_by_key_mut(key),
            _ => None,
        }
    }

    /// All sections with a stored certificate, as (category, key) pairs.
    pub fn attached_sections(&self) -> Vec<(&'static str, &'static str)> {
        let mut result = Vec::new();
        for (category, keys) in Self::CATEGORIES {
            for key in keys {
                if let Some(section) = self.section(category, key) {
                    if section.meta().certificate.is_some() {
                        result.push((category, section.key()));
                    }
                }
            }
        }
        result
    }
}

/// One row of the administrator's submission list (`GET /esg/all`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionSummary {
    pub id: Uuid,
    pub company_name: String,
    #[serde(default)]
    pub status: ReviewStatus,
    /// Aggregate score derived server-side from section points
    #[serde(default)]
    pub overall_score: f64,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Full submission as opened in the review detail view
/// (`GET /esg/supplier/{id}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDetail {
    pub id: Uuid,
    #[serde(default)]
    pub company: CompanyForm,
    #[serde(default)]
    pub esg: EsgData,
    #[serde(default)]
    pub status: ReviewStatus,
    #[serde(default)]
    pub review_comments: Option<String>,
    #[serde(default)]
    pub overall_score: f64,
}

/// Body of `POST /esg/update` and `POST /company-info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSaveRequest {
    /// Omitted for company info, which has no category dimension
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub section: String,
    pub data: serde_json::Value,
}

/// Body of `POST /esg/update-points`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePointsRequest {
    pub esg_data_id: Uuid,
    pub category: String,
    pub section: String,
    pub points: f64,
    #[serde(default)]
    pub remarks: Option<String>,
}

/// Body of `POST /esg/review/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub status: ReviewStatus,
    #[serde(default)]
    pub review_comments: Option<String>,
}

/// Data of `POST /esg/upload-certificate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedCertificate {
    pub file_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_lookup_spans_all_categories() {
        let data = EsgData::default();
        assert!(data.section("environment", "renewableEnergy").is_some());
        assert!(data.section("social", "safetyTraining").is_some());
        assert!(data.section("governance", "ethicsPolicy").is_some());
        assert!(data.section("quality", "certifications").is_some());
        assert!(data.section("finance", "payroll").is_none());
        assert!(data.section("environment", "biodiversity").is_none());
    }

    #[test]
    fn attached_sections_lists_only_certified_ones() {
        let mut data = EsgData::default();
        assert!(data.attached_sections().is_empty());

        data.environment.renewable_energy.meta.certificate =
            Some("media/esg/env/audit.pdf".to_string());
        data.quality.certifications.meta.certificate =
            Some("media/esg/quality/iso.pdf".to_string());

        assert_eq!(
            data.attached_sections(),
            vec![
                ("environment", "renewableEnergy"),
                ("quality", "certifications")
            ]
        );
    }

    #[test]
    fn update_points_request_uses_camel_case_wire_names() {
        let request = UpdatePointsRequest {
            esg_data_id: Uuid::nil(),
            category: "environment".to_string(),
            section: "renewableEnergy".to_string(),
            points: 0.8,
            remarks: Some("Good".to_string()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("esgDataId").is_some());
        assert_eq!(json["points"], 0.8);
    }

    #[test]
    fn company_save_request_omits_category() {
        let request = SectionSaveRequest {
            category: None,
            section: "profile".to_string(),
            data: serde_json::json!({}),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("category").is_none());
    }
}
