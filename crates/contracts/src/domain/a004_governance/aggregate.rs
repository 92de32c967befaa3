use crate::domain::common::validate::{require_number, require_text};
use crate::domain::common::{Section, SectionMeta};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardCompositionSection {
    pub board_size: Option<f64>,
    pub independent_members: Option<f64>,
    pub diversity_percent: Option<f64>,
    #[serde(flatten)]
    pub meta: SectionMeta,
}

impl Section for BoardCompositionSection {
    fn key(&self) -> &'static str {
        "boardComposition"
    }

    fn title(&self) -> &'static str {
        "Board composition"
    }

    fn validate(&self) -> Result<(), String> {
        require_number("Board size", self.board_size)?;
        require_number("Independent members", self.independent_members)
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
pub struct EthicsPolicySection {
    pub policy_statement: String,
    pub whistleblower_channel: bool,
    /// ISO date of the last policy review, as entered in the date control
    pub last_review_date: String,
    #[serde(flatten)]
    pub meta: SectionMeta,
}

impl Section for EthicsPolicySection {
    fn key(&self) -> &'static str {
        "ethicsPolicy"
    }

    fn title(&self) -> &'static str {
        "Ethics & compliance"
    }

    fn validate(&self) -> Result<(), String> {
        require_text("Policy statement", &self.policy_statement)?;
        require_text("Last review date", &self.last_review_date)
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
pub struct GovernanceForm {
    pub board_composition: BoardCompositionSection,
    pub ethics_policy: EthicsPolicySection,
}

impl GovernanceForm {
    pub const CATEGORY: &'static str = "governance";

    pub fn section_by_key(&self, key: &str) -> Option<&dyn Section> {
        match key {
            "boardComposition" => Some(&self.board_composition),
            "ethicsPolicy" => Some(&self.ethics_policy),
            _ => None,
        }
    }

    pub fn section_by_key_mut(&mut self, key: &str) -> Option<&mut dyn Section> {
        match key {
            "boardComposition" => Some(&mut self.board_composition),
            "ethicsPolicy" => Some(&mut self.ethics_policy),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_numbers_are_mandatory() {
        let mut section = BoardCompositionSection::default();
        assert_eq!(section.validate().unwrap_err(), "Board size is required");
        section.board_size = Some(7.0);
        section.independent_members = Some(3.0);
        assert!(section.validate().is_ok());
    }

    #[test]
    fn ethics_policy_requires_statement_and_review_date() {
        let mut section = EthicsPolicySection {
            policy_statement: "Zero tolerance for bribery".to_string(),
            whistleblower_channel: true,
            ..Default::default()
        };
        assert!(section.validate().is_err());
        section.last_review_date = "2025-04-01".to_string();
        assert!(section.validate().is_ok());
    }
}
