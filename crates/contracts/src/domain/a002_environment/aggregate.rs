//! Environmental questionnaire: energy mix, greenhouse gas emissions,
//! waste handling.

use crate::domain::common::validate::{require_list, require_number, require_text};
use crate::domain::common::{Section, SectionMeta};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenewableEnergySection {
    /// Share of renewables in total consumption, percent
    pub renewable_share_percent: Option<f64>,
    pub energy_sources: Vec<String>,
    pub annual_consumption_mwh: Option<f64>,
    #[serde(flatten)]
    pub meta: SectionMeta,
}

impl Section for RenewableEnergySection {
    fn key(&self) -> &'static str {
        "renewableEnergy"
    }

    fn title(&self) -> &'static str {
        "Renewable energy"
    }

    fn validate(&self) -> Result<(), String> {
        require_number("Renewable share", self.renewable_share_percent)?;
        require_list("Energy sources", &self.energy_sources)
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

/// Greenhouse gas emissions in tonnes CO2e, by GHG Protocol scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmissionScopes {
    pub scope1: Option<f64>,
    pub scope2: Option<f64>,
    pub scope3: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmissionsSection {
    pub scopes: EmissionScopes,
    pub reduction_target: String,
    pub target_year: Option<f64>,
    #[serde(flatten)]
    pub meta: SectionMeta,
}

impl Section for EmissionsSection {
    fn key(&self) -> &'static str {
        "emissions"
    }

    fn title(&self) -> &'static str {
        "Emissions"
    }

    fn validate(&self) -> Result<(), String> {
        // Each scope is reported and checked independently
        require_number("Scope 1 emissions", self.scopes.scope1)?;
        require_number("Scope 2 emissions", self.scopes.scope2)?;
        require_number("Scope 3 emissions", self.scopes.scope3)?;
        require_text("Reduction target", &self.reduction_target)
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
pub struct WasteManagementSection {
    pub recycling_rate_percent: Option<f64>,
    pub hazardous_waste_policy: String,
    pub landfill_diversion_program: bool,
    #[serde(flatten)]
    pub meta: SectionMeta,
}

impl Section for WasteManagementSection {
    fn key(&self) -> &'static str {
        "wasteManagement"
    }

    fn title(&self) -> &'static str {
        "Waste management"
    }

    fn validate(&self) -> Result<(), String> {
        require_number("Recycling rate", self.recycling_rate_percent)?;
        require_text("Hazardous waste policy", &self.hazardous_waste_policy)
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
pub struct EnvironmentForm {
    pub renewable_energy: RenewableEnergySection,
    pub emissions: EmissionsSection,
    pub waste_management: WasteManagementSection,
}

impl EnvironmentForm {
    pub const CATEGORY: &'static str = "environment";

    pub fn section_by_key(&self, key: &str) -> Option<&dyn Section> {
        match key {
            "renewableEnergy" => Some(&self.renewable_energy),
            "emissions" => Some(&self.emissions),
            "wasteManagement" => Some(&self.waste_management),
            _ => None,
        }
    }

    pub fn section_by_key_mut(&mut self, key: &str) -> Option<&mut dyn Section> {
        match key {
            "renewableEnergy" => Some(&mut self.renewable_energy),
            "emissions" => Some(&mut self.emissions),
            "wasteManagement" => Some(&mut self.waste_management),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scope_is_checked_independently() {
        let mut section = EmissionsSection {
            scopes: EmissionScopes {
                scope1: Some(120.0),
                scope2: Some(48.5),
                scope3: None,
            },
            reduction_target: "-30% by 2030".to_string(),
            ..Default::default()
        };
        assert_eq!(section.validate().unwrap_err(), "Scope 3 emissions is required");
        section.scopes.scope3 = Some(900.0);
        assert!(section.validate().is_ok());
    }

    #[test]
    fn renewable_energy_requires_at_least_one_source() {
        let mut section = RenewableEnergySection {
            renewable_share_percent: Some(42.0),
            ..Default::default()
        };
        assert!(section.validate().is_err());
        section.energy_sources.push("Wind PPA".to_string());
        assert!(section.validate().is_ok());
    }

    #[test]
    fn server_meta_survives_payload_round_trip() {
        let json = r#"{
            "renewableSharePercent": 42.0,
            "energySources": ["Wind PPA"],
            "certificate": "media/esg/env/green-audit.pdf",
            "points": 0.6,
            "remarks": "Good"
        }"#;
        let section: RenewableEnergySection = serde_json::from_str(json).unwrap();
        assert_eq!(section.meta.points, 0.6);

        let payload = section.payload();
        assert_eq!(payload["certificate"], "media/esg/env/green-audit.pdf");
        assert_eq!(payload["points"], 0.6);
        assert_eq!(payload["remarks"], "Good");
    }

    #[test]
    fn form_dispatch_covers_all_sections() {
        let form = EnvironmentForm::default();
        for key in ["renewableEnergy", "emissions", "wasteManagement"] {
            assert_eq!(form.section_by_key(key).unwrap().key(), key);
        }
        assert!(form.section_by_key("profile").is_none());
    }
}
