//! Lead-capture form (`POST /submit-partner`), independent of the
//! questionnaire state.

use crate::domain::common::validate::require_text;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartnerSignupRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl PartnerSignupRequest {
    pub fn validate(&self) -> Result<(), String> {
        require_text("Name", &self.name)?;
        require_text("Email", &self.email)?;
        require_text("Company", &self.company)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_optional() {
        let request = PartnerSignupRequest {
            name: "A. Verma".to_string(),
            email: "a.verma@example.com".to_string(),
            company: "Verma Textiles".to_string(),
            message: String::new(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn email_is_required() {
        let request = PartnerSignupRequest {
            name: "A. Verma".to_string(),
            company: "Verma Textiles".to_string(),
            ..Default::default()
        };
        assert_eq!(request.validate().unwrap_err(), "Email is required");
    }
}
