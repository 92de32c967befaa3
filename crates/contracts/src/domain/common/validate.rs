//! Required-field checks shared by all section `validate` implementations.
//!
//! The rules are uniform across the portal: strings must be non-empty
//! after trimming, required lists must hold at least one entry, and
//! required numeric fields must actually be entered.

/// Non-empty-after-trim check for a required text field.
pub fn require_text(label: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} is required", label))
    } else {
        Ok(())
    }
}

/// Presence check for a required numeric field.
pub fn require_number(label: &str, value: Option<f64>) -> Result<(), String> {
    match value {
        Some(_) => Ok(()),
        None => Err(format!("{} is required", label)),
    }
}

/// Length check for a required list.
pub fn require_list<T>(label: &str, items: &[T]) -> Result<(), String> {
    if items.is_empty() {
        Err(format!("{} must contain at least one entry", label))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_text_fails() {
        assert!(require_text("Company name", "   ").is_err());
        assert!(require_text("Company name", "Acme").is_ok());
    }

    #[test]
    fn missing_number_fails() {
        assert_eq!(
            require_number("Scope 1 emissions", None).unwrap_err(),
            "Scope 1 emissions is required"
        );
        assert!(require_number("Scope 1 emissions", Some(0.0)).is_ok());
    }

    #[test]
    fn empty_list_fails() {
        let none: [&str; 0] = [];
        assert!(require_list("CSR projects", &none).is_err());
        assert!(require_list("CSR projects", &["x"]).is_ok());
    }
}
