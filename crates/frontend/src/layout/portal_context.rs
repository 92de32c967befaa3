//! Portal configuration resolved once at mount.
//!
//! The served page decides through its query string whether the client runs
//! as the supplier questionnaire or as the review console, and whether forms
//! are opened read-only. Components receive the result through context and
//! never inspect the location themselves.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalMode {
    Supplier,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortalConfig {
    pub mode: PortalMode,
    pub read_only: bool,
}

/// Raw query-string shape, e.g. `?mode=admin` or `?view=1`
#[derive(Debug, Default, Deserialize)]
struct PortalQuery {
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    view: Option<String>,
}

impl PortalConfig {
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }

    /// Parse the configuration from a raw `location.search` value.
    pub fn from_query(search: &str) -> Self {
        let query: PortalQuery =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();

        let mode = match query.mode.as_deref() {
            Some("admin") => PortalMode::Admin,
            _ => PortalMode::Supplier,
        };
        let read_only = matches!(query.view.as_deref(), Some("1") | Some("true"));

        PortalConfig { mode, read_only }
    }
}

pub fn use_portal_config() -> PortalConfig {
    leptos::context::use_context::<PortalConfig>().expect("PortalConfig not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_editable_supplier_portal() {
        let config = PortalConfig::from_query("");
        assert_eq!(config.mode, PortalMode::Supplier);
        assert!(!config.read_only);
    }

    #[test]
    fn admin_mode_from_query() {
        let config = PortalConfig::from_query("?mode=admin");
        assert_eq!(config.mode, PortalMode::Admin);
    }

    #[test]
    fn view_flag_makes_forms_read_only() {
        assert!(PortalConfig::from_query("?view=1").read_only);
        assert!(PortalConfig::from_query("mode=supplier&view=true").read_only);
        assert!(!PortalConfig::from_query("?view=0").read_only);
    }

    #[test]
    fn unknown_mode_falls_back_to_supplier() {
        let config = PortalConfig::from_query("?mode=backoffice");
        assert_eq!(config.mode, PortalMode::Supplier);
    }
}
