use serde::{Deserialize, Serialize};

/// Server-populated block carried by every form section.
///
/// `points` and `remarks` are assigned during review and are never edited
/// by the supplier client; a fresh fetch is the only way they change.
/// Every field defaults when the server omits it, so a partial payload
/// hydrates to a usable section instead of an absent value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionMeta {
    /// Server-relative path of the stored certificate, if any
    #[serde(default)]
    pub certificate: Option<String>,
    /// Review rating on a 0..=1 scale, 0 = not yet rated
    #[serde(default)]
    pub points: f64,
    /// Reviewer remarks for this section
    #[serde(default)]
    pub remarks: Option<String>,
}

impl SectionMeta {
    pub fn is_rated(&self) -> bool {
        self.points > 0.0
    }
}

/// Client-side view of a section's attachment slot.
///
/// A freshly selected local file shadows any stored path until its upload
/// completes; the two references never coexist from the caller's view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertificateSlot {
    Empty,
    Local { filename: String },
    Remote { path: String },
}

impl CertificateSlot {
    /// Resolve the slot from a pending local filename and the stored path.
    pub fn resolve(pending: Option<&str>, stored: Option<&str>) -> Self {
        match (pending, stored) {
            (Some(name), _) => CertificateSlot::Local {
                filename: name.to_string(),
            },
            (None, Some(path)) if !path.trim().is_empty() => CertificateSlot::Remote {
                path: path.to_string(),
            },
            _ => CertificateSlot::Empty,
        }
    }

    /// Filename to show next to the slot, if anything is attached.
    pub fn display_name(&self) -> Option<String> {
        match self {
            CertificateSlot::Empty => None,
            CertificateSlot::Local { filename } => Some(filename.clone()),
            CertificateSlot::Remote { path } => Some(filename_from_path(path)),
        }
    }
}

/// Recover the original filename from a server-relative media path.
pub fn filename_from_path(path: &str) -> String {
    path.rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(path)
        .to_string()
}

/// Contract between a typed section record and the generic wizard engine.
///
/// Each concrete section declares its wire key, its required-field rules
/// and its save payload; the engine never inspects section fields itself.
pub trait Section {
    /// Wire name of the section (`"renewableEnergy"`, `"emissions"`, …)
    fn key(&self) -> &'static str;

    /// Human-readable section title
    fn title(&self) -> &'static str;

    /// Required-field check; `Err` carries the user-facing reason
    fn validate(&self) -> Result<(), String>;

    fn meta(&self) -> &SectionMeta;

    fn meta_mut(&mut self) -> &mut SectionMeta;

    /// Full section payload as sent to the save endpoint
    fn payload(&self) -> serde_json::Value;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_file_shadows_stored_path() {
        let slot = CertificateSlot::resolve(Some("audit.pdf"), Some("media/esg/old.pdf"));
        assert_eq!(
            slot,
            CertificateSlot::Local {
                filename: "audit.pdf".to_string()
            }
        );
    }

    #[test]
    fn blank_stored_path_is_empty() {
        assert_eq!(CertificateSlot::resolve(None, Some("  ")), CertificateSlot::Empty);
        assert_eq!(CertificateSlot::resolve(None, None), CertificateSlot::Empty);
    }

    #[test]
    fn remote_display_name_uses_last_segment() {
        let slot = CertificateSlot::resolve(None, Some("media/esg/2025/iso-9001.pdf"));
        assert_eq!(slot.display_name().unwrap(), "iso-9001.pdf");
    }

    #[test]
    fn filename_from_plain_name() {
        assert_eq!(filename_from_path("report.pdf"), "report.pdf");
        assert_eq!(filename_from_path("a/b/report.pdf"), "report.pdf");
    }

    #[test]
    fn meta_defaults_when_server_omits_fields() {
        let meta: SectionMeta = serde_json::from_str("{}").unwrap();
        assert_eq!(meta, SectionMeta::default());
        assert!(!meta.is_rated());
    }
}
