//! Toast kinds and the styling each one selects.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a toast.
///
/// Parsing is lenient: any name that is not one of the four known kinds
/// resolves to [`ToastKind::Info`], so callers can pass arbitrary strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ToastKind {
    /// Neutral information (blue).
    #[default]
    Info,
    /// Operation succeeded (green).
    Success,
    /// Something needs attention (orange).
    Warning,
    /// Operation failed (red).
    Error,
}

impl ToastKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 4] = [Self::Info, Self::Success, Self::Warning, Self::Error];

    /// Resolve a kind name, falling back to [`ToastKind::Info`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    /// Lowercase name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Modifier class applied next to `toast` on the root element.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "toast-info",
            Self::Success => "toast-success",
            Self::Warning => "toast-warning",
            Self::Error => "toast-error",
        }
    }
}

impl From<&str> for ToastKind {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for ToastKind {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_known_names() {
        for kind in ToastKind::ALL {
            assert_eq!(ToastKind::from_name(kind.as_str()), kind);
        }
    }

    #[test]
    fn should_fall_back_to_info_when_name_is_unknown() {
        for name in ["", "danger", "ERROR", " success", "notice"] {
            assert_eq!(ToastKind::from(name), ToastKind::Info, "name: {name:?}");
        }
    }

    #[test]
    fn should_default_to_info() {
        assert_eq!(ToastKind::default(), ToastKind::Info);
    }

    #[test]
    fn should_map_css_class() {
        assert_eq!(ToastKind::Error.css_class(), "toast-error");
        assert_eq!(ToastKind::Info.css_class(), "toast-info");
    }

    #[test]
    fn should_deserialize_leniently() {
        let kinds: Vec<ToastKind> =
            serde_json::from_str(r#"["warning", "bogus", "success"]"#).unwrap();
        assert_eq!(
            kinds,
            vec![ToastKind::Warning, ToastKind::Info, ToastKind::Success]
        );
    }

    #[test]
    fn should_serialize_lowercase() {
        let json = serde_json::to_string(&ToastKind::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }
}
