//! Icon selection.

use super::ToastKind;

/// Font Awesome icon shown at the start of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastIcon {
    /// `fa-check-circle`
    CheckCircle,
    /// `fa-exclamation-circle`
    ExclamationCircle,
    /// `fa-exclamation-triangle`
    ExclamationTriangle,
    /// `fa-info-circle`
    InfoCircle,
}

impl ToastIcon {
    /// Icon class, without the `fas` style prefix.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::CheckCircle => "fa-check-circle",
            Self::ExclamationCircle => "fa-exclamation-circle",
            Self::ExclamationTriangle => "fa-exclamation-triangle",
            Self::InfoCircle => "fa-info-circle",
        }
    }
}

/// Map a toast kind to its icon.
#[must_use]
pub fn icon_for(kind: ToastKind) -> ToastIcon {
    match kind {
        ToastKind::Success => ToastIcon::CheckCircle,
        ToastKind::Error => ToastIcon::ExclamationCircle,
        ToastKind::Warning => ToastIcon::ExclamationTriangle,
        ToastKind::Info => ToastIcon::InfoCircle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_every_kind() {
        assert_eq!(icon_for(ToastKind::Success), ToastIcon::CheckCircle);
        assert_eq!(icon_for(ToastKind::Error), ToastIcon::ExclamationCircle);
        assert_eq!(icon_for(ToastKind::Warning), ToastIcon::ExclamationTriangle);
        assert_eq!(icon_for(ToastKind::Info), ToastIcon::InfoCircle);
    }

    #[test]
    fn should_use_info_icon_for_unknown_kind_names() {
        let icon = icon_for(ToastKind::from_name("critical"));
        assert_eq!(icon.css_class(), "fa-info-circle");
    }
}
