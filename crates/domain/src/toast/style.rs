//! The stylesheet shared by every toast on the page.

use std::time::Duration;

/// `id` of the `<style>` element holding [`TOAST_STYLESHEET`]. Its presence
/// in the document means the sheet is already injected.
pub const STYLE_MARKER_ID: &str = "toast-styles";

/// Rules for toasts, injected into the document once.
pub const TOAST_STYLESHEET: &str = r"
.toast {
    position: fixed;
    bottom: 20px;
    right: 20px;
    background: rgba(0, 0, 0, 0.9);
    color: white;
    padding: 1rem 1.5rem;
    border-radius: 10px;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    min-width: 300px;
    max-width: 400px;
    z-index: 9999;
    animation: slideInRight 0.3s ease;
    border-left: 4px solid;
}
.toast-info { border-color: #2196f3; }
.toast-success { border-color: #4caf50; }
.toast-warning { border-color: #ff9800; }
.toast-error { border-color: #f44336; }
.toast-content {
    display: flex;
    align-items: center;
    gap: 10px;
}
.toast-close {
    background: none;
    border: none;
    color: rgba(255, 255, 255, 0.7);
    font-size: 1.5rem;
    cursor: pointer;
    padding: 0;
    width: 24px;
    height: 24px;
    display: flex;
    align-items: center;
    justify-content: center;
}
.toast-close:hover {
    color: white;
}
@keyframes slideInRight {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOutRight {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(100%); opacity: 0; }
}
";

/// Inline `animation` value that slides a toast out over `duration`.
#[must_use]
pub fn exit_animation(duration: Duration) -> String {
    format!("slideOutRight {}s ease forwards", duration.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastKind;

    #[test]
    fn should_format_exit_animation_in_seconds() {
        assert_eq!(
            exit_animation(Duration::from_millis(300)),
            "slideOutRight 0.3s ease forwards"
        );
        assert_eq!(
            exit_animation(Duration::from_secs(1)),
            "slideOutRight 1s ease forwards"
        );
    }

    #[test]
    fn should_define_both_slide_keyframes() {
        assert!(TOAST_STYLESHEET.contains("@keyframes slideInRight"));
        assert!(TOAST_STYLESHEET.contains("@keyframes slideOutRight"));
    }

    #[test]
    fn should_color_every_kind() {
        let colors = [
            (ToastKind::Info, "#2196f3"),
            (ToastKind::Success, "#4caf50"),
            (ToastKind::Warning, "#ff9800"),
            (ToastKind::Error, "#f44336"),
        ];
        for (kind, color) in colors {
            let rule = format!(".{} {{ border-color: {color}; }}", kind.css_class());
            assert!(TOAST_STYLESHEET.contains(&rule), "missing rule: {rule}");
        }
    }
}
