//! Error banner component.

use crate::html::html_escape;

/// Stateless renderer for the transient error message.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorBannerView;

impl ErrorBannerView {
    /// Render `message`, or nothing when there is none.
    pub fn render(message: Option<&str>) -> String {
        match message {
            Some(message) if !message.is_empty() => format!(
                r#"<div class="error-banner" role="alert">{}</div>"#,
                html_escape(message)
            ),
            _ => String::new(),
        }
    }
}
