//! Alert dialog
//!
//! [`AlertSlot`] holds the one alert currently shown. Showing replaces it,
//! closing empties it.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::escape::Escaped;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum AlertVariant {
    #[default]
    #[display("info")]
    Info,
    #[display("success")]
    Success,
    #[display("error")]
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDescription {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub variant: AlertVariant,
    #[serde(default = "default_confirm_text")]
    pub confirm_text: String,
}

fn default_confirm_text() -> String {
    "확인".to_string()
}

impl AlertDescription {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: AlertVariant::Info,
            confirm_text: default_confirm_text(),
        }
    }

    pub fn with_variant(mut self, variant: AlertVariant) -> Self {
        self.variant = variant;
        self
    }
}

impl fmt::Display for AlertDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<div class="alert-dialog alert-{}" role="alertdialog"><h2>{}</h2><p>{}</p><button type="button" data-alert-close>{}</button></div>"#,
            self.variant,
            Escaped(&self.title),
            Escaped(&self.description),
            Escaped(&self.confirm_text),
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct AlertSlot {
    current: Option<AlertDescription>,
}

impl AlertSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `alert`, returning the one it replaced
    pub fn show(&mut self, alert: AlertDescription) -> Option<AlertDescription> {
        self.current.replace(alert)
    }

    pub fn close(&mut self) -> Option<AlertDescription> {
        self.current.take()
    }

    pub fn current(&self) -> Option<&AlertDescription> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// The dialog markup, empty when closed
    pub fn render(&self) -> String {
        self.current
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let slot = AlertSlot::new();
        assert!(!slot.is_open());
        assert!(slot.current().is_none());
        assert_eq!(slot.render(), "");
    }

    #[test]
    fn test_show_replaces() {
        let mut slot = AlertSlot::new();
        let first = AlertDescription::new("저장", "저장되었습니다.");
        let second =
            AlertDescription::new("오류", "다시 시도해 주세요.").with_variant(AlertVariant::Error);

        assert_eq!(slot.show(first.clone()), None);
        assert_eq!(slot.show(second.clone()), Some(first));
        assert_eq!(slot.current(), Some(&second));
    }

    #[test]
    fn test_close_empties() {
        let mut slot = AlertSlot::new();
        slot.show(AlertDescription::new("a", "b"));

        assert!(slot.close().is_some());
        assert!(!slot.is_open());
        assert_eq!(slot.close(), None);
    }

    #[test]
    fn test_render_escapes_text() {
        let mut slot = AlertSlot::new();
        slot.show(
            AlertDescription::new("<script>", "a & b").with_variant(AlertVariant::Success),
        );

        let html = slot.render();
        assert!(html.contains("alert-success"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(html.contains("확인"));
    }

    #[test]
    fn test_deserialize_defaults() {
        let alert: AlertDescription =
            serde_json::from_str(r#"{"title":"t","description":"d"}"#).unwrap();
        assert_eq!(alert.variant, AlertVariant::Info);
        assert_eq!(alert.confirm_text, "확인");
    }
}
