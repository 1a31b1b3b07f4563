//! Transient on-screen messages: the element model, the surface they are
//! appended to, and the handler that shows and auto-expires them.

mod handler;
mod surface;
mod timer;

pub use handler::{MessageHandler, BASE_CLASS, DISMISS_AFTER};
pub use surface::{MessageBoard, Surface};
pub use timer::{RemovalHandle, RemovalScheduler, ScheduleError};

use std::fmt;

/// Identifies one appended element so its removal targets exactly that
/// element and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(u64);

impl ElementId {
    /// Next process-wide unique id.
    pub fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A display element: ordered class tokens plus opaque text.
///
/// The text is untrusted and carried verbatim. It is never parsed or
/// interpreted as markup anywhere in the render path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    classes: Vec<String>,
    text: String,
}

impl Element {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            classes: Vec::new(),
            text: text.into(),
        }
    }

    /// Appends a class token, preserving order.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    #[allow(dead_code)]
    pub fn has_class(&self, token: &str) -> bool {
        self.classes.iter().any(|c| c == token)
    }

    /// The kind token: by contract the second class token (after the base).
    pub fn kind_token(&self) -> Option<&str> {
        self.classes.get(1).map(String::as_str)
    }
}

/// Message category. An open set: the four known tags style distinctly,
/// anything else passes through unstyled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    Success,
    Error,
    Info,
    Warning,
    Other(String),
}

impl Kind {
    /// Never fails; unrecognized tags become `Other`.
    pub fn from_token(token: &str) -> Self {
        match token {
            "success" => Kind::Success,
            "error" => Kind::Error,
            "info" => Kind::Info,
            "warning" => Kind::Warning,
            other => Kind::Other(other.to_string()),
        }
    }

    pub fn as_token(&self) -> &str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Info => "info",
            Kind::Warning => "warning",
            Kind::Other(token) => token,
        }
    }
}

impl From<&str> for Kind {
    fn from(token: &str) -> Self {
        Kind::from_token(token)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_ids_are_unique() {
        let a = ElementId::next();
        let b = ElementId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn element_keeps_class_order_and_text() {
        let element = Element::new("saved").with_class("message").with_class("success");
        assert_eq!(element.classes(), &["message", "success"]);
        assert_eq!(element.text(), "saved");
        assert!(element.has_class("message"));
        assert!(!element.has_class("error"));
        assert_eq!(element.kind_token(), Some("success"));
    }

    #[test]
    fn element_text_is_not_interpreted() {
        let element = Element::new("<b>bold</b> & \"quoted\"");
        assert_eq!(element.text(), "<b>bold</b> & \"quoted\"");
    }

    #[test]
    fn known_kind_tokens_round_trip() {
        for token in ["success", "error", "info", "warning"] {
            assert_eq!(Kind::from_token(token).as_token(), token);
        }
    }

    #[test]
    fn unknown_kind_is_accepted_verbatim() {
        let kind = Kind::from_token("celebration");
        assert_eq!(kind, Kind::Other("celebration".to_string()));
        assert_eq!(kind.as_token(), "celebration");
    }
}
