//! One-time notices.
//!
//! [`NoticeBoard`] collects transient notifications raised while a
//! request is handled (e.g. "Your message has been sent successfully!").
//! Notices are consumed when drained for rendering, so each one shows
//! exactly once.

use serde::{Deserialize, Serialize};

/// The severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NoticeLevel {
    /// Informational notice.
    Info,
    /// Success notification.
    Success,
    /// Warning that requires attention.
    Warning,
    /// Error message indicating a failure.
    Error,
}

impl NoticeLevel {
    /// Returns the CSS tag class for this level.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A single transient notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    /// The severity level.
    pub level: NoticeLevel,
    /// The message text.
    pub text: String,
}

impl Notice {
    /// Creates a new notice.
    pub fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Storage for one-time notices.
///
/// # Examples
///
/// ```
/// use northlight_forms::notices::NoticeBoard;
///
/// let mut board = NoticeBoard::new();
/// board.success("Saved.");
/// assert_eq!(board.drain().len(), 1);
/// assert!(board.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
}

impl NoticeBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a notice with the given level and text.
    pub fn add(&mut self, level: NoticeLevel, text: &str) {
        self.notices.push(Notice::new(level, text));
    }

    /// Adds an info-level notice.
    pub fn info(&mut self, text: &str) {
        self.add(NoticeLevel::Info, text);
    }

    /// Adds a success-level notice.
    pub fn success(&mut self, text: &str) {
        self.add(NoticeLevel::Success, text);
    }

    /// Adds a warning-level notice.
    pub fn warning(&mut self, text: &str) {
        self.add(NoticeLevel::Warning, text);
    }

    /// Adds an error-level notice.
    pub fn error(&mut self, text: &str) {
        self.add(NoticeLevel::Error, text);
    }

    /// Drains and returns all stored notices, leaving the board empty.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Returns the stored notices without consuming them.
    pub fn peek(&self) -> &[Notice] {
        &self.notices
    }

    /// Returns the number of stored notices.
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    /// Returns `true` if no notices are stored.
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_tags() {
        assert_eq!(NoticeLevel::Info.tag(), "info");
        assert_eq!(NoticeLevel::Success.tag(), "success");
        assert_eq!(NoticeLevel::Warning.tag(), "warning");
        assert_eq!(NoticeLevel::Error.tag(), "error");
    }

    #[test]
    fn test_convenience_methods() {
        let mut board = NoticeBoard::new();
        board.info("a");
        board.success("b");
        board.warning("c");
        board.error("d");

        let notices = board.drain();
        assert_eq!(notices.len(), 4);
        assert_eq!(notices[0].level, NoticeLevel::Info);
        assert_eq!(notices[3].level, NoticeLevel::Error);
    }

    #[test]
    fn test_drain_consumes() {
        let mut board = NoticeBoard::new();
        board.success("once");
        assert_eq!(board.drain().len(), 1);
        assert!(board.drain().is_empty());
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut board = NoticeBoard::new();
        board.info("still here");
        assert_eq!(board.peek().len(), 1);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_notice_display() {
        let notice = Notice::new(NoticeLevel::Error, "Failed to send message.");
        assert_eq!(notice.to_string(), "Failed to send message.");
    }

    #[test]
    fn test_notice_serialization() {
        let notice = Notice::new(NoticeLevel::Success, "Sent!");
        let json = serde_json::to_string(&notice).unwrap();
        assert!(json.contains("\"text\":\"Sent!\""));
        assert!(json.contains("Success"));
    }
}
