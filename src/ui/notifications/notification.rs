// SPDX-License-Identifier: MPL-2.0
//! Notification data and severity levels.

use crate::error::Error;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    /// Stays on screen until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns `None` for errors.
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }

    /// Single-character glyph shown at the start of a toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "i",
            Severity::Warning | Severity::Error => "!",
        }
    }
}

/// A message shown to the user, resolved through i18n at render time.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Builds the notification reporting `err`.
    ///
    /// Failures the user has to act on (unreadable folder, failed transfer)
    /// are errors; rejected input and skipped images are warnings.
    pub fn from_error(err: &Error) -> Self {
        let severity = match err {
            Error::DirectoryRead { .. } | Error::Transfer { .. } | Error::Config(_) => {
                Severity::Error
            }
            Error::ImageDecode { .. }
            | Error::DuplicateDestination(_)
            | Error::TooManyDestinations { .. } => Severity::Warning,
        };

        err.i18n_args()
            .into_iter()
            .fold(Self::new(severity, err.i18n_key()), |n, (key, value)| {
                n.with_arg(key, value)
            })
    }

    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    #[must_use]
    pub fn should_auto_dismiss(&self) -> bool {
        self.severity
            .auto_dismiss_duration()
            .is_some_and(|duration| self.created_at.elapsed() >= duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn error_severity_has_no_auto_dismiss() {
        assert!(Severity::Error.auto_dismiss_duration().is_none());
        assert!(!Notification::error("x").should_auto_dismiss());
    }

    #[test]
    fn warning_duration_is_longer_than_success() {
        let success = Severity::Success.auto_dismiss_duration().expect("success");
        let warning = Severity::Warning.auto_dismiss_duration().expect("warning");
        assert!(warning > success);
    }

    #[test]
    fn fresh_notification_is_not_dismissed() {
        assert!(!Notification::info("x").should_auto_dismiss());
    }

    #[test]
    fn from_error_carries_key_and_args() {
        let err = Error::TooManyDestinations { max: 5 };
        let notification = Notification::from_error(&err);

        assert_eq!(notification.severity(), Severity::Warning);
        assert_eq!(notification.message_key(), "notification-destination-limit");
        assert_eq!(
            notification.message_args(),
            &[("max".to_string(), "5".to_string())]
        );
    }

    #[test]
    fn from_error_transfer_is_error_severity() {
        let err = Error::Transfer {
            from: PathBuf::from("/a.jpg"),
            to: PathBuf::from("/b/a.jpg"),
            source: std::io::Error::other("denied"),
        };
        assert_eq!(Notification::from_error(&err).severity(), Severity::Error);
    }

    #[test]
    fn from_error_skipped_image_is_warning() {
        let err = Error::ImageDecode {
            path: PathBuf::from("/photos/broken.png"),
            reason: "truncated".into(),
        };
        let notification = Notification::from_error(&err);
        assert_eq!(notification.severity(), Severity::Warning);
        assert_eq!(notification.message_args()[0].1, "broken.png");
    }
}
