use serde::{Deserialize, Serialize};

use super::filter::RejectReason;

/// How long the frontend keeps a banner on screen before auto-dismissing.
pub const DISPLAY_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub const fn label(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
        }
    }
}

/// Transient banner payload returned to the page after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub display_secs: u64,
    pub dismissible: bool,
}

impl Notification {
    fn new(kind: NotificationKind, title: &str, body: String) -> Self {
        Self {
            kind,
            title: title.to_string(),
            body,
            display_secs: DISPLAY_SECS,
            dismissible: true,
        }
    }

    /// Confirmation shown after a persisted submission. Also returned verbatim
    /// for honeypot discards, so the two are indistinguishable on the wire.
    pub fn submission_received() -> Self {
        Self::new(
            NotificationKind::Success,
            "Message sent!",
            "Thanks for reaching out. I'll get back to you within one business day.".to_string(),
        )
    }

    /// Generic failure banner pointing at the direct contact channel. Never
    /// includes store error detail.
    pub fn persistence_failed(fallback_email: &str) -> Self {
        Self::new(
            NotificationKind::Error,
            "Something went wrong",
            format!(
                "Your message wasn't sent. Please email me directly at {fallback_email} \
                 and I'll reply from there."
            ),
        )
    }

    /// Visible rejection banner for a failed filter check.
    pub fn rejection(reason: &RejectReason) -> Self {
        match reason {
            RejectReason::TooFast { .. } => Self::new(
                NotificationKind::Warning,
                "That was quick",
                "Please take a few seconds to review your message, then send it again."
                    .to_string(),
            ),
            RejectReason::MessageTooShort { minimum, .. } => Self::new(
                NotificationKind::Warning,
                "Tell me a bit more",
                format!(
                    "A message of at least {minimum} characters helps me respond usefully."
                ),
            ),
            RejectReason::MissingName => Self::new(
                NotificationKind::Warning,
                "Missing name",
                "Please add your name so I know who to reply to.".to_string(),
            ),
            RejectReason::InvalidEmail => Self::new(
                NotificationKind::Warning,
                "Check your email address",
                "That email address doesn't look right, so my reply wouldn't reach you."
                    .to_string(),
            ),
        }
    }
}
