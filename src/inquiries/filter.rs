use std::time::Duration;

use crate::config::InquiryConfig;

use super::domain::InquiryForm;

/// Outcome of screening one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Passes every check; hand off to the submission sink.
    Accept,
    /// Honeypot tripped. Drop the submission but let the caller fabricate a
    /// success response so a scripted sender cannot tell it was filtered.
    SilentDiscard,
    /// Visible rejection the sender can act on.
    Reject(RejectReason),
}

/// Why a submission was visibly rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    TooFast { elapsed_ms: u64, required_ms: u64 },
    MessageTooShort { length: usize, minimum: usize },
    MissingName,
    InvalidEmail,
}

/// Pure decision logic for the inquiry pipeline. Holds the configured
/// thresholds, performs no I/O, and cannot fail.
///
/// The check order matters: the honeypot wins over everything so bots never
/// see a validation hint, the elapsed-time gate runs before content checks,
/// and field validation comes last.
#[derive(Debug, Clone)]
pub struct SpamFilter {
    min_elapsed: Duration,
    min_message_chars: usize,
}

impl SpamFilter {
    pub fn from_config(config: &InquiryConfig) -> Self {
        Self {
            min_elapsed: Duration::from_millis(config.min_elapsed_ms),
            min_message_chars: config.min_message_chars,
        }
    }

    /// Screen a submission given the time elapsed between form render and
    /// submit.
    pub fn screen(&self, form: &InquiryForm, elapsed: Duration) -> Verdict {
        if form.honeypot_tripped() {
            return Verdict::SilentDiscard;
        }

        if elapsed < self.min_elapsed {
            return Verdict::Reject(RejectReason::TooFast {
                elapsed_ms: elapsed.as_millis() as u64,
                required_ms: self.min_elapsed.as_millis() as u64,
            });
        }

        let message_len = form.message.trim().chars().count();
        if message_len < self.min_message_chars {
            return Verdict::Reject(RejectReason::MessageTooShort {
                length: message_len,
                minimum: self.min_message_chars,
            });
        }

        if form.name.trim().is_empty() {
            return Verdict::Reject(RejectReason::MissingName);
        }

        if !email_looks_plausible(form.email.trim()) {
            return Verdict::Reject(RejectReason::InvalidEmail);
        }

        Verdict::Accept
    }
}

/// Format check only: one "@" with a non-empty local part and a dotted domain
/// segment. Deliverability is not verified.
fn email_looks_plausible(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    !host.is_empty() && !tld.is_empty()
}
