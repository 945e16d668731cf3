use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use tracing::{error, info, warn};

use crate::config::InquiryConfig;

use super::domain::{InquiryForm, InquiryRequest};
use super::filter::{RejectReason, SpamFilter, Verdict};
use super::notify::Notification;
use super::repository::{
    AnalyticsEvent, AnalyticsSink, InquiryRepository, CONTACTS_COLLECTION,
};

/// Terminal state of one submission attempt. Every variant carries the banner
/// the page should show; none of them is an error the caller must handle.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// Persisted; the form should clear.
    Accepted { notification: Notification },
    /// Honeypot discard wearing a success banner; identical to `Accepted` on
    /// the wire.
    Discarded { notification: Notification },
    /// Visible rejection; the form keeps its values.
    Rejected {
        reason: RejectReason,
        notification: Notification,
    },
    /// The store write failed; the form keeps its values.
    Failed { notification: Notification },
    /// A submission from the same sender was already in flight; nothing ran.
    InFlight,
}

impl SubmissionOutcome {
    pub fn notification(&self) -> Option<&Notification> {
        match self {
            SubmissionOutcome::Accepted { notification }
            | SubmissionOutcome::Discarded { notification }
            | SubmissionOutcome::Rejected { notification, .. }
            | SubmissionOutcome::Failed { notification } => Some(notification),
            SubmissionOutcome::InFlight => None,
        }
    }

    pub fn clears_form(&self) -> bool {
        matches!(
            self,
            SubmissionOutcome::Accepted { .. } | SubmissionOutcome::Discarded { .. }
        )
    }
}

/// Service composing the spam filter, the document store, and the analytics
/// sink.
///
/// One handle serves every visitor. The `in_flight` set mirrors each form's
/// disabled submit button, keyed by sender, so repeated submits from one form
/// never overlap while unrelated senders proceed independently.
pub struct InquiryService<R, A> {
    filter: SpamFilter,
    repository: Arc<R>,
    analytics: Arc<A>,
    config: InquiryConfig,
    in_flight: Mutex<HashSet<String>>,
}

impl<R, A> InquiryService<R, A>
where
    R: InquiryRepository + 'static,
    A: AnalyticsSink + 'static,
{
    pub fn new(repository: Arc<R>, analytics: Arc<A>, config: InquiryConfig) -> Self {
        Self {
            filter: SpamFilter::from_config(&config),
            repository,
            analytics,
            config,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Run one submission attempt to its terminal state.
    ///
    /// Infallible by design: spam rejections, validation problems, and store
    /// failures all come back as outcomes carrying a notification, and the
    /// service returns to idle afterwards.
    pub async fn submit(&self, form: InquiryForm) -> SubmissionOutcome {
        let key = Self::flight_key(&form);
        let first = self
            .in_flight
            .lock()
            .expect("in-flight mutex poisoned")
            .insert(key.clone());
        if !first {
            return SubmissionOutcome::InFlight;
        }

        let outcome = self.run(form).await;
        self.in_flight
            .lock()
            .expect("in-flight mutex poisoned")
            .remove(&key);
        outcome
    }

    /// Submissions are keyed by the normalized sender address, the closest
    /// server-side stand-in for one form instance.
    fn flight_key(form: &InquiryForm) -> String {
        form.email.trim().to_ascii_lowercase()
    }

    async fn run(&self, form: InquiryForm) -> SubmissionOutcome {
        // A client clock ahead of ours yields a negative elapsed span; treat
        // it as zero so it trips the too-fast gate rather than bypassing it.
        let elapsed = (Utc::now() - form.form_loaded_at)
            .to_std()
            .unwrap_or_default();

        match self.filter.screen(&form, elapsed) {
            Verdict::SilentDiscard => self.discard_quietly().await,
            Verdict::Reject(reason) => {
                info!(?reason, "inquiry rejected");
                let notification = Notification::rejection(&reason);
                SubmissionOutcome::Rejected {
                    reason,
                    notification,
                }
            }
            Verdict::Accept => self.persist(&form),
        }
    }

    /// Honeypot path: no write, but wait out the artificial delay and answer
    /// with the standard success banner so the response timing and body match
    /// a real acceptance.
    async fn discard_quietly(&self) -> SubmissionOutcome {
        info!("honeypot tripped, discarding submission");
        tokio::time::sleep(Duration::from_millis(self.config.fake_success_delay_ms)).await;
        SubmissionOutcome::Discarded {
            notification: Notification::submission_received(),
        }
    }

    fn persist(&self, form: &InquiryForm) -> SubmissionOutcome {
        let request = InquiryRequest::from_form(form);
        let service_type = request.service_type;
        let budget_range = request.budget_range;

        match self.repository.insert(request) {
            Ok(record) => {
                info!(
                    inquiry_id = %record.id.0,
                    collection = CONTACTS_COLLECTION,
                    service_type = service_type.label(),
                    "inquiry persisted"
                );
                self.emit(AnalyticsEvent::lead_generated(service_type));
                if let Some(budget) = budget_range {
                    self.emit(AnalyticsEvent::budget_selected(budget));
                }
                SubmissionOutcome::Accepted {
                    notification: Notification::submission_received(),
                }
            }
            Err(err) => {
                error!(%err, "inquiry persistence failed");
                SubmissionOutcome::Failed {
                    notification: Notification::persistence_failed(&self.config.fallback_email),
                }
            }
        }
    }

    fn emit(&self, event: AnalyticsEvent) {
        if let Err(err) = self.analytics.record(event) {
            warn!(%err, "analytics event dropped");
        }
    }
}
