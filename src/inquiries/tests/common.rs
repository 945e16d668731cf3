use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};

use crate::config::InquiryConfig;
use crate::inquiries::domain::{BudgetRange, InquiryForm, ServiceType};
use crate::inquiries::repository::{
    AnalyticsError, AnalyticsEvent, AnalyticsSink, InquiryRecord, InquiryRepository,
    MemoryInquiryStore, RepositoryError,
};
use crate::inquiries::service::InquiryService;

/// Pipeline config with a short fabricated-success delay so honeypot tests
/// stay fast.
pub(super) fn inquiry_config() -> InquiryConfig {
    InquiryConfig {
        fake_success_delay_ms: 10,
        ..InquiryConfig::default()
    }
}

/// A well-formed submission whose form has been open long enough.
pub(super) fn settled_form() -> InquiryForm {
    InquiryForm {
        name: "Jane Doe".to_string(),
        email: "jane@co.com".to_string(),
        service_type: ServiceType::MvpBuild,
        budget_range: Some(BudgetRange::FiveToFifteenK),
        message: "Need a new MVP built".to_string(),
        website: String::new(),
        form_loaded_at: Utc::now() - Duration::milliseconds(5_000),
    }
}

/// Same content, but submitted half a second after the form rendered.
pub(super) fn rushed_form() -> InquiryForm {
    InquiryForm {
        form_loaded_at: Utc::now() - Duration::milliseconds(500),
        ..settled_form()
    }
}

/// Automated submitter that filled the hidden field.
pub(super) fn bot_form() -> InquiryForm {
    InquiryForm {
        website: "http://spam.example".to_string(),
        ..settled_form()
    }
}

pub(super) fn short_message_form() -> InquiryForm {
    InquiryForm {
        message: "  Hi  ".to_string(),
        ..settled_form()
    }
}

pub(super) fn build_service() -> (
    InquiryService<MemoryInquiryStore, MemoryAnalytics>,
    Arc<MemoryInquiryStore>,
    Arc<MemoryAnalytics>,
) {
    let store = Arc::new(MemoryInquiryStore::default());
    let analytics = Arc::new(MemoryAnalytics::default());
    let service = InquiryService::new(store.clone(), analytics.clone(), inquiry_config());
    (service, store, analytics)
}

#[derive(Default)]
pub(super) struct MemoryAnalytics {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl MemoryAnalytics {
    pub(super) fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().expect("analytics mutex poisoned").clone()
    }
}

impl AnalyticsSink for MemoryAnalytics {
    fn record(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        self.events
            .lock()
            .expect("analytics mutex poisoned")
            .push(event);
        Ok(())
    }
}

/// Sink whose transport always fails; accepted submissions must shrug it off.
pub(super) struct FailingAnalytics;

impl AnalyticsSink for FailingAnalytics {
    fn record(&self, _event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        Err(AnalyticsError::Transport("collector unreachable".to_string()))
    }
}

/// Document store that is down for every call.
pub(super) struct OfflineStore;

impl InquiryRepository for OfflineStore {
    fn insert(
        &self,
        _request: crate::inquiries::domain::InquiryRequest,
    ) -> Result<InquiryRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("document store offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<InquiryRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("document store offline".to_string()))
    }
}
