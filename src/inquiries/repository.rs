use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{BudgetRange, InquiryId, InquiryRequest, ServiceType};

/// Collection name the sink writes to in the backing document store.
pub const CONTACTS_COLLECTION: &str = "contacts";

/// One persisted inquiry document. `submitted_at` is assigned by the store at
/// write time so clients cannot forge it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InquiryRecord {
    pub id: InquiryId,
    pub name: String,
    pub email: String,
    pub service_type: ServiceType,
    pub budget_range: Option<BudgetRange>,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

/// Storage abstraction so the pipeline can be exercised in isolation.
///
/// Implementations either write the full record or nothing; there is no
/// partial-write state to recover from.
pub trait InquiryRepository: Send + Sync {
    fn insert(&self, request: InquiryRequest) -> Result<InquiryRecord, RepositoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<InquiryRecord>, RepositoryError>;
}

/// Error enumeration for document store failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("document store unavailable: {0}")]
    Unavailable(String),
    #[error("write rejected by store: {0}")]
    Rejected(String),
}

static INQUIRY_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_inquiry_id() -> InquiryId {
    let id = INQUIRY_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    InquiryId(format!("inq-{id:06}"))
}

/// In-memory stand-in for the hosted `contacts` collection. Backs the dev
/// server and the test suites; a hosted document store adapter implements the
/// same trait in deployment.
#[derive(Default)]
pub struct MemoryInquiryStore {
    records: Mutex<Vec<InquiryRecord>>,
}

impl MemoryInquiryStore {
    pub fn len(&self) -> usize {
        self.records.lock().expect("store mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl InquiryRepository for MemoryInquiryStore {
    fn insert(&self, request: InquiryRequest) -> Result<InquiryRecord, RepositoryError> {
        let record = InquiryRecord {
            id: next_inquiry_id(),
            name: request.name,
            email: request.email,
            service_type: request.service_type,
            budget_range: request.budget_range,
            message: request.message,
            submitted_at: Utc::now(),
        };

        let mut guard = self.records.lock().expect("store mutex poisoned");
        guard.push(record.clone());
        Ok(record)
    }

    fn recent(&self, limit: usize) -> Result<Vec<InquiryRecord>, RepositoryError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }
}

/// Fire-and-forget conversion event for the third-party analytics collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub action: String,
    pub category: String,
    pub label: String,
}

impl AnalyticsEvent {
    pub fn lead_generated(service_type: ServiceType) -> Self {
        Self {
            action: "generate_lead".to_string(),
            category: "Conversion".to_string(),
            label: format!("form submit - {}", service_type.label()),
        }
    }

    pub fn budget_selected(budget: BudgetRange) -> Self {
        Self {
            action: "budget_selected".to_string(),
            category: "Conversion".to_string(),
            label: budget.label().to_string(),
        }
    }
}

/// Outbound analytics hook. Failures are the caller's to swallow; they must
/// never affect the submission outcome.
pub trait AnalyticsSink: Send + Sync {
    fn record(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError>;
}

/// Analytics dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("analytics transport unavailable: {0}")]
    Transport(String),
}

/// Sink used when no collector is configured.
#[derive(Default)]
pub struct NoopAnalytics;

impl AnalyticsSink for NoopAnalytics {
    fn record(&self, _event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        Ok(())
    }
}
