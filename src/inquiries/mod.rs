//! Contact inquiry intake: spam screening, persistence, and notifications.
//!
//! The pipeline runs Form Capture -> Spam Filter -> Submission Sink. The
//! filter is pure decision logic; the sink owns the single write to the
//! `contacts` collection and maps every outcome, including failures, to a
//! transient notification.

pub mod domain;
pub mod filter;
pub mod notify;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{BudgetRange, InquiryForm, InquiryId, InquiryRequest, ServiceType};
pub use filter::{RejectReason, SpamFilter, Verdict};
pub use notify::{Notification, NotificationKind};
pub use repository::{
    AnalyticsError, AnalyticsEvent, AnalyticsSink, InquiryRecord, InquiryRepository,
    MemoryInquiryStore, NoopAnalytics, RepositoryError, CONTACTS_COLLECTION,
};
pub use router::inquiry_router;
pub use service::{InquiryService, SubmissionOutcome};
