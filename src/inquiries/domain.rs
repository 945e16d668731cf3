use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored inquiries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InquiryId(pub String);

/// Engagement category offered on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Audit,
    MvpBuild,
    Retainer,
    Other,
}

impl ServiceType {
    pub const fn label(self) -> &'static str {
        match self {
            ServiceType::Audit => "audit",
            ServiceType::MvpBuild => "mvp_build",
            ServiceType::Retainer => "retainer",
            ServiceType::Other => "other",
        }
    }
}

/// Budget bucket a prospect can optionally disclose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetRange {
    UnderFiveK,
    FiveToFifteenK,
    AboveFifteenK,
    Undisclosed,
}

impl BudgetRange {
    pub const fn label(self) -> &'static str {
        match self {
            BudgetRange::UnderFiveK => "under_5k",
            BudgetRange::FiveToFifteenK => "5k_to_15k",
            BudgetRange::AboveFifteenK => "above_15k",
            BudgetRange::Undisclosed => "undisclosed",
        }
    }
}

/// Raw form capture, exactly as the page submits it.
///
/// `website` is the hidden honeypot field: humans never see it, automated
/// submitters tend to fill it. `form_loaded_at` is the instant the form was
/// first rendered and feeds only the elapsed-time heuristic; it is never
/// trusted as a submission timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub service_type: ServiceType,
    #[serde(default)]
    pub budget_range: Option<BudgetRange>,
    pub message: String,
    #[serde(default)]
    pub website: String,
    pub form_loaded_at: DateTime<Utc>,
}

impl InquiryForm {
    pub fn honeypot_tripped(&self) -> bool {
        !self.website.trim().is_empty()
    }
}

/// A submission that has passed the spam filter. Immutable once built; the
/// persistence timestamp is assigned by the store, not taken from here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InquiryRequest {
    pub name: String,
    pub email: String,
    pub service_type: ServiceType,
    pub budget_range: Option<BudgetRange>,
    pub message: String,
}

impl InquiryRequest {
    /// Build the validated request from an accepted form, trimming the
    /// free-text fields.
    pub fn from_form(form: &InquiryForm) -> Self {
        Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            service_type: form.service_type,
            budget_range: form.budget_range,
            message: form.message.trim().to_string(),
        }
    }
}
