//! Backend for a consulting landing page.
//!
//! The frontend is a static marketing page; everything with actual behavior
//! lives here: the contact inquiry pipeline (spam screening, persistence,
//! notifications), the immutable site content dataset, and UI preference
//! state.

pub mod config;
pub mod content;
pub mod error;
pub mod inquiries;
pub mod preferences;
pub mod telemetry;
