//! User-record analytics module
//!
//! This module computes descriptive statistics over an in-memory snapshot
//! of user records: counts, role distribution, email-domain popularity,
//! creation histograms, recency counts, name-length averages, and
//! heuristic data-quality warnings.
//!
//! The core entry point is [`process_user_data`]; it is a pure function
//! over its inputs (plus a single captured "now") and performs no I/O.

pub mod domain_extractor;
pub mod issues;
pub mod models;
pub mod processor;
pub mod trends;

pub use domain_extractor::extract_email_domain;
pub use models::{EngagementMetrics, GrowthTrend, UserAnalysisReport, UserFilter};
pub use processor::{apply_filters, process_user_data, process_user_data_at, ProcessingError};
pub use trends::{engagement_metrics, growth_trends};
