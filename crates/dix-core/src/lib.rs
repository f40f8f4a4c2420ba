//! dix-core - Core library for the dix decision intelligence client
//!
//! This crate provides everything below the presentation layer:
//!
//! - **types**: wire-level data model for the decision service
//! - **client**: HTTP client over the two service endpoints
//! - **workflow**: request-orchestration state machine
//! - **filter**: priority filtering over held insights

pub mod client;
pub mod error;
pub mod filter;
pub mod types;
pub mod workflow;

// Re-export commonly used types
pub use client::{ApiClient, DecisionService};
pub use error::{Error, Result};
pub use filter::{filter_insights, FilterMode};
pub use types::{DecisionResult, Insight, SummaryStats, UploadPayload};
pub use workflow::{Orchestrator, Phase, WorkflowState};
