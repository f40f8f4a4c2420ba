//! Request orchestration state machine.
//!
//! One workflow runs at a time: submit a payload, await decision generation,
//! then await summary retrieval. The two failure modes are deliberately
//! asymmetric:
//!
//! - a failed generation is sticky — the error message is held and shown,
//!   while any previously held results stay visible next to it;
//! - a failed summary refresh is silent — the pane keeps its previous value
//!   (or stays empty) and no error surfaces.
//!
//! The orchestrator is the only writer of [`WorkflowState`]; views and the
//! filter borrow it immutably.

use crate::client::DecisionService;
use crate::error::{Error, Result};
use crate::types::{DecisionResult, SummaryStats, UploadPayload};
use tracing::{debug, warn};

/// Current phase of the workflow state machine.
///
/// `Success` and `Error` are re-entrant: the next trigger moves back through
/// `Loading`. There is no terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl Phase {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Loading => "loading",
            Phase::Success => "success",
            Phase::Error => "error",
        }
    }
}

/// Everything the presentation layer needs: current phase, last-held results
/// and the last generation error.
///
/// `decisions` and `summary` are replaced wholesale on success and survive
/// later failures; `last_error` coexists with them but never with the
/// `Success` phase.
#[derive(Debug, Default)]
pub struct WorkflowState {
    phase: Phase,
    decisions: Option<DecisionResult>,
    summary: Option<SummaryStats>,
    last_error: Option<String>,
}

impl WorkflowState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a workflow is in flight; triggers must be rejected.
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn decisions(&self) -> Option<&DecisionResult> {
        self.decisions.as_ref()
    }

    pub fn summary(&self) -> Option<&SummaryStats> {
        self.summary.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

/// Owns the workflow state and sequences the two service calls.
pub struct Orchestrator<S> {
    service: S,
    state: WorkflowState,
}

impl<S: DecisionService> Orchestrator<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: WorkflowState::default(),
        }
    }

    /// Read-only view of the held state.
    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// Submit user-supplied CSV bytes. Entry point for the upload trigger.
    pub async fn submit_file(&mut self, filename: String, bytes: Vec<u8>) -> Result<&WorkflowState> {
        self.run(UploadPayload::Csv { filename, bytes }).await
    }

    /// Regenerate from data the service already holds.
    pub async fn request_from_cache(&mut self) -> Result<&WorkflowState> {
        self.run(UploadPayload::Cached).await
    }

    /// Run one workflow to completion.
    ///
    /// Returns `Err` only for [`Error::WorkflowBusy`]; every service outcome,
    /// including a failed generation, resolves into the returned state.
    async fn run(&mut self, payload: UploadPayload) -> Result<&WorkflowState> {
        if self.state.is_loading() {
            return Err(Error::WorkflowBusy);
        }

        self.state.last_error = None;
        self.state.phase = Phase::Loading;

        match self.service.generate(payload).await {
            Ok(decisions) => {
                debug!(insights = decisions.insights.len(), "decision generation succeeded");
                self.state.decisions = Some(decisions);
            }
            Err(err) => {
                // Held results are kept: a failed refresh must not blank out
                // the last-known-good view.
                warn!("decision generation failed: {err}");
                self.state.last_error = Some(err.to_string());
                self.state.phase = Phase::Error;
                return Ok(&self.state);
            }
        }

        // Best-effort refresh, decoupled from the generation outcome. No
        // retry, nothing surfaced to the user.
        match self.service.summary().await {
            Ok(summary) => self.state.summary = Some(summary),
            Err(err) => debug!("summary refresh failed: {err}"),
        }

        self.state.phase = Phase::Success;
        Ok(&self.state)
    }
}
