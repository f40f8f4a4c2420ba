//! Workflow trigger command.
//!
//! Both `dix upload <file>` and `dix generate` land here: assemble the
//! payload, run the two-step workflow through the orchestrator, then hand the
//! held state to the views. A spinner covers the loading phase; after the
//! first render an interactive prompt lets the user re-filter the held
//! insights without another request.

use anyhow::{Context, Result};
use dialoguer::Select;
use dix_core::{FilterMode, Orchestrator, WorkflowState};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

use crate::cli::OutputArgs;
use crate::config::Config;
use crate::render;

/// What the user asked the workflow to consume.
pub enum Trigger {
    /// Upload this CSV file.
    File(PathBuf),
    /// Regenerate from server-side cached data.
    Cache,
}

pub async fn execute(trigger: Trigger, output: &OutputArgs, config: &Config) -> Result<()> {
    let client = config.client()?;
    let mut orchestrator = Orchestrator::new(client);

    let spinner = if output.json {
        None
    } else {
        Some(loading_spinner())
    };

    let result = match trigger {
        Trigger::File(path) => {
            let filename = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "upload.csv".to_string());
            // Read once; the bytes move into the request and are not kept.
            let bytes = tokio::fs::read(&path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            debug!(bytes = bytes.len(), "read upload payload");
            orchestrator.submit_file(filename, bytes).await
        }
        Trigger::Cache => orchestrator.request_from_cache().await,
    };

    if let Some(spinner) = &spinner {
        spinner.finish_and_clear();
    }

    // One trigger per invocation, so the busy guard cannot fire here; any
    // service failure is already folded into the state.
    let state = result.context("Workflow could not start")?;

    if output.json {
        println!("{}", state_json(state)?);
        return Ok(());
    }

    let mut mode = output.priority;
    print!("{}", render::render(state, mode));

    if output.no_interactive || state.decisions().is_none() || !std::io::stdin().is_terminal() {
        return Ok(());
    }

    // Filter loop: each pass re-renders the held collection, no refetch.
    while let Some(next) = prompt_filter(mode)? {
        mode = next;
        print!("{}", render::render(state, mode));
    }

    Ok(())
}

/// Raw held state for `--json` consumers.
fn state_json(state: &WorkflowState) -> Result<String> {
    let value = serde_json::json!({
        "phase": state.phase().as_str(),
        "decisions": state.decisions(),
        "summary": state.summary(),
        "error": state.last_error(),
    });
    serde_json::to_string_pretty(&value).context("Failed to serialize state")
}

fn loading_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message("Generating decision insights...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Ask for the next filter mode. `None` means the user is done.
fn prompt_filter(current: FilterMode) -> Result<Option<FilterMode>> {
    let mut items: Vec<&str> = FilterMode::ALL.iter().map(|m| m.as_str()).collect();
    items.push("done");

    let current_idx = FilterMode::ALL
        .iter()
        .position(|m| *m == current)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Filter by priority")
        .items(&items)
        .default(current_idx)
        .interact_opt()
        .context("Filter prompt failed")?;

    Ok(match selection {
        Some(i) if i < FilterMode::ALL.len() => Some(FilterMode::ALL[i]),
        _ => None,
    })
}
