//! Request dispatcher
//!
//! One submission = one POST to `{base}/api{endpoint}` with a JSON body.
//! The submit control goes busy before the request is issued and is
//! restored exactly once when the call settles, whatever the outcome.
//! Every response is normalized into a `DispatchOutcome` here, so panels
//! only ever see a typed payload or a user-facing message.

use crate::state::AppState;
use crate::types::{
    ConvertedConfig, DispatchOutcome, FormattedJson, GeneratedQuery, GeneratedRegex, MockCreated,
    ToolId, ToolOutput,
};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::sync::{Arc, RwLock};

/// Fallback for transport failures and undecodable bodies.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Failure response body of the service (any endpoint, non-2xx).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Executes one dispatch for the active panel in a background task.
///
/// Marks the panel's submit control busy, POSTs, and on settle restores
/// the control and applies the outcome. If the user switched tools while
/// the call was in flight, the mounted panel carries a newer generation
/// and the outcome is dropped; the fresh panel never went busy.
pub fn dispatch_background(
    state: Arc<RwLock<AppState>>,
    base_url: String,
    endpoint: &'static str,
    tool: ToolId,
    body: Value,
) {
    let generation = {
        let mut s = state.write().unwrap();
        s.panel.submit.begin();
        s.panel.generation()
    };

    tokio::spawn(async move {
        let outcome = dispatch(&base_url, endpoint, tool, &body).await;
        settle(&state, generation, outcome);
    });
}

/// Land a settled dispatch in the panel it was issued from. The outcome
/// only applies when the panel of that exact mount is still up; a panel
/// mounted later, even for the same tool, never sees it.
fn settle(state: &Arc<RwLock<AppState>>, generation: u64, outcome: DispatchOutcome) {
    let mut s = state.write().unwrap();
    if s.panel.generation() == generation {
        s.panel.submit.finish();
        s.panel.apply_outcome(outcome);
    }
}

/// Perform the POST and normalize whatever comes back.
pub async fn dispatch(
    base_url: &str,
    endpoint: &str,
    tool: ToolId,
    body: &Value,
) -> DispatchOutcome {
    let url = api_url(base_url, endpoint);
    let client = reqwest::Client::new();

    match client.post(&url).json(body).send().await {
        Ok(response) => {
            let status = response.status();
            match response.text().await {
                Ok(text) => normalize_response(tool, status, &text),
                Err(_) => DispatchOutcome::Failure(GENERIC_ERROR_MESSAGE.to_string()),
            }
        }
        Err(_) => DispatchOutcome::Failure(GENERIC_ERROR_MESSAGE.to_string()),
    }
}

/// Join the service base URL with the `/api` prefix and an endpoint path.
pub(crate) fn api_url(base_url: &str, endpoint: &str) -> String {
    format!("{}/api{}", base_url.trim_end_matches('/'), endpoint)
}

/// Turn a raw (status, body) pair into exactly one of success or failure.
///
/// Non-2xx: the structured `error` message passes through verbatim, with
/// the generic fallback when the body carries none. 2xx: the payload is
/// validated against the endpoint's typed shape; anything that does not
/// decode is treated like a transport failure.
pub(crate) fn normalize_response(tool: ToolId, status: StatusCode, body: &str) -> DispatchOutcome {
    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
        return DispatchOutcome::Failure(message);
    }

    let parsed = match tool {
        ToolId::Mock => serde_json::from_str::<MockCreated>(body).map(ToolOutput::Mock),
        ToolId::Regex => serde_json::from_str::<GeneratedRegex>(body).map(ToolOutput::Regex),
        ToolId::Config => serde_json::from_str::<ConvertedConfig>(body).map(ToolOutput::Config),
        ToolId::Sql => serde_json::from_str::<GeneratedQuery>(body).map(ToolOutput::Sql),
        ToolId::Json => serde_json::from_str::<FormattedJson>(body).map(ToolOutput::Json),
    };

    match parsed {
        Ok(output) => DispatchOutcome::Success(output),
        Err(_) => DispatchOutcome::Failure(GENERIC_ERROR_MESSAGE.to_string()),
    }
}
