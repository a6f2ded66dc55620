//! HTTP surface for the support tool backend.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health        - Liveness check
//! GET  /tools         - Tool definitions (name, description, input schema)
//! POST /tools/{name}  - Invoke a tool with a JSON argument object
//! ```
//!
//! The transport owns nothing: it forwards the named invocation to the
//! tool executor and returns its string result verbatim. Domain
//! rejections arrive inside that result with status 200; only a malformed
//! invocation (unknown tool, bad arguments) maps to an HTTP error status.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::{get, post},
};

use crate::error::ToolError;
use crate::state::AppState;
use crate::tools::{Tool, ToolExecutor, support_tools};

/// Build the support router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/tools", get(list_tools))
        .route("/tools/{name}", post(invoke_tool))
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List the available tool definitions.
async fn list_tools() -> Json<Vec<Tool>> {
    Json(support_tools())
}

/// Invoke a tool by name.
///
/// The result is already a JSON document, so it is returned as the raw
/// response body rather than re-encoded.
async fn invoke_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(input): Json<serde_json::Value>,
) -> Result<impl IntoResponse, ToolError> {
    let result = ToolExecutor::new(state.store()).execute(&name, &input)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], result))
}
