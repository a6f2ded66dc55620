//! Unified error handling for the support backend.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use coralbay_core::{OrderId, OrderStatus};
use serde_json::json;
use thiserror::Error;

/// Entity kinds, used in not-found errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Customer,
    Order,
    Ticket,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => f.write_str("customer"),
            Self::Order => f.write_str("order"),
            Self::Ticket => f.write_str("ticket"),
        }
    }
}

/// Domain-level error for tool operations.
///
/// Every variant is recoverable and caller-visible. No operation mutates
/// state before failing: a rejected request leaves its entity untouched.
/// Idempotent no-ops (cancelling an already-cancelled order) are modeled
/// as success-shaped outcome variants in the lifecycle engine, never as
/// one of these errors.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Unknown order, customer, or ticket identifier.
    #[error("{kind} {id} not found")]
    NotFound {
        kind: EntityKind,
        id: String,
    },

    /// Malformed or unacceptable argument (bad priority, refund amount
    /// exceeding the order total, no search parameters).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A status guard rejected the requested transition.
    #[error("cannot {action} order {order_id} in status {status}")]
    IllegalTransition {
        order_id: OrderId,
        status: OrderStatus,
        action: &'static str,
    },
}

impl ServiceError {
    /// Convenience constructor for not-found errors.
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Stable machine-readable tag for wire payloads.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::InvalidArgument(_) => "invalid_argument",
            Self::IllegalTransition { .. } => "illegal_transition",
        }
    }
}

/// Errors from the tool layer itself, as opposed to domain rejections.
///
/// Domain rejections ([`ServiceError`]) are rendered into the tool result
/// payload so the caller always receives a response; these errors mean the
/// invocation itself was malformed and map to HTTP statuses.
#[derive(Debug, Error)]
pub enum ToolError {
    /// No tool registered under the requested name.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// A required argument is missing or has the wrong JSON type.
    #[error("invalid arguments: {0}")]
    BadArguments(String),

    /// Result serialization failed.
    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl IntoResponse for ToolError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UnknownTool(_) => StatusCode::NOT_FOUND,
            Self::BadArguments(_) => StatusCode::BAD_REQUEST,
            Self::Serialize(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Tool invocation failed");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
