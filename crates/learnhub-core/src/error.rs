//! Activity error types.
//!
//! Every variant is recoverable by the caller. The hosting UI renders each one
//! as a labelled error state instead of blank content.

use thiserror::Error;

use crate::model::ContentKind;

/// Errors produced while resolving, generating, or driving an activity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    /// The mode id has no registry entry.
    #[error("no configuration found for learning mode '{mode_id}'")]
    ConfigNotFound { mode_id: String },

    /// The declared content kind does not map to any state machine, or the
    /// generator produced a payload of a different kind.
    #[error("unsupported activity type '{kind}'")]
    UnsupportedType {
        mode_id: Option<String>,
        kind: String,
    },

    /// The generated payload has no items.
    #[error("learning mode '{mode_id}' produced no content")]
    EmptyPayload { mode_id: String },

    /// The generated payload violates its shape invariants.
    #[error("learning mode '{mode_id}' produced malformed content: {reason}")]
    MalformedPayload { mode_id: String, reason: String },

    /// The event has no meaning for this kind of activity.
    #[error("'{event}' is not a valid action for a {kind} activity")]
    UnsupportedEvent { kind: ContentKind, event: String },

    /// The event text could not be parsed.
    #[error("invalid event: {0}")]
    InvalidEvent(String),
}

impl ActivityError {
    /// Returns `true` for errors caused by the registry rather than by content
    /// or user input.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            ActivityError::ConfigNotFound { .. } | ActivityError::UnsupportedType { .. }
        )
    }

    /// Short heading for the error state shown to the learner.
    pub fn title(&self) -> &'static str {
        match self {
            ActivityError::ConfigNotFound { .. } => "Configuration Error",
            ActivityError::UnsupportedType { .. } => "Unknown Activity Type",
            ActivityError::EmptyPayload { .. } => "No Content Available",
            ActivityError::MalformedPayload { .. } => "Invalid Content",
            ActivityError::UnsupportedEvent { .. } | ActivityError::InvalidEvent(_) => {
                "Invalid Action"
            }
        }
    }
}
