#![forbid(unsafe_code)]

//! Dragsort error model and recovery mapping.
//!
//! # Design Principles
//!
//! 1. **Result everywhere**: the event path never panics, and the commit
//!    path reports failure instead of corrupting the host list.
//! 2. **Domain-specific errors**: configuration and commit failures keep
//!    their own types so callers can match on what matters.
//! 3. **Recovery first**: every variant maps to a [`RecoveryAction`] the
//!    host can act on instead of tearing the interaction down.

use std::fmt;

use dragsort_core::config::ConfigError;
use dragsort_engine::commit::ApplyError;

// ── Unified Error ───────────────────────────────────────────────────────

/// Top-level error type for dragsort hosts.
///
/// Each variant wraps a domain-specific error. Use [`Error::recovery`] to
/// determine the appropriate recovery action.
#[derive(Debug)]
pub enum Error {
    /// Configuration validation failure.
    Config(ConfigError),
    /// Reorder commit failure.
    Apply(ApplyError),
}

/// Standard result type for dragsort APIs.
pub type Result<T> = std::result::Result<T, Error>;

// ── Recovery ────────────────────────────────────────────────────────────

/// What a host should do when an error occurs.
///
/// The host inspects this to decide whether to retry with safe settings or
/// drop the failed operation and keep the current list order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryAction {
    /// Replace the rejected configuration with the defaults.
    UseDefaults,
    /// Drop the reorder op and leave the list order untouched.
    DiscardOp,
}

impl Error {
    /// Determine the recovery action for this error.
    ///
    /// The host calls this to decide what to do instead of panicking.
    #[must_use]
    pub const fn recovery(&self) -> RecoveryAction {
        match self {
            Self::Config(_) => RecoveryAction::UseDefaults,
            Self::Apply(_) => RecoveryAction::DiscardOp,
        }
    }

    /// Error type label for logging.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Apply(_) => "apply",
        }
    }
}

// ── Display ─────────────────────────────────────────────────────────────

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Apply(err) => write!(f, "{err}"),
        }
    }
}

impl fmt::Display for RecoveryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UseDefaults => write!(f, "use_defaults"),
            Self::DiscardOp => write!(f, "discard_op"),
        }
    }
}

// ── std::error::Error ───────────────────────────────────────────────────

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Apply(err) => Some(err),
        }
    }
}

// ── From conversions ────────────────────────────────────────────────────

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<ApplyError> for Error {
    fn from(err: ApplyError) -> Self {
        Self::Apply(err)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────
