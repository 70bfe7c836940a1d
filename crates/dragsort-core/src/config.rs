#![forbid(unsafe_code)]

//! Engine configuration.

use std::fmt;

/// Distance the cursor must travel from the grab point before the drag
/// activates. Zero means the first nonzero movement activates it.
pub const DEFAULT_ACTIVATION_DISTANCE: f64 = 0.0;

/// Tunables for a reorder controller.
///
/// The defaults reproduce the classic behavior: any nonzero movement starts
/// the drag, and keep-visible hints are emitted while the cursor is inside
/// the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReorderConfig {
    /// Minimum distance from the grab point before a grabbed row starts
    /// dragging. Guards against twitchy presses on coarse input devices.
    pub activation_distance: f64,
    /// Emit a keep-visible hint on moves whose cursor lies within the
    /// container bounds, for hosts that auto-scroll.
    pub keep_visible_hints: bool,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            activation_distance: DEFAULT_ACTIVATION_DISTANCE,
            keep_visible_hints: true,
        }
    }
}

impl ReorderConfig {
    /// Configuration with the classic defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the activation distance.
    #[must_use]
    pub const fn with_activation_distance(mut self, distance: f64) -> Self {
        self.activation_distance = distance;
        self
    }

    /// Enable or disable keep-visible hints.
    #[must_use]
    pub const fn with_keep_visible_hints(mut self, enabled: bool) -> Self {
        self.keep_visible_hints = enabled;
        self
    }

    /// Check the configuration for values the engine cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.activation_distance.is_finite() || self.activation_distance < 0.0 {
            return Err(ConfigError::InvalidActivationDistance(
                self.activation_distance,
            ));
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Activation distance is negative or not finite.
    InvalidActivationDistance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidActivationDistance(value) => {
                write!(f, "invalid activation distance: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
