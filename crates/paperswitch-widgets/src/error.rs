//! Error types for switch setup.

use thiserror::Error;

/// Configuration errors raised while attaching a [`PaperSwitch`](crate::PaperSwitch).
///
/// These are programming errors: a host is expected to propagate them out of
/// its startup path rather than recover.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaperSwitchError {
    /// No explicit fill color, and the fallback policy could not supply one.
    #[error("no fill color: set `fill_color`, give the switch an on tint, or use the green fallback")]
    MissingFillColor,
    /// Animation duration is negative, zero or not finite.
    #[error("invalid animation duration {0}: must be finite and greater than zero")]
    InvalidDuration(f64),
}
