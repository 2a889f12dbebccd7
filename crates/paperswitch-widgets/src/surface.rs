//! Parent container capability the reveal paints into.

use paperswitch_core::{Color, Rect};
use serde::{Deserialize, Serialize};

/// A container whose background a [`PaperSwitch`](crate::PaperSwitch) drives.
///
/// The reveal is clipped to [`Surface::bounds`], and the background is
/// switched to the fill color once a reveal completes.
pub trait Surface {
    /// Current background; `None` is transparent.
    fn background(&self) -> Option<Color>;

    /// Replace the background.
    fn set_background(&mut self, color: Option<Color>);

    /// Bounds in the same coordinate space as the switch frame.
    fn bounds(&self) -> Rect;
}

/// Plain background rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Backdrop {
    /// Container bounds
    pub bounds: Rect,
    /// Background color
    pub background: Option<Color>,
}

impl Backdrop {
    /// Create a backdrop.
    #[must_use]
    pub const fn new(bounds: Rect, background: Option<Color>) -> Self {
        Self { bounds, background }
    }
}

impl Surface for Backdrop {
    fn background(&self) -> Option<Color> {
        self.background
    }

    fn set_background(&mut self, color: Option<Color>) {
        self.background = color;
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
