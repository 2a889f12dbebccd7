//! Widgets for the PaperSwitch toolkit.
//!
//! - [`Switch`]: native-style on/off control
//! - [`PaperSwitch`]: decorator that floods the parent with color via a
//!   circular reveal whenever the wrapped switch turns on
//! - [`RevealPanel`]: container widget that hosts a [`PaperSwitch`]

mod error;
pub mod panel;
pub mod paper_switch;
pub mod reveal;
pub mod surface;
pub mod switch;

pub use error::PaperSwitchError;
pub use panel::RevealPanel;
pub use paper_switch::{
    AnimationStartHandler, AnimationStopHandler, FillFallback, PaperSwitch, PaperSwitchConfig,
};
pub use reveal::{
    covering_radius, RevealAnimation, RevealPhase, RevealShape, DEFAULT_DURATION, HIDDEN_SCALE,
    INSTANT_DURATION, REVEAL_START_SCALE,
};
pub use surface::{Backdrop, Surface};
pub use switch::{Switch, Switchable, ToggleChanged};
