//! PaperSwitch: an on/off switch that floods its container with color.
//!
//! Turning the switch on grows a circle from the switch center until it
//! covers the parent; turning it off shrinks it away. Hosts step the
//! animation with `tick(dt)` and hook `on_animation_start` /
//! `on_animation_stop` to keep their own effects in sync.
//!
//! ```
//! use paperswitch::widgets::{PaperSwitchConfig, RevealPanel, Switch};
//! use paperswitch::{Color, Rect, Size, Widget};
//!
//! let config = PaperSwitchConfig::new().fill_color(Color::GREEN);
//! let mut panel = RevealPanel::new(
//!     Size::new(320.0, 480.0),
//!     Some(Color::WHITE),
//!     Switch::new(),
//!     Rect::new(20.0, 20.0, 51.0, 31.0),
//!     &config,
//! )
//! .unwrap();
//! panel.layout(Rect::new(0.0, 0.0, 320.0, 480.0));
//!
//! panel.set_on(true, true);
//! while panel.tick(1.0 / 60.0) {}
//! assert!(panel.is_on());
//! ```

pub use paperswitch_core::*;
pub use paperswitch_widgets as widgets;
pub use paperswitch_yaml as yaml;
