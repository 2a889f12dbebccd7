//! Switch decorator that floods its parent with color when turned on.
//!
//! [`PaperSwitch`] wraps any [`Switchable`] and owns a circular reveal mask
//! centered on it. Changing the value runs a scale tween on the mask, stepped
//! by the host through [`PaperSwitch::tick`], and reports the tween's start and
//! stop so the host can synchronize its own effects to the same timeline.
//!
//! # Examples
//!
//! ```
//! use paperswitch_core::{Color, Rect};
//! use paperswitch_widgets::{Backdrop, PaperSwitch, PaperSwitchConfig, Switch};
//!
//! let mut parent = Backdrop::new(Rect::new(0.0, 0.0, 320.0, 480.0), Some(Color::WHITE));
//! let switch = Switch::new().frame(Rect::new(20.0, 20.0, 51.0, 31.0));
//! let config = PaperSwitchConfig::new().fill_color(Color::GREEN);
//!
//! let mut paper = PaperSwitch::attach(switch, &parent, &config).unwrap();
//! paper.set_on(true, true, &mut parent);
//! paper.tick(0.35, &mut parent);
//!
//! assert!(paper.is_on());
//! assert_eq!(parent.background, Some(Color::GREEN));
//! ```

use crate::error::PaperSwitchError;
use crate::reveal::{RevealAnimation, RevealPhase, RevealShape, DEFAULT_DURATION, INSTANT_DURATION};
use crate::surface::Surface;
use crate::switch::{Switch, Switchable, ToggleChanged};
use paperswitch_core::{widget::LayoutResult, Canvas, Color, Event, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error, trace};

/// Handler invoked when a reveal or conceal starts, with the target value.
pub type AnimationStartHandler = Box<dyn FnMut(bool) + Send + Sync>;

/// Handler invoked when a reveal or conceal stops, with the target value and
/// whether it ran to completion.
///
/// An interrupted animation reports the value it was heading to, not the
/// value of the transition that replaced it.
pub type AnimationStopHandler = Box<dyn FnMut(bool, bool) + Send + Sync>;

/// Where the fill color comes from when none is configured explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillFallback {
    /// Use the switch's on tint; fail without one.
    #[default]
    Tint,
    /// Use the switch's on tint, else [`Color::GREEN`].
    Green,
    /// Require an explicit fill color.
    None,
}

/// Setup parameters for [`PaperSwitch::attach`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaperSwitchConfig {
    /// Reveal and conceal duration in seconds
    pub duration: f64,
    /// Explicit fill color
    pub fill_color: Option<Color>,
    /// Fill color fallback policy
    pub fallback: FillFallback,
}

impl Default for PaperSwitchConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            fill_color: None,
            fallback: FillFallback::default(),
        }
    }
}

impl PaperSwitchConfig {
    /// Config with the default duration and tint fallback.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the animation duration in seconds.
    #[must_use]
    pub const fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    /// Set an explicit fill color.
    #[must_use]
    pub const fn fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    /// Set the fallback policy.
    #[must_use]
    pub const fn fallback(mut self, fallback: FillFallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Check the duration.
    ///
    /// # Errors
    ///
    /// Returns [`PaperSwitchError::InvalidDuration`] unless the duration is
    /// finite and positive.
    pub fn validate(&self) -> Result<(), PaperSwitchError> {
        validate_duration(self.duration)
    }

    /// Pick the fill color for a switch with the given on tint.
    ///
    /// # Errors
    ///
    /// Returns [`PaperSwitchError::MissingFillColor`] when neither the config
    /// nor the fallback policy yields a color.
    pub fn resolve_fill_color(&self, tint: Option<Color>) -> Result<Color, PaperSwitchError> {
        match (self.fill_color, self.fallback) {
            (Some(color), _) => Ok(color),
            (None, FillFallback::Tint) => tint.ok_or(PaperSwitchError::MissingFillColor),
            (None, FillFallback::Green) => Ok(tint.unwrap_or(Color::GREEN)),
            (None, FillFallback::None) => Err(PaperSwitchError::MissingFillColor),
        }
    }
}

fn validate_duration(seconds: f64) -> Result<(), PaperSwitchError> {
    if seconds.is_finite() && seconds > 0.0 {
        Ok(())
    } else {
        Err(PaperSwitchError::InvalidDuration(seconds))
    }
}

/// A switch whose value is mirrored by a circular color fill over its parent.
pub struct PaperSwitch<S: Switchable = Switch> {
    switch: S,
    duration: f64,
    fill_color: Color,
    default_background: Option<Color>,
    shape: RevealShape,
    phase: RevealPhase,
    animation: Option<RevealAnimation>,
    on_start: Option<AnimationStartHandler>,
    on_stop: Option<AnimationStopHandler>,
}

impl<S: Switchable> PaperSwitch<S> {
    /// Attach reveal behavior to `switch` inside `parent`.
    ///
    /// Captures the parent's current background as the default, resolves the
    /// fill color and sizes the mask from the switch's current bounds. The
    /// mask starts at the terminal scale of the switch value.
    ///
    /// # Errors
    ///
    /// Returns [`PaperSwitchError::InvalidDuration`] for a non-positive or
    /// non-finite duration and [`PaperSwitchError::MissingFillColor`] when no
    /// fill color can be resolved.
    pub fn attach(
        switch: S,
        parent: &dyn Surface,
        config: &PaperSwitchConfig,
    ) -> Result<Self, PaperSwitchError> {
        let fill_color = config
            .validate()
            .and_then(|()| config.resolve_fill_color(switch.on_tint()))
            .map_err(|err| {
                error!(%err, "cannot attach reveal to switch");
                err
            })?;

        let phase = RevealPhase::settled(switch.is_on());
        let mut shape = RevealShape::new(switch.bounds(), parent.bounds());
        shape.set_scale(phase.terminal_scale());
        debug!(
            on = switch.is_on(),
            radius = shape.radius(),
            "reveal attached to switch"
        );

        Ok(Self {
            switch,
            duration: config.duration,
            fill_color,
            default_background: parent.background(),
            shape,
            phase,
            animation: None,
            on_start: None,
            on_stop: None,
        })
    }

    /// The wrapped switch.
    #[must_use]
    pub const fn switch(&self) -> &S {
        &self.switch
    }

    /// Current value.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.switch.is_on()
    }

    /// Animation duration in seconds.
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Change the duration used by later transitions.
    ///
    /// # Errors
    ///
    /// Returns [`PaperSwitchError::InvalidDuration`] unless `seconds` is
    /// finite and positive.
    pub fn set_duration(&mut self, seconds: f64) -> Result<(), PaperSwitchError> {
        validate_duration(seconds)?;
        self.duration = seconds;
        Ok(())
    }

    /// Fill color painted by the mask and applied to the parent when on.
    #[must_use]
    pub const fn fill_color(&self) -> Color {
        self.fill_color
    }

    /// Replace the fill color.
    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    /// Parent background captured at attach time.
    #[must_use]
    pub const fn default_background(&self) -> Option<Color> {
        self.default_background
    }

    /// Mask geometry and scale.
    #[must_use]
    pub const fn shape(&self) -> &RevealShape {
        &self.shape
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Whether a reveal or conceal is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.phase.is_animating()
    }

    /// Set the handler called when an animation starts. Replaces any
    /// previous handler.
    pub fn on_animation_start<F>(&mut self, handler: F)
    where
        F: FnMut(bool) + Send + Sync + 'static,
    {
        self.on_start = Some(Box::new(handler));
    }

    /// Set the handler called when an animation stops. Replaces any
    /// previous handler.
    ///
    /// Receives `(target, true)` on completion. When a new transition
    /// supersedes a running one, it first receives `(old_target, false)`.
    pub fn on_animation_stop<F>(&mut self, handler: F)
    where
        F: FnMut(bool, bool) + Send + Sync + 'static,
    {
        self.on_stop = Some(Box::new(handler));
    }

    /// Set the value, animating over the configured duration when `animated`.
    ///
    /// Setting the current value does nothing. A non-animated change still
    /// reports start and stop; it completes on the next [`tick`](Self::tick).
    pub fn set_on(&mut self, on: bool, animated: bool, parent: &mut dyn Surface) {
        if on == self.switch.is_on() {
            return;
        }
        self.switch.set_on(on);
        let duration = if animated {
            self.duration
        } else {
            INSTANT_DURATION
        };
        self.begin_transition(on, duration, parent);
    }

    /// Route input to the switch. A user-driven change starts an animated
    /// transition and is returned.
    pub fn event(&mut self, event: &Event, parent: &mut dyn Surface) -> Option<ToggleChanged> {
        let changed = self.switch.value_changed(event)?;
        self.begin_transition(changed.on, self.duration, parent);
        Some(changed)
    }

    /// Advance the running animation by `dt` seconds.
    ///
    /// Returns `true` while an animation is still in flight.
    pub fn tick(&mut self, dt: f64, parent: &mut dyn Surface) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        animation.update(dt);
        self.shape.set_scale(animation.scale());
        if !animation.is_complete() {
            return true;
        }

        let on = animation.target();
        self.animation = None;
        self.phase = RevealPhase::settled(on);
        self.shape.set_scale(self.phase.terminal_scale());
        parent.set_background(if on {
            Some(self.fill_color)
        } else {
            self.default_background
        });
        debug!(on, "reveal animation finished");
        self.notify_stop(on, true);
        false
    }

    /// Lay out the switch and recompute the mask for the new geometry.
    ///
    /// Never starts an animation. When idle, the mask snaps to the terminal
    /// scale of the current value.
    pub fn layout(&mut self, frame: Rect, parent_bounds: Rect) -> LayoutResult {
        let result = self.switch.layout(frame);
        self.shape.reshape(self.switch.bounds(), parent_bounds);
        if !self.phase.is_animating() {
            self.shape.set_scale(self.phase.terminal_scale());
        }
        trace!(
            radius = self.shape.radius(),
            scale = self.shape.scale(),
            "reveal geometry recomputed"
        );
        result
    }

    /// Paint the mask, clipped to the parent. Draws nothing while hidden.
    pub fn paint_reveal(&self, canvas: &mut dyn Canvas, parent_bounds: Rect) {
        if self.phase == RevealPhase::Hidden {
            return;
        }
        canvas.push_clip(parent_bounds);
        canvas.fill_circle(
            self.shape.center(),
            self.shape.scaled_radius(),
            self.fill_color,
        );
        canvas.pop_clip();
    }

    fn begin_transition(&mut self, on: bool, duration: f64, parent: &mut dyn Surface) {
        if let Some(previous) = self.animation.take() {
            debug!(on = previous.target(), "reveal animation interrupted");
            self.notify_stop(previous.target(), false);
        }

        let animation = RevealAnimation::toward(on, duration);
        self.shape.set_scale(animation.scale());
        self.animation = Some(animation);
        self.phase = RevealPhase::transitioning(on);
        parent.set_background(self.default_background);
        debug!(on, duration, "reveal animation started");

        if let Some(handler) = self.on_start.as_mut() {
            handler(on);
        }
    }

    fn notify_stop(&mut self, on: bool, completed: bool) {
        if let Some(handler) = self.on_stop.as_mut() {
            handler(on, completed);
        }
    }
}

impl<S: Switchable + fmt::Debug> fmt::Debug for PaperSwitch<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaperSwitch")
            .field("switch", &self.switch)
            .field("duration", &self.duration)
            .field("fill_color", &self.fill_color)
            .field("default_background", &self.default_background)
            .field("shape", &self.shape)
            .field("phase", &self.phase)
            .field("animation", &self.animation)
            .finish_non_exhaustive()
    }
}
