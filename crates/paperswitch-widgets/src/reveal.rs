//! Circular reveal mask: covering geometry, phase machine and scale tween.

use paperswitch_core::{EasedValue, Easing, Point, Rect};

/// Default reveal/conceal duration in seconds.
pub const DEFAULT_DURATION: f64 = 0.35;

/// Scale of the mask when hidden. Nonzero so the layer never degenerates.
pub const HIDDEN_SCALE: f32 = 0.0001;

/// Scale the reveal tween starts from.
pub const REVEAL_START_SCALE: f32 = 0.01;

/// Duration used for non-animated transitions so they still report start/stop.
pub const INSTANT_DURATION: f64 = 0.0001;

/// Radius of the smallest circle centered at `center` that covers `container`.
///
/// Uses the farther horizontal and vertical edge distances, so the circle
/// reaches the container corner opposite the center.
#[must_use]
pub fn covering_radius(center: Point, container: Rect) -> f32 {
    let local = center - container.origin();
    let dx = local.x.max(container.width - local.x);
    let dy = local.y.max(container.height - local.y);
    dx.hypot(dy)
}

/// The reveal mask: a circle around the switch center, scaled between
/// [`HIDDEN_SCALE`] and `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealShape {
    center: Point,
    radius: f32,
    scale: f32,
}

impl RevealShape {
    /// Shape for a switch at `switch_frame` inside `container`. Both rects
    /// share one coordinate space.
    #[must_use]
    pub fn new(switch_frame: Rect, container: Rect) -> Self {
        let center = switch_frame.center();
        Self {
            center,
            radius: covering_radius(center, container),
            scale: HIDDEN_SCALE,
        }
    }

    /// Recompute center and radius, keeping the current scale.
    pub fn reshape(&mut self, switch_frame: Rect, container: Rect) {
        let scale = self.scale;
        *self = Self::new(switch_frame, container);
        self.scale = scale;
    }

    /// Circle center.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Unscaled radius.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Unscaled bounding box of the circle.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::around(self.center, self.radius)
    }

    /// Current scale.
    #[must_use]
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    /// Set the current scale.
    pub const fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    /// Radius as currently drawn.
    #[must_use]
    pub fn scaled_radius(&self) -> f32 {
        self.radius * self.scale
    }
}

/// Visibility phase of the reveal mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    /// Scale at [`HIDDEN_SCALE`], no animation.
    #[default]
    Hidden,
    /// Animating toward full scale.
    Revealing,
    /// Scale at `1.0`, no animation.
    Visible,
    /// Animating toward [`HIDDEN_SCALE`].
    Concealing,
}

impl RevealPhase {
    /// Resting phase for a switch value.
    #[must_use]
    pub const fn settled(on: bool) -> Self {
        if on {
            Self::Visible
        } else {
            Self::Hidden
        }
    }

    /// Phase while animating toward a switch value.
    #[must_use]
    pub const fn transitioning(on: bool) -> Self {
        if on {
            Self::Revealing
        } else {
            Self::Concealing
        }
    }

    /// Whether a tween is in flight.
    #[must_use]
    pub const fn is_animating(self) -> bool {
        matches!(self, Self::Revealing | Self::Concealing)
    }

    /// Switch value this phase shows or is heading to.
    #[must_use]
    pub const fn target(self) -> bool {
        matches!(self, Self::Revealing | Self::Visible)
    }

    /// Scale the mask holds once this phase settles.
    #[must_use]
    pub const fn terminal_scale(self) -> f32 {
        if self.target() {
            1.0
        } else {
            HIDDEN_SCALE
        }
    }
}

/// A running scale tween toward one switch value.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealAnimation {
    target: bool,
    tween: EasedValue,
}

impl RevealAnimation {
    /// Reveal (`on == true`, ease-in from [`REVEAL_START_SCALE`]) or conceal
    /// (ease-out from full scale) over `duration` seconds.
    #[must_use]
    pub fn toward(on: bool, duration: f64) -> Self {
        let tween = if on {
            EasedValue::new(f64::from(REVEAL_START_SCALE), 1.0, duration)
                .with_easing(Easing::EaseIn)
        } else {
            EasedValue::new(1.0, f64::from(HIDDEN_SCALE), duration).with_easing(Easing::EaseOut)
        };
        Self { target: on, tween }
    }

    /// Switch value this animation drives toward.
    #[must_use]
    pub const fn target(&self) -> bool {
        self.target
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.tween.value() as f32
    }

    /// Advance by `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        self.tween.update(dt);
    }

    /// Whether the tween has run its full duration.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tween.is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_covering_radius_centered() {
        let container = Rect::new(0.0, 0.0, 300.0, 400.0);
        let r = covering_radius(Point::new(150.0, 200.0), container);
        assert!((r - 250.0).abs() < 1e-3);
    }

    #[test]
    fn test_covering_radius_corner() {
        let container = Rect::new(0.0, 0.0, 30.0, 40.0);
        let r = covering_radius(Point::ORIGIN, container);
        assert!((r - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_covering_radius_offset_container() {
        let container = Rect::new(100.0, 100.0, 30.0, 40.0);
        let r = covering_radius(Point::new(130.0, 140.0), container);
        assert!((r - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_shape_bounds_centered_on_switch() {
        let shape = RevealShape::new(
            Rect::new(10.0, 10.0, 50.0, 30.0),
            Rect::new(0.0, 0.0, 320.0, 240.0),
        );
        assert_eq!(shape.center(), Point::new(35.0, 25.0));
        assert!(shape.bounds().center().distance(&shape.center()) < 1e-3);
        assert_eq!(shape.bounds().width, shape.radius() * 2.0);
        assert_eq!(shape.scale(), HIDDEN_SCALE);
    }

    #[test]
    fn test_reshape_keeps_scale() {
        let frame = Rect::new(0.0, 0.0, 10.0, 10.0);
        let mut shape = RevealShape::new(frame, Rect::new(0.0, 0.0, 100.0, 100.0));
        shape.set_scale(1.0);
        let before = shape.radius();
        shape.reshape(frame, Rect::new(0.0, 0.0, 400.0, 400.0));
        assert!(shape.radius() > before);
        assert_eq!(shape.scale(), 1.0);
        assert_eq!(shape.scaled_radius(), shape.radius());
    }

    #[test]
    fn test_phase_helpers() {
        assert_eq!(RevealPhase::settled(true), RevealPhase::Visible);
        assert_eq!(RevealPhase::settled(false), RevealPhase::Hidden);
        assert_eq!(RevealPhase::transitioning(true), RevealPhase::Revealing);
        assert_eq!(RevealPhase::transitioning(false), RevealPhase::Concealing);
        assert!(RevealPhase::Revealing.is_animating());
        assert!(!RevealPhase::Visible.is_animating());
        assert!(RevealPhase::Revealing.target());
        assert!(!RevealPhase::Concealing.target());
        assert_eq!(RevealPhase::Visible.terminal_scale(), 1.0);
        assert_eq!(RevealPhase::Concealing.terminal_scale(), HIDDEN_SCALE);
        assert_eq!(RevealPhase::default(), RevealPhase::Hidden);
    }

    #[test]
    fn test_reveal_animation_eases_in_from_epsilon() {
        let mut anim = RevealAnimation::toward(true, DEFAULT_DURATION);
        assert!((anim.scale() - REVEAL_START_SCALE).abs() < 1e-6);
        anim.update(DEFAULT_DURATION / 2.0);
        // Ease-in lags the linear midpoint.
        assert!((anim.scale() - (0.01 + 0.99 * 0.25)).abs() < 1e-5);
        anim.update(DEFAULT_DURATION);
        assert!(anim.is_complete());
        assert!((anim.scale() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_conceal_animation_eases_out_to_hidden() {
        let mut anim = RevealAnimation::toward(false, DEFAULT_DURATION);
        assert!(!anim.target());
        assert!((anim.scale() - 1.0).abs() < 1e-6);
        anim.update(DEFAULT_DURATION / 2.0);
        // Ease-out covers three quarters of the distance by the midpoint.
        assert!((anim.scale() - (1.0 - 0.9999 * 0.75)).abs() < 1e-5);
        anim.update(1.0);
        assert!((anim.scale() - HIDDEN_SCALE).abs() < 1e-6);
    }

    #[test]
    fn test_instant_animation_completes_on_any_frame() {
        let mut anim = RevealAnimation::toward(true, INSTANT_DURATION);
        assert!(!anim.is_complete());
        anim.update(1.0 / 60.0);
        assert!(anim.is_complete());
    }

    proptest! {
        #[test]
        fn prop_covering_circle_reaches_every_corner(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            w in 1.0f32..2000.0,
            h in 1.0f32..2000.0,
            fx in 0.0f32..=1.0,
            fy in 0.0f32..=1.0,
        ) {
            let container = Rect::new(x, y, w, h);
            let center = Point::new(x + fx * w, y + fy * h);
            let radius = covering_radius(center, container);
            for corner in container.corners() {
                prop_assert!(center.distance(&corner) <= radius * (1.0 + 1e-5) + 1e-3);
            }
        }

        #[test]
        fn prop_covering_radius_is_tight(
            w in 1.0f32..2000.0,
            h in 1.0f32..2000.0,
            fx in 0.0f32..=1.0,
            fy in 0.0f32..=1.0,
        ) {
            let container = Rect::new(0.0, 0.0, w, h);
            let center = Point::new(fx * w, fy * h);
            let radius = covering_radius(center, container);
            let farthest = container
                .corners()
                .iter()
                .map(|c| center.distance(c))
                .fold(0.0f32, f32::max);
            prop_assert!((radius - farthest).abs() <= farthest * 1e-5 + 1e-3);
        }
    }
}
