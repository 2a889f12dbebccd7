//! Native-style on/off switch and the capability trait reveal behaviour
//! attaches to.

use paperswitch_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, Key, Point, Rect, Size, TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use tracing::trace;

/// Message emitted when the switch value changes through user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleChanged {
    /// The new switch value
    pub on: bool,
}

/// Capability interface of an on/off control.
///
/// [`PaperSwitch`](crate::PaperSwitch) decorates any implementor instead of
/// extending a concrete switch. The reveal radiates from the center of
/// [`Widget::bounds`], so implementors draw the control centered there.
pub trait Switchable: Widget {
    /// Current value.
    fn is_on(&self) -> bool;

    /// Set the value without emitting [`ToggleChanged`].
    fn set_on(&mut self, on: bool);

    /// Tint used for the "on" track, if one was configured.
    fn on_tint(&self) -> Option<Color>;

    /// Route an input event; returns the change when user input flipped the value.
    fn value_changed(&mut self, event: &Event) -> Option<ToggleChanged>;
}

/// Default "on" track color when no tint is set.
const DEFAULT_ON_TRACK: Color = Color {
    r: 0.298,
    g: 0.851,
    b: 0.392,
    a: 1.0,
};

/// On/off switch with a pill-shaped track and a round thumb.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Switch {
    /// Current state
    on: bool,
    /// Whether the switch is disabled
    disabled: bool,
    /// Track width
    track_width: f32,
    /// Track height
    track_height: f32,
    /// Thumb size (diameter)
    thumb_size: f32,
    /// Track color when on; `None` leaves the platform default
    on_tint: Option<Color>,
    /// Track color when off
    track_off_color: Color,
    /// Thumb color
    thumb_color: Color,
    /// Disabled color
    disabled_color: Color,
    /// Track outline
    border_color: Color,
    border_width: f32,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    #[serde(skip)]
    focused: bool,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Default for Switch {
    fn default() -> Self {
        Self {
            on: false,
            disabled: false,
            track_width: 51.0,
            track_height: 31.0,
            thumb_size: 27.0,
            on_tint: None,
            track_off_color: Color::new(0.9, 0.9, 0.92, 1.0),
            thumb_color: Color::WHITE,
            disabled_color: Color::new(0.85, 0.85, 0.85, 1.0),
            border_color: Color::WHITE,
            border_width: 0.5,
            accessible_name_value: None,
            test_id_value: None,
            focused: false,
            bounds: Rect::default(),
        }
    }
}

impl Switch {
    /// Create a new switch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a switch with initial state.
    #[must_use]
    pub fn with_state(on: bool) -> Self {
        Self::default().on(on)
    }

    /// Set the switch state.
    #[must_use]
    pub const fn on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    /// Set whether the switch is disabled.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the track size. Values below 20x12 are raised to that minimum.
    #[must_use]
    pub fn track_size(mut self, width: f32, height: f32) -> Self {
        self.track_width = width.max(20.0);
        self.track_height = height.max(12.0);
        self.thumb_size = self.thumb_size.min(self.track_height);
        self
    }

    /// Set the thumb diameter, capped to the track height.
    #[must_use]
    pub fn thumb_size(mut self, size: f32) -> Self {
        self.thumb_size = size.clamp(8.0, self.track_height.max(8.0));
        self
    }

    /// Set the "on" tint.
    #[must_use]
    pub const fn tint(mut self, color: Color) -> Self {
        self.on_tint = Some(color);
        self
    }

    /// Set the track off color.
    #[must_use]
    pub const fn track_off_color(mut self, color: Color) -> Self {
        self.track_off_color = color;
        self
    }

    /// Set the thumb color.
    #[must_use]
    pub const fn thumb_color(mut self, color: Color) -> Self {
        self.thumb_color = color;
        self
    }

    /// Set the track outline.
    #[must_use]
    pub fn border(mut self, color: Color, width: f32) -> Self {
        self.border_color = color;
        self.border_width = width.max(0.0);
        self
    }

    /// Place the switch before the first layout pass.
    #[must_use]
    pub const fn frame(mut self, frame: Rect) -> Self {
        self.bounds = frame;
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get disabled state.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Get the track size.
    #[must_use]
    pub const fn get_track_size(&self) -> Size {
        Size::new(self.track_width, self.track_height)
    }

    /// Get the thumb size.
    #[must_use]
    pub const fn get_thumb_size(&self) -> f32 {
        self.thumb_size
    }

    /// Track rectangle, centered in the laid-out bounds.
    #[must_use]
    pub fn track_rect(&self) -> Rect {
        let center = self.bounds.center();
        Rect::new(
            center.x - self.track_width / 2.0,
            center.y - self.track_height / 2.0,
            self.track_width,
            self.track_height,
        )
    }

    /// Thumb center; the thumb rests against the right end when on.
    fn thumb_center(&self) -> Point {
        let track = self.track_rect();
        let padding = (self.track_height - self.thumb_size) / 2.0;
        let radius = self.thumb_size / 2.0;
        let x = if self.on {
            track.x + self.track_width - padding - radius
        } else {
            track.x + padding + radius
        };
        Point::new(x, track.y + self.track_height / 2.0)
    }

    fn flip(&mut self) -> ToggleChanged {
        self.on = !self.on;
        trace!(on = self.on, "switch toggled by input");
        ToggleChanged { on: self.on }
    }
}

impl Switchable for Switch {
    fn is_on(&self) -> bool {
        self.on
    }

    fn set_on(&mut self, on: bool) {
        self.on = on;
    }

    fn on_tint(&self) -> Option<Color> {
        self.on_tint
    }

    fn value_changed(&mut self, event: &Event) -> Option<ToggleChanged> {
        if self.disabled {
            return None;
        }

        match event {
            Event::FocusIn => {
                self.focused = true;
                None
            }
            Event::FocusOut => {
                self.focused = false;
                None
            }
            Event::KeyDown {
                key: Key::Space | Key::Enter,
            } if self.focused => Some(self.flip()),
            _ => {
                let position = event.activation_point()?;
                self.track_rect()
                    .contains_point(&position)
                    .then(|| self.flip())
            }
        }
    }
}

impl Widget for Switch {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.get_track_size())
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let track_color = if self.disabled {
            self.disabled_color
        } else if self.on {
            self.on_tint.unwrap_or(DEFAULT_ON_TRACK)
        } else {
            self.track_off_color
        };

        let track = self.track_rect();
        let corner = self.track_height / 2.0;
        canvas.fill_rounded_rect(track, corner, track_color);
        if self.border_width > 0.0 {
            canvas.stroke_rounded_rect(track, corner, self.border_color, self.border_width);
        }

        let thumb_color = if self.disabled {
            Color::new(0.9, 0.9, 0.9, 1.0)
        } else {
            self.thumb_color
        };
        canvas.fill_circle(self.thumb_center(), self.thumb_size / 2.0, thumb_color);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        self.value_changed(event)
            .map(|changed| Box::new(changed) as Box<dyn Any + Send>)
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn is_interactive(&self) -> bool {
        !self.disabled
    }

    fn is_focusable(&self) -> bool {
        !self.disabled
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Switch
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paperswitch_core::{DrawCommand, MouseButton, RecordingCanvas};

    fn laid_out(switch: Switch) -> Switch {
        let mut switch = switch;
        switch.layout(Rect::new(0.0, 0.0, 51.0, 31.0));
        switch
    }

    fn click(x: f32, y: f32) -> Event {
        Event::MouseDown {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    // ===== Construction Tests =====

    #[test]
    fn test_switch_new() {
        let switch = Switch::new();
        assert!(!switch.is_on());
        assert!(!switch.is_disabled());
        assert_eq!(switch.on_tint(), None);
    }

    #[test]
    fn test_switch_with_state() {
        assert!(Switch::with_state(true).is_on());
        assert!(!Switch::with_state(false).is_on());
    }

    #[test]
    fn test_switch_builder() {
        let switch = Switch::new()
            .on(true)
            .track_size(60.0, 34.0)
            .thumb_size(30.0)
            .tint(Color::GREEN)
            .accessible_name("Connect contacts")
            .test_id("contacts-switch");

        assert!(switch.is_on());
        assert_eq!(switch.get_track_size(), Size::new(60.0, 34.0));
        assert_eq!(switch.get_thumb_size(), 30.0);
        assert_eq!(switch.on_tint(), Some(Color::GREEN));
        assert_eq!(Widget::accessible_name(&switch), Some("Connect contacts"));
        assert_eq!(Widget::test_id(&switch), Some("contacts-switch"));
    }

    #[test]
    fn test_switch_track_size_min() {
        let switch = Switch::new().track_size(5.0, 5.0);
        assert_eq!(switch.get_track_size(), Size::new(20.0, 12.0));
        assert!(switch.get_thumb_size() <= 12.0);
    }

    #[test]
    fn test_switch_thumb_capped_to_track() {
        let switch = Switch::new().thumb_size(100.0);
        assert_eq!(switch.get_thumb_size(), 31.0);
    }

    #[test]
    fn test_switch_frame_sets_bounds() {
        let frame = Rect::new(100.0, 200.0, 51.0, 31.0);
        assert_eq!(Switch::new().frame(frame).bounds(), frame);
    }

    #[test]
    fn test_set_on_is_silent() {
        let mut switch = Switch::new();
        switch.set_on(true);
        assert!(switch.is_on());
    }

    // ===== Thumb Position Tests =====

    #[test]
    fn test_thumb_rests_left_when_off() {
        let switch = laid_out(Switch::new());
        assert_eq!(switch.thumb_center(), Point::new(2.0 + 13.5, 15.5));
    }

    #[test]
    fn test_thumb_rests_right_when_on() {
        let switch = laid_out(Switch::new().on(true));
        assert_eq!(switch.thumb_center(), Point::new(51.0 - 2.0 - 13.5, 15.5));
    }

    #[test]
    fn test_track_centered_in_larger_cell() {
        let mut switch = Switch::new();
        switch.layout(Rect::new(0.0, 0.0, 200.0, 100.0));

        let track = switch.track_rect();
        assert_eq!(track, Rect::new(74.5, 34.5, 51.0, 31.0));
        assert_eq!(track.center(), switch.bounds().center());
        assert_eq!(switch.thumb_center(), Point::new(74.5 + 2.0 + 13.5, 50.0));

        // Only the track is hit-testable, not the whole cell.
        assert_eq!(switch.value_changed(&click(10.0, 10.0)), None);
        assert_eq!(
            switch.value_changed(&click(100.0, 50.0)),
            Some(ToggleChanged { on: true })
        );
    }

    // ===== Event Tests =====

    #[test]
    fn test_click_flips_value() {
        let mut switch = laid_out(Switch::new());

        assert_eq!(
            switch.value_changed(&click(25.0, 15.0)),
            Some(ToggleChanged { on: true })
        );
        assert_eq!(
            switch.value_changed(&click(25.0, 15.0)),
            Some(ToggleChanged { on: false })
        );
    }

    #[test]
    fn test_tap_flips_value() {
        let mut switch = laid_out(Switch::new());
        let tap = Event::GestureTap {
            position: Point::new(10.0, 10.0),
            count: 1,
        };
        assert_eq!(switch.value_changed(&tap), Some(ToggleChanged { on: true }));
    }

    #[test]
    fn test_click_outside_no_effect() {
        let mut switch = laid_out(Switch::new());
        assert_eq!(switch.value_changed(&click(100.0, 100.0)), None);
        assert!(!switch.is_on());
    }

    #[test]
    fn test_right_click_no_effect() {
        let mut switch = laid_out(Switch::new());
        let event = Event::MouseDown {
            position: Point::new(25.0, 15.0),
            button: MouseButton::Right,
        };
        assert_eq!(switch.value_changed(&event), None);
    }

    #[test]
    fn test_disabled_click_no_effect() {
        let mut switch = laid_out(Switch::new().disabled(true));
        assert_eq!(switch.value_changed(&click(25.0, 15.0)), None);
        assert!(!switch.is_interactive());
        assert!(!switch.is_focusable());
    }

    #[test]
    fn test_space_toggles_only_when_focused() {
        let mut switch = laid_out(Switch::new());
        let space = Event::KeyDown { key: Key::Space };

        assert_eq!(switch.value_changed(&space), None);
        switch.value_changed(&Event::FocusIn);
        assert_eq!(switch.value_changed(&space), Some(ToggleChanged { on: true }));
        switch.value_changed(&Event::FocusOut);
        assert_eq!(switch.value_changed(&space), None);
    }

    #[test]
    fn test_widget_event_boxes_message() {
        let mut switch = laid_out(Switch::new());
        let msg = switch.event(&click(25.0, 15.0)).expect("changed");
        let msg = msg.downcast::<ToggleChanged>().expect("ToggleChanged");
        assert!(msg.on);
    }

    // ===== Widget Trait Tests =====

    #[test]
    fn test_switch_measure() {
        let switch = Switch::new();
        let size = switch.measure(Constraints::loose(Size::new(200.0, 100.0)));
        assert_eq!(size, Size::new(51.0, 31.0));
    }

    #[test]
    fn test_switch_role_and_children() {
        let switch = Switch::new();
        assert_eq!(switch.accessible_role(), AccessibleRole::Switch);
        assert!(switch.children().is_empty());
        assert_eq!(Widget::type_id(&switch), TypeId::of::<Switch>());
    }

    // ===== Paint Tests =====

    #[test]
    fn test_paint_draws_track_border_and_thumb() {
        let switch = laid_out(Switch::new());
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);
        assert_eq!(canvas.command_count(), 3);
    }

    #[test]
    fn test_paint_without_border() {
        let switch = laid_out(Switch::new().border(Color::WHITE, 0.0));
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);
        assert_eq!(canvas.command_count(), 2);
    }

    #[test]
    fn test_paint_track_uses_tint_when_on() {
        let switch = laid_out(Switch::new().on(true).tint(Color::GREEN));
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);

        match &canvas.commands()[0] {
            DrawCommand::Rect { style, radius, .. } => {
                assert_eq!(style.fill, Some(Color::GREEN));
                assert_eq!(radius.top_left, 15.5);
            }
            other => panic!("Expected Rect, got {other:?}"),
        }
    }

    #[test]
    fn test_paint_track_default_on_color() {
        let switch = laid_out(Switch::new().on(true));
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);

        match &canvas.commands()[0] {
            DrawCommand::Rect { style, .. } => assert_eq!(style.fill, Some(DEFAULT_ON_TRACK)),
            other => panic!("Expected Rect, got {other:?}"),
        }
    }

    #[test]
    fn test_switch_serde_skips_bounds() {
        let switch = laid_out(Switch::new().on(true));
        let json = serde_json::to_string(&switch).unwrap();
        let back: Switch = serde_json::from_str(&json).unwrap();
        assert!(back.is_on());
        assert_eq!(back.bounds(), Rect::default());
    }
}
