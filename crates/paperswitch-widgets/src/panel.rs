//! Container widget hosting a [`PaperSwitch`] and the content it floods.

use crate::error::PaperSwitchError;
use crate::paper_switch::{PaperSwitch, PaperSwitchConfig};
use crate::surface::{Backdrop, Surface};
use crate::switch::{Switch, Switchable};
use paperswitch_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, Rect, Size, TypeId, Widget,
};
use std::any::Any;
use std::fmt;

/// Panel whose background is driven by an embedded reveal switch.
///
/// Frames of the switch and of every child are relative to the panel origin.
/// Paint order is background, reveal mask, children, then the switch, so the
/// mask always sits behind the other content.
pub struct RevealPanel<S: Switchable = Switch> {
    surface: Backdrop,
    paper: PaperSwitch<S>,
    switch_frame: Rect,
    children: Vec<Box<dyn Widget>>,
    child_frames: Vec<Rect>,
    test_id_value: Option<String>,
}

impl<S: Switchable> RevealPanel<S> {
    /// Create a panel of `size` with `switch` placed at `switch_frame`.
    ///
    /// # Errors
    ///
    /// Propagates [`PaperSwitch::attach`] failures.
    pub fn new(
        size: Size,
        background: Option<Color>,
        mut switch: S,
        switch_frame: Rect,
        config: &PaperSwitchConfig,
    ) -> Result<Self, PaperSwitchError> {
        let surface = Backdrop::new(Rect::from_size(size), background);
        switch.layout(switch_frame);
        let paper = PaperSwitch::attach(switch, &surface, config)?;
        Ok(Self {
            surface,
            paper,
            switch_frame,
            children: Vec::new(),
            child_frames: Vec::new(),
            test_id_value: None,
        })
    }

    /// Add a child at `frame`.
    #[must_use]
    pub fn child(mut self, widget: impl Widget + 'static, frame: Rect) -> Self {
        self.children.push(Box::new(widget));
        self.child_frames.push(frame);
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// The embedded reveal switch.
    #[must_use]
    pub const fn paper(&self) -> &PaperSwitch<S> {
        &self.paper
    }

    /// Mutable access for installing animation handlers.
    pub fn paper_mut(&mut self) -> &mut PaperSwitch<S> {
        &mut self.paper
    }

    /// Current switch value.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.paper.is_on()
    }

    /// Set the switch value.
    pub fn set_on(&mut self, on: bool, animated: bool) {
        self.paper.set_on(on, animated, &mut self.surface);
    }

    /// Advance the reveal animation. Returns `true` while one is running.
    pub fn tick(&mut self, dt: f64) -> bool {
        self.paper.tick(dt, &mut self.surface)
    }
}

impl<S: Switchable> Surface for RevealPanel<S> {
    fn background(&self) -> Option<Color> {
        self.surface.background
    }

    fn set_background(&mut self, color: Option<Color>) {
        self.surface.background = color;
    }

    fn bounds(&self) -> Rect {
        self.surface.bounds
    }
}

impl<S: Switchable + 'static> Widget for RevealPanel<S> {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.surface.bounds.size())
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.surface.bounds = bounds;
        let origin = bounds.origin();

        for (child, frame) in self.children.iter_mut().zip(&self.child_frames) {
            child.layout(frame.translate(origin));
        }
        self.paper
            .layout(self.switch_frame.translate(origin), bounds);

        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if let Some(color) = self.surface.background {
            canvas.fill_rect(self.surface.bounds, color);
        }

        self.paper.paint_reveal(canvas, self.surface.bounds);

        for child in &self.children {
            child.paint(canvas);
        }

        self.paper.switch().paint(canvas);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if let Some(changed) = self.paper.event(event, &mut self.surface) {
            return Some(Box::new(changed));
        }

        for child in &mut self.children {
            if let Some(msg) = child.event(event) {
                return Some(msg);
            }
        }
        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.children
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Group
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.surface.bounds
    }
}

impl<S: Switchable + fmt::Debug> fmt::Debug for RevealPanel<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevealPanel")
            .field("surface", &self.surface)
            .field("paper", &self.paper)
            .field("switch_frame", &self.switch_frame)
            .field("children", &self.children.len())
            .finish_non_exhaustive()
    }
}
