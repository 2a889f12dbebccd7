//! Core types and traits for the PaperSwitch widget toolkit.
//!
//! This crate provides foundational types used throughout PaperSwitch:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`]
//! - Painting: [`Canvas`], [`DrawCommand`], [`RecordingCanvas`]
//! - Tweens: [`Easing`], [`EasedValue`]

mod animation;
mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
pub mod widget;

pub use animation::{EasedValue, Easing};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::DrawCommand;
pub use event::{Event, Key, MouseButton};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use widget::{AccessibleRole, Canvas, LayoutResult, TypeId, Widget};
