//! Touch-gesture interpretation: taps, drags and pinches over a reference
//! surface.
//!
//! Overview
//! - [`resolver`] holds the state machine that disambiguates single-finger
//!   tap, single-finger drag and two-finger pinch from a raw touch stream,
//!   emitting at most one [`crate::types::PlacementIntent`] per event.
//! - [`options`] carries the drag threshold and the coincident-finger span
//!   floor.
//!
//! Key ideas
//! - Gesture recognition is late-binding: a touch is only a tap once it
//!   lifts without crossing the drag threshold, and only a drag once it
//!   does cross it. Until then the resolver commits to nothing.
//! - Screen-to-world resolution is delegated to
//!   [`crate::raycast::SceneRef`], keeping the machine independent of any
//!   particular camera or surface representation.

pub mod options;
pub mod resolver;

pub use options::GestureOptions;
pub use resolver::{GesturePhase, GestureResolver};
