//! Touch-gesture state machine turning raw touch events into placement
//! intents.
//!
//! The resolver tracks one gesture at a time through four phases:
//!
//! - `Idle` → a lone touch lands → `PotentialTap` (origin recorded).
//! - `PotentialTap` → the touch moves past the drag threshold → `Dragging`,
//!   emitting `MoveTo` immediately; a lift before that emits `PlaceAt` from
//!   the recorded origin (a tap is a placement, not a move).
//! - `Dragging` → every move emits `MoveTo`, no threshold re-check.
//! - Two concurrent touches put the resolver in `Pinching` from any phase.
//!   Each move emits `ScaleBy(current_span / previous_span)`, so factors
//!   compound incrementally rather than against the gesture's starting span.
//!   Touches beyond the second are ignored.
//!
//! Screen positions become world positions through [`SceneRef::raycast`]. A
//! miss suppresses the intent for that call but never blocks the phase
//! transition, so a stream that wanders off the surface cannot wedge the
//! machine.

use log::debug;
use nalgebra::Vector3;
use serde::Serialize;

use crate::gesture::options::GestureOptions;
use crate::raycast::SceneRef;
use crate::types::{PlacementIntent, TouchSample};

/// Phase of the gesture currently in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GesturePhase {
    /// No tracked touches.
    Idle,
    /// One finger down, within the drag threshold of its origin.
    PotentialTap,
    /// One finger down and moving the model.
    Dragging,
    /// Two (or more) fingers down, rescaling the model.
    Pinching,
}

/// Interprets a raw touch stream against a camera/surface pair.
///
/// Feed the full list of active touches into [`on_touch_start`],
/// [`on_touch_move`] and [`on_touch_end`] as the platform reports them
/// (for end events, the touches that remain down). Each call returns at
/// most one [`PlacementIntent`].
///
/// [`on_touch_start`]: GestureResolver::on_touch_start
/// [`on_touch_move`]: GestureResolver::on_touch_move
/// [`on_touch_end`]: GestureResolver::on_touch_end
#[derive(Clone, Debug)]
pub struct GestureResolver {
    options: GestureOptions,
    phase: GesturePhase,
    /// Screen position where the candidate tap landed.
    origin: Option<[f32; 2]>,
    /// Inter-finger span of the previous pinch sample.
    pinch_span: Option<f32>,
}

impl Default for GestureResolver {
    fn default() -> Self {
        Self::new(GestureOptions::default())
    }
}

impl GestureResolver {
    pub fn new(options: GestureOptions) -> Self {
        Self {
            options,
            phase: GesturePhase::Idle,
            origin: None,
            pinch_span: None,
        }
    }

    /// Current phase, mainly for diagnostics and replay traces.
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Drops any gesture in flight. Hosts call this on session teardown.
    pub fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
        self.origin = None;
        self.pinch_span = None;
    }

    /// A new finger landed; `samples` is the full active-touch list.
    ///
    /// Never emits an intent: taps are decided at lift-off and pinch
    /// factors need a second sample.
    pub fn on_touch_start(
        &mut self,
        samples: &[TouchSample],
        _scene: &SceneRef<'_>,
    ) -> Option<PlacementIntent> {
        match samples {
            [] => {
                debug!("touch start carried no samples, resetting");
                self.reset();
            }
            [only] => {
                // A lone touch restarts the gesture from any phase.
                self.phase = GesturePhase::PotentialTap;
                self.origin = Some(only.position());
                self.pinch_span = None;
            }
            [a, b, ..] => {
                self.phase = GesturePhase::Pinching;
                self.origin = None;
                // Baseline now, so the first subsequent move already has a
                // previous span to form a ratio against.
                self.pinch_span = self.measured_span(a, b);
            }
        }
        None
    }

    /// Active fingers moved.
    pub fn on_touch_move(
        &mut self,
        samples: &[TouchSample],
        scene: &SceneRef<'_>,
    ) -> Option<PlacementIntent> {
        if let [a, b, ..] = samples {
            return self.pinch_move(a, b);
        }
        let [touch] = samples else {
            return None;
        };
        match self.phase {
            GesturePhase::Idle => None,
            GesturePhase::PotentialTap => {
                let Some(origin) = self.origin else {
                    // Start event went unseen; anchor the tap here.
                    self.origin = Some(touch.position());
                    return None;
                };
                if distance(origin, touch.position()) > self.options.drag_threshold_px {
                    self.phase = GesturePhase::Dragging;
                    self.origin = None;
                    self.resolve(touch.position(), scene)
                        .map(PlacementIntent::MoveTo)
                } else {
                    None
                }
            }
            GesturePhase::Dragging => self
                .resolve(touch.position(), scene)
                .map(PlacementIntent::MoveTo),
            GesturePhase::Pinching => {
                // One touch left while pinching means a lift went unseen;
                // degrade to dragging with the survivor.
                self.phase = GesturePhase::Dragging;
                self.pinch_span = None;
                self.resolve(touch.position(), scene)
                    .map(PlacementIntent::MoveTo)
            }
        }
    }

    /// A finger lifted; `samples` lists the touches still down.
    pub fn on_touch_end(
        &mut self,
        samples: &[TouchSample],
        scene: &SceneRef<'_>,
    ) -> Option<PlacementIntent> {
        match samples {
            [] => {
                let tapped = self.phase == GesturePhase::PotentialTap;
                let origin = self.origin.take();
                self.phase = GesturePhase::Idle;
                self.pinch_span = None;
                if !tapped {
                    return None;
                }
                let origin = origin?;
                self.resolve(origin, scene).map(PlacementIntent::PlaceAt)
            }
            [_] => {
                if self.phase == GesturePhase::Pinching {
                    self.phase = GesturePhase::Dragging;
                    self.pinch_span = None;
                }
                None
            }
            [a, b, ..] => {
                // Two fingers survive the lift: keep pinching, but take a
                // fresh baseline so the next factor reflects the surviving
                // pair instead of jumping across finger identities.
                self.phase = GesturePhase::Pinching;
                self.origin = None;
                self.pinch_span = self.measured_span(a, b);
                None
            }
        }
    }

    fn pinch_move(&mut self, a: &TouchSample, b: &TouchSample) -> Option<PlacementIntent> {
        self.phase = GesturePhase::Pinching;
        self.origin = None;
        let current = span(a, b);
        if current < self.options.min_pinch_span_px {
            debug!(
                "pinch span {current:.2}px under the {:.2}px floor, sample ignored",
                self.options.min_pinch_span_px
            );
            return None;
        }
        // First measurable span only sets the baseline.
        let previous = self.pinch_span.replace(current)?;
        Some(PlacementIntent::ScaleBy(current / previous))
    }

    fn measured_span(&self, a: &TouchSample, b: &TouchSample) -> Option<f32> {
        let current = span(a, b);
        if current < self.options.min_pinch_span_px {
            debug!("coincident touches ({current:.2}px apart), pinch baseline deferred");
            None
        } else {
            Some(current)
        }
    }

    fn resolve(&self, screen: [f32; 2], scene: &SceneRef<'_>) -> Option<Vector3<f32>> {
        match scene.raycast(screen) {
            Ok(world) => Some(world),
            Err(err) => {
                debug!(
                    "raycast at ({:.1}, {:.1}) emitted nothing: {err}",
                    screen[0], screen[1]
                );
                None
            }
        }
    }
}

fn span(a: &TouchSample, b: &TouchSample) -> f32 {
    distance(a.position(), b.position())
}

fn distance(from: [f32; 2], to: [f32; 2]) -> f32 {
    let dx = to[0] - from[0];
    let dy = to[1] - from[1];
    (dx * dx + dy * dy).sqrt()
}
