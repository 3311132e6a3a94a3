//! Tuning knobs for touch-gesture disambiguation.

/// Parameters controlling how raw touches map onto gestures.
#[derive(Clone, Copy, Debug)]
pub struct GestureOptions {
    /// Displacement (px) a lone touch must exceed, strictly, before a
    /// potential tap is reinterpreted as a drag.
    pub drag_threshold_px: f32,
    /// Inter-finger spans below this (px) count as coincident fingers and
    /// are excluded from pinch ratios.
    pub min_pinch_span_px: f32,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            drag_threshold_px: 10.0,
            min_pinch_span_px: 1.0,
        }
    }
}
