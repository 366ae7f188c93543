//! Geometry of the circular progress ring around the back-to-top button.

use std::f64::consts::PI;

/// Ring drawn around a square button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressRing {
    /// Button edge length in px.
    pub size: f64,
    pub stroke: f64,
    /// Extra canvas around the button so the stroke is not clipped.
    pub canvas_padding: f64,
}

impl Default for ProgressRing {
    fn default() -> Self {
        Self {
            size: 48.0,
            stroke: 6.0,
            canvas_padding: 14.0,
        }
    }
}

impl ProgressRing {
    pub fn radius(&self) -> f64 {
        (self.size - self.stroke) / 2.0
    }

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius()
    }

    pub fn canvas_size(&self) -> f64 {
        self.size + self.canvas_padding
    }

    /// Drawn arc length for `progress` (clamped to `[0, 1]`).
    pub fn dash_length(&self, progress: f64) -> f64 {
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        progress * self.circumference()
    }

    /// `stroke-dasharray` pair: drawn length, then full circumference.
    pub fn dash_array(&self, progress: f64) -> (f64, f64) {
        (self.dash_length(progress), self.circumference())
    }
}

#[cfg(test)]
mod tests {
    use super::ProgressRing;
    use std::f64::consts::PI;

    #[test]
    fn default_ring_geometry() {
        let ring = ProgressRing::default();
        assert_eq!(ring.radius(), 21.0);
        assert_eq!(ring.canvas_size(), 62.0);
        assert!((ring.circumference() - 42.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn dash_tracks_progress_and_clamps() {
        let ring = ProgressRing::default();
        assert_eq!(ring.dash_length(0.0), 0.0);
        assert!((ring.dash_length(0.5) - ring.circumference() / 2.0).abs() < 1e-9);
        assert_eq!(ring.dash_length(3.0), ring.circumference());
        assert_eq!(ring.dash_length(f64::NAN), 0.0);
    }
}
