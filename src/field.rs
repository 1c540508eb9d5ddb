//! 4D OpenSimplex noise field and the per-frame grid sampler.
//!
//! The first two axes are spatial (cell position over zoom), the last two are
//! the animation phases. Keeping the phases on separate axes means the slow
//! secondary drift cuts across the fast primary flow, so the pattern never
//! exactly repeats even at constant speed.

use noise::{NoiseFn, OpenSimplex};

use crate::state::{AnimationClock, ControlState, GRID_H, GRID_W};

pub(crate) struct NoiseField {
    simplex: OpenSimplex,
}

impl NoiseField {
    pub(crate) fn new(seed: u32) -> Self {
        Self {
            simplex: OpenSimplex::new(seed),
        }
    }

    pub(crate) fn sample(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self.simplex.get([x, y, z, w])
    }

    /// One scalar per grid cell, row-major, top row first.
    pub(crate) fn sample_frame(&self, state: &ControlState, clock: &AnimationClock) -> Vec<f64> {
        let mut cells = Vec::with_capacity(GRID_W * GRID_H);
        for y in 0..GRID_H {
            for x in 0..GRID_W {
                cells.push(self.sample(
                    x as f64 / state.zoom_x,
                    y as f64 / state.zoom_y,
                    clock.primary_phase,
                    clock.secondary_phase,
                ));
            }
        }
        cells
    }
}
