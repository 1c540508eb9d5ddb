use crate::palette::{cycle_next, cycle_prev, Charset, Palette, CHARSETS, PALETTES};

pub(crate) const GRID_W: usize = 80;
pub(crate) const GRID_H: usize = 30;

const SPEED_STEP: f64 = 0.01;
const ZOOM_STEP_X: f64 = 1.0;
const ZOOM_STEP_Y: f64 = 0.5;
/// Zoom divides cell coordinates, so it must stay well away from zero.
pub(crate) const ZOOM_MIN: f64 = 1.0;

/// Secondary phase advance per tick, independent of speed.
const DRIFT_STEP: f64 = 0.01;

/// One keypress, decoded. `Save`, `Load` and `Quit` carry side effects and
/// are handled by the app loop; everything else is a pure state mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Action {
    SpeedDown,
    SpeedUp,
    ZoomOut,
    ZoomIn,
    NextPalette,
    PrevPalette,
    NextCharset,
    PrevCharset,
    Save,
    Load,
    Quit,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ControlState {
    pub(crate) speed: f64,
    pub(crate) zoom_x: f64,
    pub(crate) zoom_y: f64,
    pub(crate) palette: usize,
    pub(crate) charset: usize,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            speed: 0.05,
            zoom_x: 20.0,
            zoom_y: 10.0,
            palette: 0,
            charset: 0,
        }
    }
}

impl ControlState {
    pub(crate) fn palette(&self) -> &'static Palette {
        &PALETTES[self.palette]
    }

    pub(crate) fn charset(&self) -> &'static Charset {
        &CHARSETS[self.charset]
    }

    /// Applies one of the pure mutations. Speed floors at zero; zoom floors
    /// at `ZOOM_MIN`; both grow without bound in the other direction.
    pub(crate) fn apply(&mut self, action: Action) {
        match action {
            Action::SpeedDown => self.speed = (self.speed - SPEED_STEP).max(0.0),
            Action::SpeedUp => self.speed += SPEED_STEP,
            Action::ZoomOut => {
                self.zoom_x = (self.zoom_x - ZOOM_STEP_X).max(ZOOM_MIN);
                self.zoom_y = (self.zoom_y - ZOOM_STEP_Y).max(ZOOM_MIN);
            }
            Action::ZoomIn => {
                self.zoom_x += ZOOM_STEP_X;
                self.zoom_y += ZOOM_STEP_Y;
            }
            Action::NextPalette => self.palette = cycle_next(self.palette, PALETTES.len()),
            Action::PrevPalette => self.palette = cycle_prev(self.palette, PALETTES.len()),
            Action::NextCharset => self.charset = cycle_next(self.charset, CHARSETS.len()),
            Action::PrevCharset => self.charset = cycle_prev(self.charset, CHARSETS.len()),
            Action::Save | Action::Load | Action::Quit => {}
        }
    }
}

/// Two phase accumulators feeding the last two axes of the 4D noise field,
/// plus the frame counter gating the tone trigger. Phases only ever grow.
#[derive(Clone, Debug, Default)]
pub(crate) struct AnimationClock {
    pub(crate) primary_phase: f64,
    pub(crate) secondary_phase: f64,
    pub(crate) frame_count: u64,
}

impl AnimationClock {
    pub(crate) fn tick(&mut self, speed: f64) {
        self.primary_phase += speed;
        self.secondary_phase += DRIFT_STEP;
        self.frame_count += 1;
    }
}
