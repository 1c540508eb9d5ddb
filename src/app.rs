//! The control loop: one thread multiplexing a fixed ~50 ms render tick and
//! a blocking key read. Each tick samples the field, repaints, fires the
//! tone gate, then advances the clock; between ticks the loop sits in
//! `poll_action` with whatever frame budget is left. Because both halves run
//! as whole steps on the same thread, a key mutation can never interleave
//! with a render read.

use anyhow::Result;
use std::io::Write;
use std::time::{Duration, Instant};

use crate::audio;
use crate::field::NoiseField;
use crate::input;
use crate::preset::{self, Preset};
use crate::render;
use crate::state::{Action, AnimationClock, ControlState};

const TICK: Duration = Duration::from_millis(50);

pub(crate) struct App {
    state: ControlState,
    clock: AnimationClock,
    field: NoiseField,
    notice: Option<String>,
    running: bool,
}

impl App {
    fn new() -> Self {
        Self {
            state: ControlState::default(),
            clock: AnimationClock::default(),
            field: NoiseField::new(rand::random()),
            notice: None,
            running: true,
        }
    }

    fn handle(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::Save => self.save_preset(),
            Action::Load => self.load_preset(),
            other => self.state.apply(other),
        }
    }

    fn save_preset(&mut self) {
        let result = preset::preset_path()
            .and_then(|p| preset::save(&p, &Preset::snapshot(&self.state)).map(|_| p));
        self.notice = Some(match result {
            Ok(p) => format!("Preset saved to {}", p.display()),
            Err(e) => format!("Failed to save preset: {e:#}"),
        });
    }

    fn load_preset(&mut self) {
        match preset::preset_path().and_then(|p| preset::load(&p)) {
            Ok(loaded) => {
                self.notice = Some(match loaded.apply(&mut self.state) {
                    Some(warning) => format!("Preset loaded ({warning})"),
                    None => "Preset loaded".to_string(),
                });
            }
            Err(e) => self.notice = Some(format!("Failed to load preset: {e:#}")),
        }
    }

    fn tick(&mut self, out: &mut impl Write) -> Result<()> {
        let cells = self.field.sample_frame(&self.state, &self.clock);
        let frame = render::compose_frame(&cells, &self.state, self.notice.as_deref());
        render::draw(out, &frame)?;

        // gate is checked after the repaint, on the pre-increment count
        if audio::tone_due(self.clock.frame_count) {
            let sample = self
                .field
                .sample(0.0, 0.0, self.clock.primary_phase, self.clock.secondary_phase);
            audio::play_tone(audio::tone_freq(sample));
        }

        self.clock.tick(self.state.speed);
        Ok(())
    }
}

pub(crate) fn run(out: &mut impl Write) -> Result<()> {
    let mut app = App::new();

    while app.running {
        let deadline = Instant::now() + TICK;
        app.tick(out)?;

        // drain input for the rest of the frame
        while app.running {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            if let Some(action) = input::poll_action(deadline - now)? {
                app.handle(action);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PALETTES;

    fn headless() -> App {
        App {
            state: ControlState::default(),
            clock: AnimationClock::default(),
            field: NoiseField::new(0),
            notice: None,
            running: true,
        }
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut app = headless();
        app.handle(Action::Quit);
        assert!(!app.running);
    }

    #[test]
    fn control_scenario_from_defaults() {
        let mut app = headless();
        for _ in 0..5 {
            app.handle(Action::SpeedUp);
        }
        assert!((app.state.speed - 0.10).abs() < 1e-9);

        app.handle(Action::NextPalette);
        assert_eq!(app.state.palette().name, PALETTES[1].name);

        app.handle(Action::Quit);
        assert!(!app.running);
    }

    #[test]
    fn load_failure_reports_and_keeps_state() {
        let mut app = headless();
        let before = app.state.clone();
        // point the loader at a path that cannot exist
        let missing = std::env::temp_dir().join("noisefield-no-such-preset.json");
        match preset::load(&missing) {
            Ok(_) => panic!("expected load to fail"),
            Err(e) => app.notice = Some(format!("Failed to load preset: {e:#}")),
        }
        assert_eq!(app.state, before);
        assert!(app.notice.as_deref().unwrap().starts_with("Failed to load preset"));
    }
}
