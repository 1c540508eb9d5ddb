use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::time::Duration;

use crate::state::Action;

/// Waits up to `timeout` for the next key press and decodes it. Returns
/// `None` when the budget elapses quietly or the key isn't bound.
pub(crate) fn poll_action(timeout: Duration) -> Result<Option<Action>> {
    if event::poll(timeout)? {
        if let Event::Key(k) = event::read()? {
            if k.kind == KeyEventKind::Press || k.kind == KeyEventKind::Repeat {
                return Ok(map_key(k.code));
            }
        }
    }
    Ok(None)
}

pub(crate) fn map_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Left => Some(Action::SpeedDown),
        KeyCode::Right => Some(Action::SpeedUp),
        KeyCode::Up => Some(Action::ZoomOut),
        KeyCode::Down => Some(Action::ZoomIn),
        KeyCode::Char('c') => Some(Action::NextPalette),
        KeyCode::Char('v') => Some(Action::PrevPalette),
        KeyCode::Char('z') => Some(Action::NextCharset),
        KeyCode::Char('x') => Some(Action::PrevCharset),
        KeyCode::Char('s') => Some(Action::Save),
        KeyCode::Char('l') => Some(Action::Load),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}
