mod app;
mod audio;
mod field;
mod input;
mod palette;
mod preset;
mod render;
mod state;

use anyhow::Result;
use crossterm::{
    cursor, execute,
    style::ResetColor,
    terminal::{
        self, DisableLineWrap, EnableLineWrap, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use std::io;

fn main() -> Result<()> {
    let mut out = io::stdout();

    execute!(out, EnterAlternateScreen, cursor::Hide, DisableLineWrap)?;
    terminal::enable_raw_mode()?;

    let res = app::run(&mut out);

    terminal::disable_raw_mode().ok();
    execute!(out, ResetColor, EnableLineWrap, cursor::Show, LeaveAlternateScreen).ok();

    if res.is_ok() {
        println!("Goodbye!");
    }
    res
}
