//! Turns a sampled frame into one styled text block and writes it out.
//!
//! Every cell is a 256-color foreground escape followed by a glyph, both
//! picked by quantizing the cell's noise value. The whole visible area is
//! cleared and repainted each tick; the grid is small enough that partial
//! redraw isn't worth the bookkeeping.

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

use crate::palette::quantize;
use crate::state::{ControlState, GRID_W};

const RESET: &str = "\x1b[0m";
const LEGEND: &str =
    "←/→ = speed | ↑/↓ = zoom | c/v = palette | z/x = charset | s = save | l = load | q = quit";

pub(crate) fn compose_frame(cells: &[f64], state: &ControlState, notice: Option<&str>) -> String {
    let palette = state.palette();
    let charset = state.charset();
    let tokens: Vec<String> = palette
        .colors
        .iter()
        .map(|c| format!("\x1b[38;5;{c}m"))
        .collect();

    let mut buf = String::with_capacity(cells.len() * 12);
    for row in cells.chunks(GRID_W) {
        for &v in row {
            buf.push_str(&tokens[quantize(v, tokens.len())]);
            buf.push(charset.glyph(v));
        }
        buf.push_str("\r\n");
    }

    buf.push_str(RESET);
    buf.push_str("\r\n");
    buf.push_str(&format!(
        "Speed: {:.2} | Zoom: {:.1}x{:.1} | Palette: {} | Charset: {}\r\n",
        state.speed, state.zoom_x, state.zoom_y, palette.name, charset.name,
    ));
    buf.push_str(LEGEND);
    if let Some(msg) = notice {
        buf.push_str("\r\n");
        buf.push_str(msg);
    }
    buf
}

pub(crate) fn draw(out: &mut impl Write, frame: &str) -> io::Result<()> {
    queue!(out, MoveTo(0, 0), Clear(ClearType::All), Print(frame))?;
    out.flush()
}
