//! Color palettes and character ramps, plus the value-to-bucket quantization
//! both share. Entries are ordered low-to-high: the first color/glyph stands
//! for the deepest trough of the noise field, the last for the highest crest.

pub(crate) struct Palette {
    pub(crate) name: &'static str,
    /// ANSI-256 foreground codes, dark/cool to bright/hot.
    pub(crate) colors: &'static [u8],
}

pub(crate) struct Charset {
    pub(crate) name: &'static str,
    /// Glyphs from sparse to dense.
    pub(crate) glyphs: &'static [char],
}

pub(crate) const PALETTES: &[Palette] = &[
    Palette { name: "fire", colors: &[196, 202, 208, 214, 220, 226] },
    Palette { name: "ocean", colors: &[17, 18, 19, 20, 21] },
    Palette { name: "sunset", colors: &[198, 202, 208, 215, 223] },
    Palette { name: "neon", colors: &[201, 93, 99, 105, 111] },
    Palette { name: "forest", colors: &[22, 28, 34, 40, 46] },
    Palette { name: "sandstorm", colors: &[180, 186, 192, 222, 228] },
    Palette { name: "ice", colors: &[153, 159, 195, 123, 117] },
];

pub(crate) const CHARSETS: &[Charset] = &[
    Charset { name: "classic", glyphs: &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'] },
    Charset { name: "blocks", glyphs: &[' ', '░', '▒', '▓', '█'] },
    Charset { name: "lines", glyphs: &[' ', '.', '`', '\'', '-', '~', '_', '^', '='] },
    Charset { name: "bars", glyphs: &[' ', '|', '!', 'I', 'H', '#'] },
    Charset { name: "wide", glyphs: &[' ', '∘', '○', '◍', '●'] },
    Charset { name: "symbols", glyphs: &[' ', '.', '*', 'o', 'x', '#', '&', '@'] },
];

/// Rescales a noise value in [-1, 1] into a bucket index for a table of
/// `len` entries. Out-of-range inputs clamp to the nearest bucket.
pub(crate) fn quantize(value: f64, len: usize) -> usize {
    let i = ((value + 1.0) / 2.0 * (len - 1) as f64).floor() as isize;
    i.clamp(0, len as isize - 1) as usize
}

impl Palette {
    pub(crate) fn color(&self, value: f64) -> u8 {
        self.colors[quantize(value, self.colors.len())]
    }
}

impl Charset {
    pub(crate) fn glyph(&self, value: f64) -> char {
        self.glyphs[quantize(value, self.glyphs.len())]
    }
}

pub(crate) fn cycle_next(i: usize, len: usize) -> usize {
    (i + 1) % len
}

pub(crate) fn cycle_prev(i: usize, len: usize) -> usize {
    (i + len - 1) % len
}

pub(crate) fn find_palette(name: &str) -> Option<usize> {
    PALETTES.iter().position(|p| p.name == name)
}

pub(crate) fn find_charset(name: &str) -> Option<usize> {
    CHARSETS.iter().position(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_stays_in_bounds() {
        for len in 2..=10 {
            let mut v = -1.2;
            while v <= 1.2 {
                assert!(quantize(v, len) < len, "v={v} len={len}");
                v += 0.01;
            }
        }
    }

    #[test]
    fn quantize_is_monotonic() {
        for len in 2..=10 {
            let mut prev = 0;
            let mut v = -1.0;
            while v <= 1.0 {
                let i = quantize(v, len);
                assert!(i >= prev, "v={v} len={len}");
                prev = i;
                v += 0.005;
            }
        }
    }

    #[test]
    fn quantize_hits_both_ends() {
        assert_eq!(quantize(-1.0, 5), 0);
        assert_eq!(quantize(1.0, 5), 4);
    }

    #[test]
    fn lookups_follow_the_gradient() {
        assert_eq!(PALETTES[0].color(-1.0), 196);
        assert_eq!(PALETTES[0].color(1.0), 226);
        assert_eq!(CHARSETS[0].glyph(-1.0), ' ');
        assert_eq!(CHARSETS[0].glyph(1.0), '@');
    }

    #[test]
    fn cycling_round_trips() {
        for len in [PALETTES.len(), CHARSETS.len()] {
            for start in 0..len {
                let mut i = start;
                for _ in 0..len {
                    i = cycle_next(i, len);
                }
                assert_eq!(i, start);
                for _ in 0..len {
                    i = cycle_prev(i, len);
                }
                assert_eq!(i, start);
            }
        }
    }

    #[test]
    fn next_then_prev_is_identity() {
        let len = PALETTES.len();
        for i in 0..len {
            assert_eq!(cycle_prev(cycle_next(i, len), len), i);
        }
    }

    #[test]
    fn tables_are_well_formed() {
        for p in PALETTES {
            assert!(!p.colors.is_empty(), "{}", p.name);
        }
        for c in CHARSETS {
            assert!(!c.glyphs.is_empty(), "{}", c.name);
        }
        assert_eq!(find_palette("fire"), Some(0));
        assert_eq!(find_charset("classic"), Some(0));
        assert_eq!(find_palette("lava"), None);
    }
}
