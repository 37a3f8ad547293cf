//! CRT display.
//!
//! The CRT draws one pixel per cycle, left to right and top to bottom. The
//! pixel drawn during `cycle` sits at horizontal position
//! `pos = (cycle - 1) mod width`; it is lit when the three-pixel sprite centred
//! on `X` covers it, i.e. `|X - pos| <= sprite_reach`.
//!
//! Glyphs are collected in cycle order and reshaped row-major into a [`Frame`]
//! once the run is over.

use std::fmt;

use super::Observer;
use crate::config::CrtConfig;

/// One displayed pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Sprite covered the pixel (`'#'`).
    Lit,
    /// Sprite missed the pixel (`'.'`).
    Dark,
}

impl Glyph {
    /// Whether the pixel is lit.
    pub const fn is_lit(self) -> bool {
        matches!(self, Self::Lit)
    }
}

/// Reshapes a flat, cycle-ordered sequence into rows of `width` items.
///
/// The item for cycle `c` lands at row `(c - 1) / width`, column
/// `(c - 1) % width`. A trailing partial row is kept. A `width` of zero is
/// treated as one.
pub fn reshape<T: Clone>(items: &[T], width: usize) -> Vec<Vec<T>> {
    items.chunks(width.max(1)).map(<[T]>::to_vec).collect()
}

/// Cathode-ray tube observer.
#[derive(Debug, Clone)]
pub struct Crt {
    config: CrtConfig,
    glyphs: Vec<Glyph>,
}

impl Crt {
    /// Creates a blank CRT. Glyph storage grows as pixels are drawn.
    pub fn new(config: CrtConfig) -> Self {
        let config = CrtConfig {
            width: config.width.max(1),
            ..config
        };
        Self {
            config,
            glyphs: Vec::new(),
        }
    }

    /// Decides the glyph drawn during `cycle` with the sprite centred on `x`.
    pub fn glyph_for(&self, cycle: u64, x: i64) -> Glyph {
        let pos = (cycle.saturating_sub(1) % self.config.width as u64) as i64;
        if x.abs_diff(pos) <= self.config.sprite_reach {
            Glyph::Lit
        } else {
            Glyph::Dark
        }
    }

    /// Glyphs drawn so far, in cycle order.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Configuration the CRT was built with.
    pub const fn config(&self) -> &CrtConfig {
        &self.config
    }

    /// Snapshot of everything drawn so far as a grid.
    pub fn frame(&self) -> Frame {
        Frame {
            width: self.config.width,
            glyphs: self.glyphs.clone(),
            lit: self.config.lit,
            dark: self.config.dark,
        }
    }

    /// Consumes the CRT and returns its frame.
    pub fn into_frame(self) -> Frame {
        Frame {
            width: self.config.width,
            glyphs: self.glyphs,
            lit: self.config.lit,
            dark: self.config.dark,
        }
    }

    /// Blanks the screen.
    pub fn clear(&mut self) {
        self.glyphs.clear();
    }
}

impl Default for Crt {
    fn default() -> Self {
        Self::new(CrtConfig::default())
    }
}

impl Observer for Crt {
    fn observe(&mut self, cycle: u64, x: i64) {
        let glyph = self.glyph_for(cycle, x);
        self.glyphs.push(glyph);
    }
}

/// A drawn image, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    glyphs: Vec<Glyph>,
    lit: char,
    dark: char,
}

impl Frame {
    /// Builds a frame from cycle-ordered glyphs using `'#'` and `'.'`.
    pub fn new(glyphs: Vec<Glyph>, width: usize) -> Self {
        let defaults = CrtConfig::default();
        Self {
            width: width.max(1),
            glyphs,
            lit: defaults.lit,
            dark: defaults.dark,
        }
    }

    /// Pixels per row.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows, counting a trailing partial row.
    pub fn height(&self) -> usize {
        self.glyphs.len().div_ceil(self.width)
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Glyph]> + '_ {
        self.glyphs.chunks(self.width)
    }

    /// Glyph at `(row, col)`, if drawn.
    pub fn glyph(&self, row: usize, col: usize) -> Option<Glyph> {
        if col >= self.width {
            return None;
        }
        self.glyphs.get(row * self.width + col).copied()
    }

    /// Number of lit pixels.
    pub fn lit_count(&self) -> usize {
        self.glyphs.iter().filter(|g| g.is_lit()).count()
    }

    /// The grid as one `String` per row.
    pub fn lines(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|g| self.char_for(*g)).collect())
            .collect()
    }

    const fn char_for(&self, glyph: Glyph) -> char {
        match glyph {
            Glyph::Lit => self.lit,
            Glyph::Dark => self.dark,
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, line) in self.lines().iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
