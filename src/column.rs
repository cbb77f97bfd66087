// Copyright (c) 2026 rezky_nightky

use crate::cell::Cell;
use crate::charset::GlyphSource;
use crate::style::Shade;

/// One falling stream of glyphs at a fixed horizontal position.
///
/// `glyphs[0]` sits on the `head` row and every following glyph one row
/// above the previous, so the streak covers rows `head - length + 1 ..= head`.
#[derive(Clone, Debug)]
pub struct Column {
    x: u16,
    head: i32,
    speed: i32,
    length: i32,
    glyphs: Vec<char>,
    age: u32,
}

impl Column {
    pub fn new(x: u16, height: u16, src: &mut GlyphSource) -> Self {
        let mut c = Self {
            x,
            head: 0,
            speed: 1,
            length: 1,
            glyphs: Vec::new(),
            age: 0,
        };
        c.reset(0, height, src);
        c
    }

    /// Re-roll the column above the visible area. A `width` of 0 keeps the
    /// current horizontal position.
    pub fn reset(&mut self, width: u16, height: u16, src: &mut GlyphSource) {
        if width > 0 {
            self.x = src.between(1, i32::from(width)) as u16;
        }
        let h = i32::from(height);
        self.speed = src.between(1, 2);
        self.length = (src.below((h / 2).max(1)) + h / 4).max(1);
        self.head = -src.between(1, 2 * h.max(1));
        self.age = 0;
        self.glyphs = (0..self.length).map(|_| src.glyph()).collect();
    }

    /// Glitch a few glyphs and fall by `speed` rows. Returns `false` once the
    /// whole streak is below `height`, at which point the column is done.
    pub fn advance(&mut self, height: u16, src: &mut GlyphSource) -> bool {
        if src.below(10) > 2 {
            for _ in 0..src.between(1, 3) {
                let slot = src.below(self.length) as usize;
                self.glyphs[slot] = src.glyph();
            }
        }

        self.head += self.speed;
        self.age = self.age.saturating_add(1);

        self.head - self.length <= i32::from(height)
    }

    /// Append this frame's instructions: blanks for the rows vacated since
    /// the last advance, then the streak itself from head to tail.
    pub fn draw(&self, out: &mut Vec<Cell>) {
        let vacated = self.head - self.speed - self.length + 1;
        for row in vacated..vacated + self.speed {
            if let Ok(y) = u16::try_from(row) {
                out.push(Cell::blank(self.x, y));
            }
        }

        let len = self.glyphs.len();
        for (i, &ch) in self.glyphs.iter().enumerate() {
            if let Ok(y) = u16::try_from(self.head - i as i32) {
                out.push(Cell::glyph(self.x, y, ch, Shade::for_index(i, len)));
            }
        }
    }

    pub fn x(&self) -> u16 {
        self.x
    }

    pub fn head(&self) -> i32 {
        self.head
    }

    #[allow(dead_code)]
    pub fn speed(&self) -> i32 {
        self.speed
    }

    #[allow(dead_code)]
    pub fn length(&self) -> i32 {
        self.length
    }

    #[allow(dead_code)]
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    #[allow(dead_code)]
    pub fn age(&self) -> u32 {
        self.age
    }
}
