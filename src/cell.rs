// Copyright (c) 2026 rezky_nightky

use crate::style::Shade;

/// One positioned draw instruction. `x` is 1-indexed, `y` is the 0-indexed
/// row; a cell without a shade blanks its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub x: u16,
    pub y: u16,
    pub ch: char,
    pub shade: Option<Shade>,
}

impl Cell {
    pub fn blank(x: u16, y: u16) -> Self {
        Self {
            x,
            y,
            ch: ' ',
            shade: None,
        }
    }

    pub fn glyph(x: u16, y: u16, ch: char, shade: Shade) -> Self {
        Self {
            x,
            y,
            ch,
            shade: Some(shade),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.shade.is_none()
    }
}
