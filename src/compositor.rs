// Copyright (c) 2026 rezky_nightky

use std::io::Result;

use crossterm::{
    cursor::MoveTo,
    style::{Print, PrintStyledContent, StyledContent},
    QueueableCommand,
};

use crate::cell::Cell;
use crate::charset::GlyphSource;
use crate::column::Column;
use crate::style::Theme;

/// Owns the live columns and turns one simulation step into one buffer of
/// terminal bytes.
pub struct Compositor {
    width: u16,
    height: u16,
    density: u16,
    theme: Theme,
    columns: Vec<Column>,
    cells: Vec<Cell>,
    out: Vec<u8>,
}

impl Compositor {
    pub fn new(width: u16, height: u16, density: u16, theme: Theme) -> Self {
        Self {
            width,
            height,
            density: density.max(1),
            theme,
            columns: Vec::new(),
            cells: Vec::new(),
            out: Vec::new(),
        }
    }

    /// Startup seeding: each position gets a column with chance
    /// `1 / (density * 5)`.
    pub fn populate(&mut self, src: &mut GlyphSource) {
        let odds = i32::from(self.density) * 5;
        for x in 1..=self.width {
            if src.below(odds) == 0 {
                self.columns.push(Column::new(x, self.height, src));
            }
        }
    }

    pub fn target(&self) -> usize {
        usize::from((self.width / self.density).max(1))
    }

    /// Adopt new terminal dimensions. Columns that fell outside the new width
    /// are re-rolled in place; returns how many were.
    pub fn resize(&mut self, width: u16, height: u16, src: &mut GlyphSource) -> usize {
        let mut moved = 0;
        for c in self.columns.iter_mut().filter(|c| c.x() > width) {
            c.reset(width, height, src);
            moved += 1;
        }
        self.width = width;
        self.height = height;
        moved
    }

    /// Advance every column, draw the survivors, top the population back up
    /// and return the encoded frame.
    pub fn frame(&mut self, src: &mut GlyphSource) -> Result<&[u8]> {
        let height = self.height;
        let cells = &mut self.cells;
        cells.clear();

        self.columns.retain_mut(|c| {
            let active = c.advance(height, src);
            if active {
                c.draw(cells);
            }
            active
        });

        let target = self.target();
        while self.columns.len() < target {
            let x = src.between(1, i32::from(self.width.max(1))) as u16;
            self.columns.push(Column::new(x, height, src));
        }

        self.encode()?;
        Ok(&self.out)
    }

    fn visible(&self, cell: &Cell) -> bool {
        cell.x >= 1 && cell.x <= self.width && cell.y < self.height
    }

    // Blanks go out first so a column sharing `x` with another never erases
    // a glyph drawn in the same frame.
    fn encode(&mut self) -> Result<()> {
        self.out.clear();
        for pass_blanks in [true, false] {
            for cell in &self.cells {
                if cell.is_blank() != pass_blanks || !self.visible(cell) {
                    continue;
                }
                self.out.queue(MoveTo(cell.x - 1, cell.y))?;
                match cell.shade {
                    None => self.out.queue(Print(' '))?,
                    Some(shade) => self.out.queue(PrintStyledContent(StyledContent::new(
                        self.theme.style(shade),
                        cell.ch,
                    )))?,
                };
            }
        }
        Ok(())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::GlyphSet;

    fn source(seed: u64) -> GlyphSource {
        GlyphSource::new(GlyphSet::parse("01").unwrap(), Some(seed))
    }

    #[test]
    fn initial_population_is_sparse() {
        for seed in 0..3 {
            let mut src = source(seed);
            let mut comp = Compositor::new(100, 30, 2, Theme::Green);
            comp.populate(&mut src);
            let n = comp.columns().len();
            assert!((3..=20).contains(&n), "seed {seed}: {n} columns");
            assert!(comp.columns().iter().all(|c| c.head() < 0));
        }
    }

    #[test]
    fn frame_tops_up_to_density_target() {
        let mut src = source(1);
        let mut comp = Compositor::new(80, 24, 2, Theme::Green);
        for _ in 0..200 {
            comp.frame(&mut src).unwrap();
            assert!(comp.columns().len() >= 40);
        }
    }

    #[test]
    fn narrow_terminal_keeps_at_least_one_column() {
        let mut src = source(2);
        let mut comp = Compositor::new(3, 10, 8, Theme::Green);
        assert_eq!(comp.target(), 1);
        comp.frame(&mut src).unwrap();
        assert_eq!(comp.columns().len(), 1);
        assert!((1..=3).contains(&comp.columns()[0].x()));
    }

    #[test]
    fn shrinking_rerolls_out_of_bounds_columns() {
        let mut src = source(3);
        let mut comp = Compositor::new(80, 24, 2, Theme::Green);
        comp.columns.push(Column::new(60, 24, &mut src));
        comp.columns.push(Column::new(20, 24, &mut src));
        let kept = comp.columns[1].clone();

        let moved = comp.resize(40, 24, &mut src);

        assert_eq!(moved, 1);
        assert_eq!(comp.size(), (40, 24));
        assert!((1..=40).contains(&comp.columns[0].x()));
        assert!(comp.columns[0].head() < 0);
        assert_eq!(comp.columns[0].age(), 0);
        assert_eq!(comp.columns[1].x(), kept.x());
        assert_eq!(comp.columns[1].head(), kept.head());
        assert_eq!(comp.columns.len(), 2);
    }

    #[test]
    fn every_column_fits_after_reconciliation() {
        let mut src = source(4);
        let mut comp = Compositor::new(200, 50, 1, Theme::Green);
        for _ in 0..30 {
            comp.frame(&mut src).unwrap();
        }
        comp.resize(17, 50, &mut src);
        assert!(comp.columns().iter().all(|c| c.x() <= 17));
    }

    #[test]
    fn encoded_frame_positions_cells_one_based() {
        let mut comp = Compositor::new(10, 10, 2, Theme::Green);
        comp.cells.push(Cell::blank(5, 6));
        comp.encode().unwrap();
        let s = String::from_utf8(comp.out.clone()).unwrap();
        assert_eq!(s, "\x1b[7;5H ");
    }

    #[test]
    fn encoder_clips_to_viewport() {
        let mut comp = Compositor::new(10, 5, 2, Theme::Green);
        comp.cells.push(Cell::glyph(3, 5, 'x', crate::style::Shade::Dim));
        comp.cells.push(Cell::glyph(11, 1, 'y', crate::style::Shade::Dim));
        comp.cells.push(Cell::blank(0, 1));
        comp.encode().unwrap();
        assert!(comp.out.is_empty());
    }

    #[test]
    fn blanks_are_written_before_glyphs() {
        let mut comp = Compositor::new(10, 10, 2, Theme::Green);
        comp.cells.push(Cell::glyph(2, 3, 'z', crate::style::Shade::Head));
        comp.cells.push(Cell::blank(2, 3));
        comp.encode().unwrap();
        let s = String::from_utf8(comp.out.clone()).unwrap();
        let blank_at = s.find("\x1b[4;2H ").unwrap();
        let glyph_at = s.find('z').unwrap();
        assert!(blank_at < glyph_at);
    }
}
