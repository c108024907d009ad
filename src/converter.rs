//! Maps the symbol's logical geometry onto a device bounding box.

use crate::Error;
use crate::generators::tables::{CENTER_SIZE, DIGIT_SIZE, GUARD_SIZE};

/// Logical width of the whole symbol: the leading digit cell, the 12
/// encoded digits, the three markers and a digit-wide right margin.
pub const LOGICAL_WIDTH: i32 = 13 * DIGIT_SIZE + 2 * GUARD_SIZE + CENTER_SIZE + DIGIT_SIZE;

/// A device rectangle, `min` inclusive and `max` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    #[inline]
    pub const fn width(&self) -> i32 {
        self.x1.saturating_sub(self.x0)
    }

    #[inline]
    pub const fn height(&self) -> i32 {
        self.y1.saturating_sub(self.y0)
    }

    /// Shrinks the rectangle by `dx` on the left and right and `dy` on the
    /// top and bottom.
    pub const fn shrink(&self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.x0.saturating_add(dx),
            self.y0.saturating_add(dy),
            self.x1.saturating_sub(dx),
            self.y1.saturating_sub(dy),
        )
    }

    /// Swaps coordinates so that `x0 <= x1` and `y0 <= y1`.
    pub const fn canon(&self) -> Self {
        let (x0, x1) = if self.x0 > self.x1 { (self.x1, self.x0) } else { (self.x0, self.x1) };
        let (y0, y1) = if self.y0 > self.y1 { (self.y1, self.y0) } else { (self.y0, self.y1) };
        Self::new(x0, y0, x1, y1)
    }
}

/// Font dimensions resolved for one digit cell, as reported by a font
/// measurer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    /// Size in the surface's own font unit (pixel magnification, points, ..).
    pub size: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converter {
    bound: Rect,
    font: FontMetrics,
    scale: i32,
}

impl Converter {
    /// Resolves the scale of the symbol inside `outer`. The measurer
    /// receives the device width of a digit cell and returns the font that
    /// fits in it.
    pub fn new(outer: Rect, measure: impl FnOnce(i32) -> FontMetrics) -> Result<Self, Error> {
        let scale = outer.width() / LOGICAL_WIDTH;
        if scale <= 0 {
            tracing::debug!(width = outer.width(), "bound area narrower than the symbol");
            return Err(Error::AreaTooSmall);
        }
        let margin = (outer.width() % LOGICAL_WIDTH) / 2;

        let cell_width = DIGIT_SIZE * scale;
        let font = measure(cell_width);
        if font.width > cell_width {
            tracing::debug!(glyph_width = font.width, cell_width, "font does not fit a digit cell");
            return Err(Error::FontTooBig { glyph_width: font.width, cell_width });
        }
        if outer.height() < font.height.saturating_mul(2) {
            tracing::debug!(height = outer.height(), font_height = font.height, "bound area too low");
            return Err(Error::AreaTooSmall);
        }

        tracing::trace!(scale, margin, font_size = font.size, "resolved barcode geometry");
        Ok(Self { bound: outer.shrink(margin, 0), font, scale })
    }

    /// Device units per logical unit.
    #[inline]
    pub const fn scale(&self) -> i32 {
        self.scale
    }

    /// Drawable area after horizontal centering.
    #[inline]
    pub const fn bound(&self) -> Rect {
        self.bound
    }

    #[inline]
    pub const fn font(&self) -> FontMetrics {
        self.font
    }

    /// Device rectangle of a bar spanning logical `x0..x1`.
    pub const fn bar_rect(&self, x0: i32, x1: i32, long: bool) -> Rect {
        let mut height = self.bound.height() - self.font.height;
        if long {
            height += self.font.height / 2;
        }
        Rect::new(
            self.bound.x0 + x0 * self.scale,
            self.bound.y0,
            self.bound.x0 + x1 * self.scale,
            self.bound.y0 + height,
        )
    }

    /// Device rectangle and font size of the glyph for the digit cell at
    /// logical `x`, centered in the cell and resting on the bottom edge.
    pub const fn digit_rect(&self, x: i32) -> (Rect, i32) {
        let cell_width = self.scale * DIGIT_SIZE;
        let x0 = self.bound.x0 + x * self.scale + (cell_width - self.font.width) / 2;
        let y0 = self.bound.y0 + self.bound.height() - self.font.height;
        (Rect::new(x0, y0, x0 + self.font.width, y0 + self.font.height), self.font.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 5x8 glyphs magnified by an integer size, like a bitmap glyph sheet.
    fn sheet(cell: i32) -> FontMetrics {
        let size = cell / 5;
        FontMetrics { size, width: 5 * size, height: 8 * size }
    }

    #[test]
    fn test_logical_width() {
        assert_eq!(LOGICAL_WIDTH, 109);
    }

    #[test]
    fn test_area_too_small() {
        assert_eq!(Converter::new(Rect::new(0, 0, 10, 100), sheet), Err(Error::AreaTooSmall));
        assert_eq!(Converter::new(Rect::new(0, 0, LOGICAL_WIDTH - 1, 100), sheet), Err(Error::AreaTooSmall));
        // scale 1 gives size 1 glyphs, 8 high
        assert_eq!(Converter::new(Rect::new(0, 0, LOGICAL_WIDTH, 15), sheet), Err(Error::AreaTooSmall));
        assert!(Converter::new(Rect::new(0, 0, LOGICAL_WIDTH, 16), sheet).is_ok());
    }

    #[test]
    fn test_font_too_big() {
        let wide = |cell| FontMetrics { size: 1, width: cell + 1, height: 1 };
        assert_eq!(
            Converter::new(Rect::new(0, 0, 2 * LOGICAL_WIDTH, 100), wide),
            Err(Error::FontTooBig { glyph_width: 15, cell_width: 14 })
        );
    }

    #[test]
    fn test_huge_font_height() {
        let tall = |cell| FontMetrics { size: 1, width: cell, height: i32::MAX };
        assert_eq!(Converter::new(Rect::new(0, 0, 1000, 1000), tall), Err(Error::AreaTooSmall));
    }

    #[test]
    fn test_scale_and_margin() {
        let c = Converter::new(Rect::new(10, 20, 10 + LOGICAL_WIDTH * 2, 120), sheet).unwrap();
        assert_eq!(c.scale(), 2);
        assert_eq!(c.bound(), Rect::new(10, 20, 10 + LOGICAL_WIDTH * 2, 120));

        let doubled = Converter::new(Rect::new(20, 40, 20 + LOGICAL_WIDTH * 4, 240), sheet).unwrap();
        assert_eq!(doubled.scale(), 4);

        // 300 / 109 = 2 rem 82; 600 / 109 = 5 rem 55
        let c = Converter::new(Rect::new(0, 0, 300, 200), sheet).unwrap();
        assert_eq!((c.scale(), c.bound()), (2, Rect::new(41, 0, 259, 200)));
        let c = Converter::new(Rect::new(0, 0, 600, 400), sheet).unwrap();
        assert_eq!((c.scale(), c.bound()), (5, Rect::new(27, 0, 573, 400)));
    }

    #[test]
    fn test_measurer_receives_cell_width() {
        let mut seen = 0;
        let _ = Converter::new(Rect::new(0, 0, 3 * LOGICAL_WIDTH + 5, 100), |cell| {
            seen = cell;
            sheet(cell)
        });
        assert_eq!(seen, 21);
    }

    #[test]
    fn test_bar_rect() {
        let c = Converter::new(Rect::new(0, 0, 300, 200), sheet).unwrap();
        // size 2 glyphs: 10x16
        assert_eq!(c.font(), FontMetrics { size: 2, width: 10, height: 16 });
        assert_eq!(c.bar_rect(7, 8, false), Rect::new(55, 0, 57, 184));
        assert_eq!(c.bar_rect(7, 8, true), Rect::new(55, 0, 57, 192));
    }

    #[test]
    fn test_digit_rect() {
        let c = Converter::new(Rect::new(0, 0, 300, 200), sheet).unwrap();
        // cell 14 wide, glyph 10 wide: 2 units of padding each side
        assert_eq!(c.digit_rect(0), (Rect::new(43, 184, 53, 200), 2));
        assert_eq!(c.digit_rect(10), (Rect::new(63, 184, 73, 200), 2));
    }

    #[test]
    fn test_canon_and_shrink() {
        assert_eq!(Rect::new(10, 10, 0, 0).canon(), Rect::new(0, 0, 10, 10));
        assert_eq!(Rect::new(0, 0, 10, 10).shrink(2, 3), Rect::new(2, 3, 8, 7));
    }

    #[test]
    fn test_extent_saturates() {
        assert_eq!(Rect::new(i32::MIN, 0, i32::MAX, 1).width(), i32::MAX);
        assert_eq!(Rect::new(0, i32::MIN, 1, i32::MAX).height(), i32::MAX);
        let inverted = Rect::new(0, 0, 10, 10).shrink(i32::MAX, 0);
        assert_eq!(inverted, Rect::new(i32::MAX, 0, 10 - i32::MAX, 10));
        assert!(inverted.width() < 0);
    }
}
