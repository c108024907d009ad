//! Raster output onto any `embedded-graphics` draw target. Digit glyphs
//! are blitted from a [MonoFont] glyph sheet magnified by an integer factor.

use embedded_graphics::image::GetPixel;
use embedded_graphics::mono_font::{ascii::FONT_6X10, mapping::GlyphMapping, MonoFont};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::DrawError;
use crate::converter::{Converter, FontMetrics, Rect};
use crate::render::Surface;

/// Measures the glyphs of `font` magnified to fit a cell `cell` pixels
/// wide. A font wider than the cell is reported at size 1 so the layout
/// rejects it.
pub fn measure_mono_font(font: &MonoFont<'_>, cell: i32) -> FontMetrics {
    let glyph_width = font.character_size.width.max(1) as i32;
    let glyph_height = font.character_size.height as i32;
    let size = (cell / glyph_width).max(1);
    FontMetrics { size, width: glyph_width * size, height: glyph_height * size }
}

fn to_rect(r: &Rectangle) -> Rect {
    let Point { x, y } = r.top_left;
    Rect::new(x, y, x.saturating_add_unsigned(r.size.width), y.saturating_add_unsigned(r.size.height))
}

fn to_rectangle(r: Rect) -> Rectangle {
    let r = r.canon();
    Rectangle::new(Point::new(r.x0, r.y0), Size::new(r.width() as u32, r.height() as u32))
}

/// Draws one barcode inside `bound` of a draw target, clipped to the
/// target's bounding box.
pub struct RasterSurface<'a, D: DrawTarget> {
    target: &'a mut D,
    bound: Rectangle,
    padding: u32,
    font: &'a MonoFont<'a>,
    on: D::Color,
    off: D::Color,
}

impl<'a, D: DrawTarget> RasterSurface<'a, D> {
    /// Bars and glyph pixels are painted with `on`, the background with
    /// `off`. Digits default to the 6x10 ASCII font.
    pub fn new(target: &'a mut D, bound: Rectangle, on: D::Color, off: D::Color) -> Self {
        Self { target, bound, padding: 0, font: &FONT_6X10, on, off }
    }

    /// Sets the quiet area kept free on every side, in pixels.
    pub const fn set_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    pub const fn set_font(mut self, font: &'a MonoFont<'a>) -> Self {
        self.font = font;
        self
    }

    fn fill(&mut self, area: &Rectangle, color: D::Color) -> Result<(), DrawError<D::Error>> {
        self.target.fill_solid(area, color).map_err(DrawError::Target)
    }
}

impl<D: DrawTarget> Surface for RasterSurface<'_, D> {
    type Error = DrawError<D::Error>;

    fn start(&mut self) -> Result<Converter, Self::Error> {
        self.bound = self.bound.intersection(&self.target.bounding_box());
        let padding = i32::try_from(self.padding).unwrap_or(i32::MAX);
        let inner = to_rect(&self.bound).shrink(padding, padding);

        let font = self.font;
        let converter = Converter::new(inner, |cell| measure_mono_font(font, cell))?;

        let bound = self.bound;
        self.fill(&bound, self.off)?;
        Ok(converter)
    }

    fn draw_bar(&mut self, rect: Rect) -> Result<(), Self::Error> {
        self.fill(&to_rectangle(rect), self.on)
    }

    fn draw_digit(&mut self, digit: u8, rect: Rect, font_size: i32) -> Result<(), Self::Error> {
        let font = self.font;
        let Size { width: glyph_width, height: glyph_height } = font.character_size;
        let per_row = (font.image.size().width / glyph_width.max(1)).max(1);
        let index = font.glyph_mapping.index(char::from(b'0' + digit)) as u32;
        let origin = Point::new(
            ((index % per_row) * glyph_width) as i32,
            ((index / per_row) * glyph_height) as i32,
        );
        let dot = Size::new_equal(font_size.max(0) as u32);

        for y in 0..glyph_height as i32 {
            for x in 0..glyph_width as i32 {
                let color = match font.image.pixel(origin + Point::new(x, y)) {
                    Some(BinaryColor::On) => self.on,
                    Some(BinaryColor::Off) => self.off,
                    None => continue,
                };
                let top_left = Point::new(rect.x0 + x * font_size, rect.y0 + y * font_size);
                self.fill(&Rectangle::new(top_left, dot), color)?;
            }
        }
        Ok(())
    }

    fn end(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
