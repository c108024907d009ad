//! The layout driver shared by every output medium.

use crate::{Ean13, Error};
use crate::converter::{Converter, Rect};
use crate::generators::{Element, Symbol};

/// An output medium the barcode is drawn onto.
///
/// [render] calls [start](Surface::start) once, then draws bars and digit
/// glyphs strictly from left to right, then calls [end](Surface::end).
/// A surface may buffer internally but must not change the visual result
/// of that order.
pub trait Surface {
    type Error: From<Error>;

    /// Prepares a new barcode and returns the converter that lays it out.
    /// Must fail before drawing anything if the layout is impossible.
    fn start(&mut self) -> Result<Converter, Self::Error>;

    /// Fills a black bar.
    fn draw_bar(&mut self, rect: Rect) -> Result<(), Self::Error>;

    /// Draws `digit` (0 to 9) inside `rect` with the measured font size.
    fn draw_digit(&mut self, digit: u8, rect: Rect, font_size: i32) -> Result<(), Self::Error>;

    /// Finishes the barcode.
    fn end(&mut self) -> Result<(), Self::Error>;
}

/// Draws `code` onto `surface`.
pub fn render<S: Surface + ?Sized>(code: Ean13, surface: &mut S) -> Result<(), S::Error> {
    tracing::debug!(%code, "rendering barcode");
    let converter = surface.start()?;

    for element in Symbol::new(code).elements() {
        match element {
            Element::Bars { x, pattern, long } => {
                for (x0, x1) in pattern.stripes {
                    let rect = converter.bar_rect(x + x0 as i32, x + x1 as i32, long);
                    surface.draw_bar(rect)?;
                }
            }
            Element::Digit { x, digit } => {
                let (rect, font_size) = converter.digit_rect(x);
                surface.draw_digit(digit, rect, font_size)?;
            }
        }
    }

    surface.end()?;
    tracing::debug!(%code, "barcode rendered");
    Ok(())
}
