//! EAN-13 encoder with output-agnostic rendering.
//!
//! A code is parsed and validated into an [Ean13], translated into its
//! symbology by [Symbol] and laid out by [render()] onto any [Surface]. The
//! layout is the same for every medium: the surface only decides where the
//! barcode goes and how bars and digits are painted.
//!
//! ```
//! use ean13::Ean13;
//!
//! let code: Ean13 = "590123412345".parse().unwrap();
//! assert_eq!(code.to_string(), "5901234123457");
//!
//! let mut svg = String::new();
//! code.render_svg(&mut svg, 240, 120, 10).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```
#![cfg_attr(not(test), no_std)]

mod checksum;
mod converter;
mod error;
pub mod generators;
mod render;
pub mod surfaces;

use core::fmt;

pub use checksum::{checksum, CODE_LIMIT, PAYLOAD_LIMIT};
pub use converter::{Converter, FontMetrics, Rect, LOGICAL_WIDTH};
pub use error::{DrawError, Error};
pub use generators::{Element, Symbol, MODULE_COUNT};
pub use render::{render, Surface};
pub use surfaces::svg::SvgSurface;
#[cfg(feature = "embedded-graphics")]
pub use surfaces::raster::RasterSurface;

/// A validated EAN-13 code: 12 payload digits followed by their check
/// digit. Construct it with [Ean13::parse], [Ean13::from_payload] or
/// [Ean13::from_full].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ean13(u64);

impl Ean13 {
    /// The full 13-digit value.
    #[inline]
    pub const fn code13(&self) -> u64 {
        self.0
    }

    /// The payload without the check digit.
    #[inline]
    pub const fn code12(&self) -> u64 {
        self.0 / 10
    }

    #[inline]
    pub const fn checksum(&self) -> u8 {
        (self.0 % 10) as u8
    }

    /// The 13 digits, most significant first.
    pub const fn digits(&self) -> [u8; 13] {
        let mut digits = [0; 13];
        let mut rest = self.0;
        let mut i = 13;
        while i > 0 {
            i -= 1;
            digits[i] = (rest % 10) as u8;
            rest /= 10;
        }
        digits
    }

    pub const fn symbol(&self) -> Symbol {
        Symbol::new(*self)
    }

    /// Draws the barcode onto `surface`. See [render()].
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), S::Error> {
        render(*self, surface)
    }

    /// Writes the barcode as an SVG document of `width` x `height` user
    /// units, keeping `padding` free on every side.
    pub fn render_svg<W: fmt::Write>(
        &self,
        out: W,
        width: u32,
        height: u32,
        padding: u32,
    ) -> Result<(), DrawError<fmt::Error>> {
        let mut surface = SvgSurface::new(out, width, height).set_padding(padding);
        render(*self, &mut surface)
    }

    /// Draws the barcode on a monochrome target inside `bound`, keeping
    /// `padding` pixels free on every side.
    #[cfg(feature = "embedded-graphics")]
    pub fn render_raster<D>(
        &self,
        target: &mut D,
        bound: embedded_graphics::primitives::Rectangle,
        padding: u32,
    ) -> Result<(), DrawError<D::Error>>
    where
        D: embedded_graphics::draw_target::DrawTarget<
            Color = embedded_graphics::pixelcolor::BinaryColor,
        >,
    {
        use embedded_graphics::pixelcolor::BinaryColor;

        let mut surface = RasterSurface::new(target, bound, BinaryColor::On, BinaryColor::Off)
            .set_padding(padding);
        render(*self, &mut surface)
    }
}

impl fmt::Display for Ean13 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:013}", self.0)
    }
}

impl From<Ean13> for u64 {
    fn from(code: Ean13) -> u64 {
        code.0
    }
}

impl TryFrom<u64> for Ean13 {
    type Error = Error;

    /// Same as [Ean13::from_full].
    fn try_from(code13: u64) -> Result<Self, Self::Error> {
        Self::from_full(code13)
    }
}
