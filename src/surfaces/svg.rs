//! Vector output as an SVG document.

use core::fmt::{self, Write};

use crate::DrawError;
use crate::converter::{Converter, FontMetrics, Rect};
use crate::render::Surface;

/// Sub-units per SVG user unit. Layout runs on integers, so this keeps
/// fractional bar widths on small documents.
pub const COORDINATE_SCALE: i32 = 5;
const _: () = assert!(COORDINATE_SCALE > 0, "coordinate scale must be positive");

// Helvetica metrics, in 1/1000 em. The ascender leaves room for accents.
const FONT_ASCENDER: i32 = 718 + 100;
const FONT_DESCENDER: i32 = -207;
const FONT_HEIGHT: i32 = FONT_ASCENDER - FONT_DESCENDER;
const DIGIT_WIDTH: i32 = 556;
const FONT_UNIT_SCALE: i32 = 1000;

/// Measures Helvetica digits for a cell of `cell` sub-units. The size is
/// in user units (points).
pub const fn measure_helvetica(cell: i32) -> FontMetrics {
    let size = cell as i64 * FONT_UNIT_SCALE as i64 / DIGIT_WIDTH as i64 / COORDINATE_SCALE as i64;
    FontMetrics {
        size: saturate(size),
        width: saturate(font_units(DIGIT_WIDTH, size)),
        height: saturate(font_units(FONT_HEIGHT, size)),
    }
}

/// Converts a length in 1/1000 em at `size` points to sub-units.
const fn font_units(metric: i32, size: i64) -> i64 {
    metric as i64 * size * COORDINATE_SCALE as i64 / FONT_UNIT_SCALE as i64
}

const fn saturate(v: i64) -> i32 {
    if v > i32::MAX as i64 {
        i32::MAX
    } else if v < i32::MIN as i64 {
        i32::MIN
    } else {
        v as i32
    }
}

/// A length in sub-units, printed in user units.
struct Units(i32);

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v < 0 {
            f.write_char('-')?;
        }
        let scale = COORDINATE_SCALE.unsigned_abs();
        let whole = v.unsigned_abs() / scale;
        // truncated to hundredths
        let frac = v.unsigned_abs() % scale * 100 / scale;
        match frac {
            0 => write!(f, "{whole}"),
            _ if frac % 10 == 0 => write!(f, "{whole}.{}", frac / 10),
            _ => write!(f, "{whole}.{frac:02}"),
        }
    }
}

fn to_subunits(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX).saturating_mul(COORDINATE_SCALE)
}

/// Writes one barcode as a standalone SVG document of `width` x `height`
/// user units to `out`.
#[derive(Debug)]
pub struct SvgSurface<W: Write> {
    out: W,
    width: u32,
    height: u32,
    padding: u32,
}

impl<W: Write> SvgSurface<W> {
    pub const fn new(out: W, width: u32, height: u32) -> Self {
        Self { out, width, height, padding: 0 }
    }

    /// Sets the quiet area kept free on every side, in user units.
    pub const fn set_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    pub const fn padding(&self) -> u32 {
        self.padding
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_header(&mut self) -> fmt::Result {
        let (w, h) = (self.width, self.height);
        writeln!(
            self.out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        )?;
        writeln!(self.out, r#"  <rect width="{w}" height="{h}" fill="white"/>"#)?;
        writeln!(self.out, r#"  <g fill="black" font-family="Helvetica, Arial, sans-serif">"#)
    }
}

impl<W: Write> Surface for SvgSurface<W> {
    type Error = DrawError<fmt::Error>;

    fn start(&mut self) -> Result<Converter, Self::Error> {
        let padding = to_subunits(self.padding);
        let bound = Rect::new(
            padding,
            padding,
            to_subunits(self.width).saturating_sub(padding),
            to_subunits(self.height).saturating_sub(padding),
        );
        let converter = Converter::new(bound, measure_helvetica)?;

        self.write_header().map_err(DrawError::Target)?;
        Ok(converter)
    }

    fn draw_bar(&mut self, rect: Rect) -> Result<(), Self::Error> {
        writeln!(
            self.out,
            r#"    <rect x="{}" y="{}" width="{}" height="{}"/>"#,
            Units(rect.x0),
            Units(rect.y0),
            Units(rect.width()),
            Units(rect.height()),
        )
        .map_err(DrawError::Target)
    }

    fn draw_digit(&mut self, digit: u8, rect: Rect, font_size: i32) -> Result<(), Self::Error> {
        let baseline = saturate(rect.y0 as i64 + font_units(FONT_ASCENDER, font_size as i64));
        writeln!(
            self.out,
            r#"    <text x="{}" y="{}" font-size="{font_size}">{digit}</text>"#,
            Units(rect.x0),
            Units(baseline),
        )
        .map_err(DrawError::Target)
    }

    fn end(&mut self) -> Result<(), Self::Error> {
        writeln!(self.out, "  </g>\n</svg>").map_err(DrawError::Target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ean13, Error};

    fn svg(code: &str, width: u32, height: u32, padding: u32) -> Result<String, DrawError<fmt::Error>> {
        let mut out = String::new();
        Ean13::parse(code).unwrap().render_svg(&mut out, width, height, padding)?;
        Ok(out)
    }

    #[test]
    fn test_units() {
        assert_eq!(Units(50).to_string(), "10");
        assert_eq!(Units(154).to_string(), "30.8");
        assert_eq!(Units(-3).to_string(), "-0.6");
        assert_eq!(Units(i32::MIN).to_string(), "-429496729.6");
    }

    #[test]
    fn test_units_follow_coordinate_scale() {
        for v in -200..200 {
            let printed: f64 = Units(v).to_string().parse().unwrap();
            let expected = f64::from(v) / f64::from(COORDINATE_SCALE);
            assert!((printed - expected).abs() < 0.01, "{v} printed as {printed}");
        }
    }

    #[test]
    fn test_measure_helvetica() {
        assert_eq!(measure_helvetica(63), FontMetrics { size: 22, width: 61, height: 112 });
        assert_eq!(measure_helvetica(70), FontMetrics { size: 25, width: 69, height: 128 });
    }

    #[test]
    fn test_measure_helvetica_large_cells() {
        let m = measure_helvetica(i32::MAX);
        assert!(m.width > 0);
        assert_eq!(m.height, i32::MAX);
    }

    #[test]
    fn test_document() {
        let out = svg("5901234123457", 240, 120, 10).unwrap();
        assert!(out.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="240" height="120""#));
        assert!(out.ends_with("</svg>\n"));
        assert_eq!(out.matches("<rect").count(), 1 + 30);
        assert_eq!(out.matches("<text").count(), 13);

        // 1100 sub-units wide: scale 10, margin 5, font 25pt
        assert!(out.contains(r#"<rect x="25" y="10" width="2" height="87.2"/>"#));
        assert!(out.contains(r#"<text x="11" y="104.8" font-size="25">5</text>"#));
    }

    #[test]
    fn test_too_small() {
        // 21 user units are 105 sub-units, narrower than the symbol
        assert!(matches!(svg("5901234123457", 21, 50, 0), Err(DrawError::Layout(Error::AreaTooSmall))));
        assert!(svg("5901234123457", 22, 50, 0).is_ok());
        assert!(matches!(svg("5901234123457", 240, 120, 200), Err(DrawError::Layout(Error::AreaTooSmall))));
        assert!(matches!(svg("5901234123457", 240, 3, 0), Err(DrawError::Layout(Error::AreaTooSmall))));
    }

    #[test]
    fn test_large_documents() {
        let out = svg("5901234123457", 5_000_000, 5_000_000, 0).unwrap();
        assert_eq!(out.matches("<rect").count(), 1 + 30);

        let out = svg("5901234123457", u32::MAX, u32::MAX, 0).unwrap();
        assert_eq!(out.matches("<text").count(), 13);
    }

    struct Sink;

    impl Write for Sink {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Ok(())
        }
    }

    const PADDED: SvgSurface<Sink> = SvgSurface::new(Sink, 240, 120).set_padding(10);

    #[test]
    fn test_const_builder() {
        assert_eq!(PADDED.padding(), 10);
        let mut surface = PADDED;
        assert!(Ean13::parse("5901234123457").unwrap().render(&mut surface).is_ok());
    }

    #[test]
    fn test_nothing_written_on_failure() {
        let mut surface = SvgSurface::new(String::new(), 20, 50);
        let code = Ean13::parse("5901234123457").unwrap();
        assert!(code.render(&mut surface).is_err());
        assert!(surface.into_inner().is_empty());
    }
}
