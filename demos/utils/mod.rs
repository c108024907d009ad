#![allow(dead_code)]

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

const WHITE: &str = "\x1B[38;2;255;255;255m█";
const BLACK: &str = "\x1B[38;2;0;0;0m█";
const PADDING: usize = 4;

/// Prints rows of modules with a white quiet zone around them.
pub fn display_bits(width: usize, bits: &[bool]) {
    let quiet_zone_v = str::repeat(WHITE, width + PADDING * 2);
    let quiet_zone_h = &quiet_zone_v[..PADDING * WHITE.len()];

    println!("{quiet_zone_v}\n{quiet_zone_v}");
    for chunk in bits.chunks(width) {
        print!("{quiet_zone_h}");
        for &on in chunk { print!("{}", if on { BLACK } else { WHITE }); }
        println!("{quiet_zone_h}");
    }
    println!("{quiet_zone_v}\n{quiet_zone_v}\x1B[0m");
}

/// A monochrome frame buffer that can be printed to the terminal.
pub struct Console {
    width: u32,
    height: u32,
    pixels: Vec<bool>,
}

impl Console {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, pixels: vec![false; (width * height) as usize] }
    }

    pub fn show(&self) {
        display_bits(self.width as usize, &self.pixels);
    }
}

impl OriginDimensions for Console {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Console {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(p, color) in pixels {
            if bounds.contains(p) {
                self.pixels[p.y as usize * self.width as usize + p.x as usize] = color.is_on();
            }
        }
        Ok(())
    }
}
