use ean13::*;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

mod utils;
use utils::Console;

const W: u32 = 120;
const H: u32 = 40;

fn main() {
    let code: Ean13 = "4006381333931".parse().unwrap();

    let mut console = Console::new(W, H);
    let bound = Rectangle::new(Point::zero(), Size::new(W, H));
    code.render_raster(&mut console, bound, 2).unwrap();
    console.show();
}
