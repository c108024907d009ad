use ean13::*;

const WIDTH: u32 = 240;
const HEIGHT: u32 = 120;
const PADDING: u32 = 10;

fn main() {
    let input = std::env::args().nth(1).unwrap_or_else(|| "5901234123457".into());
    let code: Ean13 = match input.parse() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{input}: {e}");
            std::process::exit(1);
        }
    };

    let mut svg = String::new();
    if let Err(e) = code.render_svg(&mut svg, WIDTH, HEIGHT, PADDING) {
        eprintln!("cannot render {code}: {e}");
        std::process::exit(1);
    }
    print!("{svg}");
}
