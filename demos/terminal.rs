use ean13::*;

mod utils;
use utils::display_bits;

const HEIGHT: usize = 12;

fn main() {
    let input = std::env::args().nth(1).unwrap_or_else(|| "590123412345".into());
    let code = match Ean13::parse(&input) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{input}: {e}");
            std::process::exit(1);
        }
    };

    let mut row = [false; MODULE_COUNT];
    code.symbol().fill_bits(&mut row);
    display_bits(MODULE_COUNT, &row.repeat(HEIGHT));
    println!("{code}");
}
