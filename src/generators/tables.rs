//! Static EAN-13 tables. Stripe offsets are decoded from the module
//! patterns at compile time.

use crate::generators::modules::Modules;

/// Width of a digit in modules.
pub const DIGIT_SIZE: i32 = 7;
/// Width of the left and right guard markers in modules.
pub const GUARD_SIZE: i32 = 3;
/// Width of the center marker in modules.
pub const CENTER_SIZE: i32 = 5;

/// Index of a digit encoding in [BAR_TABLE].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Parity {
    L = 0,
    G = 1,
    R = 2,
}

/// A black stripe as `(start, end)` offsets in modules, end exclusive.
pub type Stripe = (u8, u8);

/// A module pattern together with its black stripes. Every EAN-13 digit
/// and marker has exactly two black stripes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub modules: Modules,
    pub stripes: [Stripe; 2],
}

impl Pattern {
    pub const fn new(bits: u16, count: u8) -> Self {
        let modules = Modules::new(bits, count);
        let mut stripes = [(0, 0); 2];
        let mut found = 0;
        let mut start = 0;
        let mut i = 0;
        while i <= count {
            let black = i < count && modules.is_black(i);
            let was_black = i > 0 && modules.is_black(i - 1);
            if black && !was_black {
                start = i;
            } else if !black && was_black {
                assert!(found < 2, "pattern has more than two stripes");
                stripes[found] = (start, i);
                found += 1;
            }
            i += 1;
        }
        assert!(found == 2, "pattern has fewer than two stripes");

        Self { modules, stripes }
    }

    #[inline]
    pub const fn width(&self) -> i32 {
        self.modules.size() as i32
    }
}

pub const GUARD: Pattern = Pattern::new(0b101, 3);
pub const CENTER: Pattern = Pattern::new(0b01010, 5);

/// L, G and R encodings of every digit, indexed by [Parity].
pub static BAR_TABLE: [[Pattern; 3]; 10] = [
    [Pattern::new(0b0001101, 7), Pattern::new(0b0100111, 7), Pattern::new(0b1110010, 7)],
    [Pattern::new(0b0011001, 7), Pattern::new(0b0110011, 7), Pattern::new(0b1100110, 7)],
    [Pattern::new(0b0010011, 7), Pattern::new(0b0011011, 7), Pattern::new(0b1101100, 7)],
    [Pattern::new(0b0111101, 7), Pattern::new(0b0100001, 7), Pattern::new(0b1000010, 7)],
    [Pattern::new(0b0100011, 7), Pattern::new(0b0011101, 7), Pattern::new(0b1011100, 7)],
    [Pattern::new(0b0110001, 7), Pattern::new(0b0111001, 7), Pattern::new(0b1001110, 7)],
    [Pattern::new(0b0101111, 7), Pattern::new(0b0000101, 7), Pattern::new(0b1010000, 7)],
    [Pattern::new(0b0111011, 7), Pattern::new(0b0010001, 7), Pattern::new(0b1000100, 7)],
    [Pattern::new(0b0110111, 7), Pattern::new(0b0001001, 7), Pattern::new(0b1001000, 7)],
    [Pattern::new(0b0001011, 7), Pattern::new(0b0010111, 7), Pattern::new(0b1110100, 7)],
];

/// Left-hand parity of digits 1 to 6, selected by the leading digit.
pub static PARITY_TABLE: [[Parity; 6]; 10] = {
    use Parity::{G, L};
    [
        [L, L, L, L, L, L],
        [L, L, G, L, G, G],
        [L, L, G, G, L, G],
        [L, L, G, G, G, L],
        [L, G, L, L, G, G],
        [L, G, G, L, L, G],
        [L, G, G, G, L, L],
        [L, G, L, G, L, G],
        [L, G, L, G, G, L],
        [L, G, G, L, G, L],
    ]
};
