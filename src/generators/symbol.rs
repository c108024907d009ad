use core::iter;

use crate::Ean13;
use crate::generators::tables::{
    Parity, Pattern, BAR_TABLE, CENTER, DIGIT_SIZE, GUARD, PARITY_TABLE,
};

/// Number of modules between the outer edges of the two guard markers.
pub const MODULE_COUNT: usize = 95;

/// One step of the left-to-right layout of a symbol. `x` is the logical
/// position of the element's left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// Black stripes of a digit or a marker. `long` bars extend into the
    /// text area.
    Bars { x: i32, pattern: &'static Pattern, long: bool },
    /// Human readable glyph occupying the digit cell at `x`.
    Digit { x: i32, digit: u8 },
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Lead,
    StartGuard,
    LeftBars(u8),
    LeftDigit(u8),
    Center,
    RightBars(u8),
    RightDigit(u8),
    EndGuard,
    None,
}

/// The EAN-13 symbology of one code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    digits: [u8; 13],
}

impl Symbol {
    pub const fn new(code: Ean13) -> Self {
        Self { digits: code.digits() }
    }

    /// Pattern encoding the digit at `position` (1 to 12).
    fn pattern(&self, position: u8) -> &'static Pattern {
        let digit = self.digits[position as usize] as usize;
        let parity = if position <= 6 {
            PARITY_TABLE[self.digits[0] as usize][position as usize - 1]
        } else {
            Parity::R
        };
        &BAR_TABLE[digit][parity as usize]
    }

    /// Walks the elements in strict left-to-right order.
    pub fn elements(&self) -> Elements {
        Elements { symbol: *self, next: Slot::Lead, cursor: 0 }
    }

    /// Yields the black (`true`) and white modules of the bars, from the
    /// left guard to the right guard.
    pub fn bits(&self) -> impl Iterator<Item = bool> {
        self.elements()
            .filter_map(|e| match e {
                Element::Bars { pattern, .. } => Some(pattern.modules),
                Element::Digit { .. } => None,
            })
            .flatten()
    }

    pub fn fill<P: Clone>(&self, target: &mut [P], on: &P, off: &P) {
        for (slot, bit) in target.iter_mut().zip(self.bits()) {
            *slot = if bit { on.clone() } else { off.clone() };
        }
    }

    pub fn fill_bits(&self, target: &mut [bool]) {
        self.fill(target, &true, &false);
    }
}

#[derive(Debug, Clone)]
pub struct Elements {
    symbol: Symbol,
    next: Slot,
    cursor: i32,
}

impl Elements {
    fn bars(&mut self, pattern: &'static Pattern, long: bool) -> Element {
        let x = self.cursor;
        self.cursor += pattern.width();
        Element::Bars { x, pattern, long }
    }

    /// Glyph of a digit that has already advanced the cursor.
    fn digit(&self, position: u8) -> Element {
        Element::Digit { x: self.cursor - DIGIT_SIZE, digit: self.symbol.digits[position as usize] }
    }
}

impl iter::Iterator for Elements {
    type Item = Element;

    fn next(&mut self) -> Option<Self::Item> {
        let (item, next) = match self.next {
            Slot::Lead => {
                self.cursor += DIGIT_SIZE;
                (self.digit(0), Slot::StartGuard)
            }
            Slot::StartGuard => (self.bars(&GUARD, true), Slot::LeftBars(1)),
            Slot::LeftBars(i) => (self.bars(self.symbol.pattern(i), false), Slot::LeftDigit(i)),
            Slot::LeftDigit(i) => {
                let next = if i == 6 { Slot::Center } else { Slot::LeftBars(i + 1) };
                (self.digit(i), next)
            }
            Slot::Center => (self.bars(&CENTER, true), Slot::RightBars(7)),
            Slot::RightBars(i) => (self.bars(self.symbol.pattern(i), false), Slot::RightDigit(i)),
            Slot::RightDigit(i) => {
                let next = if i == 12 { Slot::EndGuard } else { Slot::RightBars(i + 1) };
                (self.digit(i), next)
            }
            Slot::EndGuard => (self.bars(&GUARD, true), Slot::None),
            Slot::None => return None,
        };

        self.next = next;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = match self.next {
            Slot::Lead => 28,
            Slot::StartGuard => 27,
            Slot::LeftBars(i) => 26 - 2 * (i as usize - 1),
            Slot::LeftDigit(i) => 25 - 2 * (i as usize - 1),
            Slot::Center => 14,
            Slot::RightBars(i) => 13 - 2 * (i as usize - 7),
            Slot::RightDigit(i) => 12 - 2 * (i as usize - 7),
            Slot::EndGuard => 1,
            Slot::None => 0,
        };
        (count, Some(count))
    }
}

impl iter::ExactSizeIterator for Elements {}
impl iter::FusedIterator for Elements {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::tables::{CENTER_SIZE, GUARD_SIZE};

    fn symbol(code: &str) -> Symbol {
        Symbol::new(Ean13::parse(code).unwrap())
    }

    #[test]
    fn test_element_counts() {
        let elements = symbol("5901234123457").elements();
        assert_eq!(elements.len(), 28);

        let (mut digits, mut long, mut short) = (0, 0, 0);
        for e in elements {
            match e {
                Element::Digit { .. } => digits += 1,
                Element::Bars { long: true, .. } => long += 1,
                Element::Bars { long: false, .. } => short += 1,
            }
        }
        assert_eq!((digits, long, short), (13, 3, 12));
    }

    #[test]
    fn test_size_hint_is_exact() {
        let mut elements = symbol("4006381333931").elements();
        for remaining in (0..=28).rev() {
            assert_eq!(elements.len(), remaining);
            elements.next();
        }
        assert_eq!(elements.next(), None);
    }

    #[test]
    fn test_cursor_positions() {
        let xs: [i32; 28] = {
            let mut xs = [0; 28];
            for (slot, e) in xs.iter_mut().zip(symbol("5901234123457").elements()) {
                *slot = match e {
                    Element::Bars { x, .. } | Element::Digit { x, .. } => x,
                };
            }
            xs
        };
        assert!(xs.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(xs[0], 0);
        assert_eq!(xs[1], DIGIT_SIZE);
        assert_eq!(xs[14], DIGIT_SIZE + GUARD_SIZE + 6 * DIGIT_SIZE);
        assert_eq!(xs[27], DIGIT_SIZE + GUARD_SIZE + 12 * DIGIT_SIZE + CENTER_SIZE);
    }

    #[test]
    fn test_parity_follows_leading_digit() {
        // leading 5 selects LGGLLG
        let s = symbol("5901234123457");
        let expected = [
            &BAR_TABLE[9][0], &BAR_TABLE[0][1], &BAR_TABLE[1][1],
            &BAR_TABLE[2][0], &BAR_TABLE[3][0], &BAR_TABLE[4][1],
        ];
        for (i, pattern) in expected.into_iter().enumerate() {
            assert_eq!(s.pattern(i as u8 + 1), pattern);
        }
        assert_eq!(s.pattern(12), &BAR_TABLE[7][2]);
    }

    #[test]
    fn test_bits() {
        let s = symbol("5901234123457");
        assert_eq!(s.bits().count(), MODULE_COUNT);

        let mut bits = [false; MODULE_COUNT];
        s.fill_bits(&mut bits);
        assert_eq!(&bits[..3], &[true, false, true]);
        assert_eq!(&bits[45..50], &[false, true, false, true, false]);
        assert_eq!(&bits[92..], &[true, false, true]);
        // 9 in L: 0001011
        assert_eq!(&bits[3..10], &[false, false, false, true, false, true, true]);
    }
}
