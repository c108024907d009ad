use core::iter;

/// A run of black (`1`) and white (`0`) modules, most significant bit
/// first. Each module is one logical unit wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modules(u16);

impl Modules {
    pub const fn new(bits: u16, count: u8) -> Self {
        assert!(count > 0 && count <= 8, "a pattern spans 1 to 8 modules");
        assert!(bits >> count == 0, "bits do not fit in count modules");

        Self((bits << 8) | count as u16)
    }

    /// Width of the pattern in modules.
    #[inline]
    pub const fn size(&self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    #[inline]
    pub const fn bits(&self) -> u16 {
        self.0 >> 8
    }

    /// Whether the module at `index` (0 is leftmost) is black. Modules
    /// past the end of the pattern are white.
    #[inline]
    pub const fn is_black(&self, index: u8) -> bool {
        index < self.size() && (self.bits() >> (self.size() - 1 - index)) & 1 != 0
    }
}

impl iter::IntoIterator for Modules {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        Bits { value: self.bits(), count: self.size() }
    }
}

#[derive(Debug, Clone)]
pub struct Bits {
    value: u16,
    count: u8,
}

impl iter::Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.count > 0 {
            self.count -= 1;
            Some((self.value >> self.count) & 1 != 0)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.count as usize;
        (count, Some(count))
    }
}

impl iter::DoubleEndedIterator for Bits {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.count > 0 {
            let bit = (self.value & 1) != 0;
            self.value >>= 1;
            self.count -= 1;
            Some(bit)
        } else {
            None
        }
    }
}

impl iter::ExactSizeIterator for Bits {}
impl iter::FusedIterator for Bits {}
