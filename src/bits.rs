// A bit-addressed position over a byte buffer. The cursor is a plain
// value; advancing returns a new cursor instead of mutating shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct BitCursor {
    bits: usize,
}

impl BitCursor {
    pub(crate) const fn new() -> Self {
        Self { bits: 0 }
    }

    // Index of the byte the cursor currently sits in.
    pub(crate) const fn byte(self) -> usize {
        self.bits / 8
    }

    // Offset within that byte, 0 (most significant side) through 7.
    pub(crate) const fn bit(self) -> u8 {
        (self.bits % 8) as u8
    }

    #[must_use]
    pub(crate) const fn advanced(self, bits: usize) -> Self {
        Self { bits: self.bits + bits }
    }

    // Rounds forward to the next byte boundary; identity when already
    // aligned.
    #[must_use]
    pub(crate) const fn aligned(self) -> Self {
        Self {
            bits: (self.bits + 7) & !7,
        }
    }
}
