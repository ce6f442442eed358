use crate::bits::BitCursor;

/// Pulls raw samples out of reconstructed row data. Sub-byte samples are
/// packed most significant bit first, 16-bit samples are big endian.
pub(crate) struct SampleReader<'a> {
    data: &'a [u8],
    cursor: BitCursor,
    bit_depth: u8,
}

impl<'a> SampleReader<'a> {
    pub(crate) fn new(data: &'a [u8], bit_depth: u8) -> Self {
        Self {
            data,
            cursor: BitCursor::new(),
            bit_depth,
        }
    }

    /// Reads the next sample, widened to u16 without rescaling.
    pub(crate) fn read_sample(&mut self) -> u16 {
        let sample = if self.bit_depth == 16 {
            let byte = self.cursor.byte();
            u16::from_be_bytes([self.data[byte], self.data[byte + 1]])
        } else {
            let shift = 8 - self.cursor.bit() - self.bit_depth;
            let mask = ((1u16 << self.bit_depth) - 1) as u8;
            ((self.data[self.cursor.byte()] >> shift) & mask) as u16
        };
        self.cursor = self.cursor.advanced(self.bit_depth as usize);
        sample
    }

    /// Skips any padding bits left in the current byte. Rows always start
    /// on a byte boundary.
    pub(crate) fn align(&mut self) {
        self.cursor = self.cursor.aligned();
    }
}
