/// Position of the next bit to render: a byte offset into the file and a
/// bit offset inside that byte, counted from the least significant bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitCursor {
    pub byte_index: usize,
    pub bit_index: u8,
}

impl BitCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the bit under the cursor. `bytes` must be non-empty and
    /// `byte_index` already wrapped to its length.
    pub fn read(&self, bytes: &[u8]) -> bool {
        (bytes[self.byte_index] >> self.bit_index) & 1 == 1
    }

    /// Steps one bit forward, wrapping at the end of a `size`-byte file.
    pub fn advance(&mut self, size: usize) {
        self.bit_index += 1;
        if self.bit_index == 8 {
            self.bit_index = 0;
            self.byte_index += 1;
            if self.byte_index == size {
                self.byte_index = 0;
            }
        }
    }
}
