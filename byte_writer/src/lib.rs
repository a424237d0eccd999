//! Little-endian byte sink for building quest sections by hand.

pub struct ByteWriter {
    pub data: Vec<u8>,
    offset: usize,
}

impl Default for ByteWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteWriter {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            offset: 0,
        }
    }

    fn offset(&mut self, offset: usize) {
        self.offset += offset;
    }

    pub fn get_offset(&self) -> usize {
        self.offset
    }

    pub fn append_u8(&mut self, i: u8) {
        self.data.push(i);
        self.offset(1);
    }

    pub fn append_u16(&mut self, i: u16) {
        self.data.extend(i.to_le_bytes());
        self.offset(2);
    }

    pub fn append_u32(&mut self, i: u32) {
        self.data.extend(i.to_le_bytes());
        self.offset(4);
    }

    pub fn append_u8_slice(&mut self, i: &[u8]) {
        self.data.extend_from_slice(i);
        self.offset(i.len());
    }

    pub fn append_zeroes(&mut self, length: usize) {
        self.data.resize(self.data.len() + length, 0);
        self.offset(length);
    }

    /// Writes `s` into a field of exactly `width` bytes, cut short or NUL padded.
    pub fn append_fixed_string(&mut self, s: &str, width: usize) {
        let bytes = s.as_bytes();
        let length = bytes.len().min(width);

        self.append_u8_slice(&bytes[..length]);
        self.append_zeroes(width - length);
    }

    pub fn replace(&mut self, start: usize, length: usize, slice: &[u8]) {
        self.data[start..(length + start)].copy_from_slice(&slice[..length]);
    }

    /// Patches a length field once the data after it is known.
    pub fn replace_with_u32(&mut self, start: usize, val: u32) {
        let bytes = val.to_le_bytes();
        self.replace(start, 4, &bytes);
    }

    /// Drops everything from `length` on, for building truncated input.
    pub fn truncate(&mut self, length: usize) {
        self.data.truncate(length);
        self.offset = self.offset.min(length);
    }
}
