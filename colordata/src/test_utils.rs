use std::ops::Range;

use byte_writer::ByteWriter;

use crate::{
    constants::{COLOR_RECORD_SIZE, PAL_NAME_SIZE},
    types::{ColorRecord, CycleSet},
};

/// Record whose bytes say which cset it was written as.
pub fn tagged_record(index: usize) -> ColorRecord {
    let mut record = [0u8; COLOR_RECORD_SIZE];

    record[0] = (index % 251) as u8 + 1;
    record[1] = (index / 251) as u8 + 1;
    record[COLOR_RECORD_SIZE - 1] = 0xcc;

    record
}

/// Writes a palette section piece by piece.
pub struct SectionBuilder {
    writer: ByteWriter,
    length_offset: Option<usize>,
}

impl SectionBuilder {
    pub fn new() -> Self {
        Self {
            writer: ByteWriter::new(),
            length_offset: None,
        }
    }

    /// The length is filled in by `build`.
    pub fn header(mut self, sub_version: u16) -> Self {
        self.writer.append_u16(sub_version);
        self.writer.append_u16(0);
        self.length_offset = Some(self.writer.get_offset());
        self.writer.append_u32(0);
        self
    }

    /// One tagged record per cset index in `csets`.
    pub fn colors(mut self, csets: Range<usize>) -> Self {
        csets.for_each(|index| self.writer.append_u8_slice(&tagged_record(index)));
        self
    }

    /// `count` name records, `Level N` for every level listed in `named`, empty otherwise.
    pub fn names(mut self, count: usize, named: &[usize]) -> Self {
        for level in 0..count {
            let name = if named.contains(&level) {
                format!("Level {level}")
            } else {
                String::new()
            };

            self.writer.append_fixed_string(&name, PAL_NAME_SIZE);
        }

        self
    }

    pub fn cycles(mut self, sets: &[CycleSet]) -> Self {
        self.writer.append_u16(sets.len() as u16);

        for set in sets {
            set.iter().for_each(|cycle| self.writer.append_u8(cycle.first));
            set.iter().for_each(|cycle| self.writer.append_u8(cycle.count));
            set.iter().for_each(|cycle| self.writer.append_u8(cycle.speed));
        }

        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.writer.append_u8_slice(bytes);
        self
    }

    pub fn build(mut self) -> Vec<u8> {
        if let Some(offset) = self.length_offset {
            let length = self.writer.get_offset() - offset - 4;
            self.writer.replace_with_u32(offset, length as u32);
        }

        self.writer.data
    }
}
