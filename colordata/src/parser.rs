use nom::{
    bytes::complete::take,
    combinator::{map, verify},
    multi::fill,
    number::complete::{le_u16, le_u32, le_u8},
    IResult as _IResult, Parser,
};

use crate::{
    constants::{COLOR_RECORD_SIZE, CYCLE_INDICES, PAL_NAME_SIZE},
    error::ColorDataError,
    types::{ColorCycle, ColorRecord, CycleSet, CycleTable, PaletteName, SectionHeader},
};

pub type IResult<'a, T> = _IResult<&'a [u8], T>;

/// Any nom failure in this section is the same failure.
pub trait OrInvalid<'a, T> {
    fn or_invalid(self, field: &'static str) -> Result<(&'a [u8], T), ColorDataError>;
}

impl<'a, T> OrInvalid<'a, T> for IResult<'a, T> {
    fn or_invalid(self, field: &'static str) -> Result<(&'a [u8], T), ColorDataError> {
        self.map_err(|_| ColorDataError::InvalidFormat { field })
    }
}

pub fn parse_section_header(i: &'_ [u8]) -> IResult<'_, SectionHeader> {
    map(
        (le_u16, le_u16, le_u32),
        |(sub_version, reserved, length)| SectionHeader {
            sub_version,
            reserved,
            length,
        },
    )
    .parse(i)
}

pub fn parse_color_record(i: &'_ [u8]) -> IResult<'_, ColorRecord> {
    map(take(COLOR_RECORD_SIZE), |bytes: &[u8]| {
        let mut record = [0u8; COLOR_RECORD_SIZE];
        record.copy_from_slice(bytes);
        record
    })
    .parse(i)
}

/// Reads exactly `records.len()` csets into `records`.
pub fn parse_color_records<'a>(i: &'a [u8], records: &mut [ColorRecord]) -> IResult<'a, ()> {
    fill(parse_color_record, records).parse(i)
}

pub fn parse_palette_name(i: &'_ [u8]) -> IResult<'_, PaletteName> {
    map(take(PAL_NAME_SIZE), |bytes: &[u8]| {
        let mut name = [0u8; PAL_NAME_SIZE];
        name.copy_from_slice(bytes);
        PaletteName(name)
    })
    .parse(i)
}

pub fn parse_palette_names<'a>(i: &'a [u8], names: &mut [PaletteName]) -> IResult<'a, ()> {
    fill(parse_palette_name, names).parse(i)
}

fn parse_triple(i: &'_ [u8]) -> IResult<'_, [u8; 3]> {
    map((le_u8, le_u8, le_u8), |(a, b, c)| [a, b, c]).parse(i)
}

/// Three `first`, then three `count`, then three `speed`.
pub fn parse_cycle_set(i: &'_ [u8]) -> IResult<'_, CycleSet> {
    map(
        (parse_triple, parse_triple, parse_triple),
        |(first, count, speed)| {
            [0, 1, 2].map(|slot| ColorCycle {
                first: first[slot],
                count: count[slot],
                speed: speed[slot],
            })
        },
    )
    .parse(i)
}

/// Cycle index count, rejecting anything the table cannot hold.
pub fn parse_cycle_count(i: &'_ [u8]) -> IResult<'_, u16> {
    verify(le_u16, |count: &u16| *count as usize <= CYCLE_INDICES).parse(i)
}

/// Reads `count` cycle sets into the front of `table`. The rest is left alone.
pub fn parse_cycle_sets<'a>(
    i: &'a [u8],
    table: &mut CycleTable,
    count: usize,
) -> IResult<'a, ()> {
    fill(parse_cycle_set, &mut table.0[..count]).parse(i)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn section_header() {
        let bytes = [4, 0, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12, 0xff];
        let (rest, header) = parse_section_header(&bytes).unwrap();

        assert_eq!(rest, &[0xff]);
        assert_eq!(header.sub_version, 4);
        assert_eq!(header.reserved, 0x1234);
        assert_eq!(header.length, 0x12345678);
    }

    #[test]
    fn short_section_header() {
        // length is missing a byte
        let bytes = [4, 0, 0, 0, 1, 2, 3];

        assert!(parse_section_header(&bytes).is_err());
        assert!(parse_section_header(&bytes)
            .or_invalid("section header")
            .unwrap_err()
            .is_invalid_format());
    }

    #[test]
    fn cycle_set_is_field_major() {
        let bytes = [1, 2, 3, 10, 20, 30, 7, 8, 9];
        let (rest, set) = parse_cycle_set(&bytes).unwrap();

        assert!(rest.is_empty());
        assert_eq!(
            set,
            [
                ColorCycle {
                    first: 1,
                    count: 10,
                    speed: 7
                },
                ColorCycle {
                    first: 2,
                    count: 20,
                    speed: 8
                },
                ColorCycle {
                    first: 3,
                    count: 30,
                    speed: 9
                },
            ]
        );
    }

    #[test]
    fn cycle_count_bound() {
        assert_eq!(parse_cycle_count(&[0, 1]).unwrap().1, 256);
        assert!(parse_cycle_count(&[1, 1]).is_err());
    }

    #[test]
    fn palette_name() {
        let mut bytes = [0u8; PAL_NAME_SIZE + 1];
        bytes[..5].copy_from_slice(b"Caves");
        bytes[PAL_NAME_SIZE] = 0xaa;

        let (rest, name) = parse_palette_name(&bytes).unwrap();

        assert_eq!(rest, &[0xaa]);
        assert_eq!(name.get_string(), "Caves");
    }

    #[test]
    fn color_records_need_every_byte() {
        let bytes = vec![7u8; COLOR_RECORD_SIZE * 2 - 1];
        let mut records = [[0u8; COLOR_RECORD_SIZE]; 2];

        assert!(parse_color_records(&bytes, &mut records).is_err());
        assert_eq!(records[0], [7u8; COLOR_RECORD_SIZE]);
    }
}
