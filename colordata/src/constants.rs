//! Compatibility table of the palette section.
//!
//! None of these can be derived from anything else. They are whatever the quest
//! format shipped with and every decoder has to agree on them.

/// Quest versions above this one carry a section header and color cycles.
pub const SECTION_HEADER_VERSION: u16 = 0x192;
/// At `SECTION_HEADER_VERSION`, builds from this one on store the extended color layout.
pub const EXTENDED_COLORS_BUILD: u16 = 73;
/// At `SECTION_HEADER_VERSION`, builds from this one on store palette names.
pub const PALETTE_NAMES_BUILD: u16 = 76;
/// Section sub-version from which all `MAX_LEVELS` names are stored.
pub const FULL_NAMES_SUB_VERSION: u16 = 3;
/// Section sub-version from which the newest color slots are stored.
pub const NEWER_COLORS_SUB_VERSION: u16 = 4;

/// One cset: 16 colors of 3 bytes.
pub const COLOR_RECORD_SIZE: usize = 16 * 3;
pub const PAL_NAME_SIZE: usize = 17;

// csets per palette group
pub const MAIN_PALETTE_CSETS: usize = 15;
pub const LEVEL_PALETTE_CSETS: usize = 13;
pub const SPRITE_PALETTE_CSETS: usize = 30;

pub const LEVEL_PALETTE_OFFSET: usize = MAIN_PALETTE_CSETS;

// first sprite cset of each layout
pub const OLD_PO_SPRITE: usize = 210;
pub const NEW_PO_SPRITE: usize = 3343;
pub const NEWER_PO_SPRITE: usize = 6671;

// record count of each layout
pub const OLD_PD_TOTAL: usize = OLD_PO_SPRITE + SPRITE_PALETTE_CSETS;
pub const NEW_PD_TOTAL: usize = NEW_PO_SPRITE + SPRITE_PALETTE_CSETS;
pub const NEWER_PD_TOTAL: usize = NEWER_PO_SPRITE + SPRITE_PALETTE_CSETS;

pub const OLD_MAX_LEVELS: usize = 256;
pub const MAX_LEVELS: usize = 512;

pub const CYCLE_INDICES: usize = 256;
pub const CYCLES_PER_INDEX: usize = 3;

// the two later sprite offsets are exactly one level table further along
const _: () =
    assert!(NEW_PO_SPRITE == LEVEL_PALETTE_OFFSET + LEVEL_PALETTE_CSETS * OLD_MAX_LEVELS);
const _: () =
    assert!(NEWER_PO_SPRITE == LEVEL_PALETTE_OFFSET + LEVEL_PALETTE_CSETS * MAX_LEVELS);
