use std::{
    fmt::{self, Display},
    str::from_utf8,
};

use crate::{
    constants::{
        CYCLES_PER_INDEX, CYCLE_INDICES, COLOR_RECORD_SIZE, LEVEL_PALETTE_CSETS,
        LEVEL_PALETTE_OFFSET, MAIN_PALETTE_CSETS, MAX_LEVELS, NEWER_PD_TOTAL, NEWER_PO_SPRITE,
        PAL_NAME_SIZE, SPRITE_PALETTE_CSETS,
    },
    layout::SectionLayout,
};

/// Quest format version and build number, as stored in the quest file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatVersion {
    pub version: u16,
    pub build: u16,
}

impl FormatVersion {
    pub fn new(version: u16, build: u16) -> Self {
        Self { version, build }
    }
}

impl Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x} build {}", self.version, self.build)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionHeader {
    pub sub_version: u16,
    // never used by the decoder, kept for inspection
    pub reserved: u16,
    pub length: u32,
}

/// One cset. The bytes are copied around, never interpreted.
pub type ColorRecord = [u8; COLOR_RECORD_SIZE];

/// Flat table of every cset the newest layout knows about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable(pub(crate) Vec<ColorRecord>);

impl ColorTable {
    pub fn new() -> Self {
        Self(vec![[0u8; COLOR_RECORD_SIZE]; NEWER_PD_TOTAL])
    }

    pub fn get(&self, index: usize) -> Option<&ColorRecord> {
        self.0.get(index)
    }

    pub fn records(&self) -> &[ColorRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_zeroed(&self) -> bool {
        self.0.iter().all(|record| record.iter().all(|byte| *byte == 0))
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct PaletteName(pub [u8; PAL_NAME_SIZE]);

impl fmt::Debug for PaletteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(&self.get_string()).field(&self.0).finish()
    }
}

impl PaletteName {
    /// Printable characters up to the first NUL.
    pub fn get_string(&self) -> String {
        let res: Vec<u8> = self
            .0
            .iter()
            .take_while(|c| **c >= 32 && **c < 127)
            .copied()
            .collect();

        // only ascii made it through
        from_utf8(&res).map(str::to_string).unwrap_or_default()
    }

    /// Truncates to `PAL_NAME_SIZE - 1` bytes so the name stays NUL terminated.
    pub fn from_string(s: impl AsRef<str>) -> Self {
        let mut res = [0u8; PAL_NAME_SIZE];
        let bytes = s.as_ref().as_bytes();
        let length = bytes.len().min(PAL_NAME_SIZE - 1);

        res[..length].copy_from_slice(&bytes[..length]);

        Self(res)
    }

    pub fn get_bytes(&self) -> &[u8; PAL_NAME_SIZE] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0[0] == 0
    }
}

impl Display for PaletteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_string())
    }
}

/// One name per level palette, always `MAX_LEVELS` long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteNames(pub(crate) Vec<PaletteName>);

impl PaletteNames {
    pub fn new() -> Self {
        Self(vec![PaletteName::default(); MAX_LEVELS])
    }

    /// Names for quests that never stored any.
    pub fn reset(&mut self) {
        self.0.clear();
        self.0.resize(MAX_LEVELS, PaletteName::default());
    }

    pub fn get(&self, level: usize) -> Option<&PaletteName> {
        self.0.get(level)
    }

    pub fn names(&self) -> &[PaletteName] {
        &self.0
    }

    /// Levels with a non-empty name.
    pub fn named(&self) -> impl Iterator<Item = (usize, &PaletteName)> {
        self.0.iter().enumerate().filter(|(_, name)| !name.is_empty())
    }
}

impl Default for PaletteNames {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorCycle {
    /// First color index of the cycle.
    pub first: u8,
    pub count: u8,
    pub speed: u8,
}

impl ColorCycle {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

pub type CycleSet = [ColorCycle; CYCLES_PER_INDEX];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleTable(pub [CycleSet; CYCLE_INDICES]);

impl CycleTable {
    pub fn new() -> Self {
        Self([[ColorCycle::default(); CYCLES_PER_INDEX]; CYCLE_INDICES])
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn get(&self, index: usize) -> Option<&CycleSet> {
        self.0.get(index)
    }

    pub fn is_zeroed(&self) -> bool {
        self.0.iter().flatten().all(ColorCycle::is_empty)
    }

    /// Indices where at least one of the three cycles is set.
    pub fn populated(&self) -> impl Iterator<Item = (usize, &CycleSet)> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, set)| set.iter().any(|cycle| !cycle.is_empty()))
    }
}

impl Default for CycleTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Quest-wide miscellaneous data. Only the color cycles live in this section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MiscData {
    pub cycles: CycleTable,
}

/// Caller-owned palette storage that a committing decode writes into.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaletteStore {
    pub colors: ColorTable,
    pub names: PaletteNames,
}

impl PaletteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn main_palette(&self) -> &[ColorRecord] {
        &self.colors.0[..MAIN_PALETTE_CSETS]
    }

    pub fn level_palette(&self, level: usize) -> Option<&[ColorRecord]> {
        if level >= MAX_LEVELS {
            return None;
        }

        let start = LEVEL_PALETTE_OFFSET + level * LEVEL_PALETTE_CSETS;

        Some(&self.colors.0[start..start + LEVEL_PALETTE_CSETS])
    }

    pub fn sprite_palette(&self) -> &[ColorRecord] {
        &self.colors.0[NEWER_PO_SPRITE..NEWER_PO_SPRITE + SPRITE_PALETTE_CSETS]
    }
}

/// Everything one palette section decodes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorData {
    /// `None` for quests too old to carry one.
    pub header: Option<SectionHeader>,
    pub layout: SectionLayout,
    pub store: PaletteStore,
    pub misc: MiscData,
}
