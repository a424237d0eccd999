//! Which parts of the section exist for a given quest version.
//!
//! Each table is walked top-down and the first rule that applies wins. Quests older than every
//! rule get the oldest layout.

use crate::{
    constants::{
        EXTENDED_COLORS_BUILD, FULL_NAMES_SUB_VERSION, MAX_LEVELS, NEWER_COLORS_SUB_VERSION,
        OLD_MAX_LEVELS, PALETTE_NAMES_BUILD, SECTION_HEADER_VERSION,
    },
    types::FormatVersion,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLayout {
    /// Only the old table is stored. Sprite csets are moved up and gaps are zeroed.
    Legacy,
    /// Old and new tables are stored. Sprite csets are moved to the newest offset.
    Extended,
    /// Every cset is stored where it belongs.
    Newer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameLayout {
    /// No names on disk, the table goes through `PaletteNames::reset`.
    Reset,
    Stored { count: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
    pub colors: ColorLayout,
    pub names: NameLayout,
    /// Cycles came with the section header.
    pub cycles: bool,
}

struct Rule<T> {
    /// `(version, build)`, compared as a pair.
    since: (u16, u16),
    sub_version: u16,
    layout: T,
}

impl<T> Rule<T> {
    fn applies(&self, version: FormatVersion, sub_version: u16) -> bool {
        (version.version, version.build) >= self.since && sub_version >= self.sub_version
    }
}

const HEADER_SINCE: (u16, u16) = (SECTION_HEADER_VERSION + 1, 0);

const HEADER_RULES: &[Rule<bool>] = &[
    Rule {
        since: HEADER_SINCE,
        sub_version: 0,
        layout: true,
    },
];

const COLOR_RULES: &[Rule<ColorLayout>] = &[
    Rule {
        since: (SECTION_HEADER_VERSION, EXTENDED_COLORS_BUILD),
        sub_version: NEWER_COLORS_SUB_VERSION,
        layout: ColorLayout::Newer,
    },
    Rule {
        since: (SECTION_HEADER_VERSION, EXTENDED_COLORS_BUILD),
        sub_version: 0,
        layout: ColorLayout::Extended,
    },
];

const NAME_RULES: &[Rule<NameLayout>] = &[
    Rule {
        since: (SECTION_HEADER_VERSION, PALETTE_NAMES_BUILD),
        sub_version: FULL_NAMES_SUB_VERSION,
        layout: NameLayout::Stored { count: MAX_LEVELS },
    },
    Rule {
        since: (SECTION_HEADER_VERSION, PALETTE_NAMES_BUILD),
        sub_version: 0,
        layout: NameLayout::Stored {
            count: OLD_MAX_LEVELS,
        },
    },
];

/// `oldest` is what every quest older than the first rule gets.
fn first_match<T: Copy>(
    rules: &[Rule<T>],
    oldest: T,
    version: FormatVersion,
    sub_version: u16,
) -> T {
    rules
        .iter()
        .find(|rule| rule.applies(version, sub_version))
        .map_or(oldest, |rule| rule.layout)
}

impl SectionLayout {
    /// Whether a section header precedes the color records. Known before anything is read.
    pub fn has_header(version: FormatVersion) -> bool {
        first_match(HEADER_RULES, false, version, 0)
    }

    /// `sub_version` is 0 when the section has no header.
    pub fn resolve(version: FormatVersion, sub_version: u16) -> Self {
        Self {
            colors: first_match(COLOR_RULES, ColorLayout::Legacy, version, sub_version),
            names: first_match(NAME_RULES, NameLayout::Reset, version, sub_version),
            cycles: Self::has_header(version),
        }
    }
}
