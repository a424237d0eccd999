use std::{ffi::OsStr, path::Path};

use log::{debug, warn};

use crate::{
    constants::{NEWER_PD_TOTAL, NEW_PD_TOTAL, NEW_PO_SPRITE, OLD_PD_TOTAL, OLD_PO_SPRITE},
    error::ColorDataError,
    layout::{ColorLayout, NameLayout, SectionLayout},
    parser::{
        parse_color_records, parse_cycle_count, parse_cycle_sets, parse_palette_names,
        parse_section_header, OrInvalid,
    },
    types::{ColorData, FormatVersion, MiscData, PaletteStore},
};

/// Decodes the palette section at the start of `i`.
///
/// Nothing the caller owns is touched unless the whole section decodes and `keep_data` is set.
/// Then the color table and the palette names are replaced, and so is `misc` if the section
/// carries color cycles. Returns what follows the section.
pub fn read_color_data<'a>(
    i: &'a [u8],
    store: &mut PaletteStore,
    misc: &mut MiscData,
    version: FormatVersion,
    keep_data: bool,
) -> Result<&'a [u8], ColorDataError> {
    let (i, data) = decode_section(i, misc, version).inspect_err(|err| {
        warn!("palette section of {version} quest: {err}");
    })?;

    if keep_data {
        data.commit(store, misc);
    }

    Ok(i)
}

/// Dry run of `read_color_data`. Returns what follows the section.
pub fn validate_color_data(i: &[u8], version: FormatVersion) -> Result<&[u8], ColorDataError> {
    read_color_data(
        i,
        &mut PaletteStore::new(),
        &mut MiscData::default(),
        version,
        false,
    )
}

/// Decodes into fresh tables. `misc` is only the starting point of the staged copy.
fn decode_section<'a>(
    i: &'a [u8],
    misc: &MiscData,
    version: FormatVersion,
) -> Result<(&'a [u8], ColorData), ColorDataError> {
    let (i, header) = if SectionLayout::has_header(version) {
        let (i, header) = parse_section_header(i).or_invalid("section header")?;
        (i, Some(header))
    } else {
        (i, None)
    };

    let sub_version = header.map_or(0, |header| header.sub_version);
    let layout = SectionLayout::resolve(version, sub_version);

    debug!("palette section of {version} quest, sub-version {sub_version}: {layout:?}");

    let mut store = PaletteStore::new();

    let (i, _) =
        parse_color_records(i, &mut store.colors.0[..OLD_PD_TOTAL]).or_invalid("color data")?;

    let i = match layout.colors {
        ColorLayout::Legacy => {
            store.colors.relocate_sprites(OLD_PO_SPRITE);
            store.colors.open_legacy_sprite_slot();
            i
        }
        ColorLayout::Extended => {
            let (i, _) = parse_color_records(i, &mut store.colors.0[OLD_PD_TOTAL..NEW_PD_TOTAL])
                .or_invalid("extended color data")?;

            store.colors.relocate_sprites(NEW_PO_SPRITE);
            i
        }
        ColorLayout::Newer => {
            let (i, _) = parse_color_records(i, &mut store.colors.0[OLD_PD_TOTAL..NEW_PD_TOTAL])
                .or_invalid("extended color data")?;
            let (i, _) =
                parse_color_records(i, &mut store.colors.0[NEW_PD_TOTAL..NEWER_PD_TOTAL])
                    .or_invalid("newer color data")?;
            i
        }
    };

    let i = match layout.names {
        NameLayout::Reset => {
            store.names.reset();
            i
        }
        // fresh table, so names past `count` are already zeroed
        NameLayout::Stored { count } => {
            let (i, _) =
                parse_palette_names(i, &mut store.names.0[..count]).or_invalid("palette names")?;
            i
        }
    };

    let mut misc = misc.clone();

    let i = if layout.cycles {
        misc.cycles.clear();

        let (i, count) = parse_cycle_count(i).or_invalid("color cycle count")?;
        let (i, _) = parse_cycle_sets(i, &mut misc.cycles, count as usize)
            .or_invalid("color cycles")?;
        i
    } else {
        i
    };

    Ok((
        i,
        ColorData {
            header,
            layout,
            store,
            misc,
        },
    ))
}

impl ColorData {
    /// Moves the decoded tables into the caller's.
    pub fn commit(self, store: &mut PaletteStore, misc: &mut MiscData) {
        *store = self.store;

        if self.layout.cycles {
            *misc = self.misc;
        }
    }

    /// Decodes one palette section, starting from empty tables.
    pub fn open_from_bytes(i: &[u8], version: FormatVersion) -> Result<Self, ColorDataError> {
        decode_section(i, &MiscData::default(), version).map(|(_, res)| res)
    }

    /// `offset` is where the palette section starts inside the file.
    pub fn open_from_file(
        path: impl AsRef<OsStr> + AsRef<Path>,
        offset: usize,
        version: FormatVersion,
    ) -> Result<Self, ColorDataError> {
        let file = std::fs::read(&path).map_err(|op| ColorDataError::IOError {
            source: op,
            path: AsRef::<Path>::as_ref(&path).to_path_buf(),
        })?;

        Self::open_from_bytes(section_at(&file, offset)?, version)
    }
}

/// Everything from `offset` on.
pub fn section_at(bytes: &[u8], offset: usize) -> Result<&[u8], ColorDataError> {
    bytes
        .get(offset..)
        .ok_or(ColorDataError::OffsetOutOfRange {
            offset,
            length: bytes.len(),
        })
}
