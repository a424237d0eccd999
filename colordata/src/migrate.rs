//! Moves csets written under an older layout to where the newest layout expects them.

use log::trace;

use crate::{
    constants::{COLOR_RECORD_SIZE, NEWER_PO_SPRITE, SPRITE_PALETTE_CSETS},
    types::ColorTable,
};

const EMPTY_RECORD: [u8; COLOR_RECORD_SIZE] = [0u8; COLOR_RECORD_SIZE];

impl ColorTable {
    /// Moves the sprite csets from `from` up to `NEWER_PO_SPRITE` and zeroes everything in
    /// between, including the old sprite csets.
    pub(crate) fn relocate_sprites(&mut self, from: usize) {
        trace!("moving sprite csets from {from} to {NEWER_PO_SPRITE}");

        self.0
            .copy_within(from..from + SPRITE_PALETTE_CSETS, NEWER_PO_SPRITE);
        self.0[from..NEWER_PO_SPRITE].fill(EMPTY_RECORD);
    }

    /// Old quests are missing the cset at sprite slot 8. Slots 8 to 10 move up by one, which
    /// drops whatever was in slot 11, and slot 8 is cleared.
    pub(crate) fn open_legacy_sprite_slot(&mut self) {
        let slot = NEWER_PO_SPRITE + 8;

        trace!("opening sprite cset {slot}");

        // same as copying 10 -> 11, 9 -> 10, 8 -> 9 in that order
        self.0.copy_within(slot..slot + 3, slot + 1);
        self.0[slot] = EMPTY_RECORD;
    }
}

#[cfg(test)]
mod test {
    use crate::constants::{NEW_PO_SPRITE, OLD_PO_SPRITE};

    use super::*;

    fn tagged(index: usize) -> [u8; COLOR_RECORD_SIZE] {
        let mut record = EMPTY_RECORD;
        record[0] = (index % 251) as u8 + 1;
        record[47] = (index / 251) as u8 + 1;
        record
    }

    fn tagged_table(until: usize) -> ColorTable {
        let mut table = ColorTable::new();

        table.0[..until]
            .iter_mut()
            .enumerate()
            .for_each(|(index, record)| *record = tagged(index));

        table
    }

    #[test]
    fn relocate_old_sprites() {
        let mut table = tagged_table(OLD_PO_SPRITE + SPRITE_PALETTE_CSETS);

        table.relocate_sprites(OLD_PO_SPRITE);

        for index in 0..OLD_PO_SPRITE {
            assert_eq!(table.0[index], tagged(index));
        }

        assert!(table.0[OLD_PO_SPRITE..NEWER_PO_SPRITE]
            .iter()
            .all(|record| *record == EMPTY_RECORD));

        for slot in 0..SPRITE_PALETTE_CSETS {
            assert_eq!(table.0[NEWER_PO_SPRITE + slot], tagged(OLD_PO_SPRITE + slot));
        }
    }

    #[test]
    fn relocate_new_sprites() {
        let mut table = tagged_table(NEW_PO_SPRITE + SPRITE_PALETTE_CSETS);

        table.relocate_sprites(NEW_PO_SPRITE);

        assert_eq!(table.0[NEW_PO_SPRITE - 1], tagged(NEW_PO_SPRITE - 1));
        assert_eq!(table.0[NEW_PO_SPRITE], EMPTY_RECORD);
        assert_eq!(table.0[NEWER_PO_SPRITE - 1], EMPTY_RECORD);
        assert_eq!(table.0[NEWER_PO_SPRITE], tagged(NEW_PO_SPRITE));
        assert_eq!(
            table.0[NEWER_PO_SPRITE + SPRITE_PALETTE_CSETS - 1],
            tagged(NEW_PO_SPRITE + SPRITE_PALETTE_CSETS - 1)
        );
    }

    #[test]
    fn legacy_sprite_slot() {
        let mut table = ColorTable::new();

        for slot in 0..SPRITE_PALETTE_CSETS {
            table.0[NEWER_PO_SPRITE + slot] = tagged(slot);
        }

        table.open_legacy_sprite_slot();

        let sprite = |slot: usize| table.0[NEWER_PO_SPRITE + slot];

        assert_eq!(sprite(7), tagged(7));
        assert_eq!(sprite(8), EMPTY_RECORD);
        assert_eq!(sprite(9), tagged(8));
        assert_eq!(sprite(10), tagged(9));
        assert_eq!(sprite(11), tagged(10));
        // not shifted any further
        assert_eq!(sprite(12), tagged(12));
    }
}
