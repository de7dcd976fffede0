//
// mojib - table module
//
// Copyright 2026 moji contributors
//
// This file is part of moji.
//
// moji is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// moji is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with moji. If not, see <http://www.gnu.org/licenses/>.
//
// SPDX-License-Identifier: EUPL-1.2 OR GPL-3.0-or-later

//! Lookup of extra components by their checksum.

use indexmap::IndexMap;

use crate::{
    components::{ComponentRecord, ExtraComponents},
    error::{Error, ErrorKind, Result},
    id::EmojiId,
};

#[derive(Clone, Debug, Default)]
struct Entry {
    components: ExtraComponents,
    /// VS16 positions, see [`ComponentRecord::extra_presentation`].
    presentation: u16,
}

#[derive(Clone, Debug, Default)]
pub struct ComponentTable {
    entries: IndexMap<u32, Entry>,
}

impl ComponentTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ComponentRecord>,
    {
        let mut ret = Self::new();
        for r in records {
            ret.insert(r);
        }
        ret
    }

    /// Remember the extra components of `record` and where VS16 followed
    /// them.
    ///
    /// Returns `true` if the table gained an entry. Records without extra
    /// components are ignored, and on a checksum collision the first entry
    /// is kept.
    pub fn insert(&mut self, record: &ComponentRecord) -> bool {
        if record.extra_components().is_empty() {
            return false;
        }
        match self.entries.get(&record.checksum()) {
            Some(existing) if existing.components.as_slice() == record.extra_components() => {
                if existing.presentation != record.extra_presentation() {
                    log::debug!(
                        "{:X?} seen with VS16 mask {:#b} and {:#b}, keeping the former.",
                        record.extra_components(),
                        existing.presentation,
                        record.extra_presentation()
                    );
                }
                false
            }
            Some(existing) => {
                log::warn!(
                    "Checksum collision 0x{:08X}: {:X?} and {:X?}, keeping the former.",
                    record.checksum(),
                    existing.components.as_slice(),
                    record.extra_components()
                );
                false
            }
            None => {
                self.entries.insert(
                    record.checksum(),
                    Entry {
                        components: record.extra_components().iter().copied().collect(),
                        presentation: record.extra_presentation(),
                    },
                );
                true
            }
        }
    }

    pub fn get(&self, checksum: u32) -> Option<&[u32]> {
        self.entries.get(&checksum).map(|e| e.components.as_slice())
    }

    /// VS16 positions stored for `checksum`.
    pub fn presentation(&self, checksum: u32) -> Option<u16> {
        self.entries.get(&checksum).map(|e| e.presentation)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[u32])> + '_ {
        self.entries
            .iter()
            .map(|(k, v)| (*k, v.components.as_slice()))
    }

    /// Unpack `id` into a full record.
    pub fn decode(&self, id: EmojiId) -> Result<ComponentRecord> {
        let skin_tones = id.skin_tones()?;
        let checksum = id.checksum();
        let (extra_components, presentation): (&[u32], u16) = if checksum == 0 {
            (&[], 0)
        } else {
            let entry = self.entries.get(&checksum).ok_or_else(|| {
                Error::new(format!(
                    "Unknown component checksum 0x{:08X} in emoji ID {}",
                    checksum, id
                ))
                .set_kind(ErrorKind::NotFound)
            })?;
            (entry.components.as_slice(), entry.presentation)
        };
        Ok(ComponentRecord::from_parts(
            id.primary_codepoint(),
            extra_components,
            skin_tones,
            id.gender(),
            id.emoji_presentation(),
        )
        .set_extra_presentation(presentation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{classify, classify_str};

    #[test]
    fn test_component_table() {
        let family = classify([0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F467]);
        let kiss = classify([0x1F469, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468]);
        let grin = classify([0x1F600]);

        let mut table = ComponentTable::new();
        assert!(table.is_empty());
        assert!(table.insert(&family));
        assert!(!table.insert(&family));
        assert!(!table.insert(&grin));
        assert!(table.insert(&kiss));
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0xE9D3_EC00), Some([0x1F469, 0x1F467].as_slice()));
        assert_eq!(table.get(0), None);
        assert_eq!(
            table.iter().map(|(k, _)| k).collect::<Vec<u32>>(),
            vec![family.checksum(), kiss.checksum()]
        );

        assert_eq!(table.presentation(kiss.checksum()), Some(0b001));
        assert_eq!(table.presentation(family.checksum()), Some(0));

        let mut table = ComponentTable::from_records([&family, &kiss, &grin]);
        assert_eq!(table.len(), 2);

        // Same extras without VS16 decode to the spelling stored first.
        let bare_kiss = classify([0x1F469, 0x200D, 0x2764, 0x200D, 0x1F48B, 0x200D, 0x1F468]);
        assert_eq!(bare_kiss.id(), kiss.id());
        assert!(!table.insert(&bare_kiss));
        assert_eq!(table.decode(bare_kiss.id()).unwrap(), kiss);
    }

    #[test]
    fn test_component_table_decode() {
        let inputs = [
            "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}",
            "\u{1F9D1}\u{1F3FB}\u{200D}\u{1F91D}\u{200D}\u{1F9D1}\u{1F3FF}",
            "\u{26F9}\u{FE0F}\u{200D}\u{2640}\u{FE0F}",
            "\u{1F600}",
            "\u{1F469}\u{200D}\u{2764}\u{FE0F}\u{200D}\u{1F48B}\u{200D}\u{1F468}",
            "\u{1F43B}\u{200D}\u{2744}\u{FE0F}",
            "\u{1F441}\u{FE0F}\u{200D}\u{1F5E8}\u{FE0F}",
            "\u{1F3F4}\u{200D}\u{2620}\u{FE0F}",
        ];
        let records = inputs.iter().map(|s| classify_str(s)).collect::<Vec<_>>();
        let table = ComponentTable::from_records(&records);
        for (s, record) in inputs.iter().zip(records.iter()) {
            let decoded = table.decode(record.id()).unwrap();
            assert_eq!(&decoded, record);
            assert_eq!(decoded.to_emoji_string(), *s);
        }

        let unknown = classify([0x1F469, 0x200D, 0x1F466]).id();
        assert_eq!(
            table.decode(unknown).unwrap_err().kind,
            ErrorKind::NotFound
        );
        assert_eq!(
            table.decode(EmojiId(0x07D8_0000_0000_0070)).unwrap_err().kind,
            ErrorKind::ValueError
        );
    }
}
