//
// mojib - checksum module
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

//! 32-bit checksum of a sequence of codepoints.
//!
//! This is a bit-serial CRC-32 with polynomial `0x04C11DB7`, seed
//! `0xFFFFFFFF`, most significant bit first, no reflection and no final XOR.
//! Each input value contributes all of its 32 bits. An empty input has a
//! checksum of `0`.

pub const POLYNOMIAL: u32 = 0x04C1_1DB7;
pub const SEED: u32 = 0xFFFF_FFFF;

/// Compute the checksum of `values`.
///
/// ```rust
/// # use mojib::checksum;
/// assert_eq!(checksum(&[]), 0);
/// assert_eq!(checksum(&[0x1F469, 0x1F467]), 0xE9D3_EC00);
/// ```
pub fn checksum(values: &[u32]) -> u32 {
    if values.is_empty() {
        return 0;
    }
    values.iter().fold(SEED, |crc, &value| shift_in(crc, value))
}

/// Feed the 32 bits of `value` into `crc`, most significant bit first.
#[inline]
const fn shift_in(mut crc: u32, value: u32) -> u32 {
    let mut j = 0;
    while j < 32 {
        let bit = (value >> (31 - j)) & 1;
        crc = if (crc >> 31) != bit {
            (crc << 1) ^ POLYNOMIAL
        } else {
            crc << 1
        };
        j += 1;
    }
    crc
}

/// Incremental checksum state, for when the values are not available as a
/// slice.
///
/// Feeding the same values gives the same result as [`checksum`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Checksum {
    state: u32,
    len: usize,
}

impl Default for Checksum {
    fn default() -> Self {
        Self::new()
    }
}

impl Checksum {
    pub const fn new() -> Self {
        Self {
            state: SEED,
            len: 0,
        }
    }

    pub fn update(&mut self, value: u32) {
        self.state = shift_in(self.state, value);
        self.len += 1;
    }

    pub fn update_all(&mut self, values: &[u32]) {
        for &v in values {
            self.update(v);
        }
    }

    /// Number of values fed so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn finalize(&self) -> u32 {
        if self.is_empty() {
            return 0;
        }
        self.state
    }
}

impl Extend<u32> for Checksum {
    fn extend<T: IntoIterator<Item = u32>>(&mut self, iter: T) {
        for v in iter {
            self.update(v);
        }
    }
}
