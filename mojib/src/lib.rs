//
// mojib - lib.rs
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

#![deny(
    unsafe_op_in_unsafe_fn,
    /* groups */
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    /* restriction */
    clippy::dbg_macro,
    clippy::as_underscore,
    clippy::assertions_on_result_states,
    /* rustdoc */
    rustdoc::broken_intra_doc_links,
    /* pedantic */
    clippy::doc_markdown,
    clippy::expect_fun_call,
    clippy::or_fun_call,
)]
#![allow(clippy::option_if_let_else, clippy::missing_const_for_fn)]

//! A crate that decodes emoji grapheme sequences into their components.
//!
//! - Compute the 32-bit checksum of a sequence of codepoints (see
//!   [`checksum`](checksum::checksum))
//! - Classify a codepoint sequence into a primary codepoint, extra ZWJ
//!   components, skin tones and gender signs (see [`components`])
//! - Pack a [`ComponentRecord`] into a 64-bit [`EmojiId`] and unpack it again
//!   with the help of a [`ComponentTable`] (see modules [`id`] and [`table`])
//! - Fetch and parse the Unicode `emoji-test.txt` data file (see module
//!   [`data`])
//!
//! Other exports are
//! - An error type used by every fallible operation (see module [`error`])
//! - A `log` backend that writes to stderr or a file (see
//!   [`StderrLogger`](utils::logging::StderrLogger))

pub use utils::logging::{LogLevel, StderrLogger};

pub mod checksum;
pub use checksum::{checksum, Checksum};
pub mod codepoint;
pub use codepoint::{is_base, CodePoints, Gender, SkinTone};
pub mod components;
pub use components::{classify, classify_graphemes, classify_str, ComponentRecord};
pub mod data;
pub mod error;
pub use error::*;
pub mod id;
pub use id::EmojiId;
pub mod table;
pub use table::ComponentTable;

pub mod utils;

#[macro_use]
extern crate serde_derive;
pub extern crate log;
pub extern crate nom;
pub extern crate smallvec;

#[macro_use]
extern crate bitflags;
