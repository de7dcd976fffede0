//
// moji - command line arguments
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

//! Command line arguments.

use std::{io::Write, path::PathBuf};

use super::*;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "moji",
    about = "emoji sequence classifier",
    version_short = "v"
)]
pub struct Opt {
    /// use specified configuration file
    #[structopt(short, long, parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// use specified emoji-test.txt instead of the configured one
    #[structopt(short, long, value_name = "DATA_FILE", parse(from_os_str))]
    pub data: Option<PathBuf>,

    #[structopt(subcommand)]
    pub subcommand: SubCommand,
}

#[derive(Debug, StructOpt)]
pub enum SubCommand {
    /// print the components of every grapheme cluster of TEXT.
    #[structopt(display_order = 1)]
    Classify {
        /// print one JSON object per line.
        #[structopt(long)]
        json: bool,
        #[structopt(value_name = "TEXT")]
        text: String,
    },
    /// print the 64-bit ID of an emoji sequence.
    #[structopt(display_order = 2)]
    Encode {
        #[structopt(value_name = "EMOJI")]
        emoji: String,
    },
    /// print the emoji sequence of a 64-bit ID such as 0x07D8000000000000.
    #[structopt(display_order = 3)]
    Decode {
        #[structopt(value_name = "ID")]
        id: String,
    },
    /// print the checksum of hexadecimal codepoints, e.g. `1F469 1F467`.
    #[structopt(display_order = 4)]
    Checksum {
        #[structopt(value_name = "CODEPOINT")]
        codepoints: Vec<String>,
    },
    /// list fully-qualified ZWJ sequences of the data file with their
    /// component checksums.
    #[structopt(display_order = 5)]
    Hashes,
    /// encode and decode every fully-qualified sequence of the data file and
    /// report the ones that do not survive the round trip.
    #[structopt(display_order = 6)]
    Test {
        /// check every entry, not only the fully-qualified ones.
        #[structopt(long)]
        all: bool,
    },
    /// download the data file unless it is already cached, and print its
    /// location.
    Fetch,
    /// print location of configuration file that will be loaded.
    PrintConfigPath,
    /// print the default configuration in full to stdout and exit.
    PrintDefaultConfig,
    /// print location of the emoji data file.
    PrintDataPath,
}

impl Opt {
    /// Execute `self.subcommand` and return its result.
    pub fn execute(self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        match self.subcommand {
            SubCommand::PrintConfigPath => {
                let config_path = crate::conf::get_config_file()?;
                writeln!(out, "{}", config_path.display())?;
                return Ok(());
            }
            SubCommand::PrintDefaultConfig => {
                write!(out, "{}", Settings::default().to_toml()?)?;
                return Ok(());
            }
            _ => {}
        }

        let settings = Settings::new()?;
        settings.init_logger()?;
        let data_path = match self.data {
            Some(path) => path,
            None => settings.data_path()?,
        };
        log::trace!("data file: {}", data_path.display());

        match self.subcommand {
            SubCommand::Classify { json, text } => subcommands::classify(&text, json, &mut out),
            SubCommand::Encode { emoji } => subcommands::encode(&emoji, &mut out),
            SubCommand::Decode { id } => subcommands::decode(&id, &data_path, &mut out),
            SubCommand::Checksum { codepoints } => subcommands::checksum(&codepoints, &mut out),
            SubCommand::Hashes => {
                subcommands::hashes(&data_path, &mut out, &mut std::io::stderr().lock())
            }
            SubCommand::Test { all } => subcommands::test(&data_path, all, &mut out),
            SubCommand::Fetch => subcommands::fetch(&settings.data.url, &data_path, &mut out),
            SubCommand::PrintDataPath => {
                writeln!(out, "{}", data_path.display())?;
                Ok(())
            }
            SubCommand::PrintConfigPath | SubCommand::PrintDefaultConfig => Ok(()),
        }
    }
}
