//
// moji - configuration
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

//! Configuration file handling.
//!
//! The file is looked up in `$MOJI_CONFIG` and then in
//! `$XDG_CONFIG_HOME/moji/config.toml`. A missing default file is not an
//! error; every setting has a default.

use std::{
    env,
    path::{Path, PathBuf},
};

use mojib::{
    data::DEFAULT_URL,
    error::{Error, ErrorKind, Result, ResultIntoError},
    utils::logging::{Destination, LogLevel, StderrLogger},
};

pub const CONFIG_ENV_VAR: &str = "MOJI_CONFIG";

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DataSettings {
    /// Where to download `emoji-test.txt` from.
    #[serde(default = "default_url")]
    pub url: String,
    /// Local copy of the data file. Default:
    /// `$XDG_CACHE_HOME/moji/emoji-test.txt`
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            url: default_url(),
            path: None,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogSettings {
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default)]
    pub destination: Destination,
    /// Log file for `destination = "File"`. Default:
    /// `$XDG_DATA_HOME/moji/moji.log`
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Path of the configuration file that would be loaded.
pub fn get_config_file() -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    let xdg_dirs = xdg::BaseDirectories::with_prefix("moji")?;
    xdg_dirs
        .place_config_file("config.toml")
        .chain_err_summary(|| {
            format!(
                "Cannot create configuration directory in {}",
                xdg_dirs.get_config_home().display()
            )
        })
        .chain_err_kind(ErrorKind::Platform)
}

impl Settings {
    /// Load the configuration file, or the defaults if the default file does
    /// not exist.
    pub fn new() -> Result<Self> {
        let config_path = get_config_file()?;
        if !config_path.exists() {
            if env::var_os(CONFIG_ENV_VAR).is_some() {
                return Err(Error::new(format!(
                    "Configuration file {} does not exist.",
                    config_path.display()
                ))
                .set_kind(ErrorKind::Configuration));
            }
            return Ok(Self::default());
        }
        Self::from_path(&config_path)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .chain_err_summary(|| format!("Could not read configuration file {}", path.display()))
            .chain_err_kind(ErrorKind::Configuration)?;
        Self::from_toml(&contents)
            .chain_err_summary(|| format!("Invalid configuration file {}", path.display()))
    }

    pub fn from_toml(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|err| {
            Error::new("Could not parse configuration")
                .set_details(err.to_string())
                .set_source(Some(std::sync::Arc::new(err)))
                .set_kind(ErrorKind::Configuration)
        })
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|err| {
            Error::new("Could not serialize configuration")
                .set_details(err.to_string())
                .set_kind(ErrorKind::Bug)
        })
    }

    /// Location of the emoji data file.
    pub fn data_path(&self) -> Result<PathBuf> {
        if let Some(path) = self.data.path.as_ref() {
            return Ok(path.clone());
        }
        let xdg_dirs = xdg::BaseDirectories::with_prefix("moji")?;
        xdg_dirs
            .place_cache_file("emoji-test.txt")
            .chain_err_summary(|| "Cannot create cache directory")
            .chain_err_kind(ErrorKind::Platform)
    }

    /// Install the process logger according to the `[log]` section.
    pub fn init_logger(&self) -> Result<StderrLogger> {
        let logger = StderrLogger::new(self.log.level);
        match (self.log.destination, self.log.path.as_ref()) {
            (Destination::File, Some(path)) => logger.change_log_dest(path.clone())?,
            (dest, _) => logger.set_destination(dest)?,
        }
        Ok(logger)
    }
}
