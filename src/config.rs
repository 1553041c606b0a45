// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Domlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Domlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Environment-driven settings.
//!
//! | variable                | meaning                                      | default      |
//! |-------------------------|----------------------------------------------|--------------|
//! | `DOMLENS_LOG`           | tracing filter directive                     | `info`       |
//! | `DOMLENS_LOG_DIR`       | directory for `domlens.log`                  | temp dir     |
//! | `DOMLENS_SCROLL_FRAMES` | frames per smooth scroll (1..=60)            | `8`          |
//! | `DOMLENS_PALETTE`       | 18 comma-separated colors for the TUI theme  | terminal     |

use std::env;
use std::path::PathBuf;

use crate::page::{DEFAULT_SCROLL_FRAMES, MAX_SCROLL_FRAMES};

pub const LOG_ENV: &str = "DOMLENS_LOG";
pub const LOG_DIR_ENV: &str = "DOMLENS_LOG_DIR";
pub const SCROLL_FRAMES_ENV: &str = "DOMLENS_SCROLL_FRAMES";
pub const PALETTE_ENV: &str = "DOMLENS_PALETTE";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_filter: String,
    pub log_dir: PathBuf,
    pub scroll_frames: u16,
    pub palette: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            log_dir: env::temp_dir(),
            scroll_frames: DEFAULT_SCROLL_FRAMES,
            palette: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid env {name}={value}")]
    InvalidEnv { name: &'static str, value: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(filter) = get(LOG_ENV) {
            config.log_filter = filter;
        }
        if let Some(dir) = get(LOG_DIR_ENV) {
            config.log_dir = PathBuf::from(dir);
        }
        if let Some(raw) = get(SCROLL_FRAMES_ENV) {
            config.scroll_frames = match raw.parse::<u16>() {
                Ok(frames) if (1..=MAX_SCROLL_FRAMES).contains(&frames) => frames,
                _ => {
                    return Err(ConfigError::InvalidEnv {
                        name: SCROLL_FRAMES_ENV,
                        value: format!("{raw} (expected 1..={MAX_SCROLL_FRAMES})"),
                    })
                }
            };
        }
        config.palette = get(PALETTE_ENV);
        Ok(config)
    }
}
