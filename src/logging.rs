// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Domlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Domlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tracing setup for the binary.
//!
//! The terminal belongs to the TUI, so events go to `domlens.log` in the configured directory
//! instead of stderr.

use std::error::Error;
use std::fs;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

pub const LOG_FILE_NAME: &str = "domlens.log";

static GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Installs the global subscriber. Calling it again is a no-op.
pub fn init_tracing(config: &Config) -> Result<(), Box<dyn Error>> {
    if GUARD.get().is_some() {
        return Ok(());
    }

    let filter = EnvFilter::try_new(&config.log_filter)?;
    fs::create_dir_all(&config.log_dir)?;
    let file_appender = tracing_appender::rolling::never(&config.log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false).with_target(true))
        .try_init()?;
    // Only a successfully installed subscriber marks tracing as initialized.
    let _ = GUARD.set(guard);

    Ok(())
}
