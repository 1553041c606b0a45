// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Domlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Domlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Domlens CLI entrypoint.
//!
//! Loads a JSON document snapshot (or the built-in demo page) and opens the mirror panel TUI.
//! Use `--print` to write the mirror as an indented outline to stdout instead.

use std::error::Error;

use domlens::config::Config;
use domlens::format::{load_snapshot, render_outline};
use domlens::logging::init_tracing;
use domlens::mirror::build;
use domlens::model::Size;
use tracing::info;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <snapshot.json> [--print] [--viewport <W>x<H>]\n  {program} --demo [--print] [--viewport <W>x<H>]\n\n--print writes the mirror tree as an indented outline to stdout instead of starting the TUI.\n--viewport sets the client size used when the page viewport is unknown (e.g. 1280x720).\n--demo uses a built-in demo page and cannot be combined with a snapshot path.\n\nEnvironment: DOMLENS_LOG, DOMLENS_LOG_DIR, DOMLENS_SCROLL_FRAMES, DOMLENS_PALETTE."
    );
}

#[derive(Debug, Default, Clone, PartialEq)]
struct CliOptions {
    demo: bool,
    print: bool,
    snapshot: Option<String>,
    viewport: Option<Size>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--print" => {
                if options.print {
                    return Err(());
                }
                options.print = true;
            }
            "--viewport" => {
                if options.viewport.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.viewport = Some(parse_viewport(&raw)?);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.snapshot.is_some() {
                    return Err(());
                }
                options.snapshot = Some(arg);
            }
        }
    }

    if options.demo == options.snapshot.is_some() {
        return Err(());
    }

    Ok(options)
}

/// Parses `<W>x<H>` with positive integer dimensions.
fn parse_viewport(raw: &str) -> Result<Size, ()> {
    let (width, height) = raw.split_once(|ch: char| ch == 'x' || ch == 'X').ok_or(())?;
    let width: u32 = width.trim().parse().map_err(|_| ())?;
    let height: u32 = height.trim().parse().map_err(|_| ())?;
    if width == 0 || height == 0 {
        return Err(());
    }
    Ok(Size::new(f64::from(width), f64::from(height)))
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "domlens".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let config = Config::from_env()?;
        init_tracing(&config)?;

        let mut document = match &options.snapshot {
            Some(path) => load_snapshot(path)?,
            None => domlens::tui::demo_document(),
        };
        if let Some(viewport) = options.viewport {
            document.set_client_size(viewport);
        }
        info!(
            nodes = document.len(),
            source = options.snapshot.as_deref().unwrap_or("demo"),
            "document loaded"
        );

        if options.print {
            let tree = build(&document, document.root());
            print!("{}", render_outline(&tree, None));
            return Ok(());
        }

        domlens::tui::run(document, &config)
    })();

    if let Err(err) = result {
        eprintln!("domlens: {err}");
        std::process::exit(1);
    }
}
