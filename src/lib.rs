// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Domlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Domlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Domlens: a mirror panel for a document's element tree.
//!
//! [`mirror::build`] turns a [`model::Document`] subtree into a flat, depth-annotated list of
//! entries. Activating an entry ([`mirror::MirrorTree::activate`]) runs the
//! [`selection::Selection`] state machine against a [`page::Page`]: the target element is
//! highlighted and, when [`visibility::is_visible`] says it is off screen, smoothly scrolled into
//! view. The [`tui`] module hosts all of this in a terminal.

pub mod config;
pub mod format;
pub mod layout;
pub mod logging;
pub mod mirror;
pub mod model;
pub mod page;
pub mod selection;
pub mod tui;
pub mod ui;
pub mod visibility;
