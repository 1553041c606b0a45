// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Domlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Domlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::mirror::MirrorTree;
use crate::model::EntryId;

const INDENT: &str = "  ";

/// Renders the mirror as an indented outline, one entry per line. The `selected` entry, if any,
/// is prefixed with `>`.
pub fn render_outline(tree: &MirrorTree, selected: Option<EntryId>) -> String {
    let mut out = String::new();
    for entry in tree.entries() {
        let marker = if selected == Some(entry.id()) { "> " } else { "" };
        out.push_str(&INDENT.repeat(entry.depth()));
        out.push_str(marker);
        out.push_str(entry.label());
        out.push('\n');
    }
    out
}
