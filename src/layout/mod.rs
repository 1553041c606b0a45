// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Domlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Domlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Block layout for documents without recorded geometry.
//!
//! Every element becomes a bordered box one page unit (a terminal cell) tall per row: a title row
//! carrying the tag, children stacked vertically inside it, and a closing border row. Children
//! are inset by [`CHILD_INSET`] on both sides. Elements that a browser never renders get an empty
//! box at the current flow position, and so does everything inside them. Rects already present
//! (e.g. from a snapshot) are kept.

use tracing::debug;

use crate::model::{Document, NodeId, Rect};

pub const CHILD_INSET: f64 = 2.0;
pub const MIN_BOX_WIDTH: f64 = 8.0;

/// Row height of an element without laid-out children (title, text, bottom border).
const LEAF_HEIGHT: f64 = 3.0;
/// Title row plus bottom border around the children.
const CHROME_HEIGHT: f64 = 2.0;

const HIDDEN_TAGS: [&str; 8] = ["head", "script", "style", "meta", "link", "title", "template", "noscript"];

pub fn is_hidden_tag(tag: &str) -> bool {
    HIDDEN_TAGS.iter().any(|hidden| hidden.eq_ignore_ascii_case(tag))
}

/// Assigns document-space rects to every attached node lacking one. Returns how many nodes were
/// laid out.
pub fn layout_document(document: &mut Document, width: f64) -> usize {
    let order = document.descendants();

    // Heights bottom-up: reverse pre-order visits children before their parents.
    let mut heights = vec![0.0f64; document.len()];
    for &node in order.iter().rev() {
        heights[node.index()] = box_height(document, node, &heights);
    }

    let mut placed = 0usize;
    let root = document.root();
    // (node, x, y, available width, inside a hidden element)
    let mut stack = vec![(root, 0.0f64, 0.0f64, width.max(MIN_BOX_WIDTH), false)];
    while let Some((node, x, y, available, collapsed)) = stack.pop() {
        let hidden = collapsed || document.tag(node).is_some_and(is_hidden_tag);
        let rect = match document.rect(node) {
            Some(rect) => rect,
            None => {
                let rect = if hidden {
                    Rect::new(x, y, 0.0, 0.0)
                } else {
                    Rect::new(x, y, available, heights[node.index()])
                };
                document.set_rect(node, rect);
                placed += 1;
                rect
            }
        };

        let children = document.children(node);
        if hidden {
            // Nothing inside a hidden element takes up space.
            stack.extend(children.iter().rev().map(|&child| (child, rect.x, rect.y, 0.0, true)));
            continue;
        }

        let child_x = rect.x + CHILD_INSET;
        let child_width = (rect.width - 2.0 * CHILD_INSET).max(MIN_BOX_WIDTH);
        let mut cursor = rect.y + 1.0;
        let mut placements = Vec::with_capacity(children.len());
        for &child in children {
            placements.push((child, child_x, cursor, child_width, false));
            cursor += document.rect(child).map(|r| r.height).unwrap_or(heights[child.index()]);
        }
        stack.extend(placements.into_iter().rev());
    }

    debug!(nodes = order.len(), placed, width, "document laid out");
    placed
}

fn box_height(document: &Document, node: NodeId, heights: &[f64]) -> f64 {
    if let Some(rect) = document.rect(node) {
        return rect.height;
    }
    if document.tag(node).is_some_and(is_hidden_tag) {
        return 0.0;
    }
    let children = document.children(node);
    let inner: f64 = children.iter().map(|child| heights[child.index()]).sum();
    if inner > 0.0 {
        inner + CHROME_HEIGHT
    } else {
        LEAF_HEIGHT
    }
}
