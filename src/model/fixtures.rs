// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Domlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Domlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::document::{Document, Element};
use super::geometry::{Rect, Size};
use super::ids::NodeId;

pub(crate) struct ListTree {
    pub(crate) doc: Document,
    pub(crate) div: NodeId,
    pub(crate) ul: NodeId,
    pub(crate) li: NodeId,
}

/// `div > ul > li`, laid out inside an 800x600 client area with every box on screen.
pub(crate) fn list_tree() -> ListTree {
    let mut doc = Document::new(
        Element::new("DIV")
            .with_class("page")
            .with_rect(Rect::new(0.0, 0.0, 400.0, 300.0)),
    );
    doc.set_client_size(Size::new(800.0, 600.0));
    let div = doc.root();
    let ul = doc
        .append_child(
            div,
            Element::new("UL")
                .with_class("menu")
                .with_rect(Rect::new(10.0, 10.0, 300.0, 100.0)),
        )
        .expect("append ul");
    let li = doc
        .append_child(ul, Element::new("LI").with_rect(Rect::new(20.0, 20.0, 100.0, 20.0)))
        .expect("append li");

    ListTree { doc, div, ul, li }
}

/// `div > script > span`: the span is only reachable through an excluded ancestor.
pub(crate) fn script_tree() -> (Document, NodeId, NodeId) {
    let mut doc = Document::new(Element::new("DIV"));
    let script = doc
        .append_child(doc.root(), Element::new("SCRIPT"))
        .expect("append script");
    let span = doc.append_child(script, Element::new("SPAN")).expect("append span");
    (doc, script, span)
}

/// A tall column of paragraphs; the later ones sit far below an 800x600 viewport.
pub(crate) fn tall_page(paragraphs: usize) -> (Document, Vec<NodeId>) {
    let mut doc = Document::new(
        Element::new("BODY").with_rect(Rect::new(0.0, 0.0, 800.0, 200.0 * paragraphs as f64)),
    );
    doc.set_client_size(Size::new(800.0, 600.0));
    let body = doc.root();
    let ids = (0..paragraphs)
        .map(|idx| {
            let rect = Rect::new(0.0, 200.0 * idx as f64, 800.0, 150.0);
            doc.append_child(body, Element::new("P").with_rect(rect))
                .expect("append paragraph")
        })
        .collect();
    (doc, ids)
}
