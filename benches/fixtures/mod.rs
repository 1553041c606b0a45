// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Domlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Domlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use domlens::layout::layout_document;
use domlens::model::{Document, Element, NodeId, Size};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    /// A few hundred nodes, shallow.
    Small,
    /// Wide sections with many cards.
    MediumWide,
    /// Deep nesting with scripts and SVG icons sprinkled in.
    LargeDeep,
}

#[derive(Debug, Clone, Copy)]
pub struct PageParams {
    pub sections: usize,
    pub cards_per_section: usize,
    pub nesting: usize,
    /// Every n-th card carries a script and an svg icon (0 disables them).
    pub noise_every: usize,
}

impl PageParams {
    pub const fn new(sections: usize, cards_per_section: usize, nesting: usize, noise_every: usize) -> Self {
        Self {
            sections,
            cards_per_section,
            nesting,
            noise_every,
        }
    }
}

pub fn params(case: Case) -> PageParams {
    match case {
        Case::Small => PageParams::new(4, 12, 1, 5),
        Case::MediumWide => PageParams::new(16, 60, 2, 4),
        Case::LargeDeep => PageParams::new(24, 40, 8, 3),
    }
}

pub fn fixture(case: Case) -> Document {
    page(params(case))
}

/// Builds a page of sections holding cards; each card wraps its content in `nesting` DIVs.
pub fn page(params: PageParams) -> Document {
    let mut doc = Document::new(Element::new("BODY").with_class("bench"));
    let body = doc.root();

    for section_idx in 0..params.sections {
        let section = append(
            &mut doc,
            body,
            Element::new("SECTION").with_class(format!("section-{section_idx}")),
        );
        for card_idx in 0..params.cards_per_section {
            let mut parent = append(&mut doc, section, Element::new("ARTICLE").with_class("card"));
            for depth in 0..params.nesting {
                parent = append(&mut doc, parent, Element::new("DIV").with_class(format!("wrap-{depth}")));
            }
            append(
                &mut doc,
                parent,
                Element::new("P").with_text(format!("card {section_idx}.{card_idx}")),
            );

            if params.noise_every > 0 && card_idx % params.noise_every == 0 {
                let script = append(&mut doc, parent, Element::new("SCRIPT"));
                append(&mut doc, script, Element::new("SPAN"));
                let svg = append(&mut doc, parent, Element::new("svg").with_class("icon"));
                append(&mut doc, svg, Element::new("path"));
            }
        }
    }

    doc
}

/// `page(params)` laid out at `width` with a `width x height` client area.
pub fn laid_out_page(params: PageParams, width: f64, height: f64) -> Document {
    let mut doc = page(params);
    layout_document(&mut doc, width);
    doc.set_client_size(Size::new(width, height));
    doc
}

fn append(doc: &mut Document, parent: NodeId, element: Element) -> NodeId {
    doc.append_child(parent, element).expect("append child")
}
