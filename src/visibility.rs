// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Domlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Domlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Full-visibility test for target elements.
//!
//! An element counts as visible only when all four edges are inside the viewport. Partially
//! clipped elements are reported as not visible so that selecting them still scrolls them into
//! clear view. Nothing here is cached; layout may change between calls.

use tracing::trace;

use crate::model::{BoundingRect, NodeId, Size};
use crate::page::Page;

/// Resolves the viewport dimensions, falling back per axis to the document element's client
/// dimensions when the viewport dimension is unknown or zero.
pub fn effective_viewport(viewport: Option<Size>, client: Size) -> Size {
    let pick = |viewport: Option<f64>, client: f64| match viewport {
        Some(value) if value > 0.0 => value,
        _ => client,
    };
    Size::new(
        pick(viewport.map(|size| size.width), client.width),
        pick(viewport.map(|size| size.height), client.height),
    )
}

/// Whether `rect` lies entirely inside a viewport of the given size.
pub fn rect_is_within(rect: &BoundingRect, viewport: Size) -> bool {
    rect.top >= 0.0
        && rect.bottom <= viewport.height
        && rect.left >= 0.0
        && rect.right <= viewport.width
}

/// Whether `node` is currently fully inside the page's viewport.
///
/// Detached nodes and nodes without a layout box are never visible.
pub fn is_visible<P: Page + ?Sized>(page: &P, node: NodeId) -> bool {
    if !page.is_attached(node) {
        return false;
    }
    let Some(rect) = page.bounding_rect(node) else {
        return false;
    };
    let viewport = effective_viewport(page.viewport_size(), page.client_size());
    let visible = rect_is_within(&rect, viewport);
    trace!(
        %node,
        top = rect.top,
        bottom = rect.bottom,
        left = rect.left,
        right = rect.right,
        width = viewport.width,
        height = viewport.height,
        visible,
        "visibility check"
    );
    visible
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{effective_viewport, is_visible, rect_is_within};
    use crate::model::fixtures::{list_tree, tall_page};
    use crate::model::{BoundingRect, ScrollOffset, Size};
    use crate::page::{DocumentPage, Page};

    const VIEWPORT: Size = Size::new(800.0, 600.0);

    #[rstest]
    #[case::inside(BoundingRect::new(0.0, 0.0, 100.0, 100.0), true)]
    #[case::touching_far_edges(BoundingRect::new(500.0, 700.0, 600.0, 800.0), true)]
    #[case::top_above(BoundingRect::new(-5.0, 0.0, 100.0, 100.0), false)]
    #[case::bottom_below(BoundingRect::new(550.0, 0.0, 601.0, 100.0), false)]
    #[case::left_of(BoundingRect::new(0.0, -0.5, 100.0, 100.0), false)]
    #[case::right_of(BoundingRect::new(0.0, 0.0, 100.0, 800.5), false)]
    #[case::larger_than_viewport(BoundingRect::new(0.0, 0.0, 900.0, 100.0), false)]
    fn rect_visibility_requires_all_edges_in_bounds(
        #[case] rect: BoundingRect,
        #[case] expected: bool,
    ) {
        assert_eq!(rect_is_within(&rect, VIEWPORT), expected);
    }

    #[test]
    fn viewport_falls_back_to_client_size_per_axis() {
        let client = Size::new(1024.0, 768.0);
        assert_eq!(effective_viewport(None, client), client);
        assert_eq!(
            effective_viewport(Some(Size::new(0.0, 300.0)), client),
            Size::new(1024.0, 300.0)
        );
        assert_eq!(effective_viewport(Some(VIEWPORT), client), VIEWPORT);
    }

    #[test]
    fn is_visible_tracks_current_scroll_offset() {
        let (doc, paragraphs) = tall_page(6);
        let mut page = DocumentPage::new(doc);
        assert!(is_visible(&page, paragraphs[0]));
        assert!(!is_visible(&page, paragraphs[4]));

        page.scroll_to(ScrollOffset::new(0.0, 800.0));
        assert!(!is_visible(&page, paragraphs[0]));
        assert!(is_visible(&page, paragraphs[4]));
    }

    #[test]
    fn partially_clipped_element_is_not_visible() {
        let (doc, paragraphs) = tall_page(6);
        let mut page = DocumentPage::new(doc);
        page.scroll_to(ScrollOffset::new(0.0, 100.0));
        // paragraph 0 spans 0..150; scrolled by 100 its top edge is at -100.
        assert!(!is_visible(&page, paragraphs[0]));
        assert!(is_visible(&page, paragraphs[1]));
    }

    #[test]
    fn detached_or_unlaid_nodes_are_not_visible() {
        let mut tree = list_tree();
        tree.doc.detach(tree.li).expect("detach");
        let page = DocumentPage::new(tree.doc);
        assert!(!page.is_attached(tree.li));
        assert!(!is_visible(&page, tree.li));
        assert!(is_visible(&page, tree.ul));

        let (doc, _, span) = crate::model::fixtures::script_tree();
        let page = DocumentPage::new(doc);
        assert!(!is_visible(&page, span), "no layout box, not visible");
    }
}
