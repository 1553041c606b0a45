// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Domlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Domlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The page the mirror points into.
//!
//! `Page` is the only surface the selection logic mutates: a highlight class on target elements
//! and fire-and-forget scroll requests. `DocumentPage` implements it over an in-memory
//! [`Document`] with a scroll offset and a [`ScrollAnimator`].

use tracing::debug;

use crate::model::{BoundingRect, Document, NodeId, ScrollOffset, Size};
use crate::visibility::effective_viewport;

pub mod scroll;

pub use scroll::{ScrollAnimator, DEFAULT_SCROLL_FRAMES, MAX_SCROLL_FRAMES};

/// Presentational class applied to the selected target element.
pub const HIGHLIGHT_CLASS: &str = "highlight";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: NodeId,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    pub fn smooth(target: NodeId) -> Self {
        Self {
            target,
            behavior: ScrollBehavior::Smooth,
        }
    }
}

/// Live view of the inspected page, as seen by the selection logic.
pub trait Page {
    /// Whether `node` is still part of the page.
    fn is_attached(&self, node: NodeId) -> bool;

    /// Edges of `node` relative to the viewport, or `None` if it has no layout box.
    fn bounding_rect(&self, node: NodeId) -> Option<BoundingRect>;

    /// Viewport dimensions, when the host knows them.
    fn viewport_size(&self) -> Option<Size>;

    /// Client dimensions of the document element.
    fn client_size(&self) -> Size;

    fn set_highlighted(&mut self, node: NodeId, highlighted: bool);

    /// Asks the page to bring `request.target` into view. Does not wait for the scroll to finish.
    fn request_scroll_into_view(&mut self, request: ScrollRequest);
}

/// A [`Document`] displayed through a scrollable viewport.
#[derive(Debug, Clone)]
pub struct DocumentPage {
    document: Document,
    scroll: ScrollOffset,
    viewport: Option<Size>,
    animator: ScrollAnimator,
    scroll_requests: u64,
}

impl DocumentPage {
    pub fn new(document: Document) -> Self {
        Self::with_animator(document, ScrollAnimator::default())
    }

    pub fn with_animator(document: Document, animator: ScrollAnimator) -> Self {
        Self {
            document,
            scroll: ScrollOffset::default(),
            viewport: None,
            animator,
            scroll_requests: 0,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn scroll(&self) -> ScrollOffset {
        self.scroll
    }

    pub fn set_viewport(&mut self, viewport: Option<Size>) {
        self.viewport = viewport;
        self.scroll = self.clamp_scroll(self.scroll);
    }

    /// Number of scroll requests received since the page was created.
    pub fn scroll_requests(&self) -> u64 {
        self.scroll_requests
    }

    pub fn is_scrolling(&self) -> bool {
        self.animator.is_animating()
    }

    /// Manual scroll (wheel, keys). Cancels any smooth scroll in flight.
    pub fn scroll_by(&mut self, dx: f64, dy: f64) {
        self.animator.cancel();
        let next = ScrollOffset::new(self.scroll.x + dx, self.scroll.y + dy);
        self.scroll = self.clamp_scroll(next);
    }

    pub fn scroll_to(&mut self, offset: ScrollOffset) {
        self.animator.cancel();
        self.scroll = self.clamp_scroll(offset);
    }

    /// Advances the smooth scroll animation by one frame. Returns whether the offset moved.
    pub fn tick(&mut self) -> bool {
        match self.animator.tick() {
            Some(offset) => {
                let next = self.clamp_scroll(offset);
                let moved = next != self.scroll;
                self.scroll = next;
                moved
            }
            None => false,
        }
    }

    /// Viewport used for scrolling: the host viewport, falling back to the client size.
    pub fn visible_size(&self) -> Size {
        effective_viewport(self.viewport, self.document.client_size())
    }

    fn max_scroll(&self) -> ScrollOffset {
        let content = self.document.content_size();
        let viewport = self.visible_size();
        ScrollOffset::new(
            (content.width - viewport.width).max(0.0),
            (content.height - viewport.height).max(0.0),
        )
    }

    fn clamp_scroll(&self, offset: ScrollOffset) -> ScrollOffset {
        let max = self.max_scroll();
        ScrollOffset::new(offset.x.clamp(0.0, max.x), offset.y.clamp(0.0, max.y))
    }

    /// Offset that aligns `node`'s top edge with the viewport top and moves horizontally only as
    /// far as needed to reveal it.
    pub fn scroll_target_for(&self, node: NodeId) -> Option<ScrollOffset> {
        if !self.document.is_attached(node) {
            return None;
        }
        let rect = self.document.rect(node)?;
        let viewport = self.visible_size();

        let left = rect.x - self.scroll.x;
        let x = if left < 0.0 || rect.width > viewport.width {
            rect.x
        } else if left + rect.width > viewport.width {
            rect.right() - viewport.width
        } else {
            self.scroll.x
        };

        Some(self.clamp_scroll(ScrollOffset::new(x, rect.y)))
    }
}

impl Page for DocumentPage {
    fn is_attached(&self, node: NodeId) -> bool {
        self.document.is_attached(node)
    }

    fn bounding_rect(&self, node: NodeId) -> Option<BoundingRect> {
        if !self.document.is_attached(node) {
            return None;
        }
        self.document.rect(node).map(|rect| rect.to_bounding(self.scroll))
    }

    fn viewport_size(&self) -> Option<Size> {
        self.viewport
    }

    fn client_size(&self) -> Size {
        self.document.client_size()
    }

    fn set_highlighted(&mut self, node: NodeId, highlighted: bool) {
        if highlighted {
            self.document.add_class(node, HIGHLIGHT_CLASS);
        } else {
            self.document.remove_class(node, HIGHLIGHT_CLASS);
        }
    }

    fn request_scroll_into_view(&mut self, request: ScrollRequest) {
        self.scroll_requests = self.scroll_requests.saturating_add(1);
        let Some(target) = self.scroll_target_for(request.target) else {
            debug!(node = %request.target, "scroll request for node without layout box ignored");
            return;
        };

        match request.behavior {
            ScrollBehavior::Instant => self.scroll_to(target),
            ScrollBehavior::Smooth => {
                let superseded = self.animator.start(self.scroll, target);
                debug!(
                    node = %request.target,
                    from_y = self.scroll.y,
                    to_y = target.y,
                    superseded,
                    "smooth scroll started"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DocumentPage, Page, ScrollAnimator, ScrollBehavior, ScrollRequest, HIGHLIGHT_CLASS};
    use crate::model::fixtures::tall_page;
    use crate::model::{ScrollOffset, Size};

    fn settle(page: &mut DocumentPage) {
        while page.is_scrolling() {
            page.tick();
        }
    }

    #[test]
    fn smooth_scroll_aligns_target_top_with_viewport() {
        let (doc, paragraphs) = tall_page(10);
        let mut page = DocumentPage::with_animator(doc, ScrollAnimator::new(3));

        page.request_scroll_into_view(ScrollRequest::smooth(paragraphs[4]));
        assert!(page.is_scrolling());
        assert_eq!(page.scroll(), ScrollOffset::default(), "smooth scroll is not instant");

        settle(&mut page);
        assert_eq!(page.scroll(), ScrollOffset::new(0.0, 800.0));
        assert_eq!(page.bounding_rect(paragraphs[4]).map(|r| r.top), Some(0.0));
    }

    #[test]
    fn scroll_target_is_clamped_to_content() {
        let (doc, paragraphs) = tall_page(4);
        let mut page = DocumentPage::new(doc);
        page.request_scroll_into_view(ScrollRequest {
            target: paragraphs[3],
            behavior: ScrollBehavior::Instant,
        });
        // Content is 800 tall, the viewport 600: the page cannot scroll past 200.
        assert_eq!(page.scroll(), ScrollOffset::new(0.0, 200.0));
    }

    #[test]
    fn explicit_viewport_overrides_client_size() {
        let (doc, paragraphs) = tall_page(4);
        let mut page = DocumentPage::new(doc);
        page.set_viewport(Some(Size::new(800.0, 100.0)));
        page.request_scroll_into_view(ScrollRequest {
            target: paragraphs[2],
            behavior: ScrollBehavior::Instant,
        });
        assert_eq!(page.scroll(), ScrollOffset::new(0.0, 400.0));
    }

    #[test]
    fn manual_scroll_cancels_animation() {
        let (doc, paragraphs) = tall_page(10);
        let mut page = DocumentPage::new(doc);
        page.request_scroll_into_view(ScrollRequest::smooth(paragraphs[8]));
        page.tick();
        page.scroll_by(0.0, -10_000.0);
        assert!(!page.is_scrolling());
        assert_eq!(page.scroll(), ScrollOffset::default());
    }

    #[test]
    fn detached_nodes_have_no_bounding_rect_and_are_not_scrolled_to() {
        let (mut doc, paragraphs) = tall_page(5);
        doc.detach(paragraphs[4]).expect("detach");
        let mut page = DocumentPage::new(doc);

        assert!(!page.is_attached(paragraphs[4]));
        assert_eq!(page.bounding_rect(paragraphs[4]), None);
        page.request_scroll_into_view(ScrollRequest::smooth(paragraphs[4]));
        assert!(!page.is_scrolling());
        assert_eq!(page.scroll_requests(), 1);
    }

    #[test]
    fn highlight_toggles_presentational_class() {
        let (doc, paragraphs) = tall_page(2);
        let mut page = DocumentPage::new(doc);
        page.set_highlighted(paragraphs[1], true);
        assert!(page.document().has_class(paragraphs[1], HIGHLIGHT_CLASS));
        page.set_highlighted(paragraphs[1], false);
        assert!(!page.document().has_class(paragraphs[1], HIGHLIGHT_CLASS));
    }
}
