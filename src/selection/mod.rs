// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Domlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Domlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Selection state machine.
//!
//! Tracks the single active target. Moving the selection removes the highlight from the previous
//! target before applying it to the new one, then scrolls the new target into view unless it is
//! already fully visible.

use tracing::debug;

use crate::model::{EntryId, NodeId};
use crate::page::{Page, ScrollRequest};
use crate::visibility::is_visible;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Active {
        node: NodeId,
        /// The mirror entry whose activation made `node` active, if any.
        entry: Option<EntryId>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// `node` was already active; nothing changed on the page.
    Unchanged,
    /// `node` is now the highlighted target. `scrolled` tells whether a scroll was requested.
    Highlighted { scrolled: bool },
    /// `node` is no longer part of the page; the selection was left untouched.
    Detached,
}

/// Owned by the panel host for the lifetime of one mirror; recreate it to return to `Idle`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    state: SelectionState,
    rev: u64,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Bumped on every transition; lets hosts skip redraws when nothing changed.
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn active_node(&self) -> Option<NodeId> {
        match self.state {
            SelectionState::Idle => None,
            SelectionState::Active { node, .. } => Some(node),
        }
    }

    pub fn active_entry(&self) -> Option<EntryId> {
        match self.state {
            SelectionState::Idle => None,
            SelectionState::Active { entry, .. } => entry,
        }
    }

    /// Makes `node` the highlighted target.
    pub fn select<P: Page + ?Sized>(&mut self, page: &mut P, node: NodeId) -> SelectOutcome {
        self.select_from_entry(page, node, None)
    }

    pub(crate) fn select_from_entry<P: Page + ?Sized>(
        &mut self,
        page: &mut P,
        node: NodeId,
        entry: Option<EntryId>,
    ) -> SelectOutcome {
        if !page.is_attached(node) {
            debug!(%node, "selection of detached node ignored");
            return SelectOutcome::Detached;
        }

        if let SelectionState::Active {
            node: active,
            entry: active_entry,
        } = self.state
        {
            if active == node {
                // Same target through another entry: only the entry side moves.
                if entry.is_some() && entry != active_entry {
                    self.state = SelectionState::Active { node, entry };
                    self.rev = self.rev.wrapping_add(1);
                }
                return SelectOutcome::Unchanged;
            }
            page.set_highlighted(active, false);
        }

        page.set_highlighted(node, true);
        self.state = SelectionState::Active { node, entry };
        self.rev = self.rev.wrapping_add(1);

        let scrolled = !is_visible(page, node);
        if scrolled {
            page.request_scroll_into_view(ScrollRequest::smooth(node));
        }
        debug!(%node, scrolled, "selection moved");
        SelectOutcome::Highlighted { scrolled }
    }
}

#[cfg(test)]
mod tests {
    use super::{SelectOutcome, Selection, SelectionState};
    use crate::model::fixtures::{list_tree, tall_page};
    use crate::model::{BoundingRect, NodeId, Size};
    use crate::page::{DocumentPage, Page, ScrollRequest, HIGHLIGHT_CLASS};

    /// Records every call so ordering can be asserted.
    #[derive(Debug, Default)]
    struct RecordingPage {
        offscreen: Vec<NodeId>,
        detached: Vec<NodeId>,
        calls: Vec<String>,
        highlighted: Vec<NodeId>,
        scrolls: Vec<ScrollRequest>,
    }

    impl Page for RecordingPage {
        fn is_attached(&self, node: NodeId) -> bool {
            !self.detached.contains(&node)
        }

        fn bounding_rect(&self, node: NodeId) -> Option<BoundingRect> {
            if self.offscreen.contains(&node) {
                Some(BoundingRect::new(900.0, 0.0, 950.0, 100.0))
            } else {
                Some(BoundingRect::new(0.0, 0.0, 100.0, 100.0))
            }
        }

        fn viewport_size(&self) -> Option<Size> {
            Some(Size::new(800.0, 600.0))
        }

        fn client_size(&self) -> Size {
            Size::default()
        }

        fn set_highlighted(&mut self, node: NodeId, highlighted: bool) {
            if highlighted {
                self.calls.push(format!("on {node}"));
                self.highlighted.push(node);
            } else {
                self.calls.push(format!("off {node}"));
                self.highlighted.retain(|existing| *existing != node);
            }
        }

        fn request_scroll_into_view(&mut self, request: ScrollRequest) {
            self.calls.push(format!("scroll {}", request.target));
            self.scrolls.push(request);
        }
    }

    #[test]
    fn starts_idle() {
        let selection = Selection::new();
        assert_eq!(selection.state(), SelectionState::Idle);
        assert_eq!(selection.active_node(), None);
    }

    #[test]
    fn previous_highlight_is_removed_before_new_one_is_applied() {
        let mut page = RecordingPage::default();
        let mut selection = Selection::new();
        let (a, b) = (NodeId::new(1), NodeId::new(2));

        selection.select(&mut page, a);
        selection.select(&mut page, b);

        assert_eq!(page.calls, vec!["on node#1", "off node#1", "on node#2"]);
        assert_eq!(page.highlighted, vec![b]);
        assert_eq!(selection.active_node(), Some(b));
    }

    #[test]
    fn reselecting_active_node_is_a_no_op() {
        let mut page = RecordingPage {
            offscreen: vec![NodeId::new(5)],
            ..RecordingPage::default()
        };
        let mut selection = Selection::new();
        let node = NodeId::new(5);

        assert_eq!(
            selection.select(&mut page, node),
            SelectOutcome::Highlighted { scrolled: true }
        );
        let rev = selection.rev();
        assert_eq!(selection.select(&mut page, node), SelectOutcome::Unchanged);

        assert_eq!(page.highlighted.len(), 1);
        assert_eq!(page.scrolls.len(), 1);
        assert_eq!(selection.rev(), rev);
    }

    #[test]
    fn visible_targets_are_not_scrolled() {
        let mut page = RecordingPage::default();
        let mut selection = Selection::new();
        assert_eq!(
            selection.select(&mut page, NodeId::new(3)),
            SelectOutcome::Highlighted { scrolled: false }
        );
        assert!(page.scrolls.is_empty());
    }

    #[test]
    fn offscreen_targets_get_one_smooth_scroll_request() {
        let node = NodeId::new(9);
        let mut page = RecordingPage {
            offscreen: vec![node],
            ..RecordingPage::default()
        };
        let mut selection = Selection::new();
        selection.select(&mut page, node);
        assert_eq!(page.scrolls, vec![ScrollRequest::smooth(node)]);
        assert_eq!(page.calls.last().map(String::as_str), Some("scroll node#9"));
    }

    #[test]
    fn detached_target_leaves_state_untouched() {
        let (a, gone) = (NodeId::new(1), NodeId::new(2));
        let mut page = RecordingPage {
            detached: vec![gone],
            ..RecordingPage::default()
        };
        let mut selection = Selection::new();
        selection.select(&mut page, a);

        assert_eq!(selection.select(&mut page, gone), SelectOutcome::Detached);
        assert_eq!(selection.active_node(), Some(a));
        assert_eq!(page.highlighted, vec![a]);
        assert!(page.scrolls.is_empty());
    }

    #[test]
    fn at_most_one_highlight_after_any_sequence() {
        let tree = list_tree();
        let nodes = [tree.div, tree.ul, tree.li];
        let mut page = DocumentPage::new(tree.doc);
        let mut selection = Selection::new();

        for step in 0..30usize {
            let node = nodes[(step * 7 + step / 3) % nodes.len()];
            selection.select(&mut page, node);
            let highlighted = page.document().nodes_with_class(HIGHLIGHT_CLASS);
            assert_eq!(highlighted, vec![node]);
            assert_eq!(selection.active_node(), Some(node));
        }
    }

    #[test]
    fn selecting_offscreen_paragraph_scrolls_page() {
        let (doc, paragraphs) = tall_page(10);
        let mut page = DocumentPage::new(doc);
        let mut selection = Selection::new();

        assert_eq!(
            selection.select(&mut page, paragraphs[0]),
            SelectOutcome::Highlighted { scrolled: false }
        );
        assert_eq!(
            selection.select(&mut page, paragraphs[6]),
            SelectOutcome::Highlighted { scrolled: true }
        );
        assert_eq!(page.scroll_requests(), 1);
        assert!(page.is_scrolling());
    }
}
