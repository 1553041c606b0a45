// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Domlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Domlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tree mirror builder.
//!
//! `build` walks a document subtree once, depth-first and pre-order, and produces a
//! [`MirrorTree`]: one [`MirrorEntry`] per element, except that elements whose tag is in
//! [`EXCLUDED_TAGS`] are skipped together with everything below them. The tree is plain data;
//! rendering it is up to the panel host.

use tracing::debug;

use crate::model::{Document, EntryId, NodeId};
use crate::page::{Page, HIGHLIGHT_CLASS};
use crate::selection::{SelectOutcome, Selection};

/// Tags never mirrored. Matched case-sensitively against exactly these spellings.
pub const EXCLUDED_TAGS: [&str; 4] = ["script", "SCRIPT", "path", "PATH"];

pub fn is_excluded_tag(tag: &str) -> bool {
    EXCLUDED_TAGS.contains(&tag)
}

/// Row label for an element: `Tag name: <DIV>, class: "menu".`
pub fn entry_label(tag: &str, first_class: Option<&str>) -> String {
    let mut label = format!("Tag name: <{tag}>");
    if let Some(class) = first_class.filter(|class| !class.is_empty()) {
        label.push_str(&format!(", class: \"{class}\""));
    }
    label.push('.');
    label
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorEntry {
    id: EntryId,
    target: NodeId,
    label: String,
    depth: usize,
    parent: Option<EntryId>,
    children: Vec<EntryId>,
}

impl MirrorEntry {
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// The element this entry stands for. Not an owning reference.
    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Nesting level below the mirrored root (the root entry is at depth 0).
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn parent(&self) -> Option<EntryId> {
        self.parent
    }

    pub fn children(&self) -> &[EntryId] {
        &self.children
    }
}

/// Entries produced by one `build` call, stored in pre-order (which is also display order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorTree {
    root_target: NodeId,
    entries: Vec<MirrorEntry>,
}

impl MirrorTree {
    pub fn root_target(&self) -> NodeId {
        self.root_target
    }

    pub fn root(&self) -> Option<&MirrorEntry> {
        self.entries.first()
    }

    pub fn entries(&self) -> &[MirrorEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, id: EntryId) -> Option<&MirrorEntry> {
        self.entries.get(id.index())
    }

    /// First entry mirroring `target`, if any.
    pub fn entry_for(&self, target: NodeId) -> Option<&MirrorEntry> {
        self.entries.iter().find(|entry| entry.target == target)
    }

    /// The entry carrying the selected marker, derived from `selection` so it always mirrors the
    /// highlighted node.
    ///
    /// The entry that triggered the selection wins; a node selected directly through
    /// [`Selection::select`] marks its first entry. `None` when the active node is not mirrored.
    pub fn selected(&self, selection: &Selection) -> Option<EntryId> {
        let node = selection.active_node()?;
        selection
            .active_entry()
            .filter(|id| self.entry(*id).is_some_and(|entry| entry.target == node))
            .or_else(|| self.entry_for(node).map(MirrorEntry::id))
    }

    pub fn is_selected(&self, id: EntryId, selection: &Selection) -> bool {
        self.selected(selection) == Some(id)
    }

    /// Activation handler of the entry `id`.
    ///
    /// Only this entry reacts; ancestors are not notified. The entry's target is selected through
    /// `selection`, and unless the target has left the page, this entry takes the selected
    /// marker from whichever entry held it.
    pub fn activate<P: Page + ?Sized>(
        &self,
        id: EntryId,
        selection: &mut Selection,
        page: &mut P,
    ) -> Option<SelectOutcome> {
        let target = self.entry(id)?.target;
        let outcome = selection.select_from_entry(page, target, Some(id));
        debug!(entry = %id, node = %target, ?outcome, "mirror entry activated");
        Some(outcome)
    }
}

/// Mirrors the subtree rooted at `root`.
///
/// A detached or unknown root, or one whose tag is excluded, yields an empty tree.
pub fn build(document: &Document, root: NodeId) -> MirrorTree {
    let mut entries = Vec::<MirrorEntry>::new();

    if document.is_attached(root) {
        // (node, parent entry, depth); children are pushed in reverse to pop in document order.
        let mut stack = vec![(root, None::<EntryId>, 0usize)];
        while let Some((node, parent, depth)) = stack.pop() {
            let Some(element) = document.get(node) else {
                continue;
            };
            if is_excluded_tag(element.tag()) {
                continue;
            }

            // Entries never outnumber document nodes, whose ids already fit.
            let Ok(id) = EntryId::from_usize(entries.len()) else {
                break;
            };
            // The selection's own highlight class is not part of the element's identity.
            let class = element
                .classes()
                .iter()
                .map(|class| class.as_str())
                .find(|class| *class != HIGHLIGHT_CLASS);
            entries.push(MirrorEntry {
                id,
                target: node,
                label: entry_label(element.tag(), class),
                depth,
                parent,
                children: Vec::new(),
            });
            if let Some(parent) = parent {
                entries[parent.index()].children.push(id);
            }

            stack.extend(
                element
                    .children()
                    .iter()
                    .rev()
                    .map(|child| (*child, Some(id), depth + 1)),
            );
        }
    }

    debug!(root = %root, entries = entries.len(), "mirror built");
    MirrorTree {
        root_target: root,
        entries,
    }
}
