// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Domlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Domlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;
use smol_str::SmolStr;

use super::geometry::{Rect, Size};
use super::ids::{IdxError, NodeId};

/// One element of the inspected tree.
///
/// Tag names are stored verbatim (browsers report HTML tags upper-cased and SVG tags
/// lower-cased); nothing here normalizes case.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: SmolStr,
    classes: SmallVec<[SmolStr; 2]>,
    text: Option<String>,
    rect: Option<Rect>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    pub fn new(tag: impl Into<SmolStr>) -> Self {
        Self {
            tag: tag.into(),
            classes: SmallVec::new(),
            text: None,
            rect: None,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<SmolStr>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = Some(rect);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn classes(&self) -> &[SmolStr] {
        &self.classes
    }

    pub fn first_class(&self) -> Option<&str> {
        self.classes.first().map(SmolStr::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena-backed element tree.
///
/// Nodes are never freed: removing a node from the tree only unlinks it from its parent, which
/// leaves every `NodeId` handed out earlier valid (but detached).
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    nodes: Vec<Element>,
    root: NodeId,
    client_size: Size,
}

impl Document {
    pub fn new(root: Element) -> Self {
        let mut root = root;
        root.parent = None;
        root.children.clear();
        Self {
            nodes: vec![root],
            root: NodeId::new(0),
            client_size: Size::default(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Size of the document element's client area, used when no viewport size is known.
    pub fn client_size(&self) -> Size {
        self.client_size
    }

    pub fn set_client_size(&mut self, size: Size) {
        self.client_size = size;
    }

    pub fn get(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.index())
    }

    fn get_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(node.index())
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.get(node).map(Element::tag)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.get(node).map(Element::children).unwrap_or(&[])
    }

    /// Appends `element` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, element: Element) -> Result<NodeId, DocumentError> {
        if self.get(parent).is_none() {
            return Err(DocumentError::UnknownNode(parent));
        }

        let id = NodeId::from_usize(self.nodes.len())?;
        let mut element = element;
        element.parent = Some(parent);
        element.children.clear();
        self.nodes.push(element);
        if let Some(parent) = self.get_mut(parent) {
            parent.children.push(id);
        }
        Ok(id)
    }

    /// Unlinks `node` (and with it, its subtree) from the tree.
    pub fn detach(&mut self, node: NodeId) -> Result<(), DocumentError> {
        if node == self.root {
            return Err(DocumentError::DetachRoot);
        }
        let parent = self
            .get(node)
            .ok_or(DocumentError::UnknownNode(node))?
            .parent;

        if let Some(parent) = parent {
            if let Some(parent) = self.get_mut(parent) {
                parent.children.retain(|child| *child != node);
            }
        }
        if let Some(element) = self.get_mut(node) {
            element.parent = None;
        }
        Ok(())
    }

    /// Whether `node` is still reachable from the document root.
    pub fn is_attached(&self, node: NodeId) -> bool {
        let mut current = node;
        loop {
            if current == self.root {
                return true;
            }
            match self.get(current).and_then(Element::parent) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    pub fn rect(&self, node: NodeId) -> Option<Rect> {
        self.get(node).and_then(Element::rect)
    }

    pub fn set_rect(&mut self, node: NodeId, rect: Rect) {
        if let Some(element) = self.get_mut(node) {
            element.rect = Some(rect);
        }
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.get(node).is_some_and(|element| element.has_class(class))
    }

    /// Adds a class unless already present. Returns whether the class list changed.
    pub fn add_class(&mut self, node: NodeId, class: &str) -> bool {
        let Some(element) = self.get_mut(node) else {
            return false;
        };
        if element.has_class(class) {
            return false;
        }
        element.classes.push(SmolStr::new(class));
        true
    }

    /// Removes every occurrence of a class. Returns whether the class list changed.
    pub fn remove_class(&mut self, node: NodeId, class: &str) -> bool {
        let Some(element) = self.get_mut(node) else {
            return false;
        };
        let before = element.classes.len();
        element.classes.retain(|existing| existing.as_str() != class);
        element.classes.len() != before
    }

    /// Attached nodes in pre-order starting at the root.
    pub fn descendants(&self) -> Vec<NodeId> {
        self.subtree(self.root)
    }

    /// `node` and its descendants in pre-order.
    pub fn subtree(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        if self.get(node).is_none() {
            return out;
        }
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        out
    }

    /// Nodes carrying `class` among those reachable from the root.
    pub fn nodes_with_class(&self, class: &str) -> Vec<NodeId> {
        self.descendants()
            .into_iter()
            .filter(|node| self.has_class(*node, class))
            .collect()
    }

    /// Far corner of the laid-out content, i.e. the scrollable extent of the page.
    pub fn content_size(&self) -> Size {
        self.descendants()
            .into_iter()
            .filter_map(|node| self.rect(node))
            .fold(Size::default(), |acc, rect| {
                Size::new(acc.width.max(rect.right()), acc.height.max(rect.bottom()))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("unknown node {0}")]
    UnknownNode(NodeId),
    #[error("the document root cannot be detached")]
    DetachRoot,
    #[error(transparent)]
    Idx(#[from] IdxError),
}
