// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Domlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Domlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON element snapshots.
//!
//! A snapshot is what a small in-page script would dump from a live document:
//!
//! ```json
//! {
//!   "client": { "width": 1280, "height": 720 },
//!   "root": {
//!     "tag": "BODY",
//!     "children": [
//!       { "tag": "DIV", "classes": ["card"], "rect": { "x": 0, "y": 0, "width": 300, "height": 80 } }
//!     ]
//!   }
//! }
//! ```
//!
//! `classes`, `text`, `rect` and `children` are optional.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::model::{Document, DocumentError, Element, NodeId, Rect, Size};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<Size>,
    pub root: ElementSnapshot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSnapshot {
    pub tag: SmolStr,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<SmolStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rect: Option<Rect>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementSnapshot>,
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid tag name {tag:?} at {location}")]
    InvalidTag { location: String, tag: String },
    #[error(transparent)]
    Document(#[from] DocumentError),
}

pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Document, SnapshotError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_snapshot(&source)
}

pub fn parse_snapshot(source: &str) -> Result<Document, SnapshotError> {
    let snapshot: DocumentSnapshot = serde_json::from_str(source)?;
    snapshot.into_document()
}

pub fn to_json(document: &Document) -> Result<String, SnapshotError> {
    let snapshot = DocumentSnapshot::from_document(document);
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

impl DocumentSnapshot {
    pub fn into_document(self) -> Result<Document, SnapshotError> {
        validate_tag(&self.root.tag, "root")?;

        let ElementSnapshot {
            tag,
            classes,
            text,
            rect,
            children,
        } = self.root;
        let mut document = Document::new(element_from_parts(tag, classes, text, rect));
        if let Some(client) = self.client {
            document.set_client_size(client);
        }

        let root = document.root();
        let mut stack = children
            .into_iter()
            .enumerate()
            .rev()
            .map(|(idx, child)| (root, format!("root > children[{idx}]"), child))
            .collect::<Vec<_>>();

        while let Some((parent, location, snapshot)) = stack.pop() {
            validate_tag(&snapshot.tag, &location)?;
            let ElementSnapshot {
                tag,
                classes,
                text,
                rect,
                children,
            } = snapshot;
            let id = document.append_child(parent, element_from_parts(tag, classes, text, rect))?;
            stack.extend(
                children
                    .into_iter()
                    .enumerate()
                    .rev()
                    .map(|(idx, child)| (id, format!("{location} > children[{idx}]"), child)),
            );
        }

        Ok(document)
    }

    pub fn from_document(document: &Document) -> Self {
        let client = document.client_size();
        Self {
            client: (client != Size::default()).then_some(client),
            root: element_snapshot(document, document.root()),
        }
    }
}

fn element_from_parts(
    tag: SmolStr,
    classes: Vec<SmolStr>,
    text: Option<String>,
    rect: Option<Rect>,
) -> Element {
    let mut element = Element::new(tag);
    for class in classes {
        element = element.with_class(class);
    }
    if let Some(text) = text {
        element = element.with_text(text);
    }
    if let Some(rect) = rect {
        element = element.with_rect(rect);
    }
    element
}

fn element_snapshot(document: &Document, node: NodeId) -> ElementSnapshot {
    let element = document.get(node);
    ElementSnapshot {
        tag: element.map(|e| SmolStr::new(e.tag())).unwrap_or_default(),
        classes: element.map(|e| e.classes().to_vec()).unwrap_or_default(),
        text: element.and_then(|e| e.text().map(ToOwned::to_owned)),
        rect: element.and_then(|e| e.rect()),
        children: document
            .children(node)
            .iter()
            .map(|child| element_snapshot(document, *child))
            .collect(),
    }
}

fn validate_tag(tag: &str, location: &str) -> Result<(), SnapshotError> {
    let valid = !tag.is_empty()
        && tag
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | ':' | '.'));
    if valid {
        Ok(())
    } else {
        Err(SnapshotError::InvalidTag {
            location: location.to_owned(),
            tag: tag.to_owned(),
        })
    }
}
