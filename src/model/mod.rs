// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Domlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Domlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A `Document` is the inspected element tree (the targets). Geometry types describe where
//! elements sit in document space and relative to the viewport.

pub mod document;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod geometry;
pub mod ids;

pub use document::{Document, DocumentError, Element};
pub use geometry::{BoundingRect, Rect, ScrollOffset, Size};
pub use ids::{EntryId, Idx, IdxError, NodeId};
