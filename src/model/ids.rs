// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Domlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Domlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A typed index into one of the arenas (document nodes, mirror entries).
///
/// Indices are only meaningful for the arena that produced them. They are `Copy` and compare by
/// value, so they can be stored freely in selection state and UI caches without borrowing.
pub struct Idx<T> {
    value: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Idx<T> {
    pub(crate) fn from_usize(value: usize) -> Result<Self, IdxError> {
        let value = u32::try_from(value).map_err(|_| IdxError::Overflow)?;
        Ok(Self::new(value))
    }

    pub const fn new(value: u32) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub const fn get(self) -> u32 {
        self.value
    }

    pub const fn index(self) -> usize {
        self.value as usize
    }
}

// Manual impls keep `T` free of trait bounds (tags are uninhabited enums).
impl<T> Clone for Idx<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Idx<T> {}

impl<T> PartialEq for Idx<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Idx<T> {}

impl<T> PartialOrd for Idx<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Idx<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Hash for Idx<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: IdxTag> fmt::Debug for Idx<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", T::PREFIX, self.value)
    }
}

impl<T: IdxTag> fmt::Display for Idx<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", T::PREFIX, self.value)
    }
}

pub trait IdxTag {
    const PREFIX: &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdxError {
    #[error("arena index does not fit in 32 bits")]
    Overflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeIdTag {}
impl IdxTag for NodeIdTag {
    const PREFIX: &'static str = "node";
}
pub type NodeId = Idx<NodeIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntryIdTag {}
impl IdxTag for EntryIdTag {
    const PREFIX: &'static str = "entry";
}
pub type EntryId = Idx<EntryIdTag>;

#[cfg(test)]
mod tests {
    use super::{EntryId, Idx, IdxError, NodeId};

    #[test]
    fn idx_displays_with_arena_prefix() {
        assert_eq!(NodeId::new(3).to_string(), "node#3");
        assert_eq!(format!("{:?}", EntryId::new(0)), "entry#0");
    }

    #[test]
    fn idx_rejects_values_past_u32() {
        let result: Result<NodeId, _> = Idx::from_usize(u32::MAX as usize + 1);
        assert_eq!(result, Err(IdxError::Overflow));
    }
}
