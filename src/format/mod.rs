// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Domlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Domlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Document snapshot import/export and plain-text mirror output.

pub mod outline;
pub mod snapshot;

pub use outline::render_outline;
pub use snapshot::{
    load_snapshot, parse_snapshot, to_json, DocumentSnapshot, ElementSnapshot, SnapshotError,
};
