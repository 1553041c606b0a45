// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Domlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Domlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Panel chrome state.
//!
//! Where the mirror panel sits, whether it is open, and whether its list is shown. None of this
//! touches the mirror or the selection; hiding the list keeps both intact.

pub const DEFAULT_PANEL_LEFT: u16 = 4;
pub const DEFAULT_PANEL_TOP: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    rev: u64,
    left: u16,
    top: u16,
    open: bool,
    list_visible: bool,
    drag: Option<DragAnchor>,
}

/// Offset between the pointer and the panel origin captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DragAnchor {
    offset_x: u16,
    offset_y: u16,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            rev: 0,
            left: DEFAULT_PANEL_LEFT,
            top: DEFAULT_PANEL_TOP,
            open: true,
            list_visible: true,
            drag: None,
        }
    }
}

impl PanelState {
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn left(&self) -> u16 {
        self.left
    }

    pub fn top(&self) -> u16 {
        self.top
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn list_visible(&self) -> bool {
        self.list_visible
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn toggle_list(&mut self) {
        self.list_visible = !self.list_visible;
        self.bump();
    }

    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.drag = None;
        self.bump();
    }

    pub fn reopen(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.bump();
    }

    pub fn move_to(&mut self, left: u16, top: u16) {
        if self.left == left && self.top == top {
            return;
        }
        self.left = left;
        self.top = top;
        self.bump();
    }

    pub fn nudge(&mut self, dx: i32, dy: i32) {
        let left = clamp_to_u16(i32::from(self.left) + dx);
        let top = clamp_to_u16(i32::from(self.top) + dy);
        self.move_to(left, top);
    }

    /// Starts a header drag with the pointer at `(x, y)`.
    pub fn begin_drag(&mut self, x: u16, y: u16) {
        self.drag = Some(DragAnchor {
            offset_x: x.saturating_sub(self.left),
            offset_y: y.saturating_sub(self.top),
        });
    }

    /// Follows the pointer while dragging. Returns whether the panel moved.
    pub fn drag_to(&mut self, x: u16, y: u16) -> bool {
        let Some(anchor) = self.drag else {
            return false;
        };
        let before = (self.left, self.top);
        self.move_to(x.saturating_sub(anchor.offset_x), y.saturating_sub(anchor.offset_y));
        before != (self.left, self.top)
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    fn bump(&mut self) {
        self.rev = self.rev.wrapping_add(1);
    }
}

fn clamp_to_u16(value: i32) -> u16 {
    value.clamp(0, i32::from(u16::MAX)) as u16
}
