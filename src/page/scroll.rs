// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Domlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Domlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::ScrollOffset;

pub const DEFAULT_SCROLL_FRAMES: u16 = 8;
pub const MAX_SCROLL_FRAMES: u16 = 60;

/// Eases the page scroll offset towards a target over a fixed number of ticks.
///
/// At most one animation is in flight. Starting a new one replaces the current animation and
/// continues from wherever the page is at that moment, so the latest request always wins.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimator {
    frames: u16,
    active: Option<ScrollAnimation>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrollAnimation {
    from: ScrollOffset,
    to: ScrollOffset,
    frame: u16,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_FRAMES)
    }
}

impl ScrollAnimator {
    pub fn new(frames: u16) -> Self {
        Self {
            frames: frames.clamp(1, MAX_SCROLL_FRAMES),
            active: None,
        }
    }

    pub fn frames(&self) -> u16 {
        self.frames
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    pub fn target(&self) -> Option<ScrollOffset> {
        self.active.map(|animation| animation.to)
    }

    /// Starts a new animation, superseding any in-flight one. Returns whether one was replaced.
    pub fn start(&mut self, from: ScrollOffset, to: ScrollOffset) -> bool {
        let superseded = self.active.is_some();
        if from == to {
            self.active = None;
            return superseded;
        }
        self.active = Some(ScrollAnimation { from, to, frame: 0 });
        superseded
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Advances one frame and returns the offset to apply, or `None` when idle.
    pub fn tick(&mut self) -> Option<ScrollOffset> {
        let animation = self.active.as_mut()?;
        animation.frame = animation.frame.saturating_add(1);
        let progress = f64::from(animation.frame) / f64::from(self.frames);
        if animation.frame >= self.frames {
            let to = animation.to;
            self.active = None;
            return Some(to);
        }

        let eased = ease_out_cubic(progress);
        Some(ScrollOffset::new(
            lerp(animation.from.x, animation.to.x, eased),
            lerp(animation.from.y, animation.to.y, eased),
        ))
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::{ScrollAnimator, MAX_SCROLL_FRAMES};
    use crate::model::ScrollOffset;

    #[test]
    fn frames_are_clamped() {
        assert_eq!(ScrollAnimator::new(0).frames(), 1);
        assert_eq!(ScrollAnimator::new(500).frames(), MAX_SCROLL_FRAMES);
    }

    #[test]
    fn tick_reaches_target_after_configured_frames() {
        let mut animator = ScrollAnimator::new(4);
        animator.start(ScrollOffset::new(0.0, 0.0), ScrollOffset::new(0.0, 100.0));

        let mut last: Option<ScrollOffset> = None;
        let mut ticks = 0;
        while let Some(offset) = animator.tick() {
            if let Some(prev) = last {
                assert!(offset.y >= prev.y, "animation must be monotonic");
            }
            last = Some(offset);
            ticks += 1;
        }

        assert_eq!(ticks, 4);
        assert_eq!(last, Some(ScrollOffset::new(0.0, 100.0)));
        assert!(!animator.is_animating());
    }

    #[test]
    fn new_request_supersedes_in_flight_animation() {
        let mut animator = ScrollAnimator::new(10);
        assert!(!animator.start(ScrollOffset::default(), ScrollOffset::new(0.0, 500.0)));
        let midway = animator.tick().expect("first frame");

        assert!(animator.start(midway, ScrollOffset::new(0.0, 20.0)));
        assert_eq!(animator.target(), Some(ScrollOffset::new(0.0, 20.0)));

        let mut last = midway;
        while let Some(offset) = animator.tick() {
            last = offset;
        }
        assert_eq!(last, ScrollOffset::new(0.0, 20.0));
    }

    #[test]
    fn start_at_target_is_idle() {
        let mut animator = ScrollAnimator::default();
        let here = ScrollOffset::new(3.0, 4.0);
        animator.start(here, here);
        assert!(!animator.is_animating());
        assert_eq!(animator.tick(), None);
    }
}
