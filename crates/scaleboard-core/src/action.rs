// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Action enum

use bitflags::bitflags;

bitflags! {
    /// Action required after a modification
    ///
    /// This type is returned by methods which change layout state without
    /// themselves recomputing geometry. The caller driving layout passes is
    /// expected to act on it, e.g. by calling
    /// [`ReferenceFrame::relayout`](crate::layout::ReferenceFrame::relayout).
    ///
    /// Two `Action` values may be combined via bit-or (`a | b`).
    #[must_use]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Action: u32 {
        /// Re-run layout using the current outer rect
        const SET_RECT = 1 << 0;
        /// Size hints changed; the container may need resizing
        ///
        /// Implies [`Action::SET_RECT`].
        const RESIZE = 1 << 1;
    }
}

impl Action {
    /// True if a layout pass is required
    #[inline]
    pub fn needs_layout(self) -> bool {
        self.intersects(Action::SET_RECT | Action::RESIZE)
    }
}
