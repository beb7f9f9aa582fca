// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Scaleboard prelude
//!
//! This module allows convenient importation of common unambiguous items:
//! ```
//! use scaleboard::prelude::*;
//! ```

#[doc(no_inline)]
pub use scaleboard_core::geom::{Coord, Dimension, Offset, Rect, Size};
#[doc(no_inline)]
pub use scaleboard_core::layout::{ItemId, ReferenceFrame};
#[doc(no_inline)]
pub use scaleboard_core::{Action, Error};
#[doc(no_inline)]
pub use scaleboard_widgets::{Fixed, Modifiers, NavKey, Notice, NoticeBoard, ScaledImage};
