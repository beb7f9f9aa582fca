// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Scaleboard widget models
//!
//! These types hold the geometry state of widgets built on the scaling
//! layout engine, leaving drawing and event delivery to the host toolkit.
//!
//! -   [`ScaledImage`]: an image scaled to fit its widget, aspect ratio
//!     preserved, with coordinate mapping for hit-testing
//! -   [`NoticeBoard`]: a background plus [`Notice`]s which scale together;
//!     notices may be moved and resized via the keyboard ([`NavKey`],
//!     [`Modifiers`]) unless [`Fixed`]

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod image;
mod notice;

pub use image::ScaledImage;
pub use notice::{Fixed, Modifiers, NavKey, Notice, NoticeBoard};
