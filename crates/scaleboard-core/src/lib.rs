// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Scaleboard core
//!
//! A geometry engine for layouts which scale a fixed *reference* composition
//! into an arbitrary container while preserving its aspect ratio.
//!
//! -   [`layout::calculate_scale`] finds the uniform scale factor fitting one
//!     size into another, along with the limiting [`geom::Dimension`]
//! -   [`layout::mapper`] provides pure coordinate transforms between a
//!     container, a centered scaled rect and the unscaled source
//! -   [`layout::ReferenceFrame`] stores per-item reference geometry and maps
//!     it into the current container on each layout pass
//!
//! The engine never owns the items it positions: items are identified by
//! [`layout::ItemId`] and the caller applies the geometries returned by
//! [`layout::ReferenceFrame::layout`].

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub extern crate easy_cast as cast;

mod action;
mod error;

pub mod config;
pub mod geom;
pub mod layout;

pub use action::Action;
pub use error::{Error, Result};
