// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Scaling layout engine
//!
//! Units are those of the caller (usually physical pixels).
//!
//! ## Scale calculation
//!
//! [`calculate_scale`] is the heart of the engine: it finds the largest
//! uniform scale at which one size fits within another, reporting which
//! [`Dimension`] was limiting. Ties resolve to [`Dimension::Height`].
//!
//! ## Coordinate mapping
//!
//! The [`mapper`] module provides pure transforms used for reverse lookups on
//! proportionally scaled, centered content (e.g. hit-testing a scaled image).
//!
//! ## Reference frames
//!
//! A [`ReferenceFrame`] stores the *reference* geometry of each registered
//! item, laid out against a fixed reference size. Each call to
//! [`ReferenceFrame::layout`] scales the whole composition to fit the outer
//! rect, centers it along the non-limiting axis, and returns the resulting
//! [`Geometries`].
//!
//! [`Dimension`]: crate::geom::Dimension
//! [`Dimension::Height`]: crate::geom::Dimension::Height

mod frame;
pub mod mapper;
mod scale;

pub use frame::{Geometries, ItemId, ReferenceFrame};
pub use mapper::{centered_offset, fit_rect_into_frame, map_current_to_source, map_outer_to_current};
pub use scale::calculate_scale;
