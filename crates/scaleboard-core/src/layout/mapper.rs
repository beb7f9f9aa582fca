// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Coordinate mapping for scaled content
//!
//! Three coordinate spaces are involved when content is displayed scaled and
//! centered within a container:
//!
//! -   *outer*: the container's local space (origin at its top-left corner)
//! -   *current*: the displayed, scaled content (origin at its top-left corner)
//! -   *source*: the unscaled content
//!
//! [`fit_rect_into_frame`] computes the displayed size; [`map_outer_to_current`]
//! and [`map_current_to_source`] compose to map an outer coordinate back to
//! source coordinates.

use super::calculate_scale;
use crate::cast::Conv;
use crate::geom::{Coord, Offset, Rect, Size, round};
use crate::{Error, Result};

/// Fit `source` into `target`, preserving the aspect ratio of `source`
///
/// Returns the largest rect with the aspect ratio of `source` which fits
/// within `target`, positioned at `target.pos`. Use [`centered_offset`] to
/// center the result.
///
/// Returns [`Error::ZeroAreaRect`] if either rect has zero width or height.
pub fn fit_rect_into_frame(source: Rect, target: Rect) -> Result<Rect> {
    for rect in [source, target] {
        if rect.size.has_zero_extent() {
            return Err(Error::ZeroAreaRect(rect));
        }
    }

    let (scale, _) = calculate_scale(source.size, target.size)?;
    Ok(Rect::new(target.pos, source.size.scaled(scale)))
}

/// The offset placing `inner` at the center of `outer`
///
/// Each component is `round((outer - inner) / 2)`. This is negative where
/// `inner` is the larger.
pub fn centered_offset(outer: Size, inner: Size) -> Offset {
    let (ow, oh) = outer.as_f64();
    let (iw, ih) = inner.as_f64();
    let (x, y) = ((ow - iw) / 2.0, (oh - ih) / 2.0);
    Offset(round(x), round(y))
}

/// Map a coordinate from outer space to the space of a centered child
///
/// `point` is relative to the container of size `outer`; the result is
/// relative to the top-left corner of a child of size `current` centered
/// within it.
#[inline]
pub fn map_outer_to_current(point: Coord, outer: Size, current: Size) -> Coord {
    point - centered_offset(outer, current)
}

/// Map a coordinate on scaled content back to unscaled (source) coordinates
///
/// `scale` is the ratio of displayed size to source size and must be
/// positive.
#[inline]
pub fn map_current_to_source(point: Coord, scale: f64) -> Coord {
    debug_assert!(scale > 0.0, "map_current_to_source: non-positive scale {scale}");
    let x = f64::conv(point.0) / scale;
    let y = f64::conv(point.1) / scale;
    Coord(round(x), round(y))
}
