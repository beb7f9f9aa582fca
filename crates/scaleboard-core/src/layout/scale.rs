// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Uniform scale calculation

use crate::geom::{Dimension, Size};
use crate::{Error, Result};

/// Calculate the scale factor fitting `scaling` into `framing`
///
/// Returns `(scale, limit)`: multiplying both components of `scaling` by
/// `scale` yields the largest size with the aspect ratio of `scaling` which
/// fits within `framing`. `limit` names the binding axis, on which the scaled
/// size equals `framing` exactly.
///
/// When both axes yield the same ratio, the result is [`Dimension::Height`].
///
/// Both sizes must be positive on both axes, otherwise
/// [`Error::InvalidRectangle`] is returned. Position is irrelevant here;
/// pass `rect.size` for a rect.
pub fn calculate_scale(scaling: Size, framing: Size) -> Result<(f64, Dimension)> {
    for size in [scaling, framing] {
        if !size.is_positive() {
            return Err(Error::InvalidRectangle(size));
        }
    }

    let (sw, sh) = scaling.as_f64();
    let (fw, fh) = framing.as_f64();
    let w_ratio = fw / sw;
    let h_ratio = fh / sh;
    if w_ratio < h_ratio {
        Ok((w_ratio, Dimension::Width))
    } else {
        Ok((h_ratio, Dimension::Height))
    }
}
