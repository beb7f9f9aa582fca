// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Error types

use crate::geom::{Rect, Size};
use crate::layout::ItemId;
use thiserror::Error;

/// Geometry engine errors
///
/// All variants are contract violations by the caller. None are transient;
/// retrying the same call yields the same error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A size used as a scaling basis is not positive on both axes
    #[error("invalid rectangle: size {0:?} must be positive on both axes")]
    InvalidRectangle(Size),
    /// A reference size is not positive on both axes
    #[error("invalid reference size {0:?}: width and height must be positive")]
    InvalidSize(Size),
    /// A geometry operation was used before the reference size was set
    #[error("reference frame not initialized: set a reference size first")]
    NotInitialized,
    /// An item is already registered with this identifier
    #[error("item {0} is already registered")]
    DuplicateItem(ItemId),
    /// No item is registered with this identifier
    #[error("item {0} is not registered")]
    UnknownItem(ItemId),
    /// A rect to fit or fit into has zero width or height
    #[error("cannot fit with zero-area rect {0}")]
    ZeroAreaRect(Rect),
    /// The scaled geometry of an item does not fit the coordinate range
    #[error("geometry of item {0} is out of range after scaling")]
    OutOfRange(ItemId),
}

/// Result type with [`enum@Error`]
pub type Result<T, E = Error> = std::result::Result<T, E>;
