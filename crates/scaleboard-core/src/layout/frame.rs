// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Reference frame: per-item reference geometry and the layout pass

use super::{calculate_scale, centered_offset};
use crate::cast::Conv;
use crate::geom::{Coord, Rect, Size, round};
use crate::{Action, Error, Result};
use linear_map::LinearMap;
use std::fmt;

/// Identifier of an item registered with a [`ReferenceFrame`]
///
/// This is an opaque handle; the frame assumes nothing about what an item is.
/// Identifiers may be chosen by the caller ([`ItemId::new`]) or issued by
/// [`ReferenceFrame::add_item`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(u64);

impl ItemId {
    /// Construct from a caller-chosen number
    #[inline]
    pub const fn new(n: u64) -> Self {
        ItemId(n)
    }

    /// Get the inner number
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Output of a layout pass: the current geometry of each item
///
/// Iteration order is registration order, except that deregistering an item
/// moves the most recently registered item into its place.
pub type Geometries = LinearMap<ItemId, Rect>;

#[derive(Clone, Copy, Debug)]
struct Rects {
    reference: Rect,
    current: Rect,
}

/// A scaling layout over a fixed reference size
///
/// The frame owns a *reference* rect, set by [`Self::set_reference_size`],
/// and a *current* rect derived from it on each layout pass. Each registered
/// item has a reference geometry, relative to the reference rect. On
/// [`Self::layout`] the whole composition is scaled to the largest size
/// fitting the outer rect (preserving the aspect ratio of the reference
/// rect) and centered along the non-limiting axis.
///
/// A new frame is uninitialized: every geometry operation fails with
/// [`Error::NotInitialized`] until a reference size is set.
///
/// The frame never modifies items; it returns their geometries for the
/// caller to apply.
#[derive(Clone, Debug, Default)]
pub struct ReferenceFrame {
    rects: Option<Rects>,
    items: LinearMap<ItemId, Rect>,
    outer: Option<Rect>,
    next_id: u64,
}

impl ReferenceFrame {
    /// Construct an uninitialized frame
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct with the given reference size
    pub fn with_reference_size(size: Size) -> Result<Self> {
        let mut frame = Self::new();
        let _ = frame.set_reference_size(size)?;
        Ok(frame)
    }

    /// True once a reference size has been set
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.rects.is_some()
    }

    /// True once a layout pass has been performed
    ///
    /// An attached frame remembers the outer rect of its last layout pass.
    #[inline]
    pub fn is_attached(&self) -> bool {
        self.outer.is_some()
    }

    /// The outer rect of the last layout pass, if any
    #[inline]
    pub fn outer_rect(&self) -> Option<Rect> {
        self.outer
    }

    fn rects(&self) -> Result<&Rects> {
        self.rects.as_ref().ok_or(Error::NotInitialized)
    }

    /// Set the reference size
    ///
    /// Both components must be positive, otherwise [`Error::InvalidSize`] is
    /// returned. The reference rect becomes `(0, 0, width, height)` and the
    /// current rect is reset to equal it.
    ///
    /// Item reference geometries are kept as they are. When attached, the
    /// returned [`Action::RESIZE`] requests a new layout pass.
    pub fn set_reference_size(&mut self, size: Size) -> Result<Action> {
        if !size.is_positive() {
            return Err(Error::InvalidSize(size));
        }

        log::debug!("set_reference_size: {size:?}");
        let reference = Rect::from_size(size);
        self.rects = Some(Rects {
            reference,
            current: reference,
        });

        Ok(match self.is_attached() {
            true => Action::RESIZE,
            false => Action::empty(),
        })
    }

    /// The reference rect
    pub fn reference_rect(&self) -> Result<Rect> {
        Ok(self.rects()?.reference)
    }

    /// The current rect: the reference rect as scaled by the last layout pass
    ///
    /// Its position is always the origin; see [`Self::layout`] for the
    /// centering offset.
    pub fn current_rect(&self) -> Result<Rect> {
        Ok(self.rects()?.current)
    }

    /// Register `id` with the given reference geometry
    ///
    /// Fails with [`Error::DuplicateItem`] if `id` is already registered; the
    /// item must be deregistered first.
    pub fn register_item(&mut self, id: ItemId, geometry: Rect) -> Result<()> {
        self.rects()?;
        if self.items.contains_key(&id) {
            return Err(Error::DuplicateItem(id));
        }

        log::debug!("register_item: {id} at {geometry}");
        self.items.insert(id, geometry);
        Ok(())
    }

    /// Register a new item with the given reference geometry
    ///
    /// Returns a fresh identifier not currently in use.
    pub fn add_item(&mut self, geometry: Rect) -> Result<ItemId> {
        self.rects()?;
        let mut id = ItemId(self.next_id);
        while self.items.contains_key(&id) {
            id = ItemId(id.0.wrapping_add(1));
        }
        self.next_id = id.0.wrapping_add(1);
        self.register_item(id, geometry)?;
        Ok(id)
    }

    /// Deregister `id`, returning its reference geometry
    pub fn deregister_item(&mut self, id: ItemId) -> Result<Rect> {
        self.rects()?;
        let geometry = self.items.remove(&id).ok_or(Error::UnknownItem(id))?;
        log::debug!("deregister_item: {id}");
        Ok(geometry)
    }

    /// Deregister all items
    pub fn clear(&mut self) {
        log::debug!("clear: removing {} items", self.items.len());
        self.items.clear();
    }

    /// True if `id` is registered
    #[inline]
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// Number of registered items
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if no items are registered
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over registered items and their reference geometries
    ///
    /// Items are visited in registration order until one is deregistered;
    /// see [`Geometries`].
    pub fn items(&self) -> impl Iterator<Item = (ItemId, Rect)> + '_ {
        self.items.iter().map(|(id, rect)| (*id, *rect))
    }

    /// Get the reference geometry of `id`
    pub fn reference_geometry(&self, id: ItemId) -> Result<Rect> {
        self.rects()?;
        self.items.get(&id).copied().ok_or(Error::UnknownItem(id))
    }

    /// Replace the reference geometry of `id`
    ///
    /// When attached, returns [`Action::SET_RECT`]: the caller should
    /// [`Self::relayout`] to apply the change.
    pub fn set_reference_geometry(&mut self, id: ItemId, geometry: Rect) -> Result<Action> {
        self.rects()?;
        let entry = self.items.get_mut(&id).ok_or(Error::UnknownItem(id))?;
        log::trace!("set_reference_geometry: {id} from {} to {geometry}", *entry);
        *entry = geometry;

        Ok(match self.is_attached() {
            true => Action::SET_RECT,
            false => Action::empty(),
        })
    }

    /// Lay out all items within `outer`
    ///
    /// The scale is that fitting the reference rect into `outer`. Every item's
    /// reference geometry is scaled (each component rounded separately) then
    /// offset to center the scaled composition along the non-limiting axis.
    /// Geometries are relative to the origin of the container; `outer.pos`
    /// is not added.
    ///
    /// The frame remembers `outer` (see [`Self::relayout`]). Repeated calls
    /// with the same `outer` and no intervening change give identical output.
    ///
    /// Fails with [`Error::OutOfRange`] if some item's scaled geometry
    /// overflows `i32`; the frame is then left unchanged.
    pub fn layout(&mut self, outer: Rect) -> Result<Geometries> {
        let rects = self.rects.as_mut().ok_or(Error::NotInitialized)?;
        let (scale, limit) = calculate_scale(rects.reference.size, outer.size)?;
        let current = rects.reference.size.scaled(scale);

        let mut offset = centered_offset(outer.size, current);
        offset.set_component(limit, 0);
        log::trace!(
            "layout: outer={outer}, scale={scale}, limit={limit}, offset={offset:?}, items={}",
            self.items.len()
        );

        let geometries = self
            .items
            .iter()
            .map(|(id, rect)| {
                rect.checked_scaled(scale)
                    .and_then(|rect| rect.checked_translate(offset))
                    .map(|rect| (*id, rect))
                    .ok_or(Error::OutOfRange(*id))
            })
            .collect::<Result<Geometries>>()?;

        rects.current.size = current;
        self.outer = Some(outer);
        Ok(geometries)
    }

    /// Repeat the last layout pass
    ///
    /// Returns `None` if no layout pass has been performed yet.
    pub fn relayout(&mut self) -> Result<Option<Geometries>> {
        match self.outer {
            Some(outer) => self.layout(outer).map(Some),
            None => {
                self.rects()?;
                Ok(None)
            }
        }
    }

    /// The current scale: current width over reference width
    ///
    /// This is `1.0` until the first layout pass.
    pub fn current_scale(&self) -> Result<f64> {
        let rects = self.rects()?;
        Ok(f64::conv(rects.current.size.0) / f64::conv(rects.reference.size.0))
    }

    /// Map a point in the container's local space to reference space
    ///
    /// `outer` is the container size. This inverts the scaling and centering
    /// applied by [`Self::layout`], using [`Self::current_scale`].
    pub fn widget_to_reference(&self, point: Coord, outer: Size) -> Result<Coord> {
        let scale = self.current_scale()?;
        let (rw, rh) = self.rects()?.reference.size.as_f64();
        let (ow, oh) = outer.as_f64();
        let x = f64::conv(point.0) / scale - (ow / scale - rw) / 2.0;
        let y = f64::conv(point.1) / scale - (oh / scale - rh) / 2.0;
        Ok(Coord(round(x), round(y)))
    }

    /// Preferred size: the bounding box of the reference rect and all items
    pub fn size_hint(&self) -> Result<Size> {
        let reference = self.rects()?.reference;
        let bounds = self
            .items
            .values()
            .fold(reference, |bounds, rect| bounds.union(rect));
        Ok(bounds.size)
    }
}
