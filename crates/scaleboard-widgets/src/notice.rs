// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Notice board over a scaling layout

use crate::ScaledImage;
use bitflags::bitflags;
use linear_map::LinearMap;
use scaleboard::config::{self, Config, Steps};
use scaleboard::geom::{Coord, Rect, Size};
use scaleboard::layout::{Geometries, ItemId, ReferenceFrame};
use scaleboard::{Action, Error, Result};

bitflags! {
    /// Geometry components of a notice locked against keyboard editing
    ///
    /// Each flag locks exactly the component it names: `X` and `Y` block
    /// moves, `WIDTH` and `HEIGHT` block resizes.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Fixed: u8 {
        /// Horizontal position
        const X = 1 << 0;
        /// Vertical position
        const Y = 1 << 1;
        /// Width
        const WIDTH = 1 << 2;
        /// Height
        const HEIGHT = 1 << 3;
        /// All components
        const ALL = Self::X.bits() | Self::Y.bits() | Self::WIDTH.bits() | Self::HEIGHT.bits();
    }
}

bitflags! {
    /// Keyboard modifier state relevant to notice editing
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Use the large step
        const SHIFT = 1 << 0;
        /// Resize instead of move
        const CTRL = 1 << 1;
    }
}

/// Arrow keys used to edit a notice
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavKey {
    Left,
    Right,
    Up,
    Down,
}

/// A notice on a [`NoticeBoard`]
///
/// The notice's geometry lives in the board's [`ReferenceFrame`]; the notice
/// itself only tracks which components may be edited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Notice {
    fixed: Fixed,
}

impl Notice {
    /// Construct (nothing fixed)
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set fixed components (inline)
    #[must_use]
    #[inline]
    pub fn with_fixed(mut self, fixed: Fixed) -> Self {
        self.fixed = fixed;
        self
    }

    /// Get fixed components
    #[inline]
    pub fn fixed(&self) -> Fixed {
        self.fixed
    }

    /// Lock or unlock the given components
    #[inline]
    pub fn set_fixed(&mut self, fixed: Fixed, value: bool) {
        self.fixed.set(fixed, value);
    }

    /// True if all of the given components are locked
    #[inline]
    pub fn is_fixed(&self, fixed: Fixed) -> bool {
        self.fixed.contains(fixed)
    }

    /// Compute the geometry after a key press
    ///
    /// Without [`Modifiers::CTRL`] the notice moves by one step; with it, the
    /// notice is resized by one step about its center. [`Modifiers::SHIFT`]
    /// selects the large step.
    ///
    /// Returns `None` if the key is blocked by a fixed component, a shrink
    /// would make the extent negative or the step is not positive.
    pub fn edited(&self, geom: Rect, key: NavKey, modifiers: Modifiers, steps: Steps) -> Option<Rect> {
        let step = match modifiers.contains(Modifiers::SHIFT) {
            true => steps.large,
            false => steps.small,
        };
        if step <= 0 {
            return None;
        }
        let half = step / 2;
        let mut r = geom;

        if modifiers.contains(Modifiers::CTRL) {
            let (w, h) = (!self.is_fixed(Fixed::WIDTH), !self.is_fixed(Fixed::HEIGHT));
            match key {
                NavKey::Left if w && r.size.0 >= step => {
                    r.size.0 -= step;
                    r.pos.0 += half;
                }
                NavKey::Right if w => {
                    r.size.0 += step;
                    r.pos.0 -= half;
                }
                NavKey::Up if h && r.size.1 >= step => {
                    r.size.1 -= step;
                    r.pos.1 += half;
                }
                NavKey::Down if h => {
                    r.size.1 += step;
                    r.pos.1 -= half;
                }
                _ => return None,
            }
        } else {
            let (x, y) = (!self.is_fixed(Fixed::X), !self.is_fixed(Fixed::Y));
            match key {
                NavKey::Left if x => r.pos.0 -= step,
                NavKey::Right if x => r.pos.0 += step,
                NavKey::Up if y => r.pos.1 -= step,
                NavKey::Down if y => r.pos.1 += step,
                _ => return None,
            }
        }

        Some(r)
    }
}

/// A board of notices over a background, scaling as a whole
///
/// The board owns a [`ReferenceFrame`]. Its first item is the background,
/// which always covers the whole reference rect; all other items are notices.
/// The caller creates and positions the visual elements: after each
/// [`Self::layout`] pass, apply the returned geometry of each id (the
/// background included).
#[derive(Clone, Debug)]
pub struct NoticeBoard {
    frame: ReferenceFrame,
    background: ItemId,
    notices: LinearMap<ItemId, Notice>,
    steps: Steps,
}

impl NoticeBoard {
    /// Construct with the given reference size
    pub fn new(reference_size: Size) -> Result<Self> {
        let mut frame = ReferenceFrame::with_reference_size(reference_size)?;
        let background = frame.add_item(Rect::from_size(reference_size))?;
        Ok(NoticeBoard {
            frame,
            background,
            notices: LinearMap::new(),
            steps: Steps::default(),
        })
    }

    /// Construct from `config`
    ///
    /// The configuration is validated first; see [`Config::validate`].
    pub fn from_config(config: &Config) -> Result<Self, config::Error> {
        config.validate()?;
        let mut board = Self::new(config.reference_size)?;
        board.steps = config.steps;
        Ok(board)
    }

    /// Access the underlying frame
    #[inline]
    pub fn frame(&self) -> &ReferenceFrame {
        &self.frame
    }

    /// The id of the background item
    #[inline]
    pub fn background(&self) -> ItemId {
        self.background
    }

    /// The reference size
    pub fn reference_size(&self) -> Size {
        // The frame is initialized on construction and never reset
        self.frame.reference_rect().map(|r| r.size).unwrap_or_default()
    }

    /// Change the reference size
    ///
    /// The background is resized to cover the new reference rect. Notices
    /// keep their reference geometry.
    pub fn set_reference_size(&mut self, size: Size) -> Result<Action> {
        if !size.is_positive() {
            return Err(Error::InvalidSize(size));
        }

        log::debug!("NoticeBoard::set_reference_size: {size:?}");
        self.frame.deregister_item(self.background)?;
        let action = self.frame.set_reference_size(size)?;
        self.frame.register_item(self.background, Rect::from_size(size))?;
        Ok(action)
    }

    /// Use the size of `image` as reference size
    pub fn set_background(&mut self, image: &ScaledImage) -> Result<Action> {
        self.set_reference_size(image.size_hint())
    }

    /// Add a notice with the given reference geometry
    pub fn add_notice(&mut self, geometry: Rect) -> Result<ItemId> {
        let id = self.frame.add_item(geometry)?;
        log::info!("add_notice: {id} at {geometry}");
        self.notices.insert(id, Notice::new());
        Ok(id)
    }

    /// Remove a notice
    pub fn remove_notice(&mut self, id: ItemId) -> Result<Notice> {
        let notice = self.notices.remove(&id).ok_or(Error::UnknownItem(id))?;
        self.frame.deregister_item(id)?;
        log::info!("remove_notice: {id}");
        Ok(notice)
    }

    /// Remove all notices
    pub fn clear(&mut self) {
        for (id, _) in self.notices.drain() {
            if let Err(err) = self.frame.deregister_item(id) {
                log::warn!("NoticeBoard::clear: {err}");
            }
        }
    }

    /// Get a notice
    #[inline]
    pub fn notice(&self, id: ItemId) -> Option<&Notice> {
        self.notices.get(&id)
    }

    /// Get a notice, mutably
    #[inline]
    pub fn notice_mut(&mut self, id: ItemId) -> Option<&mut Notice> {
        self.notices.get_mut(&id)
    }

    /// Iterate over notices
    pub fn notices(&self) -> impl Iterator<Item = (ItemId, &Notice)> + '_ {
        self.notices.iter().map(|(id, notice)| (*id, notice))
    }

    /// Number of notices
    #[inline]
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    /// True if there are no notices
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    fn check_notice(&self, id: ItemId) -> Result<()> {
        match self.notices.contains_key(&id) {
            true => Ok(()),
            false => Err(Error::UnknownItem(id)),
        }
    }

    /// Get the reference geometry of a notice
    pub fn reference_geometry(&self, id: ItemId) -> Result<Rect> {
        self.check_notice(id)?;
        self.frame.reference_geometry(id)
    }

    /// Set the reference geometry of a notice
    pub fn set_reference_geometry(&mut self, id: ItemId, geometry: Rect) -> Result<Action> {
        self.check_notice(id)?;
        self.frame.set_reference_geometry(id, geometry)
    }

    /// Move or resize a notice in response to a key press
    ///
    /// See [`Notice::edited`]. Returns an empty [`Action`] if nothing changed.
    pub fn handle_key(&mut self, id: ItemId, key: NavKey, modifiers: Modifiers) -> Result<Action> {
        let notice = self.notices.get(&id).ok_or(Error::UnknownItem(id))?;
        let geom = self.frame.reference_geometry(id)?;
        match notice.edited(geom, key, modifiers, self.steps) {
            Some(rect) => self.frame.set_reference_geometry(id, rect),
            None => Ok(Action::empty()),
        }
    }

    /// Lay out the background and all notices within `outer`
    ///
    /// See [`ReferenceFrame::layout`].
    #[inline]
    pub fn layout(&mut self, outer: Rect) -> Result<Geometries> {
        self.frame.layout(outer)
    }

    /// Repeat the last layout pass
    #[inline]
    pub fn relayout(&mut self) -> Result<Option<Geometries>> {
        self.frame.relayout()
    }

    /// The current scale
    #[inline]
    pub fn current_scale(&self) -> Result<f64> {
        self.frame.current_scale()
    }

    /// Map a point in the board's local space to reference space
    #[inline]
    pub fn widget_to_reference(&self, point: Coord, outer: Size) -> Result<Coord> {
        self.frame.widget_to_reference(point, outer)
    }

    /// Preferred size: covers the background and all notices
    #[inline]
    pub fn size_hint(&self) -> Result<Size> {
        self.frame.size_hint()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const STEPS: Steps = Steps { small: 2, large: 10 };

    fn rect() -> Rect {
        Rect::from_xywh(100, 100, 40, 20)
    }

    #[test]
    fn move_by_step() {
        let n = Notice::new();
        let none = Modifiers::empty();
        let r = n.edited(rect(), NavKey::Left, none, STEPS);
        assert_eq!(r, Some(Rect::from_xywh(98, 100, 40, 20)));
        let r = n.edited(rect(), NavKey::Down, Modifiers::SHIFT, STEPS);
        assert_eq!(r, Some(Rect::from_xywh(100, 110, 40, 20)));
    }

    #[test]
    fn resize_about_center() {
        let n = Notice::new();
        let r = n.edited(rect(), NavKey::Right, Modifiers::CTRL, STEPS);
        assert_eq!(r, Some(Rect::from_xywh(99, 100, 42, 20)));
        let r = n.edited(rect(), NavKey::Up, Modifiers::CTRL | Modifiers::SHIFT, STEPS);
        assert_eq!(r, Some(Rect::from_xywh(100, 105, 40, 10)));
        let tiny = Rect::from_xywh(0, 0, 1, 1);
        assert_eq!(n.edited(tiny, NavKey::Left, Modifiers::CTRL, STEPS), None);
    }

    #[test]
    fn fixed_components_block_edits() {
        let n = Notice::new().with_fixed(Fixed::X | Fixed::HEIGHT);
        assert_eq!(n.edited(rect(), NavKey::Left, Modifiers::empty(), STEPS), None);
        assert!(n.edited(rect(), NavKey::Up, Modifiers::empty(), STEPS).is_some());
        assert!(n.edited(rect(), NavKey::Left, Modifiers::CTRL, STEPS).is_some());
        assert_eq!(n.edited(rect(), NavKey::Down, Modifiers::CTRL, STEPS), None);

        let mut n = Notice::new();
        n.set_fixed(Fixed::ALL, true);
        assert!(n.is_fixed(Fixed::ALL));
        n.set_fixed(Fixed::Y, false);
        assert!(!n.is_fixed(Fixed::ALL));
        assert!(n.is_fixed(Fixed::X | Fixed::WIDTH));
    }

    #[test]
    fn each_flag_locks_only_its_component() {
        let sizes = Notice::new().with_fixed(Fixed::WIDTH | Fixed::HEIGHT);
        for key in [NavKey::Left, NavKey::Right, NavKey::Up, NavKey::Down] {
            assert!(sizes.edited(rect(), key, Modifiers::empty(), STEPS).is_some());
            assert_eq!(sizes.edited(rect(), key, Modifiers::CTRL, STEPS), None);
        }

        let position = Notice::new().with_fixed(Fixed::X | Fixed::Y);
        for key in [NavKey::Left, NavKey::Right, NavKey::Up, NavKey::Down] {
            assert_eq!(position.edited(rect(), key, Modifiers::empty(), STEPS), None);
            assert!(position.edited(rect(), key, Modifiers::CTRL, STEPS).is_some());
        }
    }

    #[test]
    fn board_background_tracks_reference_size() {
        let mut board = NoticeBoard::new(Size(400, 300)).unwrap();
        let bg = board.background();
        let geoms = board.layout(Rect::from_xywh(0, 0, 800, 600)).unwrap();
        assert_eq!(geoms[&bg], Rect::from_xywh(0, 0, 800, 600));

        assert_eq!(board.set_reference_size(Size(200, 300)), Ok(Action::RESIZE));
        assert_eq!(board.reference_size(), Size(200, 300));
        let geoms = board.relayout().unwrap().unwrap();
        // scale 2, centered horizontally: (800 - 400) / 2
        assert_eq!(geoms[&bg], Rect::from_xywh(200, 0, 400, 600));

        assert_eq!(
            board.set_reference_size(Size(0, 1)),
            Err(Error::InvalidSize(Size(0, 1)))
        );
        assert!(board.frame().contains(bg));
    }

    #[test]
    fn board_notices() {
        let mut board = NoticeBoard::new(Size(400, 300)).unwrap();
        let a = board.add_notice(Rect::from_xywh(10, 10, 50, 50)).unwrap();
        let b = board.add_notice(Rect::from_xywh(20, 20, 50, 50)).unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(board.notices().count(), 2);

        assert_eq!(board.reference_geometry(a), Ok(Rect::from_xywh(10, 10, 50, 50)));
        let bg = board.background();
        assert_eq!(board.reference_geometry(bg), Err(Error::UnknownItem(bg)));
        assert_eq!(board.remove_notice(bg), Err(Error::UnknownItem(bg)));

        assert_eq!(board.remove_notice(b), Ok(Notice::new()));
        assert!(board.notice(b).is_none());
        assert!(!board.frame().contains(b));

        board.clear();
        assert!(board.is_empty());
        assert_eq!(board.frame().len(), 1);
    }

    #[test]
    fn non_positive_step_never_grows_on_shrink() {
        let notice = Notice::new();
        let r = Rect::from_xywh(10, 10, 2, 2);
        let steps = Steps { small: -4, large: 10 };
        assert_eq!(notice.edited(r, NavKey::Left, Modifiers::CTRL, steps), None);
        assert_eq!(notice.edited(r, NavKey::Right, Modifiers::empty(), steps), None);
    }

    #[test]
    fn from_config_rejects_invalid_steps() {
        let mut config = Config::default();
        config.steps.small = -4;
        assert!(matches!(
            NoticeBoard::from_config(&config),
            Err(config::Error::InvalidStep(-4))
        ));

        config.steps.small = 3;
        assert!(matches!(
            NoticeBoard::from_config(&config),
            Err(config::Error::InvalidStep(3))
        ));

        config.steps.small = 4;
        let mut board = NoticeBoard::from_config(&config).unwrap();
        let id = board.add_notice(Rect::from_xywh(10, 10, 2, 2)).unwrap();
        let _ = board.handle_key(id, NavKey::Left, Modifiers::CTRL).unwrap();
        assert_eq!(board.reference_geometry(id), Ok(Rect::from_xywh(10, 10, 2, 2)));
        let _ = board.handle_key(id, NavKey::Right, Modifiers::CTRL).unwrap();
        assert_eq!(board.reference_geometry(id), Ok(Rect::from_xywh(8, 10, 6, 2)));
    }

    #[test]
    fn board_handle_key() {
        let config = Config::default();
        let mut board = NoticeBoard::from_config(&config).unwrap();
        let id = board.add_notice(Rect::from_xywh(10, 10, 50, 50)).unwrap();

        // Unattached: geometry changes, no layout requested
        let action = board.handle_key(id, NavKey::Right, Modifiers::SHIFT).unwrap();
        assert_eq!(action, Action::empty());
        assert_eq!(board.reference_geometry(id), Ok(Rect::from_xywh(20, 10, 50, 50)));

        let _ = board.layout(Rect::from_xywh(0, 0, 400, 300)).unwrap();
        let action = board.handle_key(id, NavKey::Down, Modifiers::CTRL).unwrap();
        assert_eq!(action, Action::SET_RECT);
        assert_eq!(board.reference_geometry(id), Ok(Rect::from_xywh(20, 9, 50, 52)));

        board.notice_mut(id).unwrap().set_fixed(Fixed::Y, true);
        let action = board.handle_key(id, NavKey::Up, Modifiers::empty()).unwrap();
        assert_eq!(action, Action::empty());
        assert_eq!(board.reference_geometry(id), Ok(Rect::from_xywh(20, 9, 50, 52)));

        let bg = board.background();
        assert_eq!(
            board.handle_key(bg, NavKey::Up, Modifiers::empty()),
            Err(Error::UnknownItem(bg))
        );
    }
}
