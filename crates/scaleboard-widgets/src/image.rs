// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Scaled image geometry

use scaleboard::Action;
use scaleboard::cast::Conv;
use scaleboard::config::{self, Config};
use scaleboard::geom::{Coord, Rect, Size};
use scaleboard::layout::{centered_offset, fit_rect_into_frame, mapper};

/// Geometry of an image displayed scaled to fit, centered within a widget
///
/// The *source* size is that of the original image; the *current* size is
/// that of the displayed image, recomputed by [`Self::resize`] from the
/// source (never from the previous current size) so that repeated resizes
/// do not accumulate rounding error. The aspect ratio of the source is
/// preserved.
///
/// Widget coordinates have their origin at the top-left of the widget;
/// see [`Self::map_widget_to_source`] for hit-testing on the image.
///
/// The default value displays a placeholder of the default placeholder size.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaledImage {
    source: Size,
    current: Size,
    placeholder: Size,
}

impl Default for ScaledImage {
    fn default() -> Self {
        let placeholder = Config::default().placeholder_size;
        ScaledImage {
            source: placeholder,
            current: placeholder,
            placeholder,
        }
    }
}

impl ScaledImage {
    /// Construct with a placeholder image
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct with a placeholder sized according to `config`
    ///
    /// The configuration is validated first; see [`Config::validate`].
    pub fn from_config(config: &Config) -> Result<Self, config::Error> {
        config.validate()?;
        let placeholder = config.placeholder_size;
        Ok(ScaledImage {
            source: placeholder,
            current: placeholder,
            placeholder,
        })
    }

    /// Construct with the given source size (inline)
    #[must_use]
    pub fn with_source(mut self, source: Size) -> Self {
        let _ = self.set_source(source);
        self
    }

    /// Set a new source image size
    ///
    /// An empty size is an error: it is logged and the image is cleared
    /// instead (see [`Self::clear`]). The size hint changes, hence this
    /// returns [`Action::RESIZE`].
    pub fn set_source(&mut self, source: Size) -> Action {
        if source.is_positive() {
            self.source = source;
            self.current = source;
            Action::RESIZE
        } else {
            log::error!("ScaledImage::set_source: empty size {source:?}; using placeholder");
            self.clear()
        }
    }

    /// Replace the image with a placeholder of the currently displayed size
    ///
    /// If nothing is currently displayed, the configured placeholder size is
    /// used instead.
    pub fn clear(&mut self) -> Action {
        let size = match self.current.is_positive() {
            true => self.current,
            false => self.placeholder,
        };
        self.source = size;
        self.current = size;
        Action::RESIZE
    }

    /// The source (unscaled) size
    #[inline]
    pub fn source_size(&self) -> Size {
        self.source
    }

    /// The currently displayed size
    #[inline]
    pub fn current_size(&self) -> Size {
        self.current
    }

    /// Preferred size: the source size
    #[inline]
    pub fn size_hint(&self) -> Size {
        self.source
    }

    /// True unless the last resize made the image invisible
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.current.is_positive()
    }

    /// Fit the image into a widget of the given size
    ///
    /// A widget with zero (or negative) width or height makes the image
    /// invisible; this is logged as a warning.
    pub fn resize(&mut self, widget: Size) {
        if !widget.is_positive() {
            log::warn!("ScaledImage is invisible because widget size is {widget:?}");
            self.current = Size::ZERO;
            return;
        }

        match fit_rect_into_frame(Rect::from_size(self.source), Rect::from_size(widget)) {
            Ok(rect) => self.current = rect.size,
            Err(err) => {
                log::warn!("ScaledImage::resize: {err}");
                self.current = Size::ZERO;
            }
        }
    }

    /// The ratio of the current size to the source size
    ///
    /// This is zero while the image is invisible.
    pub fn scale(&self) -> f64 {
        f64::conv(self.current.0) / f64::conv(self.source.0)
    }

    /// The rect of the displayed image within a widget of size `widget`
    pub fn current_rect(&self, widget: Size) -> Rect {
        let pos = Coord::ZERO + centered_offset(widget, self.current);
        Rect::new(pos, self.current)
    }

    /// The top-left corner of the displayed image within the widget
    #[inline]
    pub fn current_top_left(&self, widget: Size) -> Coord {
        self.current_rect(widget).pos
    }

    /// True if the widget coordinate `pos` is over the displayed image
    #[inline]
    pub fn image_at(&self, widget: Size, pos: Coord) -> bool {
        self.current_rect(widget).contains(pos)
    }

    /// Map widget coordinates to coordinates on the displayed image
    ///
    /// The result is relative to the top-left corner of the displayed image.
    #[inline]
    pub fn map_widget_to_current(&self, pos: Coord, widget: Size) -> Coord {
        mapper::map_outer_to_current(pos, widget, self.current)
    }

    /// Map coordinates on the displayed image to source image coordinates
    ///
    /// Returns `None` while the image is invisible.
    pub fn map_current_to_source(&self, pos: Coord) -> Option<Coord> {
        self.is_visible()
            .then(|| mapper::map_current_to_source(pos, self.scale()))
    }

    /// Map widget coordinates to source image coordinates
    ///
    /// Returns `None` while the image is invisible. The result may lie
    /// outside of the source image; use [`Self::image_at`] to test.
    pub fn map_widget_to_source(&self, pos: Coord, widget: Size) -> Option<Coord> {
        self.map_current_to_source(self.map_widget_to_current(pos, widget))
    }
}
