// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Top-level configuration struct

use super::Error;
use crate::geom::Size;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use std::path::Path;

/// Keyboard step sizes for moving and resizing notices
///
/// Steps should be even so that resizing about the center stays symmetric.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Steps {
    /// Step used without modifiers
    #[cfg_attr(feature = "serde", serde(default = "defaults::small_step"))]
    pub small: i32,
    /// Step used while shift is held
    #[cfg_attr(feature = "serde", serde(default = "defaults::large_step"))]
    pub large: i32,
}

impl Default for Steps {
    fn default() -> Self {
        Steps {
            small: defaults::small_step(),
            large: defaults::large_step(),
        }
    }
}

/// Base configuration
///
/// This is serializable (using `feature = "serde"`) with the following fields:
///
/// > `reference_size`: [`Size`] of a new board (default: 400×300) \
/// > `placeholder_size`: [`Size`] of the placeholder used for an empty image (default: 50×50) \
/// > `steps`: [`Steps`]
///
/// Missing fields take their default value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    #[cfg_attr(feature = "serde", serde(default = "defaults::reference_size"))]
    pub reference_size: Size,

    #[cfg_attr(feature = "serde", serde(default = "defaults::placeholder_size"))]
    pub placeholder_size: Size,

    #[cfg_attr(feature = "serde", serde(default))]
    pub steps: Steps,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            reference_size: defaults::reference_size(),
            placeholder_size: defaults::placeholder_size(),
            steps: Steps::default(),
        }
    }
}

impl Config {
    /// Check that sizes are positive and steps positive and even
    pub fn validate(&self) -> Result<(), Error> {
        for size in [self.reference_size, self.placeholder_size] {
            if !size.is_positive() {
                return Err(crate::Error::InvalidSize(size).into());
            }
        }
        for step in [self.steps.small, self.steps.large] {
            if step <= 0 || step % 2 != 0 {
                return Err(Error::InvalidStep(step));
            }
        }
        Ok(())
    }

    /// Read and validate from `path`, guessing the format from its extension
    #[cfg(feature = "serde")]
    pub fn read_path(path: &Path) -> Result<Self, Error> {
        let config: Config = super::Format::None.read_path(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Write to `path`, guessing the format from its extension
    #[cfg(feature = "serde")]
    pub fn write_path(&self, path: &Path) -> Result<(), Error> {
        super::Format::None.write_path(path, self)
    }
}

mod defaults {
    use crate::geom::Size;

    pub fn reference_size() -> Size {
        Size(400, 300)
    }

    pub fn placeholder_size() -> Size {
        Size(50, 50)
    }

    pub fn small_step() -> i32 {
        2
    }

    pub fn large_step() -> i32 {
        10
    }
}
