// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Scaleboard
//!
//! This, the main crate, is merely a wrapper over other crates:
//!
//! -   [`scaleboard_core`] is the geometry engine: scale calculation,
//!     coordinate mapping and the [`layout::ReferenceFrame`]
//! -   [`scaleboard_widgets`] provides widget models built on the engine
//!
//! All items from [`scaleboard_core`] are directly re-exported from this crate
//! (e.g. [`scaleboard::geom::Size`](crate::geom::Size)); the widgets crate is
//! re-exported as [`widgets`].
//!
//! The [easy-cast](https://docs.rs/easy-cast/0.5/easy_cast) library is re-export as `scaleboard::cast`.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod prelude;

pub use scaleboard_core::*;

pub extern crate scaleboard_widgets as widgets;
