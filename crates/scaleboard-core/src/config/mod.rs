// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Configuration items and utilities
//!
//! [`Config`] holds the defaults used by boards and images. With the `serde`
//! feature it may be read from and written to a file; see [`Format`] for the
//! supported formats.

mod config;
mod format;

pub use config::{Config, Steps};
pub use format::{Error, Format};
