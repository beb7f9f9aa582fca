// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Configuration formats and read/write support

#[cfg(feature = "serde")]
use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;
use thiserror::Error;

/// Configuration read/write/format errors
#[derive(Error, Debug)]
pub enum Error {
    #[cfg(feature = "json")]
    #[error("config (de)serialisation to JSON failed")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "ron")]
    #[error("config serialisation to RON failed")]
    Ron(#[from] ron::Error),

    #[cfg(feature = "ron")]
    #[error("config deserialisation from RON failed")]
    RonSpanned(#[from] ron::error::SpannedError),

    #[cfg(feature = "toml")]
    #[error("config deserialisation from TOML failed")]
    TomlDe(#[from] toml::de::Error),

    #[cfg(feature = "toml")]
    #[error("config serialisation to TOML failed")]
    TomlSer(#[from] toml::ser::Error),

    #[error("error reading / writing config file")]
    IoError(#[from] std::io::Error),

    #[error("format not supported: {0}")]
    UnsupportedFormat(Format),

    #[error("invalid config")]
    Geometry(#[from] crate::Error),

    #[error("invalid config: step {0} must be positive and even")]
    InvalidStep(i32),
}

/// Configuration serialisation formats
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Error)]
pub enum Format {
    /// Not specified: guess from the path
    #[default]
    #[error("no format")]
    None,

    /// JavaScript Object Notation
    #[error("JSON")]
    Json,

    /// Tom's Obvious Minimal Language
    #[error("TOML")]
    Toml,

    /// Rusty Object Notation
    #[error("RON")]
    Ron,

    /// Error: unable to guess format
    #[error("(unknown format)")]
    Unknown,
}

impl Format {
    /// Guess format from the path name
    ///
    /// This does not open the file. Returns [`Format::Unknown`] on an
    /// unrecognised (or missing) extension.
    pub fn guess_from_path(path: &Path) -> Format {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Format::Json,
            Some("toml") => Format::Toml,
            Some("ron") => Format::Ron,
            _ => Format::Unknown,
        }
    }

    /// Read from a path
    ///
    /// [`Format::None`] guesses the format from `path`.
    #[cfg(feature = "serde")]
    pub fn read_path<T: DeserializeOwned>(self, path: &Path) -> Result<T, Error> {
        let format = match self {
            Format::None => Self::guess_from_path(path),
            format => format,
        };
        log::info!("read_path: path={}, format={:?}", path.display(), format);
        match format {
            #[cfg(feature = "json")]
            Format::Json => {
                let r = std::io::BufReader::new(std::fs::File::open(path)?);
                Ok(serde_json::from_reader(r)?)
            }
            #[cfg(feature = "ron")]
            Format::Ron => {
                let r = std::io::BufReader::new(std::fs::File::open(path)?);
                Ok(ron::de::from_reader(r)?)
            }
            #[cfg(feature = "toml")]
            Format::Toml => {
                let contents = std::fs::read_to_string(path)?;
                Ok(toml::from_str(&contents)?)
            }
            _ => Err(Error::UnsupportedFormat(format)),
        }
    }

    /// Write to a path
    ///
    /// [`Format::None`] guesses the format from `path`.
    #[cfg(feature = "serde")]
    pub fn write_path<T: Serialize>(self, path: &Path, value: &T) -> Result<(), Error> {
        let format = match self {
            Format::None => Self::guess_from_path(path),
            format => format,
        };
        log::info!("write_path: path={}, format={:?}", path.display(), format);
        // Note: we use to_string*, not to_writer*, since the latter may
        // generate incomplete documents on failure.
        let text: Result<String, Error> = match format {
            #[cfg(feature = "json")]
            Format::Json => serde_json::to_string_pretty(value).map_err(Error::from),
            #[cfg(feature = "ron")]
            Format::Ron => {
                let pretty = ron::ser::PrettyConfig::default();
                ron::ser::to_string_pretty(value, pretty).map_err(Error::from)
            }
            #[cfg(feature = "toml")]
            Format::Toml => toml::to_string(value).map_err(Error::from),
            _ => {
                let _ = value; // squelch unused warning
                Err(Error::UnsupportedFormat(format))
            }
        };
        std::fs::write(path, text?)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn guess() {
        assert_eq!(Format::guess_from_path(Path::new("a/board.json")), Format::Json);
        assert_eq!(Format::guess_from_path(Path::new("board.toml")), Format::Toml);
        assert_eq!(Format::guess_from_path(Path::new("board.ron")), Format::Ron);
        assert_eq!(Format::guess_from_path(Path::new("board.yaml")), Format::Unknown);
        assert_eq!(Format::guess_from_path(Path::new("board")), Format::Unknown);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn write_unsupported_format() {
        let name = format!("scaleboard-format-{}.yaml", std::process::id());
        let path = std::env::temp_dir().join(name);
        let result = Format::None.write_path(&path, &1u32);
        assert!(matches!(result, Err(Error::UnsupportedFormat(Format::Unknown))));
        assert!(!path.exists());
    }
}
