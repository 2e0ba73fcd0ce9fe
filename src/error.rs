// SPDX-License-Identifier: MPL-2.0
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Svg(String),
    Config(String),
    Manifest(String),
    ImageLoad(ImageLoadError),
}

/// Failure kinds reported by the gallery controller.
///
/// The controller only ever fails on assets; everything else degrades
/// silently. The kind is what gets recorded on the diagnostic channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// An image could not be read or decoded.
    ImageLoadFailed,
}

impl ErrorKind {
    /// Returns the i18n message key for this error kind.
    pub fn i18n_key(self) -> &'static str {
        match self {
            ErrorKind::ImageLoadFailed => "error-image-load-failed",
        }
    }
}

/// Details of a failed image load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLoadError {
    /// Source that was requested.
    pub source: String,
    /// Decoder or I/O message.
    pub reason: String,
}

impl ImageLoadError {
    pub fn new(source: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::ImageLoadFailed
    }
}

impl fmt::Display for ImageLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to load image {}: {}", self.source, self.reason)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Manifest(e) => write!(f, "Manifest Error: {}", e),
            Error::ImageLoad(e) => write!(f, "Image Error: {}", e),
        }
    }
}

impl From<ImageLoadError> for Error {
    fn from(err: ImageLoadError) -> Self {
        Error::ImageLoad(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
