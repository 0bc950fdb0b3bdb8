// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Every variant is recovered where it originates; the app layer turns them
//! into toast notifications through [`Error::i18n_key`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The source folder could not be listed.
    #[error("cannot read folder {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A single image could not be opened or decoded.
    #[error("cannot decode {}: {reason}", path.display())]
    ImageDecode { path: PathBuf, reason: String },

    /// Copying or moving a file failed.
    #[error("cannot transfer {} to {}: {source}", from.display(), to.display())]
    Transfer {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("destination folder already added: {}", .0.display())]
    DuplicateDestination(PathBuf),

    #[error("at most {max} destination folders can be added")]
    TooManyDestinations { max: usize },

    /// Invalid command line flag or value.
    #[error("invalid argument: {0}")]
    Config(String),
}

impl Error {
    /// Returns the i18n message key used when this error is shown to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::DirectoryRead { .. } => "notification-source-read-error",
            Error::ImageDecode { .. } => "notification-image-skipped",
            Error::Transfer { .. } => "notification-transfer-error",
            Error::DuplicateDestination(_) => "notification-destination-duplicate",
            Error::TooManyDestinations { .. } => "notification-destination-limit",
            Error::Config(_) => "notification-config-error",
        }
    }

    /// Returns the arguments interpolated into the message behind [`Error::i18n_key`].
    pub fn i18n_args(&self) -> Vec<(String, String)> {
        match self {
            Error::DirectoryRead { path, source } => vec![
                ("path".into(), path.display().to_string()),
                ("reason".into(), source.to_string()),
            ],
            Error::ImageDecode { path, .. } => vec![(
                "filename".into(),
                path.file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string()),
            )],
            Error::Transfer { source, .. } => vec![("reason".into(), source.to_string())],
            Error::DuplicateDestination(path) => {
                vec![("path".into(), path.display().to_string())]
            }
            Error::TooManyDestinations { max } => vec![("max".into(), max.to_string())],
            Error::Config(message) => vec![("reason".into(), message.clone())],
        }
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
