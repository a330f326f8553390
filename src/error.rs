//! Error types
//!
//! Sorting an in-memory sequence cannot fail, so none of these come out of the
//! drivers. They cover the edges around the core: loading configuration,
//! rejecting controller actions that would overlap a run, and stepping past
//! the end of a recording.

use crate::dataset::{MAX_ELEMENTS, MIN_ELEMENTS};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(
        "Element count {0} is out of range ({min}..={max})",
        min = MIN_ELEMENTS,
        max = MAX_ELEMENTS
    )]
    ElementCount(usize),
}

/// Controller actions refused because of the current run state
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlError {
    #[error("A sort is already running")]
    RunInProgress,

    #[error("No sort is running")]
    NotRunning,
}

/// Errors from moving the playback cursor
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("No more frames (run finished)")]
    AtEnd,
}
