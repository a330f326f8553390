//! # Introduction
//!
//! sortty animates sorting algorithms as colored bars in the terminal. Each
//! algorithm is an ordinary synchronous sort that reports every comparison
//! and move as a frame; a stepper decides how those frames are spaced out in
//! time.
//!
//! ## Pipeline
//!
//! ```text
//! Controller → Algorithm → Emitter → Stepper (Recorder) → Playback → TUI
//! ```
//!
//! 1. [`controller`]: owns the [`dataset::Dataset`], the selected
//!    [`algorithms::Algorithm`] and the run state; refuses overlapping runs.
//! 2. [`algorithms`]: bubble, insertion, selection, merge, quick and heap
//!    sort, each mutating the dataset only through a [`frame::Emitter`].
//! 3. [`frame`]: the emitter plus the [`frame::Stepper`] trait and its
//!    synchronous, paced and text implementations.
//! 4. [`history`] / [`playback`]: compact recording of a run and the cursor
//!    that replays it one frame per tick.
//! 5. [`tracker`]: indices known to hold their final value.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod algorithms;
pub mod config;
pub mod controller;
pub mod dataset;
pub mod error;
pub mod frame;
pub mod history;
pub mod playback;
pub mod tracker;
pub mod ui;
