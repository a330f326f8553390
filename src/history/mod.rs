//! Run history for timed playback
//!
//! A run is recorded eagerly: the driver executes against a [`Recorder`]
//! with no delay, and the resulting [`Recording`] is replayed one frame at a
//! time by [`Playback`](crate::playback::Playback). Frames are stored as the
//! element writes they carry rather than full copies, so a bubble sort over
//! a thousand elements stays in the tens of megabytes.
//!
//! All per-frame data lives in flat buffers; a [`RecordedFrame`] only holds
//! ranges into them.

use crate::frame::{Change, Frame, Stepper};
use std::mem::size_of;
use std::ops::Range;

/// Ranges into the recording's buffers for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFrame {
    pub changes: Range<usize>,
    pub active: Range<usize>,
    pub sorted: Range<usize>,
}

/// Everything needed to replay a run from its starting dataset
#[derive(Debug, Clone, Default)]
pub struct Recording {
    initial: Vec<u32>,
    changes: Vec<Change>,
    active: Vec<usize>,
    sorted: Vec<usize>,
    frames: Vec<RecordedFrame>,
    settle: Option<RecordedFrame>,
}

impl Recording {
    /// Dataset as it was before the first frame
    pub fn initial(&self) -> &[u32] {
        &self.initial
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frame(&self, index: usize) -> Option<&RecordedFrame> {
        self.frames.get(index)
    }

    /// Trailing changes published after the last frame, if any
    pub fn settle(&self) -> Option<&RecordedFrame> {
        self.settle.as_ref()
    }

    pub fn changes(&self, frame: &RecordedFrame) -> &[Change] {
        &self.changes[frame.changes.clone()]
    }

    pub fn active(&self, frame: &RecordedFrame) -> &[usize] {
        &self.active[frame.active.clone()]
    }

    pub fn newly_sorted(&self, frame: &RecordedFrame) -> &[usize] {
        &self.sorted[frame.sorted.clone()]
    }

    /// Rough memory footprint in bytes
    pub fn estimated_size(&self) -> usize {
        self.initial.len() * size_of::<u32>()
            + self.changes.len() * size_of::<Change>()
            + (self.active.len() + self.sorted.len()) * size_of::<usize>()
            + self.frames.len() * size_of::<RecordedFrame>()
    }
}

/// Stepper that stores every frame into a [`Recording`]
#[derive(Debug)]
pub struct Recorder {
    recording: Recording,
}

impl Recorder {
    pub fn new(initial: Vec<u32>) -> Self {
        Recorder {
            recording: Recording {
                initial,
                ..Recording::default()
            },
        }
    }

    pub fn finish(self) -> Recording {
        self.recording
    }

    fn store(&mut self, frame: &Frame<'_>) -> RecordedFrame {
        let rec = &mut self.recording;

        let start = rec.changes.len();
        rec.changes.extend_from_slice(frame.changes);
        let changes = start..rec.changes.len();

        let start = rec.active.len();
        rec.active.extend_from_slice(frame.active);
        let active = start..rec.active.len();

        let start = rec.sorted.len();
        rec.sorted.extend_from_slice(frame.newly_sorted);
        let sorted = start..rec.sorted.len();

        RecordedFrame {
            changes,
            active,
            sorted,
        }
    }
}

impl Stepper for Recorder {
    fn frame(&mut self, frame: &Frame<'_>) {
        let recorded = self.store(frame);
        self.recording.frames.push(recorded);
    }

    fn settle(&mut self, frame: &Frame<'_>) {
        let recorded = self.store(frame);
        self.recording.settle = Some(recorded);
    }
}
