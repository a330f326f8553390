//! Frame emission for running drivers
//!
//! A driver never touches its dataset directly. It goes through an
//! [`Emitter`], which applies each mutation, remembers what changed since the
//! last frame, and hands a [`Frame`] to a [`Stepper`] whenever the driver
//! calls [`Emitter::emit`]. The stepper decides what a frame costs: the
//! [`Recorder`](crate::history::Recorder) stores it for timed playback,
//! [`Trace`] keeps full snapshots for tests, and [`Paced`] sleeps after each
//! one.
//!
//! # Ordering
//!
//! Frames are delivered strictly in the order the driver emits them, and the
//! driver does not continue until `Stepper::frame` returns. Changes and
//! sorted marks made between two `emit` calls belong to the later frame.

pub mod stepper;

pub use stepper::{FrameSnapshot, Paced, Stepper, TextStepper, Trace};

use crate::tracker::SortedRegion;

/// One element write: `values[index]` became `value`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change {
    pub index: usize,
    pub value: u32,
}

/// Borrowed view of the dataset at the moment a frame is published
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Zero-based frame number within the run
    pub number: usize,
    /// Full snapshot of the dataset after this frame's mutations
    pub values: &'a [u32],
    /// Indices being compared or moved
    pub active: &'a [usize],
    /// Writes performed since the previous frame, in order
    pub changes: &'a [Change],
    /// Indices added to the sorted region since the previous frame
    pub newly_sorted: &'a [usize],
    /// Sorted region after this frame
    pub sorted: &'a SortedRegion,
}

/// Mutation and publishing handle given to a driver for one run
pub struct Emitter<'a> {
    values: &'a mut [u32],
    sorted: &'a mut SortedRegion,
    stepper: &'a mut dyn Stepper,
    pending_changes: Vec<Change>,
    pending_sorted: Vec<usize>,
    frames: usize,
}

impl<'a> Emitter<'a> {
    pub fn new(
        values: &'a mut [u32],
        sorted: &'a mut SortedRegion,
        stepper: &'a mut dyn Stepper,
    ) -> Self {
        Emitter {
            values,
            sorted,
            stepper,
            pending_changes: Vec::new(),
            pending_sorted: Vec::new(),
            frames: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn value(&self, index: usize) -> u32 {
        self.values[index]
    }

    pub fn values(&self) -> &[u32] {
        &*self.values
    }

    /// Number of frames emitted so far
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Swap two elements. Swapping an index with itself, or two equal
    /// magnitudes, leaves the dataset unchanged and records nothing.
    pub fn swap(&mut self, a: usize, b: usize) {
        if a == b || self.values[a] == self.values[b] {
            return;
        }
        self.values.swap(a, b);
        self.record(a);
        self.record(b);
    }

    /// Move the element at `hi` down to `lo`, shifting `lo..hi` up by one
    pub fn rotate_right(&mut self, lo: usize, hi: usize) {
        if lo >= hi {
            return;
        }
        self.values[lo..=hi].rotate_right(1);
        for index in lo..=hi {
            self.record(index);
        }
    }

    fn record(&mut self, index: usize) {
        self.pending_changes.push(Change {
            index,
            value: self.values[index],
        });
    }

    pub fn mark_sorted(&mut self, index: usize) {
        debug_assert!(index < self.values.len(), "sorted index {index} out of range");
        if self.sorted.mark_sorted(index) {
            self.pending_sorted.push(index);
        }
    }

    pub fn mark_all_sorted(&mut self) {
        let added = self.sorted.mark_all_sorted(self.values.len());
        self.pending_sorted.extend(added);
    }

    /// Publish one frame highlighting `active`, then wait on the stepper
    pub fn emit(&mut self, active: &[usize]) {
        debug_assert!(
            active.iter().all(|&i| i < self.values.len()),
            "highlight {active:?} out of range for {} elements",
            self.values.len()
        );
        let frame = Frame {
            number: self.frames,
            values: &*self.values,
            active,
            changes: &self.pending_changes,
            newly_sorted: &self.pending_sorted,
            sorted: &*self.sorted,
        };
        self.stepper.frame(&frame);
        self.frames += 1;
        self.pending_changes.clear();
        self.pending_sorted.clear();
    }

    /// Flush anything the driver changed after its last frame.
    ///
    /// Nothing is published when there is nothing pending, so an empty
    /// dataset produces no output at all.
    pub fn settle(&mut self) {
        if self.pending_changes.is_empty() && self.pending_sorted.is_empty() {
            return;
        }
        let frame = Frame {
            number: self.frames,
            values: &*self.values,
            active: &[],
            changes: &self.pending_changes,
            newly_sorted: &self.pending_sorted,
            sorted: &*self.sorted,
        };
        self.stepper.settle(&frame);
        self.pending_changes.clear();
        self.pending_sorted.clear();
    }
}
